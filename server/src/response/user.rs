use crate::controller::Exhaust;
use crate::response::Success;
use application::transfer::UserDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: i64,
    name: String,
}

pub struct UserPresenter;

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = Success<Vec<UserResponse>>;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(|UserDto { id, name }| UserResponse { id, name })
            .collect::<Vec<_>>();
        Success::new(result)
    }
}
