use crate::controller::Exhaust;
use crate::response::Success;
use application::transfer::BookDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    title: String,
}

pub struct BookPresenter;

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Success<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(|BookDto { id, title }| BookResponse { id, title })
            .collect::<Vec<_>>();
        Success::new(result)
    }
}
