use crate::controller::Exhaust;
use crate::response::Success;
use application::transfer::{BorrowDto, LateFeeDto};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowResponse {
    borrow_id: Uuid,
    user_id: i64,
    book_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    borrow_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    due_date: OffsetDateTime,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    return_date: Option<OffsetDateTime>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    renewal_date: Option<OffsetDateTime>,
}

impl From<BorrowDto> for BorrowResponse {
    fn from(value: BorrowDto) -> Self {
        Self {
            borrow_id: value.borrow_id,
            user_id: value.user_id,
            book_id: value.book_id,
            borrow_date: value.borrowed_at,
            due_date: value.due_at,
            return_date: value.returned_at,
            renewal_date: value.renewed_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LateFeeResponse {
    late_fees: i64,
}

pub struct BorrowPresenter {
    message: Option<&'static str>,
}

impl BorrowPresenter {
    pub fn listing() -> Self {
        Self { message: None }
    }

    /// Presenter for state changes, which also report what happened.
    pub fn announcing(message: &'static str) -> Self {
        Self {
            message: Some(message),
        }
    }
}

impl Exhaust<BorrowDto> for BorrowPresenter {
    type To = Success<BorrowResponse>;
    fn emit(&self, input: BorrowDto) -> Self::To {
        Success::with_message(BorrowResponse::from(input), self.message)
    }
}

impl Exhaust<Vec<BorrowDto>> for BorrowPresenter {
    type To = Success<Vec<BorrowResponse>>;
    fn emit(&self, input: Vec<BorrowDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BorrowResponse::from)
            .collect::<Vec<_>>();
        Success::with_message(result, self.message)
    }
}

pub struct LateFeePresenter;

impl Exhaust<LateFeeDto> for LateFeePresenter {
    type To = Success<LateFeeResponse>;
    fn emit(&self, input: LateFeeDto) -> Self::To {
        Success::new(LateFeeResponse {
            late_fees: input.amount,
        })
    }
}
