use kernel::prelude::entity::{Borrow, BorrowId, DestructBorrow, LateFee};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BorrowDto {
    pub borrow_id: Uuid,
    pub user_id: i64,
    pub book_id: i64,
    pub borrowed_at: OffsetDateTime,
    pub due_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub renewed_at: Option<OffsetDateTime>,
}

impl From<Borrow> for BorrowDto {
    fn from(value: Borrow) -> Self {
        let DestructBorrow {
            id,
            user_id,
            book_id,
            borrowed_at,
            due_at,
            returned_at,
            renewed_at,
        } = value.into_destruct();
        Self {
            borrow_id: id.into(),
            user_id: user_id.into(),
            book_id: book_id.into(),
            borrowed_at: borrowed_at.into(),
            due_at: due_at.into(),
            returned_at: returned_at.map(Into::into),
            renewed_at: renewed_at.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LateFeeDto {
    pub borrow_id: Uuid,
    pub days_late: i64,
    pub amount: i64,
}

impl LateFeeDto {
    pub fn new(borrow_id: BorrowId, fee: LateFee) -> Self {
        Self {
            borrow_id: borrow_id.into(),
            days_late: *fee.days_late(),
            amount: *fee.amount(),
        }
    }
}

pub struct CreateBorrowDto {
    pub user_id: i64,
    pub book_id: i64,
}

#[derive(Debug)]
pub struct ReturnBorrowDto {
    pub borrow_id: Uuid,
}

pub struct RenewBorrowDto {
    pub borrow_id: Uuid,
}

pub struct GetLateFeeDto {
    pub borrow_id: Uuid,
}
