use crate::controller::{Intake, TryIntake};
use application::transfer::{CreateBorrowDto, GetLateFeeDto, RenewBorrowDto, ReturnBorrowDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowRequest {
    user_id: i64,
    book_id: i64,
}

#[derive(Debug)]
pub struct ReturnRequest {
    id: String,
}

impl ReturnRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct RenewRequest {
    id: String,
}

impl RenewRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct LateFeeRequest {
    id: String,
}

impl LateFeeRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// A path id that is not a UUID cannot name any record.
fn parse_borrow_id(id: &str) -> Result<Uuid, Report<KernelError>> {
    Uuid::parse_str(id).map_err(|error| {
        Report::new(KernelError::NotFound)
            .attach_printable(format!("Malformed borrow id {id:?}: {error}"))
    })
}

pub struct BorrowTransformer;

impl Intake<CreateBorrowRequest> for BorrowTransformer {
    type To = CreateBorrowDto;
    fn emit(&self, CreateBorrowRequest { user_id, book_id }: CreateBorrowRequest) -> Self::To {
        CreateBorrowDto { user_id, book_id }
    }
}

impl TryIntake<ReturnRequest> for BorrowTransformer {
    type To = ReturnBorrowDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: ReturnRequest) -> Result<Self::To, Self::Error> {
        Ok(ReturnBorrowDto {
            borrow_id: parse_borrow_id(&input.id)?,
        })
    }
}

impl TryIntake<RenewRequest> for BorrowTransformer {
    type To = RenewBorrowDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: RenewRequest) -> Result<Self::To, Self::Error> {
        Ok(RenewBorrowDto {
            borrow_id: parse_borrow_id(&input.id)?,
        })
    }
}

impl TryIntake<LateFeeRequest> for BorrowTransformer {
    type To = GetLateFeeDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: LateFeeRequest) -> Result<Self::To, Self::Error> {
        Ok(GetLateFeeDto {
            borrow_id: parse_borrow_id(&input.id)?,
        })
    }
}
