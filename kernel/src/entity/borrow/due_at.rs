use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

use crate::entity::{BorrowedAt, LOAN_PERIOD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct DueAt(OffsetDateTime);

impl DueAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn from_borrowed(borrowed_at: &BorrowedAt) -> Self {
        Self(*borrowed_at.as_ref() + LOAN_PERIOD)
    }

    /// Strictly after the due instant; being exactly on time is not late.
    pub fn is_passed(&self, now: &OffsetDateTime) -> bool {
        *now > self.0
    }
}
