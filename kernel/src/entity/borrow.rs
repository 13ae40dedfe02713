mod borrowed_at;
mod due_at;
mod id;
mod late_fee;
mod policy;
mod renewed_at;
mod returned_at;

pub use self::{
    borrowed_at::*, due_at::*, id::*, late_fee::*, policy::*, renewed_at::*, returned_at::*,
};
use crate::entity::{BookId, UserId};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use time::OffsetDateTime;
use vodca::References;

/// One loan of a title to a user.
///
/// A record is open until `returned_at` is set. Closing is terminal: a closed
/// record can neither be returned again nor renewed.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Borrow {
    id: BorrowId,
    user_id: UserId,
    book_id: BookId,
    borrowed_at: BorrowedAt,
    due_at: DueAt,
    returned_at: Option<ReturnedAt>,
    renewed_at: Option<RenewedAt>,
}

impl Borrow {
    pub fn new(
        id: BorrowId,
        user_id: UserId,
        book_id: BookId,
        borrowed_at: BorrowedAt,
        due_at: DueAt,
        returned_at: Option<ReturnedAt>,
        renewed_at: Option<RenewedAt>,
    ) -> Self {
        Self {
            id,
            user_id,
            book_id,
            borrowed_at,
            due_at,
            returned_at,
            renewed_at,
        }
    }

    /// Starts a loan; the due date is fixed here and never moves afterwards.
    pub fn open(id: BorrowId, user_id: UserId, book_id: BookId, borrowed_at: BorrowedAt) -> Self {
        let due_at = DueAt::from_borrowed(&borrowed_at);
        Self::new(id, user_id, book_id, borrowed_at, due_at, None, None)
    }

    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    pub fn is_overdue(&self, now: &OffsetDateTime) -> bool {
        self.is_open() && self.due_at.is_passed(now)
    }

    pub fn close(&mut self, returned_at: ReturnedAt) -> error_stack::Result<(), KernelError> {
        if !self.is_open() {
            return Err(Report::new(KernelError::AlreadyClosed)
                .attach_printable(format!("borrow {} was already returned", self.id.as_ref())));
        }
        self.returned_at = Some(returned_at);
        Ok(())
    }

    /// Records a renewal. The due date is left untouched.
    pub fn renew(&mut self, renewed_at: RenewedAt) -> error_stack::Result<(), KernelError> {
        if !self.is_open() {
            return Err(Report::new(KernelError::AlreadyClosed)
                .attach_printable(format!("borrow {} cannot be renewed", self.id.as_ref())));
        }
        self.renewed_at = Some(renewed_at);
        Ok(())
    }

    /// Fee owed right now, or `None` unless the record is open and overdue.
    pub fn late_fee(&self, now: &OffsetDateTime) -> Option<LateFee> {
        if !self.is_open() {
            return None;
        }
        LateFee::calculate(&self.due_at, now)
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::Duration;
    use uuid::Uuid;

    use crate::entity::{
        BookId, Borrow, BorrowId, BorrowedAt, RenewedAt, ReturnedAt, UserId, LATE_FEE_PER_DAY,
    };
    use crate::KernelError;

    fn borrow_at(time: time::OffsetDateTime) -> Borrow {
        Borrow::open(
            BorrowId::new(Uuid::new_v4()),
            UserId::new(1),
            BookId::new(101),
            BorrowedAt::new(time),
        )
    }

    #[test]
    fn due_date_is_three_days_after_borrowing() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let borrow = borrow_at(t0);
        assert_eq!(*borrow.due_at().as_ref(), t0 + Duration::days(3));
        assert!(borrow.is_open());
    }

    #[test]
    fn close_is_terminal() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let mut borrow = borrow_at(t0);
        let first = ReturnedAt::new(t0 + Duration::days(1));
        borrow.close(first).unwrap();
        assert_eq!(borrow.returned_at(), &Some(first));

        let err = borrow
            .close(ReturnedAt::new(t0 + Duration::days(2)))
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::AlreadyClosed);
        assert_eq!(borrow.returned_at(), &Some(first));
    }

    #[test]
    fn renew_keeps_due_date() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let mut borrow = borrow_at(t0);
        let due = *borrow.due_at();
        let renewed = RenewedAt::new(t0 + Duration::hours(30));
        borrow.renew(renewed).unwrap();
        assert_eq!(borrow.renewed_at(), &Some(renewed));
        assert_eq!(*borrow.due_at(), due);
        assert!(borrow.returned_at().is_none());
    }

    #[test]
    fn renew_rejected_once_closed() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let mut borrow = borrow_at(t0);
        borrow.close(ReturnedAt::new(t0)).unwrap();
        let err = borrow
            .renew(RenewedAt::new(t0 + Duration::hours(1)))
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::AlreadyClosed);
        assert!(borrow.renewed_at().is_none());
    }

    #[test]
    fn overdue_only_strictly_after_due_date() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let borrow = borrow_at(t0);
        assert!(!borrow.is_overdue(&(t0 + Duration::days(3))));
        assert!(borrow.is_overdue(&(t0 + Duration::days(3) + Duration::seconds(1))));
    }

    #[test]
    fn closed_record_is_never_overdue() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let mut borrow = borrow_at(t0);
        borrow.close(ReturnedAt::new(t0 + Duration::days(5))).unwrap();
        assert!(!borrow.is_overdue(&(t0 + Duration::days(10))));
        assert!(borrow.late_fee(&(t0 + Duration::days(10))).is_none());
    }

    #[test]
    fn late_fee_rounds_partial_days_up() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let borrow = borrow_at(t0);
        let due = *borrow.due_at().as_ref();

        let one_day = borrow.late_fee(&(due + Duration::days(1))).unwrap();
        assert_eq!(*one_day.days_late(), 1);
        assert_eq!(*one_day.amount(), LATE_FEE_PER_DAY);

        let two_and_half = borrow.late_fee(&(due + Duration::hours(60))).unwrap();
        assert_eq!(*two_and_half.days_late(), 3);
        assert_eq!(*two_and_half.amount(), 3 * LATE_FEE_PER_DAY);

        let one_minute = borrow.late_fee(&(due + Duration::minutes(1))).unwrap();
        assert_eq!(*one_minute.amount(), LATE_FEE_PER_DAY);
    }

    #[test]
    fn no_late_fee_before_due_date() {
        let t0 = datetime!(2024-01-01 09:00 +7);
        let borrow = borrow_at(t0);
        assert!(borrow.late_fee(&(t0 + Duration::days(2))).is_none());
        assert!(borrow.late_fee(borrow.due_at().as_ref()).is_none());
    }
}
