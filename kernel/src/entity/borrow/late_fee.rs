use time::{Duration, OffsetDateTime};
use vodca::References;

use crate::entity::{DueAt, LATE_FEE_PER_DAY};

#[derive(Debug, Clone, Copy, Eq, PartialEq, References)]
pub struct LateFee {
    days_late: i64,
    amount: i64,
}

impl LateFee {
    /// Every started day past `due_at` is charged as a full day.
    /// Returns `None` while the due date has not passed.
    pub fn calculate(due_at: &DueAt, now: &OffsetDateTime) -> Option<Self> {
        if !due_at.is_passed(now) {
            return None;
        }
        let late = *now - *due_at.as_ref();
        let mut days_late = late.whole_days();
        if late > Duration::days(days_late) {
            days_late += 1;
        }
        Some(Self {
            days_late,
            amount: days_late.saturating_mul(LATE_FEE_PER_DAY),
        })
    }
}
