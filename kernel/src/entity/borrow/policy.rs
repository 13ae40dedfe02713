use time::Duration;

/// Time between borrowing a title and its due date.
pub const LOAN_PERIOD: Duration = Duration::days(3);

/// Penalty per started day past the due date, in currency minor units.
pub const LATE_FEE_PER_DAY: i64 = 100_000;
