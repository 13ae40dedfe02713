#[cfg(any(test, feature = "testing"))]
mod manual;

#[cfg(any(test, feature = "testing"))]
pub use self::manual::*;

use error_stack::ResultExt;
use kernel::interface::clock::Clock;
use kernel::KernelError;
use time::{OffsetDateTime, UtcOffset};

use crate::env;
use crate::error::{ConvertError, DriverError};

static UTC_OFFSET: &str = "LEDGER_UTC_OFFSET";

/// Western Indonesia Time, the zone the lending desk operates in.
const DEFAULT_OFFSET_HOURS: i8 = 7;

/// Wall clock reporting times at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Reads the offset in whole hours from `LEDGER_UTC_OFFSET`.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let offset = match env(UTC_OFFSET).convert_error()? {
            Some(raw) => parse_offset(&raw)
                .convert_error()
                .attach_printable_lazy(|| format!("Invalid {UTC_OFFSET}: {raw:?}"))?,
            None => UtcOffset::from_hms(DEFAULT_OFFSET_HOURS, 0, 0)
                .map_err(DriverError::from)
                .convert_error()?,
        };
        tracing::debug!(%offset, "system clock configured");
        Ok(Self::new(offset))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

fn parse_offset(raw: &str) -> Result<UtcOffset, DriverError> {
    let hours = raw.trim().parse::<i8>()?;
    Ok(UtcOffset::from_hms(hours, 0, 0)?)
}
