use crate::error::DriverError;

pub mod clock;
pub mod database;
pub mod error;

/// Reads `key` from the process environment or a `.env` file.
/// An unset variable is `Ok(None)`.
pub(crate) fn env(key: &str) -> Result<Option<String>, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(DriverError::from(error)),
    }
}
