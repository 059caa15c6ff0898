use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("local time {0} does not exist in the system timezone")]
    NonexistentLocalTime(NaiveDateTime),
}
