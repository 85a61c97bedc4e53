use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("period token '{0}' is not on the period scale")]
    UnknownPeriod(String),
    #[error("'{0}' is not a weekday symbol")]
    UnknownWeekday(char),
}

pub type Result<T> = std::result::Result<T, ModelError>;
