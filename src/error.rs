use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid category '{0}'")]
    InvalidCategory(String),
    #[error("die value {0} is outside 1..=6")]
    InvalidDie(u8),
}
