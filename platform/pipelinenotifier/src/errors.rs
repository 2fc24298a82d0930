use thiserror::Error as ThisError;

#[derive(ThisError, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{name} must be set")]
    MissingConfiguration { name: &'static str },
    #[error("{name} must be valid unicode")]
    NonUnicodeConfiguration { name: &'static str },
}

impl Error {
    /// Name of the environment variable the error refers to.
    pub fn variable(&self) -> &'static str {
        match self {
            Error::MissingConfiguration { name } | Error::NonUnicodeConfiguration { name } => *name,
        }
    }
}
