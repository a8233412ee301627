use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("no OKVED codes to match against")]
    EmptyCodeList,
}
