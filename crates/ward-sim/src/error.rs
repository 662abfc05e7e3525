use thiserror::Error;
use ward_core::WardError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Ward(#[from] WardError),
}

pub type SimResult<T> = Result<T, SimError>;
