use rw_core::ModelId;
use rw_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("model {0} was never registered")]
    UnknownModel(ModelId),

    #[error("model {0} has been disposed")]
    ModelDisposed(ModelId),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
