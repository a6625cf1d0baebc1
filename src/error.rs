use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("mount target `{id}` does not resolve to a render surface")]
    MountTargetNotFound { id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("endpoint returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
