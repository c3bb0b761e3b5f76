use reqwest::StatusCode;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by a nearby-vets lookup.
#[derive(Debug, Error)]
pub enum VetsError {
    /// Latitude or longitude is not a finite value inside its geographic range.
    #[error("invalid coordinates: lat={latitude}, lng={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// The request never produced a response: connection refused, DNS, timeout.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// The response body is not a list of vet records.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("duplicate place_id {0} in response")]
    DuplicatePlaceId(String),

    /// The auth token cannot be carried in an HTTP header.
    #[error("auth token is not a valid header value")]
    InvalidToken,
}

impl VetsError {
    pub fn transport<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        VetsError::Transport(error.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, VetsError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, VetsError::Decode(_) | VetsError::DuplicatePlaceId(_))
    }

    /// Status code carried by a [`VetsError::Status`] failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            VetsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VetsError {
    fn from(error: reqwest::Error) -> Self {
        VetsError::transport(error)
    }
}

pub type Result<T> = std::result::Result<T, VetsError>;
