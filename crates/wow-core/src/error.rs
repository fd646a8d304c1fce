use thiserror::Error;

/// The main error type for wow-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error, including credentials missing from every source
  #[error("Configuration error: {0}")]
  Config(String),

  /// A successful response is missing a field the client relies on.
  ///
  /// This means the remote API changed shape, not that the request failed.
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// Non-2xx response from the API or the OAuth endpoint
  #[error("HTTP status {status} from {url}")]
  Status { status: u16, url: String },

  /// Request exceeded its timeout
  #[error("Request timed out: {0}")]
  Timeout(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Parse error for response bodies
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// True for errors raised by the HTTP layer (status, timeout, connection)
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Status { .. } | Error::Timeout(_) | Error::Http(_))
  }
}

/// Result type alias for wow-* crates
pub type Result<T> = std::result::Result<T, Error>;
