//! The data source's response envelope.
//!
//! The source wraps every body as `{success, message, data?, errors, timestamp}`.
//! [`ApiEnvelope`] is that wire shape; [`ApiResponse`] is the tagged form the
//! rest of the crate works with, so nothing downstream has to check which
//! optional fields happen to be present.

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, DirectoryResult};

/// Raw response envelope as sent by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the source considers the operation successful.
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Payload, present on successful reads and writes.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Additional error strings.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Server timestamp of the response.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A decoded data source response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The operation succeeded and produced `data`.
    Success {
        /// The payload.
        data: T,
        /// The source's message.
        message: String,
    },
    /// The operation failed.
    Failure {
        /// The source's message.
        message: String,
        /// Additional error strings.
        errors: Vec<String>,
    },
}

impl<T> ApiEnvelope<T> {
    /// Converts the envelope into a tagged response.
    ///
    /// A successful envelope without data is treated as a failure, since every
    /// caller of this method needs the payload.
    pub fn into_response(self) -> ApiResponse<T> {
        match (self.success, self.data) {
            (true, Some(data)) => ApiResponse::Success {
                data,
                message: self.message,
            },
            (true, None) => ApiResponse::Failure {
                message: "Response contained no data".to_string(),
                errors: self.errors,
            },
            (false, _) => ApiResponse::Failure {
                message: self.message,
                errors: self.errors,
            },
        }
    }

    /// Converts the envelope into a response that carries no payload.
    ///
    /// Used for operations such as delete where only the outcome matters.
    pub fn into_acknowledgement(self) -> ApiResponse<()> {
        if self.success {
            ApiResponse::Success {
                data: (),
                message: self.message,
            }
        } else {
            ApiResponse::Failure {
                message: self.message,
                errors: self.errors,
            }
        }
    }
}

impl<T> ApiResponse<T> {
    /// Returns true for [`ApiResponse::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Unwraps the payload, turning a failure into [`DirectoryError::Rejected`].
    pub fn into_result(self) -> DirectoryResult<T> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { message, errors } => {
                Err(DirectoryError::Rejected { message, errors })
            }
        }
    }
}
