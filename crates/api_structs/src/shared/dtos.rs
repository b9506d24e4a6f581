use serde::{Deserialize, Serialize};

/// Body of every failed webhook request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDTO {
    pub success: bool,
    pub error: String,
}

impl ErrorResponseDTO {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}
