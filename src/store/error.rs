//! Remote store error types.

/// Errors that can occur while talking to the remote store. These never
/// cross the `Store` facade: callers see only the success/empty sentinel
/// while the error detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("Store error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to deserialize a response body
    #[error("Failed to deserialize store response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Insert succeeded but the backend returned no representation row
    #[error("Insert into '{table}' returned no row")]
    EmptyInsertResponse { table: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::Api {
            status: 403,
            message: "permission denied".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("403"));
        assert!(error_str.contains("permission denied"));

        let error = StoreError::EmptyInsertResponse {
            table: "tareas".to_string(),
        };
        assert!(error.to_string().contains("tareas"));
        assert!(error.to_string().contains("no row"));
    }
}
