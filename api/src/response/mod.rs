use serde::Serialize;

/// JSON body used by every failing endpoint.
///
/// All failures, whether validation (`400`), authorization (`403`) or a store
/// error surfaced as `500`, share one shape:
/// ```json
/// {
///   "error": "Grade must be between 0 and 100"
/// }
/// ```
///
/// For store failures the `error` string is the store error's display text,
/// exposed to the caller unchanged.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Constructs an error body from any displayable message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
