use jiff::Timestamp;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub started_at: Timestamp,
    /// Stored record count, absent when the store could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}
