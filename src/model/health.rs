use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health report for the back end and its database connection
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    /// `ok` when every dependency responded, `degraded` otherwise
    pub status: String,
    /// Whether the database answered a ping
    pub database: bool,
    /// When the check was performed
    pub checked_at: DateTime<Utc>,
}
