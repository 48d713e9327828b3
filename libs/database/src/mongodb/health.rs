use mongodb::{Database, bson::doc};
use std::time::Instant;

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database answered the probe
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check MongoDB health with a `ping` against the given database
///
/// # Example
/// ```ignore
/// use database::mongodb::check_health;
///
/// let healthy = check_health(store.database()).await;
/// ```
pub async fn check_health(database: &Database) -> bool {
    database.run_command(doc! { "ping": 1 }).await.is_ok()
}

/// Check MongoDB health with detailed status
///
/// Returns timing information and any error message.
pub async fn check_health_detailed(database: &Database) -> HealthStatus {
    let start = Instant::now();
    let result = database.run_command(doc! { "ping": 1 }).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}
