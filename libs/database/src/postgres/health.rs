use sea_orm::DatabaseConnection;

use crate::common::DatabaseError;

/// Ping the database to verify the connection is alive
///
/// Used by readiness probes; a failure here means the pool can no
/// longer reach PostgreSQL.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
