use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::service::capacity::policy::CapacityPolicy;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub policy: CapacityPolicy,
    /// How long a checkout reservation holds its slot
    pub reservation_ttl: Duration,
}
