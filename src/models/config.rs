use serde::Deserialize;

use crate::domain::product::DeletePolicy;

/// Configuration options specific to the Vitrine service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Upper bound for pooled store connections.
    pub max_connections: u32,
    /// Deletion semantics applied to every `DELETE` request.
    #[serde(default)]
    pub delete_policy: DeletePolicy,
}
