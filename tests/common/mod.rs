use asistencia::config::Config;
use asistencia::db::ensure_schema;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Fresh in-memory store with the schema applied. Single connection so
/// every query in a test sees the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    ensure_schema(&pool).await.expect("schema");

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        rate_login_per_min: 1000,
    }
}
