use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub async fn init_db(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    ensure_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

/// Creates the two tables and the uniqueness guards if they do not exist.
///
/// The unique index over `(id_usuarios, DATE(fecha_entrada))` is the
/// authoritative guard against duplicate same-day check-ins; `codigo UNIQUE`
/// plays the same role for access codes. Handlers insert first and map the
/// constraint violation instead of pre-checking.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id_usuarios INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre      TEXT NOT NULL,
            oficina     TEXT NOT NULL,
            codigo      TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS asistencia (
            id_asistencia INTEGER PRIMARY KEY AUTOINCREMENT,
            id_usuarios   INTEGER NOT NULL REFERENCES usuarios(id_usuarios),
            fecha_entrada TEXT NOT NULL,
            fecha_salida  TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_asistencia_usuario_dia
        ON asistencia (id_usuarios, DATE(fecha_entrada))
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
