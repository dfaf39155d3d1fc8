use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One check-in/check-out pair for a user. Timestamps are stored and served
/// as RFC 3339 UTC strings; `fecha_salida` stays NULL until check-out.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Asistencia {
    #[schema(example = 1)]
    pub id_asistencia: i64,

    #[schema(example = 1)]
    pub id_usuarios: i64,

    #[schema(example = "2025-01-15T08:02:11.532Z")]
    pub fecha_entrada: String,

    #[schema(example = "2025-01-15T17:30:45.004Z", nullable = true)]
    pub fecha_salida: Option<String>,
}
