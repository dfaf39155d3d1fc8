use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id_usuarios": 1,
        "nombre": "Ana",
        "oficina": "HR",
        "codigo": "X3F9QZ"
    })
)]
pub struct Usuario {
    #[schema(example = 1)]
    pub id_usuarios: i64,

    #[schema(example = "Ana")]
    pub nombre: String,

    #[schema(example = "HR")]
    pub oficina: String,

    /// Server-generated 6-character access code, never altered after insert.
    #[schema(example = "X3F9QZ")]
    pub codigo: String,
}
