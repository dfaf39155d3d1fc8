use crate::{
    error::ApiError,
    model::usuario::Usuario,
    utils::codes::{MAX_CODE_ATTEMPTS, generate_code},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateUsuario {
    #[schema(example = "Ana")]
    pub nombre: String,
    #[schema(example = "HR")]
    pub oficina: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateUsuario {
    #[schema(example = "Ana María")]
    pub nombre: String,
    #[schema(example = "Finanzas")]
    pub oficina: String,
}

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "All users in store order", body = Vec<Usuario>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Usuarios"
)]
pub async fn list_usuarios(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    let usuarios = sqlx::query_as::<_, Usuario>(
        "SELECT id_usuarios, nombre, oficina, codigo FROM usuarios",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(usuarios))
}

/// Create a user with a freshly generated access code
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUsuario,
    responses(
        (status = 200, description = "User created", body = Usuario),
        (status = 500, description = "Internal server error")
    ),
    tag = "Usuarios"
)]
pub async fn create_usuario(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateUsuario>,
) -> Result<impl Responder, ApiError> {
    // The UNIQUE constraint on codigo is the real collision guard; a
    // violation here just means draw again. Bounded so a full code space
    // fails loudly instead of spinning.
    for attempt in 1..=MAX_CODE_ATTEMPTS {
        let codigo = generate_code();

        let result = sqlx::query(
            "INSERT INTO usuarios (nombre, oficina, codigo) VALUES (?, ?, ?)",
        )
        .bind(&payload.nombre)
        .bind(&payload.oficina)
        .bind(&codigo)
        .execute(pool.get_ref())
        .await;

        match result {
            Ok(res) => {
                let usuario = Usuario {
                    id_usuarios: res.last_insert_rowid(),
                    nombre: payload.nombre.clone(),
                    oficina: payload.oficina.clone(),
                    codigo,
                };
                info!(id_usuarios = usuario.id_usuarios, "Usuario creado");
                return Ok(HttpResponse::Ok().json(usuario));
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!(attempt, "Código duplicado, reintentando");
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ApiError::CodeSpaceExhausted)
}

/// Update a user's name and office; the access code is never altered
#[utoipa::path(
    put,
    path = "/usuarios/{id_usuarios}",
    params(
        ("id_usuarios", Path, description = "User ID")
    ),
    request_body = UpdateUsuario,
    responses(
        (status = 200, description = "Confirmation message", body = Object, example = json!({
            "mensaje": "Usuario actualizado correctamente"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Usuarios"
)]
pub async fn update_usuario(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUsuario>,
) -> Result<impl Responder, ApiError> {
    let id_usuarios = path.into_inner();

    // An unknown id affects zero rows and still confirms; kept as the
    // documented contract.
    sqlx::query("UPDATE usuarios SET nombre = ?, oficina = ? WHERE id_usuarios = ?")
        .bind(&payload.nombre)
        .bind(&payload.oficina)
        .bind(id_usuarios)
        .execute(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": "Usuario actualizado correctamente"
    })))
}

/// Delete a user; attendance rows are retained
#[utoipa::path(
    delete,
    path = "/usuarios/{id_usuarios}",
    params(
        ("id_usuarios", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Confirmation message", body = Object, example = json!({
            "mensaje": "Usuario eliminado correctamente"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Usuarios"
)]
pub async fn delete_usuario(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let id_usuarios = path.into_inner();

    sqlx::query("DELETE FROM usuarios WHERE id_usuarios = ?")
        .bind(id_usuarios)
        .execute(pool.get_ref())
        .await?;

    info!(id_usuarios, "Usuario eliminado");

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": "Usuario eliminado correctamente"
    })))
}
