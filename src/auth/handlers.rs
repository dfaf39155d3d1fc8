use crate::{error::ApiError, model::usuario::Usuario};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "X3F9QZ")]
    pub codigo: String,
}

/// Login by access code. Bare identity resolution: no password, no session
/// token, just the matching user record or an invalid-code error.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Matching user", body = Usuario),
        (status = 400, description = "Unknown code"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(pool, payload))]
pub async fn login(
    pool: web::Data<SqlitePool>,
    payload: web::Json<LoginReq>,
) -> Result<impl Responder, ApiError> {
    debug!("Fetching user by code");

    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id_usuarios, nombre, oficina, codigo FROM usuarios WHERE codigo = ?",
    )
    .bind(&payload.codigo)
    .fetch_optional(pool.get_ref())
    .await?;

    match usuario {
        Some(usuario) => {
            info!(id_usuarios = usuario.id_usuarios, "Login successful");
            Ok(HttpResponse::Ok().json(usuario))
        }
        None => {
            info!("Login failed: unknown code");
            Err(ApiError::InvalidCode)
        }
    }
}
