use crate::error::ApiError;
use actix_web::{HttpResponse, Responder, web};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AsistenciaReq {
    /// Required; `null`/absent is a client error.
    #[schema(example = 1, nullable = true)]
    pub id_usuarios: Option<i64>,
}

/// Current instant as an RFC 3339 UTC string, the stored wire format.
fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/asistencia/ingreso",
    request_body = AsistenciaReq,
    responses(
        (status = 200, description = "Checked in", body = Object, example = json!({
            "mensaje": "Ingreso registrado",
            "fecha_entrada": "2025-01-15T08:02:11.532Z"
        })),
        (status = 400, description = "Missing id or already checked in today"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Asistencia"
)]
pub async fn check_in(
    pool: web::Data<SqlitePool>,
    payload: web::Json<AsistenciaReq>,
) -> Result<impl Responder, ApiError> {
    let id_usuarios = payload.id_usuarios.ok_or(ApiError::MissingUserId)?;

    let fecha_entrada = now_utc();

    // The unique index over (id_usuarios, DATE(fecha_entrada)) rejects a
    // second same-day check-in, so concurrent calls cannot both succeed.
    let result = sqlx::query("INSERT INTO asistencia (id_usuarios, fecha_entrada) VALUES (?, ?)")
        .bind(id_usuarios)
        .bind(&fecha_entrada)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "mensaje": "Ingreso registrado",
            "fecha_entrada": fecha_entrada,
        }))),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(ApiError::DuplicateCheckIn)
        }
        Err(e) => Err(e.into()),
    }
}

/// Check-out endpoint
#[utoipa::path(
    post,
    path = "/asistencia/salida",
    request_body = AsistenciaReq,
    responses(
        (status = 200, description = "Checked out", body = Object, example = json!({
            "mensaje": "Salida registrada",
            "fecha_salida": "2025-01-15T17:30:45.004Z"
        })),
        (status = 400, description = "Missing id or no open session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Asistencia"
)]
pub async fn check_out(
    pool: web::Data<SqlitePool>,
    payload: web::Json<AsistenciaReq>,
) -> Result<impl Responder, ApiError> {
    let id_usuarios = payload.id_usuarios.ok_or(ApiError::MissingUserId)?;

    let fecha_salida = now_utc();

    // Close the most recent open session. Zero rows affected means there
    // is nothing to check out of.
    let result = sqlx::query(
        r#"
        UPDATE asistencia
        SET fecha_salida = ?
        WHERE id_asistencia = (
            SELECT id_asistencia FROM asistencia
            WHERE id_usuarios = ? AND fecha_salida IS NULL
            ORDER BY id_asistencia DESC
            LIMIT 1
        )
        "#,
    )
    .bind(&fecha_salida)
    .bind(id_usuarios)
    .execute(pool.get_ref())
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NoOpenSession);
    }

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": "Salida registrada",
        "fecha_salida": fecha_salida,
    })))
}
