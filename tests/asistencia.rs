//! Check-in/check-out state machine against the real routes and an
//! in-memory store.

mod common;

use actix_web::web::Data;
use actix_web::{App, test};
use asistencia::model::asistencia::Asistencia;
use common::{test_config, test_pool};
use serde_json::{Value, json};
use sqlx::SqlitePool;

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($pool.clone()))
                .configure(|cfg| asistencia::routes::configure(cfg, test_config())),
        )
        .await
    };
}

async fn seed_usuario(pool: &SqlitePool) -> i64 {
    sqlx::query("INSERT INTO usuarios (nombre, oficina, codigo) VALUES ('Ana', 'HR', 'AAAAAA')")
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($uri)
            .set_json($body)
            .to_request();
        test::call_service($app, req).await
    }};
}

#[actix_web::test]
async fn check_in_records_entry_timestamp() {
    let pool = test_pool().await;
    let app = test_app!(pool);
    let id = seed_usuario(&pool).await;

    let resp = post_json!(&app, "/asistencia/ingreso", json!({ "id_usuarios": id }));
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mensaje"], "Ingreso registrado");
    let fecha_entrada = body["fecha_entrada"].as_str().unwrap();
    assert!(fecha_entrada.ends_with('Z'));

    let stored = sqlx::query_as::<_, Asistencia>(
        "SELECT id_asistencia, id_usuarios, fecha_entrada, fecha_salida \
         FROM asistencia WHERE id_usuarios = ?",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(stored.fecha_entrada, fecha_entrada);
    assert_eq!(stored.fecha_salida, None);
}

#[actix_web::test]
async fn second_check_in_same_day_is_rejected() {
    let pool = test_pool().await;
    let app = test_app!(pool);
    let id = seed_usuario(&pool).await;

    let resp = post_json!(&app, "/asistencia/ingreso", json!({ "id_usuarios": id }));
    assert!(resp.status().is_success());

    let resp = post_json!(&app, "/asistencia/ingreso", json!({ "id_usuarios": id }));
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "DUPLICATE_CHECK_IN");

    // No second row was created.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM asistencia WHERE id_usuarios = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn check_out_without_open_session_is_rejected() {
    let pool = test_pool().await;
    let app = test_app!(pool);
    let id = seed_usuario(&pool).await;

    let resp = post_json!(&app, "/asistencia/salida", json!({ "id_usuarios": id }));
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NO_OPEN_SESSION");
}

#[actix_web::test]
async fn check_in_then_check_out_closes_the_session() {
    let pool = test_pool().await;
    let app = test_app!(pool);
    let id = seed_usuario(&pool).await;

    let resp = post_json!(&app, "/asistencia/ingreso", json!({ "id_usuarios": id }));
    let entrada: Value = test::read_body_json(resp).await;

    // Timestamps carry millisecond precision; make sure the clock moves.
    actix_web::rt::time::sleep(std::time::Duration::from_millis(5)).await;

    let resp = post_json!(&app, "/asistencia/salida", json!({ "id_usuarios": id }));
    assert!(resp.status().is_success());
    let salida: Value = test::read_body_json(resp).await;
    assert_eq!(salida["mensaje"], "Salida registrada");

    // RFC 3339 UTC strings compare chronologically.
    let fecha_entrada = entrada["fecha_entrada"].as_str().unwrap();
    let fecha_salida = salida["fecha_salida"].as_str().unwrap();
    assert!(fecha_entrada < fecha_salida, "{fecha_entrada} !< {fecha_salida}");

    let completed: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM asistencia \
         WHERE id_usuarios = ? AND fecha_entrada IS NOT NULL AND fecha_salida IS NOT NULL",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(completed, 1);

    // Session is closed; another check-out has nothing to act on.
    let resp = post_json!(&app, "/asistencia/salida", json!({ "id_usuarios": id }));
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NO_OPEN_SESSION");
}

#[actix_web::test]
async fn missing_user_id_is_a_client_error() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    for uri in ["/asistencia/ingreso", "/asistencia/salida"] {
        let resp = post_json!(&app, uri, json!({}));
        assert_eq!(resp.status(), 400, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "MISSING_USER_ID");
    }
}
