use crate::api::asistencia::AsistenciaReq;
use crate::api::usuarios::{CreateUsuario, UpdateUsuario};
use crate::auth::handlers::LoginReq;
use crate::model::asistencia::Asistencia;
use crate::model::usuario::Usuario;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Asistencia API",
        version = "1.0.0",
        description = r#"
## Attendance tracking backend

Manages a roster of users and records daily check-in/check-out events
against it, backed by a single SQLite file.

### Key features
- **User directory**: list, create, update, and delete users; each user is
  assigned a unique 6-character access code on creation
- **Attendance**: one check-in per user per calendar day, closed by a
  matching check-out
- **Login**: bare access-code lookup returning the user record

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::usuarios::list_usuarios,
        crate::api::usuarios::create_usuario,
        crate::api::usuarios::update_usuario,
        crate::api::usuarios::delete_usuario,

        crate::api::asistencia::check_in,
        crate::api::asistencia::check_out,

        crate::auth::handlers::login
    ),
    components(
        schemas(
            Usuario,
            Asistencia,
            CreateUsuario,
            UpdateUsuario,
            AsistenciaReq,
            LoginReq
        )
    ),
    tags(
        (name = "Usuarios", description = "User directory APIs"),
        (name = "Asistencia", description = "Check-in/check-out APIs"),
        (name = "Auth", description = "Access-code login")
    )
)]
pub struct ApiDoc;
