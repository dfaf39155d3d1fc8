use crate::{
    api::{asistencia, usuarios},
    auth::handlers,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = build_limiter(config.rate_login_per_min);

    cfg.service(
        web::resource("/login")
            .wrap(login_limiter)
            .route(web::post().to(handlers::login)),
    );

    cfg.service(
        web::scope("/usuarios")
            // /usuarios
            .service(
                web::resource("")
                    .route(web::get().to(usuarios::list_usuarios))
                    .route(web::post().to(usuarios::create_usuario)),
            )
            // /usuarios/{id_usuarios}
            .service(
                web::resource("/{id_usuarios}")
                    .route(web::put().to(usuarios::update_usuario))
                    .route(web::delete().to(usuarios::delete_usuario)),
            ),
    );

    cfg.service(
        web::scope("/asistencia")
            .service(web::resource("/ingreso").route(web::post().to(asistencia::check_in)))
            .service(web::resource("/salida").route(web::post().to(asistencia::check_out))),
    );
}
