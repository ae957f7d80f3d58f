use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::{Compress, DefaultHeaders, Logger},
    web, App, HttpServer,
};

use smart_study_server::{
    app_state::AppState,
    config::Config,
    handlers::{self, json_config, not_found},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.log_startup_warnings();

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = Arc::new(AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?);

    log::info!(
        "Starting smart study server on http://{}:{}",
        bind_address.0,
        bind_address.1
    );
    log::info!(
        "AI generation {}",
        if state.study_service.ai_configured() {
            "enabled"
        } else {
            "disabled; serving fallback content"
        }
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .wrap(cors(&state.config))
            .wrap(security_headers())
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
            .default_service(web::to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

fn cors(config: &Config) -> Cors {
    if config.allows_any_origin() {
        return Cors::permissive();
    }

    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"))
}
