use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use rede_social_api::api;
use rede_social_api::config::Config;
use rede_social_api::db::create_pool;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );
    let pool = create_pool(&config)
        .await
        .expect("Failed to create database pool");

    log::info!("Database connection established");

    let openapi = api::ApiDoc::openapi();

    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    let app_pool = pool.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(app_pool.clone()))
            .route(
                "/api/docs",
                web::get().to(|| async {
                    actix_web::HttpResponse::PermanentRedirect()
                        .append_header(("Location", "/api/docs/"))
                        .finish()
                }),
            )
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::configure)
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await?;

    log::info!("Server stopped, closing database pool");
    if let Err(e) = pool.close().await {
        log::warn!("Failed to close database pool: {:?}", e);
    }

    Ok(())
}
