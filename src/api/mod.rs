// src/api/mod.rs
use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_passwords,
        crate::api::handlers::generator::assess_password
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::ErrorResponse,
            crate::models::GeneratedPassword,
            crate::models::StrengthVerdict
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints")
    ),
    info(
        title = "Password Generator API",
        version = "0.1.0",
        description = "Generates random passwords and scores their strength",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// JSON extractor settings shared by the server and the handler tests.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Mounts Swagger UI and Redoc when the docs are enabled.
pub fn configure_docs(cfg: &mut web::ServiceConfig, enabled: bool, openapi: utoipa::openapi::OpenApi) {
    if !enabled {
        return;
    }
    // Add Swagger UI
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", openapi.clone())
    );
    // Add Redoc
    cfg.service(Redoc::with_url("/redoc", openapi));
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let (address, port) = config.bind_address();
    log::info!("Starting password generator API on {}:{}", address, port);

    let docs_enabled = config.api_docs_enabled;
    let openapi = ApiDoc::openapi();
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        let openapi = openapi.clone();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(config_data.clone())
            .app_data(json_config())
            .configure(|cfg| configure_docs(cfg, docs_enabled, openapi))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod error;
pub mod types;
pub mod routes;
pub mod handlers;
