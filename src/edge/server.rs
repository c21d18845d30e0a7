use crate::{
    config::Config,
    edge::AdImageGenerator,
    error::{Result, StudioError},
    logger,
    models::{AdImageRequest, AdImageResponse, ErrorBody},
};
use actix_web::{
    http::{header, Method},
    middleware::{DefaultHeaders, Logger},
    web, App, HttpResponse, HttpServer,
};

pub const AD_IMAGE_PATH: &str = "/generate-ad-image";
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Permissive CORS headers attached to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(AD_IMAGE_PATH)
            .route(web::post().to(generate_ad_image))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

// The body is decoded by hand so malformed JSON gets the same 500 `{error}`
// reply as an upstream failure.
async fn generate_ad_image(
    generator: web::Data<AdImageGenerator>,
    body: web::Bytes,
) -> HttpResponse {
    let request: AdImageRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => return error_response(format!("Invalid request body: {}", e)),
    };

    match generator.generate(&request).await {
        Ok(image_url) => HttpResponse::Ok().json(AdImageResponse { image_url }),
        Err(e) => {
            log::error!("generate-ad-image error: {}", e);
            error_response(e.to_string())
        }
    }
}

fn error_response(error: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody { error })
}

/// Runs the ad image endpoint until the process is stopped. A missing API
/// key stops startup rather than failing every request.
pub async fn serve(config: Config) -> Result<()> {
    let generator = web::Data::new(AdImageGenerator::from_config(&config)?);
    let host = config.server.host.clone();
    let port = config.server.port;

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &host, port);
    logger::log_config_info(&config);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(Logger::default())
            .app_data(generator.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))
    .map_err(|e| StudioError::ServerError(format!("Failed to bind {}:{}: {}", host, port, e)))?
    .run()
    .await
    .map_err(|e| StudioError::ServerError(e.to_string()))
}
