use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use placement_match::config::Settings;
use placement_match::core::Matcher;
use placement_match::routes::{self, AppState};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            placement_match::logging::init(&Default::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    placement_match::logging::init(&settings.logging);

    info!("Starting Placement Match recommendation service...");

    let matcher = Matcher::new(settings.matching.max_jobs);

    info!("Matcher initialized (max jobs per request: {})", matcher.max_jobs());

    let app_state = AppState { matcher };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
