use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use debtwatch::config::Config;
use debtwatch::core::error::json_error_handler;
use debtwatch::modules::customers::repositories::CustomerRepository;
use debtwatch::modules::customers::services::CustomerService;
use debtwatch::modules::{customers, exposure};
use debtwatch::storage::JsonStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debtwatch=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Debtwatch customer credit service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Data file: {}", config.storage.data_path.display());
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Open the customer store
    let store =
        Arc::new(JsonStore::open(&config.storage.data_path).expect("Failed to open data file"));
    let customer_service = web::Data::new(CustomerService::new(CustomerRepository::new(store)));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match cors_origin.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(customer_service.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .configure(customers::controllers::configure)
                    .configure(exposure::controllers::configure),
            )
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "debtwatch"
    }))
}
