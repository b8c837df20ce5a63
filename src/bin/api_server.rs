// src/bin/api_server.rs

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tutor_intake::infra::config;
use tutor_intake::transport;
use tutor_intake::{connect_pool, ApplicationStore, PgApplicationStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    println!("> Connecting to Postgres...");
    let pool = connect_pool(&config::database_url(), config::max_db_connections()).await?;

    let store = PgApplicationStore::new(pool);
    store.ensure_schema().await?;
    println!("> Schema ready (tutor_applications).");

    let app_state = transport::http::AppState {
        store: Arc::new(store) as Arc<dyn ApplicationStore>,
    };

    println!("> Starting API server...");
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("> API server listening on http://{}", addr);
    println!("> Swagger UI available at /swagger-ui");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), stopping.");
        }
    }

    Ok(())
}
