//! HTTP backend for managing student records.
//!
//! The application exposes a JSON API for creating, querying, updating, and
//! deleting students, backed by a relational table through SeaORM.
//!
//! # Architecture
//!
//! The code follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, payload validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules orchestrated between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations through SeaORM repositories
//! - **Model Layer** (`model/`) - Domain models and the parameter types operations take
//! - **Error Layer** (`error/`) - Error taxonomy and its mapping onto HTTP statuses
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the payload, converts DTOs to domain types, calls the service
//! 3. **Service** enforces business rules and orchestrates data operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** wraps the resulting DTO in the response envelope

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("studentboard=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
