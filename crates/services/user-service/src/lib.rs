//! User Service Library
//!
//! This crate provides user account management over HTTP.
//! It can be run against Postgres or against an in-process store.

pub mod config;
pub mod http;
pub mod infra;
pub mod repository;
pub mod security;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::JwtConfig;

use crate::config::UserServiceConfig;
use crate::http::{create_router, AppState};
use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::security::{Argon2Hasher, CredentialAuthenticator, JwtIssuer};
use crate::service::{AccountManager, AccountService};

/// Wire the account service over `repo` with the production collaborators.
pub fn build_services(repo: Arc<dyn UserRepository>, jwt: &JwtConfig) -> Arc<dyn AccountService> {
    let hasher = Arc::new(Argon2Hasher);
    let authenticator = Arc::new(CredentialAuthenticator::new(repo.clone(), hasher.clone()));
    let issuer = Arc::new(JwtIssuer::new(jwt));

    Arc::new(AccountManager::new(repo, hasher, authenticator, issuer))
}

/// Run the user service as an embedded component.
pub async fn run_embedded(
    host: &str,
    port: u16,
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    config.validate()?;
    run_server_with_config(host, port, in_memory, config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    in_memory: bool,
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo: Arc<dyn UserRepository> = if in_memory {
        info!("Using in-memory user store");
        Arc::new(InMemoryUserStore::new())
    } else {
        let db = Database::connect(&config.database).await?;
        db.ping().await?;
        Arc::new(UserStore::new(db.get_connection()))
    };

    let state = AppState::new(build_services(repo, &config.jwt));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("User service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
