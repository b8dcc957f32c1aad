//! API server implementation

use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use rolodex_core::RolodexConfig;
use rolodex_storage::{
    ContactRepository, Database, SqliteContactRepository, seed_sample_contacts,
};
use tokio::net::TcpListener;

use crate::routes::App;
use crate::{AppState, Result, router};

/// Rolodex HTTP server.
///
/// Owns the database pool for its lifetime. [`Server::new`] prepares the
/// storage (schema, optional seed); [`Server::run`] serves until Ctrl-C and
/// then closes the pool.
pub struct Server {
    config: RolodexConfig,
    db: Database,
    state: AppState,
}

impl Server {
    /// Connect to the configured database, create the schema, and seed the
    /// sample contacts if `seed_on_startup` is set.
    pub async fn new(config: RolodexConfig) -> Result<Self> {
        let db = Database::connect(&config.database).await?;
        db.init_schema().await?;

        let repo: Arc<dyn ContactRepository> = Arc::new(SqliteContactRepository::new(db.clone()));
        if config.seed_on_startup {
            seed_sample_contacts(repo.as_ref()).await;
        }

        let state = AppState::new(repo, &config.session);
        Ok(Self { config, db, state })
    }

    /// The application router, for serving or driving in-process.
    pub fn router(&self) -> App {
        router(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.server.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Rolodex listening on http://{addr}");

        let app = ServiceExt::<Request>::into_make_service(self.router());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped, closing database");
        self.db.close().await;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
