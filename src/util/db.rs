use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct Db {
    pub pool: PgPool,
}

impl Db {
    // SECURITY: never include raw DSNs in tracing spans (they may contain credentials).
    #[instrument(skip(database_url))]
    pub fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let mut connect_options = PgConnectOptions::from_str(database_url)?;

        // Ensure TLS is enabled when the DSN contains sslmode=require
        if database_url.contains("sslmode=require") && !database_url.contains("sslmode=disable") {
            connect_options = connect_options.ssl_mode(PgSslMode::Require);
        }

        // Lazy pool: an unreachable store must not abort the run here. The
        // first statement the loader issues surfaces the connection error,
        // which the pipeline absorbs and reports.
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_lazy_with(connect_options);
        info!("db pool ready (lazy connect)");
        Ok(Self { pool })
    }

    /// Release the pool. Called on every exit path before the process ends.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
