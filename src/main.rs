use planner::core::config::MailDriver;
use planner::core::{AppState, Config};
use planner::mail::{MailTransport, MemoryMailer, SmtpMailer};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("planner=debug,tower_http=info")),
        )
        .init();

    // Load the configuration (calls dotenv internally)
    let config = Config::from_env()?;
    config.print_info();

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let mailer: Arc<dyn MailTransport> = match config.mail_driver {
        MailDriver::Smtp => Arc::new(SmtpMailer::from_config(&config)?),
        MailDriver::Memory => Arc::new(MemoryMailer::new()),
    };

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let state = Arc::new(AppState::new(pool, config, mailer));
    let app = planner::create_router(state).layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
