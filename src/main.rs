//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here; endpoints delegate to the use-case layer.

use anyhow::Context;
use dotenv::dotenv;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use taskboard::adapters::http::{AppState, build_router};
use taskboard::adapters::integrations::TrelloHttpGateway;
use taskboard::adapters::mail::{LogMailer, SmtpMailer};
use taskboard::adapters::persistence::SqliteTaskRepo;
use taskboard::ports::{MailPort, TaskRepoPort, TrelloGateway};
use taskboard::shared::AppConfig;
use taskboard::usecases::{ReportScheduler, TaskService, TrelloFacade};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();
    if !cfg.is_trello_configured() {
        anyhow::bail!(
            "Set TRELLO_KEY, TRELLO_TOKEN and TRELLO_USERNAME (env or .env). Get them from https://trello.com/app-key"
        );
    }

    // --- Persistence ---
    let data_path = PathBuf::from(cfg.data_dir_or_default());
    let repo: Arc<dyn TaskRepoPort> = Arc::new(
        SqliteTaskRepo::connect(&data_path)
            .await
            .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
    );

    // --- Trello gateway ---
    let gateway: Arc<dyn TrelloGateway> = Arc::new(TrelloHttpGateway::new(
        cfg.trello_api_url_or_default(),
        cfg.trello_key.clone().unwrap_or_default(),
        cfg.trello_token.clone().unwrap_or_default(),
        cfg.trello_username.clone().unwrap_or_default(),
    ));

    // --- Mailer (log-only fallback when SMTP is not configured) ---
    let mailer: Arc<dyn MailPort> = if cfg.is_smtp_configured() {
        info!("SMTP mailer enabled");
        Arc::new(SmtpMailer::new(
            cfg.smtp_host.clone().unwrap_or_default(),
            cfg.smtp_port.unwrap_or(587),
            cfg.smtp_username.clone().unwrap_or_default(),
            cfg.smtp_password.clone().unwrap_or_default(),
            cfg.mail_from.clone().unwrap_or_default(),
        ))
    } else {
        warn!("TASKBOARD_SMTP_* not set, using log-only mailer");
        Arc::new(LogMailer::new())
    };

    // --- Services ---
    let tasks = Arc::new(TaskService::new(Arc::clone(&repo)));
    let trello = Arc::new(TrelloFacade::new(gateway));

    // --- Daily status report (own task; stops with the process) ---
    match cfg.admin_config() {
        Some(admin) => {
            let scheduler = ReportScheduler::new(
                Arc::clone(&repo),
                mailer,
                admin,
                cfg.report_hour_or_default(),
            );
            tokio::spawn(async move {
                scheduler.run_loop().await;
            });
        }
        None => warn!("TASKBOARD_ADMIN_MAIL not set, daily status report disabled"),
    }

    // --- HTTP server ---
    let state = AppState { tasks, trello };
    let app = build_router(state);

    let addr: SocketAddr = cfg
        .http_addr_or_default()
        .parse()
        .context("Invalid TASKBOARD_HTTP_ADDR")?;
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind HTTP address")?;

    info!(addr = %addr, "taskboard listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
