use std::sync::Arc;

use slotwarden::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    scheduler::{JobContext, Scheduler},
    service::capacity::policy::CapacityPolicy,
    startup,
    util::template::NotificationTemplates,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slotwarden=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let mailer = startup::build_mailer(&config)?;
    let policy = CapacityPolicy::new(config.capacity);
    let templates = NotificationTemplates::new(
        &config.notification_link_template,
        &config.generic_notification_link_template,
    );

    let context = JobContext {
        db: db.clone(),
        policy,
        mailer: Arc::new(mailer),
        templates: Arc::new(templates),
    };
    Scheduler::new(context, config.opening_notifier_cron.as_str())
        .await?
        .start()
        .await?;

    let app = router::routes().with_state(AppState {
        db,
        policy,
        reservation_ttl: config.reservation_ttl,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
