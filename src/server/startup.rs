use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, mail::smtp::SmtpMailer};

/// Build the SMTP mailer from the configured relay credentials
pub fn build_mailer(config: &Config) -> Result<SmtpMailer, Error> {
    let mailer = SmtpMailer::new(
        &config.smtp_server,
        config.smtp_port,
        config.smtp_username.clone(),
        config.smtp_password.clone(),
        &config.smtp_from_email,
        config.smtp_from_name.clone(),
    )?;

    Ok(mailer)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
