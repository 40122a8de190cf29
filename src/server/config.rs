use std::{net::SocketAddr, str::FromStr};

use chrono::Duration;

use crate::server::{
    error::config::ConfigError, model::capacity::CapacityConfig,
    scheduler::config::opening_notifier,
};

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from_email: String,
    pub smtp_from_name: Option<String>,

    /// Link sent to subscribers whose linked directory entry is still active
    pub notification_link_template: String,
    /// Link sent when the subscriber has no active linked entry
    pub generic_notification_link_template: String,
    pub opening_notifier_cron: String,

    pub reservation_ttl: Duration,
    pub capacity: CapacityConfig,
}

impl Config {
    /// Reads configuration from the environment, failing on missing or malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let notification_link_template = required("NOTIFICATION_LINK_TEMPLATE")?;
        let generic_notification_link_template = optional("GENERIC_NOTIFICATION_LINK_TEMPLATE")
            .unwrap_or_else(|| notification_link_template.clone());

        let defaults = CapacityConfig::default();
        let capacity = CapacityConfig {
            max_main_slots: parsed_or("MAX_MAIN_SLOTS", defaults.max_main_slots)?,
            max_category_slots: parsed_or("MAX_CATEGORY_SLOTS", defaults.max_category_slots)?,
            max_subcategory_slots: parsed_or(
                "MAX_SUBCATEGORY_SLOTS",
                defaults.max_subcategory_slots,
            )?,
            min_category_inventory: parsed_or(
                "MIN_CATEGORY_INVENTORY",
                defaults.min_category_inventory,
            )?,
            min_subcategory_inventory: parsed_or(
                "MIN_SUBCATEGORY_INVENTORY",
                defaults.min_subcategory_inventory,
            )?,
        };

        let ttl_minutes: i64 = parsed_or("RESERVATION_TTL_MINUTES", 15)?;
        if ttl_minutes <= 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "RESERVATION_TTL_MINUTES".to_string(),
                reason: "must be a positive number of minutes".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: parsed_or(
                "BIND_ADDRESS",
                SocketAddr::from(([0, 0, 0, 0], 8080)),
            )?,
            smtp_server: required("SMTP_SERVER")?,
            smtp_port: parsed_or("SMTP_PORT", 587)?,
            smtp_username: required("SMTP_USERNAME")?,
            smtp_password: required("SMTP_PASSWORD")?,
            smtp_from_email: required("SMTP_FROM_EMAIL")?,
            smtp_from_name: optional("SMTP_FROM_NAME"),
            notification_link_template,
            generic_notification_link_template,
            opening_notifier_cron: optional("OPENING_NOTIFIER_CRON")
                .unwrap_or_else(|| opening_notifier::CRON_EXPRESSION.to_string()),
            reservation_ttl: Duration::minutes(ttl_minutes),
            capacity,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(var) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
