use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub default_admin_name: String,
    pub default_admin_email: String,
    pub default_admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://photobook.db?mode=rwc".to_string()),
            default_admin_name: env::var("DEFAULT_ADMIN_NAME")
                .unwrap_or_else(|_| "Admin User".to_string()),
            default_admin_email: env::var("DEFAULT_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@photobook.com".to_string()),
            default_admin_password: env::var("DEFAULT_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}
