use photobook::{
    config::Config,
    domain::models::user::UserProfile,
    domain::ports::CollectionStore,
    domain::services::identity::Registration,
    infra::factory::bootstrap_with_store,
    infra::stores::sqlite_store::SqliteStore,
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub state: AppState,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            default_admin_name: "Admin User".to_string(),
            default_admin_email: "admin@photobook.com".to_string(),
            default_admin_password: "admin123".to_string(),
        };

        let store: Arc<dyn CollectionStore> = Arc::new(SqliteStore::new(pool.clone()));
        let state = bootstrap_with_store(config, store)
            .await
            .expect("Failed to bootstrap state");

        Self { state, pool, db_filename }
    }

    #[allow(dead_code)]
    pub async fn register_client(&self, name: &str, email: &str) -> UserProfile {
        self.state
            .identity
            .register(Registration {
                name: name.to_string(),
                email: email.to_string(),
                phone: "555-0100".to_string(),
                password: "secret123".to_string(),
                confirm_password: "secret123".to_string(),
            })
            .await
            .expect("registration failed")
    }

    #[allow(dead_code)]
    pub async fn login_admin(&self) -> UserProfile {
        self.state
            .identity
            .login("admin@photobook.com", "admin123")
            .await
            .expect("admin login failed")
            .profile
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
