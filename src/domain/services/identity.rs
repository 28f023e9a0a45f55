use crate::config::Config;
use crate::domain::models::user::{Role, User, UserProfile};
use crate::domain::ports::{SessionRepository, UserRepository};
use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;
use tracing::{info, warn};

const MIN_PASSWORD_LEN: usize = 6;
const DEFAULT_ADMIN_PHONE: &str = "1234567890";

pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Where the front-end routes after login, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    AdminDashboard,
    ClientDashboard,
}

impl Landing {
    fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Landing::AdminDashboard,
            Role::Client => Landing::ClientDashboard,
        }
    }
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub profile: UserProfile,
    pub landing: Landing,
}

/// The credential scheme is a reversible encoding kept for compatibility with
/// existing stored data; hardening it is out of scope.
pub fn encode_password(raw: &str) -> String {
    BASE64.encode(raw)
}

/// Accepts the stored credential in its encoded form or, for legacy records,
/// as plaintext.
pub fn verify_password(raw: &str, stored: &str) -> bool {
    BASE64.encode(raw) == stored || raw == stored
}

pub struct IdentityService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    config: Config,
}

impl IdentityService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        config: Config,
    ) -> Self {
        Self { users, sessions, config }
    }

    pub async fn register(&self, reg: Registration) -> Result<UserProfile, AppError> {
        if reg.name.trim().is_empty()
            || reg.email.trim().is_empty()
            || reg.phone.trim().is_empty()
            || reg.password.is_empty()
            || reg.confirm_password.is_empty()
        {
            return Err(AppError::Validation("Please fill in all fields".to_string()));
        }
        if reg.password != reg.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }
        if reg.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(
                "Password must be at least 6 characters long".to_string(),
            ));
        }
        if self.users.find_by_email(reg.email.trim()).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let user = User::new(
            reg.name.trim().to_string(),
            reg.email.trim().to_string(),
            reg.phone.trim().to_string(),
            encode_password(&reg.password),
        );
        self.users.insert(&user).await?;

        let profile = user.profile();
        self.sessions.set(&profile).await?;
        info!("User registered: {}", profile.id);
        Ok(profile)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or(AppError::Unauthorized)?;
        if !verify_password(password, &user.password) {
            return Err(AppError::Unauthorized);
        }

        let profile = user.profile();
        self.sessions.set(&profile).await?;
        info!("User logged in: {}", profile.id);
        Ok(LoginOutcome {
            landing: Landing::for_role(profile.role),
            profile,
        })
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.sessions.clear().await?;
        info!("User logged out");
        Ok(())
    }

    pub async fn current(&self) -> Result<Option<UserProfile>, AppError> {
        self.sessions.get().await
    }

    pub async fn require_session(&self) -> Result<UserProfile, AppError> {
        self.sessions.get().await?.ok_or(AppError::Unauthorized)
    }

    pub async fn check_admin_access(&self) -> Result<bool, AppError> {
        Ok(self
            .sessions
            .get()
            .await?
            .map(|profile| profile.is_admin())
            .unwrap_or(false))
    }

    /// Merges name/phone into the session's stored user and refreshes the
    /// session projection. Role is never touched by a profile update.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, AppError> {
        let session = self.require_session().await?;
        let mut user = self
            .users
            .find_by_id(&session.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", session.id)))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }

        let user = self.users.update(&user).await?;
        let profile = user.profile();
        self.sessions.set(&profile).await?;
        Ok(profile)
    }

    fn require_admin(caller: &UserProfile) -> Result<(), AppError> {
        if caller.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Unauthorized access".to_string()))
        }
    }

    pub async fn list_users(&self, caller: &UserProfile) -> Result<Vec<UserProfile>, AppError> {
        Self::require_admin(caller)?;
        Ok(self.users.list().await?.iter().map(User::profile).collect())
    }

    pub async fn delete_user(&self, caller: &UserProfile, id: &str) -> Result<(), AppError> {
        Self::require_admin(caller)?;
        if !self.users.delete(id).await? {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }
        info!("User deleted: {id}");
        Ok(())
    }

    pub async fn promote_to_admin(&self, caller: &UserProfile, id: &str) -> Result<(), AppError> {
        Self::require_admin(caller)?;
        self.set_role(id, Role::Admin).await?;
        info!("User promoted to admin: {id}");
        Ok(())
    }

    /// Self-demotion is always rejected, regardless of how many other admins
    /// exist.
    pub async fn demote_from_admin(&self, caller: &UserProfile, id: &str) -> Result<(), AppError> {
        Self::require_admin(caller)?;
        if id == caller.id {
            return Err(AppError::Validation(
                "Cannot remove admin status from yourself".to_string(),
            ));
        }
        self.set_role(id, Role::Client).await?;
        info!("Admin rights removed: {id}");
        Ok(())
    }

    async fn set_role(&self, id: &str, role: Role) -> Result<(), AppError> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
        user.role = role;
        self.users.update(&user).await?;
        Ok(())
    }

    /// Startup bootstrap: when no admin exists, synthesize the default one
    /// from config. Idempotent, safe to invoke on every startup.
    pub async fn ensure_default_admin(&self) -> Result<Option<User>, AppError> {
        let users = self.users.list().await?;
        if users.iter().any(|u| u.role == Role::Admin) {
            return Ok(None);
        }

        let mut admin = User::new(
            self.config.default_admin_name.clone(),
            self.config.default_admin_email.clone(),
            DEFAULT_ADMIN_PHONE.to_string(),
            encode_password(&self.config.default_admin_password),
        );
        admin.id = format!("admin-{}", admin.id);
        admin.role = Role::Admin;
        self.users.insert(&admin).await?;
        warn!("Default admin account created: {}", admin.email);
        Ok(Some(admin))
    }
}
