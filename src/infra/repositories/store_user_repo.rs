use crate::domain::models::user::User;
use crate::domain::ports::{CollectionStore, UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

pub const USERS_COLLECTION: &str = "users";

/// Users persisted as one JSON array under the `users` collection. Every
/// mutation is a full read-modify-write; single writer by construction.
pub struct StoreUserRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreUserRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<User>, AppError> {
        match self.store.read(USERS_COLLECTION).await? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, users: &[User]) -> Result<(), AppError> {
        let payload = serde_json::to_string(users)?;
        self.store.write(USERS_COLLECTION, &payload).await
    }
}

#[async_trait]
impl UserRepository for StoreUserRepo {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.load().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.load().await?.into_iter().find(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let needle = email.to_lowercase();
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|u| u.email.to_lowercase() == needle))
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.load().await?;
        users.push(user.clone());
        self.save(&users).await
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.load().await?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.id)))?;
        *slot = user.clone();
        self.save(&users).await?;
        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut users = self.load().await?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.save(&users).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::stores::memory_store::MemoryStore;

    fn repo() -> StoreUserRepo {
        StoreUserRepo::new(Arc::new(MemoryStore::new()))
    }

    fn user(name: &str, email: &str) -> User {
        User::new(
            name.to_string(),
            email.to_string(),
            "555-0100".to_string(),
            "cGFzc3dvcmQ=".to_string(),
        )
    }

    #[tokio::test]
    async fn missing_collection_reads_as_empty() {
        let repo = repo();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.find_by_id("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn email_lookup_ignores_case() {
        let repo = repo();
        repo.insert(&user("Alice", "Alice@Example.com")).await.unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let repo = repo();
        let ghost = user("Ghost", "ghost@example.com");
        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_existed() {
        let repo = repo();
        let alice = user("Alice", "alice@example.com");
        repo.insert(&alice).await.unwrap();

        assert!(repo.delete(&alice.id).await.unwrap());
        assert!(!repo.delete(&alice.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
