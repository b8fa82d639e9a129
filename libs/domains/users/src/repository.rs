use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{CreateUser, FIRST_USER_ID, UpdateUser, User, UserId};

/// Storage for user records.
///
/// The store owns identifier assignment and timestamps but performs no
/// business validation; uniqueness rules live in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assign the next id, stamp both timestamps and append
    async fn create(&self, input: CreateUser) -> User;

    async fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Merge the supplied fields into an existing record
    async fn update(&self, id: UserId, update: UpdateUser) -> Option<User>;

    /// Remove a record, returning it
    async fn delete(&self, id: UserId) -> Option<User>;

    /// Snapshot of every record in insertion order
    async fn find_all(&self) -> Vec<User>;

    async fn count(&self) -> usize;
}

#[derive(Debug)]
struct State {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: FIRST_USER_ID,
        }
    }
}

impl State {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// Volatile, process-local implementation of [`UserRepository`].
///
/// Clones share the same underlying collection.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the collection and restart ids at 1.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        *state = State::default();
        tracing::debug!("User store reset");
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> User {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let user = User::new(id, input);
        state.users.push(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        user
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        let state = self.state.read().await;
        state.users.iter().find(|u| u.id == id).cloned()
    }

    async fn update(&self, id: UserId, update: UpdateUser) -> Option<User> {
        let mut state = self.state.write().await;

        let index = state.position(id)?;
        let user = &mut state.users[index];
        user.apply_update(update);

        tracing::info!(user_id = %id, "Updated user");
        Some(user.clone())
    }

    async fn delete(&self, id: UserId) -> Option<User> {
        let mut state = self.state.write().await;

        let index = state.position(id)?;
        let removed = state.users.remove(index);

        tracing::info!(user_id = %id, "Deleted user");
        Some(removed)
    }

    async fn find_all(&self) -> Vec<User> {
        self.state.read().await.users.clone()
    }

    async fn count(&self) -> usize {
        self.state.read().await.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            age: Some(Number::from(30)),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(input("A", "a@example.com")).await;
        let second = repo.create(input("B", "b@example.com")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(input("Test User", "test@example.com")).await;

        let fetched = repo.find_by_id(created.id).await;
        assert_eq!(fetched, Some(created));
        assert!(repo.find_by_id(999).await.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(input("A", "a@example.com")).await;
        repo.delete(first.id).await;
        let second = repo.create(input("B", "b@example.com")).await;

        assert_eq!(second.id, 2);
        assert!(repo.find_by_id(first.id).await.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_and_preserves_identity() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(input("A", "a@example.com")).await;

        let updated = repo
            .update(
                created.id,
                UpdateUser {
                    email: Some("new@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "A");
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(repo.find_by_id(created.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_return_none() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.update(7, UpdateUser::default()).await.is_none());
        assert!(repo.delete(7).await.is_none());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("A", "a@example.com")).await;
        repo.create(input("B", "b@example.com")).await;
        repo.create(input("C", "c@example.com")).await;
        repo.delete(2).await;

        let names: Vec<_> = repo.find_all().await.into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_reset_clears_and_restarts_ids() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("A", "a@example.com")).await;
        repo.create(input("B", "b@example.com")).await;

        repo.reset().await;

        assert_eq!(repo.count().await, 0);
        let user = repo.create(input("C", "c@example.com")).await;
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryUserRepository::new();
        let other = repo.clone();

        repo.create(input("A", "a@example.com")).await;

        assert_eq!(other.count().await, 1);
    }
}
