use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserId};
use crate::repository::UserRepository;

/// Business rules for users: required fields, email uniqueness and
/// existence checks.
///
/// Mutating operations run under a single lock so that "check uniqueness,
/// then write" cannot interleave across requests.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a user with a unique email
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        if input.name.is_empty() || input.email.is_empty() {
            return Err(UserError::missing_required_fields());
        }

        let _guard = self.write_lock.lock().await;

        if self.email_taken(&input.email, None).await {
            tracing::debug!(email = %input.email, "Rejected duplicate email");
            return Err(UserError::duplicate_email());
        }

        Ok(self.repository.create(input).await)
    }

    /// All users in insertion order
    pub async fn get_all_users(&self) -> Vec<User> {
        self.repository.find_all().await
    }

    pub async fn get_user(&self, id: UserId) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(UserError::not_found)
    }

    /// Merge `input` into an existing user.
    ///
    /// Keeping the current email is always allowed; changing it to one held
    /// by another user is a conflict.
    pub async fn update_user(&self, id: UserId, input: UpdateUser) -> UserResult<User> {
        let _guard = self.write_lock.lock().await;

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .ok_or_else(UserError::not_found)?;

        if let Some(email) = input.email.as_deref() {
            if email != existing.email && self.email_taken(email, Some(id)).await {
                tracing::debug!(user_id = %id, email = %email, "Rejected duplicate email");
                return Err(UserError::duplicate_email());
            }
        }

        self.repository
            .update(id, input)
            .await
            .ok_or_else(UserError::not_found)
    }

    /// Remove a user, returning the deleted record
    pub async fn delete_user(&self, id: UserId) -> UserResult<User> {
        let _guard = self.write_lock.lock().await;

        if self.repository.find_by_id(id).await.is_none() {
            return Err(UserError::not_found());
        }

        self.repository
            .delete(id)
            .await
            .ok_or_else(UserError::not_found)
    }

    async fn email_taken(&self, email: &str, exclude: Option<UserId>) -> bool {
        self.repository
            .find_all()
            .await
            .iter()
            .any(|u| Some(u.id) != exclude && u.email == email)
    }
}
