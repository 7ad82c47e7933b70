//! # User Repository
//!
//! Minimal access to the users that own templates.

use crate::error::RepositoryError;
use crate::models::user::{ActiveModel as UserActiveModel, Entity as User, Model as UserModel};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

/// Request data for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Repository for User database operations
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserModel, RepositoryError> {
        if request.name.trim().is_empty() {
            return Err(RepositoryError::validation_error("User name cannot be empty"));
        }
        if !request.email.contains('@') {
            return Err(RepositoryError::validation_error(
                "User email must contain '@'",
            ));
        }

        let user = UserActiveModel {
            id: NotSet,
            name: Set(request.name),
            email: Set(request.email),
            created_at: Set(Utc::now().into()),
        };

        user.insert(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        User::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
