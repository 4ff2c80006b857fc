//! User registration service
//!
//! Keeps accounts in memory. Usernames and emails are reserved before the
//! (slow) password hash is computed, and released again if hashing fails.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::Serialize;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::form::FormInputs;

/// User service error types
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("User already exists")]
    AlreadyExists,

    #[error("Signups are currently closed")]
    SignupsClosed,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Public user record returned after signup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    #[serde(rename = "profilePic")]
    pub profile_pic: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Stored account, including the password hash
#[derive(Debug, Clone)]
struct StoredUser {
    id: Uuid,
    name: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<&StoredUser> for UserResponse {
    fn from(user: &StoredUser) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            bio: String::new(),
            profile_pic: String::new(),
            created_at: user.created_at,
        }
    }
}

/// In-memory user registry
#[derive(Clone)]
pub struct UserService {
    users: Arc<DashMap<Uuid, StoredUser>>,
    usernames: Arc<DashMap<String, Uuid>>,
    emails: Arc<DashMap<String, Uuid>>,
    bcrypt_cost: u32,
    signups_enabled: bool,
}

impl UserService {
    pub fn new(bcrypt_cost: u32, signups_enabled: bool) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            usernames: Arc::new(DashMap::new()),
            emails: Arc::new(DashMap::new()),
            bcrypt_cost,
            signups_enabled,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bcrypt_cost(), config.signups_enabled)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn find_by_username(&self, username: &str) -> Option<UserResponse> {
        let id = *self.usernames.get(username)?;
        self.users.get(&id).map(|user| UserResponse::from(user.value()))
    }

    /// Register a new account from the signup form fields
    pub async fn signup(&self, request: FormInputs) -> Result<UserResponse, UserError> {
        if !self.signups_enabled {
            return Err(UserError::SignupsClosed);
        }
        if !request.is_complete() {
            return Err(UserError::MissingFields);
        }

        let username = request.username.trim().to_string();
        let email = request.email.trim().to_ascii_lowercase();
        let id = Uuid::new_v4();

        match self.usernames.entry(username.clone()) {
            Entry::Occupied(_) => return Err(UserError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        match self.emails.entry(email.clone()) {
            Entry::Occupied(_) => {
                self.usernames.remove(&username);
                return Err(UserError::AlreadyExists);
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let password_hash = match self.hash_password(request.password).await {
            Ok(hash) => hash,
            Err(e) => {
                self.usernames.remove(&username);
                self.emails.remove(&email);
                return Err(e);
            }
        };

        let user = StoredUser {
            id,
            name: request.name.trim().to_string(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        };
        let response = UserResponse::from(&user);
        self.users.insert(id, user);

        Ok(response)
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| UserError::InternalError(e.to_string()))?
            .map_err(|e| UserError::InternalError(e.to_string()))
    }
}
