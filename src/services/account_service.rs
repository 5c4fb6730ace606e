//! Account service for registration and account deletion.

use log::{debug, info, warn};
use std::sync::Arc;

use bcrypt::{hash, DEFAULT_COST};

use crate::constants::{ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{RegisterRequest, User, UserResponse};
use crate::repositories::{ClientRepository, UserRepository};
use crate::services::provisioning::{ProvisioningHook, UserSaved};
use crate::utils::mask_username;
use crate::validators::parse_object_id;

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

pub struct AccountService {
    users: Arc<UserRepository>,
    clients: Arc<ClientRepository>,
    hook: Arc<dyn ProvisioningHook>,
}

impl AccountService {
    /// Create an AccountService with its post-creation hook injected.
    pub fn new(
        users: Arc<UserRepository>,
        clients: Arc<ClientRepository>,
        hook: Arc<dyn ProvisioningHook>,
    ) -> Self {
        Self {
            users,
            clients,
            hook,
        }
    }

    /// Register a new account and provision its client profile.
    ///
    /// The hook runs synchronously inside this request. Mongo gives us no
    /// multi-document transaction on a standalone deployment, so a hook
    /// failure triggers explicit compensation: the just-inserted user is
    /// removed before the error propagates. Afterwards either both User and
    /// Client exist, or neither does.
    pub async fn register(&self, req: RegisterRequest) -> Result<UserResponse, ApiError> {
        info!("Registering user {}", mask_username(&req.username));

        if self.users.find_by_username(&req.username).await?.is_some() {
            return Err(ApiError::ValidationError(vec![
                ERR_USERNAME_EXISTS.to_string()
            ]));
        }

        let password_hash = hash_password(&req.password)?;
        let user = User {
            id: None,
            username: req.username,
            password_hash,
            created_at: mongodb::bson::DateTime::now(),
        };

        // A concurrent registration can still win the race between the check
        // above and this insert; the unique index settles it.
        let user_id = self.users.insert(&user).await.map_err(|err| match err {
            ApiError::IntegrityError(_) => {
                ApiError::ValidationError(vec![ERR_USERNAME_EXISTS.to_string()])
            }
            other => other,
        })?;

        let event = UserSaved {
            user_id,
            username: user.username.clone(),
            created: true,
        };

        if let Err(err) = self.hook.on_user_saved(&event).await {
            warn!(
                "Provisioning failed for user {}, rolling back registration: {}",
                user_id, err
            );
            self.users.delete(user_id).await?;
            return Err(err);
        }

        Ok(UserResponse::from(User {
            id: Some(user_id),
            ..user
        }))
    }

    /// Delete an account and cascade to its client profile.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let user_id = parse_object_id(id)?;

        if !self.users.delete(user_id).await? {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }

        let removed = self.clients.delete_by_user_id(user_id).await?;
        debug!(
            "Cascade removed {} client profile(s) for user {}",
            removed, user_id
        );
        Ok(())
    }
}
