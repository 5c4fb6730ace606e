//! Post-creation provisioning of client profiles.
//!
//! The account service does not know about clients. It emits a [`UserSaved`]
//! event to an injected [`ProvisioningHook`] after every successful user
//! insert, and the hook decides what to provision. Wiring happens explicitly
//! in `main`, not through a global event registry.

use async_trait::async_trait;
use log::info;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::constants::ERR_CLIENT_EXISTS;
use crate::errors::ApiError;
use crate::models::Client;
use crate::repositories::ClientRepository;

/// Event describing a saved user document.
#[derive(Debug, Clone)]
pub struct UserSaved {
    pub user_id: ObjectId,
    pub username: String,
    /// True for a fresh insert, false for an update to an existing record.
    pub created: bool,
}

/// Collaborator invoked synchronously after a user document is saved.
///
/// A hook failure is fatal to the request that saved the user; the caller
/// owns any compensation.
#[async_trait]
pub trait ProvisioningHook: Send + Sync {
    async fn on_user_saved(&self, event: &UserSaved) -> Result<(), ApiError>;
}

/// Storage seam the provisioner writes through.
///
/// The production implementation is [`ClientRepository`]; tests substitute an
/// in-memory store.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn insert_client(&self, client: &Client) -> Result<ObjectId, ApiError>;
}

#[async_trait]
impl ClientStore for ClientRepository {
    async fn insert_client(&self, client: &Client) -> Result<ObjectId, ApiError> {
        self.insert(client).await
    }
}

/// Decide whether an event provisions a client, and build it if so.
///
/// Only fresh creations provision; the client's name defaults to the
/// username and the pairing references the new user.
pub fn client_from_event(event: &UserSaved) -> Option<Client> {
    if !event.created {
        return None;
    }
    Some(Client {
        id: None,
        name: event.username.clone(),
        user_id: event.user_id,
    })
}

/// The production hook: inserts one client profile per created user.
pub struct ClientProvisioner {
    clients: Arc<dyn ClientStore>,
}

impl ClientProvisioner {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl ProvisioningHook for ClientProvisioner {
    async fn on_user_saved(&self, event: &UserSaved) -> Result<(), ApiError> {
        let Some(client) = client_from_event(event) else {
            return Ok(());
        };

        // The unique user_id index turns a duplicate event into an error
        // rather than a second profile.
        let client_id = self
            .clients
            .insert_client(&client)
            .await
            .map_err(|err| match err {
                ApiError::IntegrityError(_) => {
                    ApiError::IntegrityError(ERR_CLIENT_EXISTS.to_string())
                }
                other => other,
            })?;

        info!(
            "Provisioned client {} for user {}",
            client_id, event.user_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn updates_provision_nothing() {
        let event = UserSaved {
            user_id: ObjectId::new(),
            username: "alice".to_string(),
            created: false,
        };
        assert!(client_from_event(&event).is_none());
    }

    #[test]
    fn creations_provision_one_client_named_after_the_user() {
        let user_id = ObjectId::new();
        let event = UserSaved {
            user_id,
            username: "alice".to_string(),
            created: true,
        };

        let client = client_from_event(&event).unwrap();
        assert_eq!(client.name, "alice");
        assert_eq!(client.user_id, user_id);
        assert!(client.id.is_none());
    }

    /// In-memory store enforcing the same one-client-per-user constraint the
    /// unique index provides in production.
    struct InMemoryClientStore {
        clients: Mutex<Vec<Client>>,
    }

    impl InMemoryClientStore {
        fn new() -> Self {
            Self {
                clients: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ClientStore for InMemoryClientStore {
        async fn insert_client(&self, client: &Client) -> Result<ObjectId, ApiError> {
            let mut clients = self.clients.lock().unwrap();
            if clients.iter().any(|c| c.user_id == client.user_id) {
                return Err(ApiError::IntegrityError("E11000 duplicate key".to_string()));
            }
            let id = ObjectId::new();
            clients.push(Client {
                id: Some(id),
                ..client.clone()
            });
            Ok(id)
        }
    }

    #[tokio::test]
    async fn created_event_inserts_exactly_one_client() {
        let store = Arc::new(InMemoryClientStore::new());
        let hook = ClientProvisioner::new(Arc::clone(&store) as Arc<dyn ClientStore>);

        let user_id = ObjectId::new();
        let event = UserSaved {
            user_id,
            username: "alice".to_string(),
            created: true,
        };
        hook.on_user_saved(&event).await.unwrap();

        let clients = store.clients.lock().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "alice");
        assert_eq!(clients[0].user_id, user_id);
    }

    #[tokio::test]
    async fn update_event_inserts_nothing() {
        let store = Arc::new(InMemoryClientStore::new());
        let hook = ClientProvisioner::new(Arc::clone(&store) as Arc<dyn ClientStore>);

        let event = UserSaved {
            user_id: ObjectId::new(),
            username: "alice".to_string(),
            created: false,
        };
        hook.on_user_saved(&event).await.unwrap();

        assert!(store.clients.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_event_reports_the_existing_pairing() {
        let store = Arc::new(InMemoryClientStore::new());
        let hook = ClientProvisioner::new(Arc::clone(&store) as Arc<dyn ClientStore>);

        let event = UserSaved {
            user_id: ObjectId::new(),
            username: "alice".to_string(),
            created: true,
        };
        hook.on_user_saved(&event).await.unwrap();

        let err = hook.on_user_saved(&event).await.unwrap_err();
        match err {
            ApiError::IntegrityError(message) => assert_eq!(message, ERR_CLIENT_EXISTS),
            other => panic!("expected IntegrityError, got {}", other),
        }
        assert_eq!(store.clients.lock().unwrap().len(), 1);
    }
}
