//! Client service for profile lookups.

use std::sync::Arc;

use crate::constants::ERR_CLIENT_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::ClientResponse;
use crate::repositories::ClientRepository;
use crate::validators::parse_object_id;

pub struct ClientService {
    clients: Arc<ClientRepository>,
}

impl ClientService {
    pub fn new(clients: Arc<ClientRepository>) -> Self {
        Self { clients }
    }

    /// Fetch a single client profile by id.
    pub async fn get_client_by_id(&self, id: &str) -> Result<ClientResponse, ApiError> {
        let client_id = parse_object_id(id)?;

        let client = self
            .clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_CLIENT_NOT_FOUND.to_string()))?;

        Ok(client.into())
    }
}
