//! Condominium service for managing condominium records.

use crate::entities::{Condominium, CreateCondominiumRequest};
use crate::repositories::CondominiumRepository;
use crate::types::{DirectoryError, DirectoryResult};
use std::sync::Arc;
use tracing::info;

/// Service for managing condominium operations
pub struct CondominiumService {
    repository: Arc<CondominiumRepository>,
}

impl CondominiumService {
    /// Create a new condominium service instance
    pub fn new(repository: Arc<CondominiumRepository>) -> Self {
        Self { repository }
    }

    /// Register a new condominium
    pub async fn register(&self, request: CreateCondominiumRequest) -> DirectoryResult<Condominium> {
        if let Err(e) = request.validate() {
            return Err(DirectoryError::validation(e));
        }

        let condominium = self.repository.create(&request).await?;

        info!(
            condo = %condominium.public_id,
            name = %condominium.name,
            "registered condominium"
        );

        Ok(condominium)
    }

    /// Get a condominium by public id
    pub async fn get(&self, public_id: &str) -> DirectoryResult<Condominium> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| DirectoryError::condominium_not_found(public_id))
    }

    /// List every condominium in registration order
    pub async fn list(&self) -> DirectoryResult<Vec<Condominium>> {
        self.repository.list_all().await
    }
}
