//! Provider service for managing contracted service providers.

use crate::entities::{CreateProviderRequest, Provider};
use crate::repositories::{CondominiumRepository, ProviderRepository};
use crate::types::{DirectoryError, DirectoryResult};
use std::sync::Arc;
use tracing::info;

/// Service for managing provider operations
pub struct ProviderService {
    repository: Arc<ProviderRepository>,
    condominiums: Arc<CondominiumRepository>,
}

impl ProviderService {
    /// Create a new provider service instance
    pub fn new(
        repository: Arc<ProviderRepository>,
        condominiums: Arc<CondominiumRepository>,
    ) -> Self {
        Self {
            repository,
            condominiums,
        }
    }

    /// Register a new provider
    pub async fn register(&self, request: CreateProviderRequest) -> DirectoryResult<Provider> {
        if let Err(e) = request.validate() {
            return Err(DirectoryError::validation(e));
        }

        self.condominiums.ensure_exists(&request.condo_id).await?;

        let provider = self.repository.create(&request).await?;

        info!(
            provider = %provider.public_id,
            condo = %provider.condo_id,
            specialty = %provider.specialty,
            "registered provider"
        );

        Ok(provider)
    }

    /// Get a provider by public id
    pub async fn get(&self, public_id: &str) -> DirectoryResult<Provider> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| DirectoryError::provider_not_found(public_id))
    }

    /// List active providers of a condominium
    pub async fn list_active(&self, condo_id: &str) -> DirectoryResult<Vec<Provider>> {
        self.repository.list_active_by_condo(condo_id).await
    }
}
