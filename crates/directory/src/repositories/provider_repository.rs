//! In-memory repository for provider records.

use crate::entities::{CreateProviderRequest, Provider};
use crate::types::DirectoryResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding every service provider across all condominiums.
#[derive(Clone)]
pub struct ProviderRepository {
    providers: Arc<RwLock<HashMap<i64, Provider>>>,
    next_id: Arc<RwLock<i64>>,
}

impl ProviderRepository {
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn create(&self, request: &CreateProviderRequest) -> DirectoryResult<Provider> {
        let mut next_id = self.next_id.write().await;
        let provider_id = *next_id;
        *next_id += 1;

        let mut provider = Provider::new(request);
        provider.id = provider_id;

        let mut providers = self.providers.write().await;
        providers.insert(provider_id, provider.clone());

        Ok(provider)
    }

    pub async fn find_by_public_id(&self, public_id: &str) -> DirectoryResult<Option<Provider>> {
        let providers = self.providers.read().await;
        Ok(providers
            .values()
            .find(|p| p.public_id == public_id)
            .cloned())
    }

    pub async fn list_by_condo(&self, condo_id: &str) -> DirectoryResult<Vec<Provider>> {
        let providers = self.providers.read().await;
        let mut results: Vec<Provider> = providers
            .values()
            .filter(|p| p.condo_id == condo_id)
            .cloned()
            .collect();
        results.sort_by_key(|p| p.id);
        Ok(results)
    }

    pub async fn list_active_by_condo(&self, condo_id: &str) -> DirectoryResult<Vec<Provider>> {
        Ok(self
            .list_by_condo(condo_id)
            .await?
            .into_iter()
            .filter(|p| p.active)
            .collect())
    }
}
