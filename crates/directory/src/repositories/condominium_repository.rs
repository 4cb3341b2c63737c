//! In-memory repository for condominium records.

use crate::entities::{Condominium, CreateCondominiumRequest};
use crate::types::{DirectoryError, DirectoryResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding every registered condominium.
/// Condominiums are never deleted.
#[derive(Clone)]
pub struct CondominiumRepository {
    condominiums: Arc<RwLock<HashMap<i64, Condominium>>>,
    next_id: Arc<RwLock<i64>>,
}

impl CondominiumRepository {
    pub fn new() -> Self {
        Self {
            condominiums: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn create(&self, request: &CreateCondominiumRequest) -> DirectoryResult<Condominium> {
        let mut next_id = self.next_id.write().await;
        let condo_id = *next_id;
        *next_id += 1;

        let mut condominium = Condominium::new(request);
        condominium.id = condo_id;

        let mut condominiums = self.condominiums.write().await;
        condominiums.insert(condo_id, condominium.clone());

        Ok(condominium)
    }

    pub async fn find_by_public_id(&self, public_id: &str) -> DirectoryResult<Option<Condominium>> {
        let condominiums = self.condominiums.read().await;
        Ok(condominiums
            .values()
            .find(|c| c.public_id == public_id)
            .cloned())
    }

    /// List every condominium in registration order.
    pub async fn list_all(&self) -> DirectoryResult<Vec<Condominium>> {
        let condominiums = self.condominiums.read().await;
        let mut results: Vec<Condominium> = condominiums.values().cloned().collect();
        results.sort_by_key(|c| c.id);
        Ok(results)
    }

    /// The earliest-registered condominium, used as the manager's default scope.
    pub async fn first(&self) -> DirectoryResult<Option<Condominium>> {
        Ok(self.list_all().await?.into_iter().next())
    }

    /// Fail unless the given public id resolves to a condominium.
    pub async fn ensure_exists(&self, public_id: &str) -> DirectoryResult<Condominium> {
        self.find_by_public_id(public_id)
            .await?
            .ok_or_else(|| DirectoryError::condominium_not_found(public_id))
    }
}
