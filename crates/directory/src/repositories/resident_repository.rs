//! In-memory repository for resident records.

use crate::entities::{CreateResidentRequest, Resident, ResidentStatus, UpdateResidentRequest};
use crate::types::{DirectoryError, DirectoryResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding every resident across all condominiums, with an
/// email index for login lookups. Residents are only ever removed when a
/// pending registration is rejected.
#[derive(Clone)]
pub struct ResidentRepository {
    residents: Arc<RwLock<HashMap<i64, Resident>>>,
    next_id: Arc<RwLock<i64>>,
    email_index: Arc<RwLock<HashMap<String, i64>>>,
}

impl ResidentRepository {
    pub fn new() -> Self {
        Self {
            residents: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            email_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn create(&self, request: &CreateResidentRequest) -> DirectoryResult<Resident> {
        let mut next_id = self.next_id.write().await;
        let resident_id = *next_id;
        *next_id += 1;

        let mut resident = Resident::new(request);
        resident.id = resident_id;

        let mut residents = self.residents.write().await;
        residents.insert(resident_id, resident.clone());

        let mut email_index = self.email_index.write().await;
        email_index.insert(request.email.clone(), resident_id);

        Ok(resident)
    }

    pub async fn find_by_public_id(&self, public_id: &str) -> DirectoryResult<Option<Resident>> {
        let residents = self.residents.read().await;
        Ok(residents
            .values()
            .find(|r| r.public_id == public_id)
            .cloned())
    }

    pub async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<Resident>> {
        let email_index = self.email_index.read().await;
        if let Some(resident_id) = email_index.get(email) {
            let residents = self.residents.read().await;
            Ok(residents.get(resident_id).cloned())
        } else {
            Ok(None)
        }
    }

    pub async fn email_exists(&self, email: &str) -> DirectoryResult<bool> {
        let email_index = self.email_index.read().await;
        Ok(email_index.contains_key(email))
    }

    /// Merge the supplied fields into an existing resident.
    /// `condo_id` and `status` are never touched here.
    pub async fn update(
        &self,
        public_id: &str,
        request: &UpdateResidentRequest,
    ) -> DirectoryResult<Resident> {
        let mut residents = self.residents.write().await;
        let resident = residents
            .values_mut()
            .find(|r| r.public_id == public_id)
            .ok_or_else(|| DirectoryError::resident_not_found(public_id))?;

        // Update email and index if changed
        if let Some(ref email) = request.email {
            if &resident.email != email {
                let mut email_index = self.email_index.write().await;
                email_index.remove(&resident.email);
                email_index.insert(email.clone(), resident.id);
                resident.email = email.clone();
            }
        }

        if let Some(ref name) = request.name {
            resident.name = name.clone();
        }
        if let Some(ref cpf) = request.cpf {
            resident.cpf = Some(cpf.clone());
        }
        if let Some(ref block) = request.block {
            resident.block = block.clone();
        }
        if let Some(ref unit) = request.unit {
            resident.unit = unit.clone();
        }
        if let Some(ref phone) = request.phone {
            resident.phone = phone.clone();
        }
        if let Some(resident_type) = request.resident_type {
            resident.resident_type = resident_type;
        }

        resident.touch();
        Ok(resident.clone())
    }

    pub async fn set_status(
        &self,
        public_id: &str,
        status: ResidentStatus,
    ) -> DirectoryResult<Resident> {
        let mut residents = self.residents.write().await;
        let resident = residents
            .values_mut()
            .find(|r| r.public_id == public_id)
            .ok_or_else(|| DirectoryError::resident_not_found(public_id))?;

        resident.status = status;
        resident.touch();
        Ok(resident.clone())
    }

    /// Remove a resident from the store. Only used when rejecting a
    /// pending registration.
    pub async fn remove(&self, public_id: &str) -> DirectoryResult<Resident> {
        let mut residents = self.residents.write().await;
        let resident_id = residents
            .values()
            .find(|r| r.public_id == public_id)
            .map(|r| r.id)
            .ok_or_else(|| DirectoryError::resident_not_found(public_id))?;

        let resident = residents
            .remove(&resident_id)
            .ok_or_else(|| DirectoryError::resident_not_found(public_id))?;

        let mut email_index = self.email_index.write().await;
        email_index.remove(&resident.email);

        Ok(resident)
    }

    pub async fn list_by_condo(&self, condo_id: &str) -> DirectoryResult<Vec<Resident>> {
        let residents = self.residents.read().await;
        let mut results: Vec<Resident> = residents
            .values()
            .filter(|r| r.condo_id == condo_id)
            .cloned()
            .collect();
        results.sort_by_key(|r| r.id);
        Ok(results)
    }

    pub async fn list_active_by_condo(&self, condo_id: &str) -> DirectoryResult<Vec<Resident>> {
        Ok(self
            .list_by_condo(condo_id)
            .await?
            .into_iter()
            .filter(|r| r.is_active())
            .collect())
    }

    pub async fn list_pending_by_condo(&self, condo_id: &str) -> DirectoryResult<Vec<Resident>> {
        Ok(self
            .list_by_condo(condo_id)
            .await?
            .into_iter()
            .filter(|r| r.is_pending())
            .collect())
    }

    pub async fn count_pending_by_condo(&self, condo_id: &str) -> DirectoryResult<usize> {
        Ok(self.list_pending_by_condo(condo_id).await?.len())
    }

    pub async fn count_all(&self) -> DirectoryResult<usize> {
        let residents = self.residents.read().await;
        Ok(residents.len())
    }
}
