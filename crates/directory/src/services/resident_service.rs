//! Resident service for managing the resident lifecycle.

use crate::entities::{CreateResidentRequest, Resident, ResidentStatus, UpdateResidentRequest};
use crate::repositories::{CondominiumRepository, ResidentRepository};
use crate::types::{DirectoryError, DirectoryResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Service for managing resident operations.
///
/// Residents enter the store as `pending` and either become `active`
/// (approval) or are removed (rejection). No other removal path exists.
pub struct ResidentService {
    repository: Arc<ResidentRepository>,
    condominiums: Arc<CondominiumRepository>,
}

impl ResidentService {
    /// Create a new resident service instance
    pub fn new(
        repository: Arc<ResidentRepository>,
        condominiums: Arc<CondominiumRepository>,
    ) -> Self {
        Self {
            repository,
            condominiums,
        }
    }

    /// Register a new resident
    pub async fn register(&self, request: CreateResidentRequest) -> DirectoryResult<Resident> {
        if let Err(e) = request.validate() {
            return Err(DirectoryError::validation(e));
        }

        self.condominiums.ensure_exists(&request.condo_id).await?;

        if self.repository.email_exists(&request.email).await? {
            return Err(DirectoryError::email_already_exists(&request.email));
        }

        let resident = self.repository.create(&request).await?;

        info!(
            resident = %resident.public_id,
            condo = %resident.condo_id,
            status = %String::from(resident.status),
            "registered resident"
        );

        Ok(resident)
    }

    /// Get a resident by public id
    pub async fn get(&self, public_id: &str) -> DirectoryResult<Resident> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| DirectoryError::resident_not_found(public_id))
    }

    /// Find a resident by email
    pub async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<Resident>> {
        self.repository.find_by_email(email).await
    }

    /// Approve a pending resident
    pub async fn approve(&self, public_id: &str) -> DirectoryResult<Resident> {
        let resident = self.get(public_id).await?;

        if !resident.is_pending() {
            warn!(resident = %public_id, "attempted to approve a non-pending resident");
            return Err(DirectoryError::invalid_transition(
                public_id,
                String::from(resident.status),
            ));
        }

        let approved = self
            .repository
            .set_status(public_id, ResidentStatus::Active)
            .await?;

        info!(resident = %public_id, condo = %approved.condo_id, "approved resident");
        Ok(approved)
    }

    /// Reject a pending resident, removing the record entirely
    pub async fn reject(&self, public_id: &str) -> DirectoryResult<()> {
        let resident = self.get(public_id).await?;

        if !resident.is_pending() {
            warn!(resident = %public_id, "attempted to reject a non-pending resident");
            return Err(DirectoryError::invalid_transition(
                public_id,
                String::from(resident.status),
            ));
        }

        self.repository.remove(public_id).await?;

        info!(resident = %public_id, condo = %resident.condo_id, "rejected resident");
        Ok(())
    }

    /// Update a resident's profile fields
    pub async fn update_profile(
        &self,
        public_id: &str,
        request: UpdateResidentRequest,
    ) -> DirectoryResult<Resident> {
        if let Err(e) = request.validate() {
            return Err(DirectoryError::validation(e));
        }

        let existing = self.get(public_id).await?;

        if let Some(ref email) = request.email {
            if email != &existing.email && self.repository.email_exists(email).await? {
                return Err(DirectoryError::email_already_exists(email));
            }
        }

        let updated = self.repository.update(public_id, &request).await?;

        info!(resident = %public_id, "updated resident profile");
        Ok(updated)
    }

    /// List approved residents of a condominium
    pub async fn list_active(&self, condo_id: &str) -> DirectoryResult<Vec<Resident>> {
        self.repository.list_active_by_condo(condo_id).await
    }

    /// List residents of a condominium awaiting approval
    pub async fn list_pending(&self, condo_id: &str) -> DirectoryResult<Vec<Resident>> {
        self.repository.list_pending_by_condo(condo_id).await
    }

    /// Count residents of a condominium awaiting approval
    pub async fn count_pending(&self, condo_id: &str) -> DirectoryResult<usize> {
        self.repository.count_pending_by_condo(condo_id).await
    }
}
