use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a service provider contracted by a condominium
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Public id of the condominium this provider serves
    pub condo_id: String,
    /// Contact name
    pub name: String,
    /// Trade, e.g. electrician or plumber
    pub specialty: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Company name
    pub company: String,
    /// Whether the provider is currently contracted
    pub active: bool,
    /// Creation timestamp
    pub created_at: String,
}

/// Request to register a new provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProviderRequest {
    /// Public id of the condominium
    pub condo_id: String,
    /// Contact name
    pub name: String,
    /// Trade
    pub specialty: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Company name
    pub company: String,
}

impl Provider {
    /// Create a new provider instance
    pub fn new(request: &CreateProviderRequest) -> Self {
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            condo_id: request.condo_id.clone(),
            name: request.name.clone(),
            specialty: request.specialty.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            company: request.company.clone(),
            active: true,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl CreateProviderRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.condo_id.trim().is_empty() {
            return Err("Provider must belong to a condominium".to_string());
        }

        crate::utils::validation::required("Name", &self.name)?;
        crate::utils::validation::required("Specialty", &self.specialty)?;
        crate::utils::validation::email(&self.email)?;

        Ok(())
    }
}
