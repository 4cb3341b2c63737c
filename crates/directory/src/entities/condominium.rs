use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a managed condominium, the top-level scoping entity.
/// Every other operational record belongs to exactly one condominium.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condominium {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Brazilian company registration number (optional)
    pub cnpj: Option<String>,
    /// Total number of units in the building
    pub units_total: u32,
    /// Name of the acting manager
    pub manager_name: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Request to register a new condominium
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCondominiumRequest {
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Company registration number (optional)
    pub cnpj: Option<String>,
    /// Total number of units
    pub units_total: u32,
    /// Name of the acting manager
    pub manager_name: String,
}

impl Condominium {
    /// Create a new condominium instance
    pub fn new(request: &CreateCondominiumRequest) -> Self {
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            address: request.address.clone(),
            cnpj: request.cnpj.clone(),
            units_total: request.units_total,
            manager_name: request.manager_name.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl CreateCondominiumRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Condominium name cannot be empty".to_string());
        }

        if self.name.len() > 255 {
            return Err("Condominium name too long (max 255 characters)".to_string());
        }

        if self.address.trim().is_empty() {
            return Err("Address cannot be empty".to_string());
        }

        if self.units_total == 0 {
            return Err("Condominium must have at least one unit".to_string());
        }

        if self.manager_name.trim().is_empty() {
            return Err("Manager name cannot be empty".to_string());
        }

        Ok(())
    }
}
