use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a resident of a condominium
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resident {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Public id of the condominium this resident belongs to.
    /// Immutable after creation.
    pub condo_id: String,
    /// Full name
    pub name: String,
    /// Brazilian taxpayer number (optional)
    pub cpf: Option<String>,
    /// Building block
    pub block: String,
    /// Unit number
    pub unit: String,
    /// Contact phone
    pub phone: String,
    /// Contact email, unique across the store
    pub email: String,
    /// Relationship to the unit
    pub resident_type: ResidentType,
    /// Approval lifecycle status
    pub status: ResidentStatus,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Resident relationship to the unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResidentType {
    Owner,
    Tenant,
    Resident,
}

/// Resident approval lifecycle.
/// `pending --approve--> active`; `pending --reject--> removed` (terminal).
/// `active` has no further transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    Pending,
    Active,
}

impl From<&str> for ResidentType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "owner" => ResidentType::Owner,
            "tenant" => ResidentType::Tenant,
            _ => ResidentType::Resident,
        }
    }
}

impl From<ResidentType> for String {
    fn from(resident_type: ResidentType) -> Self {
        match resident_type {
            ResidentType::Owner => "owner".to_string(),
            ResidentType::Tenant => "tenant".to_string(),
            ResidentType::Resident => "resident".to_string(),
        }
    }
}

impl From<&str> for ResidentStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => ResidentStatus::Active,
            _ => ResidentStatus::Pending,
        }
    }
}

impl From<ResidentStatus> for String {
    fn from(status: ResidentStatus) -> Self {
        match status {
            ResidentStatus::Pending => "pending".to_string(),
            ResidentStatus::Active => "active".to_string(),
        }
    }
}

/// Request to register a new resident
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResidentRequest {
    /// Public id of the condominium
    pub condo_id: String,
    /// Full name
    pub name: String,
    /// Taxpayer number (optional)
    pub cpf: Option<String>,
    /// Building block
    pub block: String,
    /// Unit number
    pub unit: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Relationship to the unit
    pub resident_type: ResidentType,
    /// Initial status (defaults to Pending)
    pub status: Option<ResidentStatus>,
}

/// Request to update a resident. Only supplied fields are merged;
/// `condo_id` and `status` are never updated through this path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResidentRequest {
    /// New full name (optional)
    pub name: Option<String>,
    /// New taxpayer number (optional)
    pub cpf: Option<String>,
    /// New building block (optional)
    pub block: Option<String>,
    /// New unit number (optional)
    pub unit: Option<String>,
    /// New contact phone (optional)
    pub phone: Option<String>,
    /// New contact email (optional)
    pub email: Option<String>,
    /// New relationship to the unit (optional)
    pub resident_type: Option<ResidentType>,
}

impl Resident {
    /// Create a new resident instance
    pub fn new(request: &CreateResidentRequest) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            condo_id: request.condo_id.clone(),
            name: request.name.clone(),
            cpf: request.cpf.clone(),
            block: request.block.clone(),
            unit: request.unit.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            resident_type: request.resident_type,
            status: request.status.unwrap_or(ResidentStatus::Pending),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if the resident is awaiting approval
    pub fn is_pending(&self) -> bool {
        matches!(self.status, ResidentStatus::Pending)
    }

    /// Check if the resident has been approved
    pub fn is_active(&self) -> bool {
        matches!(self.status, ResidentStatus::Active)
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate resident data
    pub fn validate(&self) -> Result<(), String> {
        crate::utils::validation::required("Name", &self.name)?;
        crate::utils::validation::email(&self.email)?;
        crate::utils::validation::required("Unit", &self.unit)?;

        if self.condo_id.trim().is_empty() {
            return Err("Resident must belong to a condominium".to_string());
        }

        Ok(())
    }
}

impl CreateResidentRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.condo_id.trim().is_empty() {
            return Err("Resident must belong to a condominium".to_string());
        }

        crate::utils::validation::required("Name", &self.name)?;
        crate::utils::validation::max_len("Name", &self.name, 100)?;
        crate::utils::validation::email(&self.email)?;
        crate::utils::validation::required("Unit", &self.unit)?;
        crate::utils::validation::required("Phone", &self.phone)?;

        Ok(())
    }
}

impl UpdateResidentRequest {
    /// Validate the update request
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.name {
            crate::utils::validation::required("Name", name)?;
            crate::utils::validation::max_len("Name", name, 100)?;
        }

        if let Some(ref email) = self.email {
            crate::utils::validation::email(email)?;
        }

        if let Some(ref unit) = self.unit {
            crate::utils::validation::required("Unit", unit)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateResidentRequest {
        CreateResidentRequest {
            condo_id: "condo-1".to_string(),
            name: "Ana Paula".to_string(),
            cpf: Some("123.456.789-00".to_string()),
            block: "A".to_string(),
            unit: "101".to_string(),
            phone: "(11) 99999-1111".to_string(),
            email: "ana@email.com".to_string(),
            resident_type: ResidentType::Owner,
            status: None,
        }
    }

    #[test]
    fn test_resident_creation_defaults_to_pending() {
        let resident = Resident::new(&request());

        assert_eq!(resident.name, "Ana Paula");
        assert_eq!(resident.condo_id, "condo-1");
        assert_eq!(resident.status, ResidentStatus::Pending);
        assert!(resident.is_pending());
        assert!(!resident.is_active());
    }

    #[test]
    fn test_resident_creation_with_explicit_status() {
        let mut req = request();
        req.status = Some(ResidentStatus::Active);
        let resident = Resident::new(&req);

        assert!(resident.is_active());
    }

    #[test]
    fn test_resident_type_conversion() {
        assert_eq!(ResidentType::from("owner"), ResidentType::Owner);
        assert_eq!(ResidentType::from("tenant"), ResidentType::Tenant);
        assert_eq!(ResidentType::from("resident"), ResidentType::Resident);
        assert_eq!(ResidentType::from("unknown"), ResidentType::Resident);

        assert_eq!(String::from(ResidentType::Owner), "owner");
        assert_eq!(String::from(ResidentType::Tenant), "tenant");
        assert_eq!(String::from(ResidentType::Resident), "resident");
    }

    #[test]
    fn test_resident_status_conversion() {
        assert_eq!(ResidentStatus::from("active"), ResidentStatus::Active);
        assert_eq!(ResidentStatus::from("pending"), ResidentStatus::Pending);
        assert_eq!(ResidentStatus::from("unknown"), ResidentStatus::Pending);

        assert_eq!(String::from(ResidentStatus::Active), "active");
        assert_eq!(String::from(ResidentStatus::Pending), "pending");
    }

    #[test]
    fn test_create_request_validation() {
        assert!(request().validate().is_ok());

        let mut invalid_email = request();
        invalid_email.email = "not-an-email".to_string();
        assert!(invalid_email.validate().is_err());

        let mut missing_condo = request();
        missing_condo.condo_id = "".to_string();
        assert!(missing_condo.validate().is_err());

        let mut missing_unit = request();
        missing_unit.unit = " ".to_string();
        assert!(missing_unit.validate().is_err());
    }

    #[test]
    fn test_update_request_validation() {
        let valid = UpdateResidentRequest {
            phone: Some("(11) 98888-0000".to_string()),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let invalid = UpdateResidentRequest {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(invalid.validate().is_err());
    }
}
