//! Business logic services for the condominium directory.
//!
//! Services validate input, enforce the resident lifecycle, and
//! coordinate with the repositories.

pub mod condominium_service;
pub mod provider_service;
pub mod resident_service;

// Re-export all services
pub use condominium_service::CondominiumService;
pub use provider_service::ProviderService;
pub use resident_service::ResidentService;
