//! # Condoboard Directory Crate
//!
//! This crate provides condominium, resident, and provider management for
//! Condoboard. It contains domain entities, in-memory repositories, and
//! services for the tenant-scoped directory of a condominium dashboard.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (Condominium, Resident, Provider)
//! - **Repositories**: In-memory data access layer
//! - **Services**: Business logic layer
//! - **Types**: Shared types and errors
//! - **Utils**: Internal utilities
//!
//! Every record except the condominium itself is scoped by `condo_id`,
//! and a resident's `condo_id` never changes after creation.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use entities::{
    Condominium, CreateCondominiumRequest, CreateProviderRequest, CreateResidentRequest, Provider,
    Resident, ResidentStatus, ResidentType, UpdateResidentRequest,
};
pub use repositories::{CondominiumRepository, ProviderRepository, ResidentRepository};
pub use services::{CondominiumService, ProviderService, ResidentService};
pub use types::{DirectoryError, DirectoryResult};
