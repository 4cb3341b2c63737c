//! Session state and scope resolution.

use std::sync::Arc;

use condoboard_directory::{Condominium, CondominiumRepository, Resident, ResidentRepository};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::{SessionError, SessionResult};
use crate::permissions::{self, Action};

/// Viewer role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Resident,
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "manager" => Role::Manager,
            _ => Role::Resident,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Manager => "manager".to_string(),
            Role::Resident => "resident".to_string(),
        }
    }
}

/// An authenticated viewer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Viewer role
    pub role: Role,
    /// Public id of the resident record, when the viewer is a resident
    pub resident_id: Option<String>,
}

impl Session {
    /// Check if the session belongs to the manager
    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager)
    }
}

#[derive(Default)]
struct SessionState {
    session: Option<Session>,
    current_condo_id: Option<String>,
}

/// Resolves the active condominium and viewer identity.
///
/// Login as a resident locks the active condominium to that resident's
/// home condominium; the manager may switch between condominiums at will.
/// The selected condominium survives logout, so the next manager login
/// lands on the same scope.
#[derive(Clone)]
pub struct SessionManager {
    condominiums: Arc<CondominiumRepository>,
    residents: Arc<ResidentRepository>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionManager {
    /// Create a new session manager over the directory repositories
    pub fn new(
        condominiums: Arc<CondominiumRepository>,
        residents: Arc<ResidentRepository>,
    ) -> Self {
        Self {
            condominiums,
            residents,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Start a manager session. Defaults the active condominium to the
    /// first registered one if none is selected yet.
    pub async fn login_manager(&self) -> SessionResult<Session> {
        let default_condo = self.condominiums.first().await?;

        let mut state = self.state.write().await;
        if state.current_condo_id.is_none() {
            state.current_condo_id = default_condo.map(|c| c.public_id);
        }

        let session = Session {
            role: Role::Manager,
            resident_id: None,
        };
        state.session = Some(session.clone());

        info!(condo = ?state.current_condo_id, "manager logged in");
        Ok(session)
    }

    /// Start a resident session from a login email.
    ///
    /// The lookup happens before any state is touched: an unknown email or
    /// a still-pending resident leaves the resolver exactly as it was.
    pub async fn login_resident(&self, email: &str) -> SessionResult<Session> {
        let resident = self
            .residents
            .find_by_email(email)
            .await?
            .ok_or_else(|| SessionError::unknown_email(email))?;

        if resident.is_pending() {
            return Err(SessionError::approval_pending(&resident.public_id));
        }

        let mut state = self.state.write().await;
        state.current_condo_id = Some(resident.condo_id.clone());

        let session = Session {
            role: Role::Resident,
            resident_id: Some(resident.public_id.clone()),
        };
        state.session = Some(session.clone());

        info!(resident = %resident.public_id, condo = %resident.condo_id, "resident logged in");
        Ok(session)
    }

    /// End the current session. The selected condominium persists.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        state.session = None;
        info!("session ended");
    }

    /// The current session, if any
    pub async fn current(&self) -> Option<Session> {
        let state = self.state.read().await;
        state.session.clone()
    }

    /// The current session, or an error when unauthenticated
    pub async fn require_session(&self) -> SessionResult<Session> {
        self.current().await.ok_or(SessionError::NotAuthenticated)
    }

    /// The active condominium id, if one is selected
    pub async fn active_condo_id(&self) -> Option<String> {
        let state = self.state.read().await;
        state.current_condo_id.clone()
    }

    /// The current session together with the active condominium id.
    /// Every scoped query goes through this.
    pub async fn scope(&self) -> SessionResult<(Session, String)> {
        let state = self.state.read().await;
        let session = state
            .session
            .clone()
            .ok_or(SessionError::NotAuthenticated)?;
        let condo_id = state
            .current_condo_id
            .clone()
            .ok_or(SessionError::NoActiveCondominium)?;
        Ok((session, condo_id))
    }

    /// Switch the active condominium. Manager only; the target must exist.
    pub async fn switch_condominium(&self, public_id: &str) -> SessionResult<Condominium> {
        let session = self.require_session().await?;
        permissions::ensure(session.role, Action::SwitchCondominium)?;

        let condominium = self.condominiums.ensure_exists(public_id).await?;

        let mut state = self.state.write().await;
        state.current_condo_id = Some(condominium.public_id.clone());

        info!(condo = %condominium.public_id, "switched active condominium");
        Ok(condominium)
    }

    /// Make a newly created condominium the active one.
    pub async fn focus_condominium(&self, public_id: &str) {
        let mut state = self.state.write().await;
        state.current_condo_id = Some(public_id.to_string());
    }

    /// Resolve the resident record behind the current session
    pub async fn current_resident(&self) -> SessionResult<Resident> {
        let session = self.require_session().await?;
        let resident_id = session
            .resident_id
            .ok_or(SessionError::NotAuthenticated)?;

        self.residents
            .find_by_public_id(&resident_id)
            .await?
            .ok_or_else(|| {
                condoboard_directory::DirectoryError::resident_not_found(&resident_id).into()
            })
    }
}
