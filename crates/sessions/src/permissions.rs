//! Centralized capability table.
//!
//! Every role-gated operation consults this table instead of branching on
//! the role at the call site.

use crate::errors::{SessionError, SessionResult};
use crate::session::Role;

/// Actions a viewer may attempt against the active condominium
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    CreateCondominium,
    SwitchCondominium,
    ManageResidents,
    ApproveResidents,
    ManageProviders,
    ScheduleMeetings,
    PublishNotices,
    DraftNotices,
    RecordTransactions,
    ViewFinances,
    ViewNotices,
    ViewMeetings,
    EditOwnProfile,
    MessageManager,
    MessageResidents,
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::CreateCondominium => "create-condominium".to_string(),
            Action::SwitchCondominium => "switch-condominium".to_string(),
            Action::ManageResidents => "manage-residents".to_string(),
            Action::ApproveResidents => "approve-residents".to_string(),
            Action::ManageProviders => "manage-providers".to_string(),
            Action::ScheduleMeetings => "schedule-meetings".to_string(),
            Action::PublishNotices => "publish-notices".to_string(),
            Action::DraftNotices => "draft-notices".to_string(),
            Action::RecordTransactions => "record-transactions".to_string(),
            Action::ViewFinances => "view-finances".to_string(),
            Action::ViewNotices => "view-notices".to_string(),
            Action::ViewMeetings => "view-meetings".to_string(),
            Action::EditOwnProfile => "edit-own-profile".to_string(),
            Action::MessageManager => "message-manager".to_string(),
            Action::MessageResidents => "message-residents".to_string(),
        }
    }
}

/// Check whether a role is allowed to perform an action
pub fn can(role: Role, action: Action) -> bool {
    match role {
        Role::Manager => !matches!(action, Action::MessageManager | Action::EditOwnProfile),
        Role::Resident => matches!(
            action,
            Action::ViewNotices
                | Action::ViewMeetings
                | Action::EditOwnProfile
                | Action::MessageManager
        ),
    }
}

/// Fail with a permission error unless the role may perform the action
pub fn ensure(role: Role, action: Action) -> SessionResult<()> {
    if can(role, action) {
        Ok(())
    } else {
        Err(SessionError::permission_denied(String::from(action)))
    }
}
