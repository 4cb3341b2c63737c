//! Integration tests for session scope resolution.

use std::sync::Arc;

use condoboard_directory::{
    CondominiumRepository, CreateCondominiumRequest, CreateResidentRequest, ResidentRepository,
    ResidentStatus, ResidentType,
};
use condoboard_sessions::{Role, SessionError, SessionManager};

async fn seed_condo(repo: &CondominiumRepository, name: &str) -> String {
    repo.create(&CreateCondominiumRequest {
        name: name.to_string(),
        address: "Rua do Sol, 88".to_string(),
        cnpj: None,
        units_total: 20,
        manager_name: "Carlos Silva".to_string(),
    })
    .await
    .unwrap()
    .public_id
}

async fn seed_resident(
    repo: &ResidentRepository,
    condo_id: &str,
    email: &str,
    status: ResidentStatus,
) -> String {
    repo.create(&CreateResidentRequest {
        condo_id: condo_id.to_string(),
        name: "Ana Paula".to_string(),
        cpf: None,
        block: "A".to_string(),
        unit: "101".to_string(),
        phone: "(11) 99999-1111".to_string(),
        email: email.to_string(),
        resident_type: ResidentType::Owner,
        status: Some(status),
    })
    .await
    .unwrap()
    .public_id
}

fn manager() -> (Arc<CondominiumRepository>, Arc<ResidentRepository>, SessionManager) {
    let condos = Arc::new(CondominiumRepository::new());
    let residents = Arc::new(ResidentRepository::new());
    let sessions = SessionManager::new(condos.clone(), residents.clone());
    (condos, residents, sessions)
}

#[tokio::test]
async fn manager_login_defaults_to_first_condominium() {
    let (condos, _, sessions) = manager();
    let first = seed_condo(&condos, "Aurora").await;
    seed_condo(&condos, "Horizonte").await;

    let session = sessions.login_manager().await.unwrap();
    assert_eq!(session.role, Role::Manager);
    assert!(session.resident_id.is_none());
    assert_eq!(sessions.active_condo_id().await, Some(first));
}

#[tokio::test]
async fn resident_login_locks_scope_to_home_condominium() {
    let (condos, residents, sessions) = manager();
    let aurora = seed_condo(&condos, "Aurora").await;
    let horizonte = seed_condo(&condos, "Horizonte").await;
    let mari =
        seed_resident(&residents, &horizonte, "mari@email.com", ResidentStatus::Active).await;

    let session = sessions.login_resident("mari@email.com").await.unwrap();
    assert_eq!(session.role, Role::Resident);
    assert_eq!(session.resident_id, Some(mari));
    assert_eq!(sessions.active_condo_id().await, Some(horizonte.clone()));

    // Residents cannot re-scope to another condominium
    assert!(matches!(
        sessions.switch_condominium(&aurora).await,
        Err(SessionError::PermissionDenied { .. })
    ));
    assert_eq!(sessions.active_condo_id().await, Some(horizonte));
}

#[tokio::test]
async fn unknown_email_leaves_the_resolver_untouched() {
    let (condos, _, sessions) = manager();
    seed_condo(&condos, "Aurora").await;

    assert!(matches!(
        sessions.login_resident("ghost@email.com").await,
        Err(SessionError::UnknownEmail { .. })
    ));
    assert!(sessions.current().await.is_none());
    assert_eq!(sessions.active_condo_id().await, None);
}

#[tokio::test]
async fn pending_resident_cannot_log_in() {
    let (condos, residents, sessions) = manager();
    let aurora = seed_condo(&condos, "Aurora").await;
    seed_resident(&residents, &aurora, "lucas@email.com", ResidentStatus::Pending).await;

    assert!(matches!(
        sessions.login_resident("lucas@email.com").await,
        Err(SessionError::ApprovalPending { .. })
    ));
    assert!(sessions.current().await.is_none());
}

#[tokio::test]
async fn manager_switches_between_condominiums() {
    let (condos, _, sessions) = manager();
    let aurora = seed_condo(&condos, "Aurora").await;
    let horizonte = seed_condo(&condos, "Horizonte").await;

    sessions.login_manager().await.unwrap();
    assert_eq!(sessions.active_condo_id().await, Some(aurora));

    sessions.switch_condominium(&horizonte).await.unwrap();
    assert_eq!(sessions.active_condo_id().await, Some(horizonte.clone()));

    // Unknown condominium is refused and the scope stays put
    assert!(sessions.switch_condominium("missing").await.is_err());
    assert_eq!(sessions.active_condo_id().await, Some(horizonte));
}

#[tokio::test]
async fn selection_survives_logout() {
    let (condos, _, sessions) = manager();
    let aurora = seed_condo(&condos, "Aurora").await;

    sessions.login_manager().await.unwrap();
    sessions.logout().await;

    assert!(sessions.current().await.is_none());
    assert!(sessions.require_session().await.is_err());
    assert_eq!(sessions.active_condo_id().await, Some(aurora));
}
