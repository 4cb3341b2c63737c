//! Integration tests for the directory crate: resident lifecycle,
//! tenant scoping, and email uniqueness.

use std::sync::Arc;

use condoboard_directory::{
    CondominiumRepository, CondominiumService, CreateCondominiumRequest, CreateResidentRequest,
    DirectoryError, ResidentRepository, ResidentService, ResidentStatus, ResidentType,
    UpdateResidentRequest,
};

fn condo_request(name: &str) -> CreateCondominiumRequest {
    CreateCondominiumRequest {
        name: name.to_string(),
        address: "Av. das Flores, 123".to_string(),
        cnpj: None,
        units_total: 40,
        manager_name: "Carlos Silva".to_string(),
    }
}

fn resident_request(condo_id: &str, name: &str, email: &str) -> CreateResidentRequest {
    CreateResidentRequest {
        condo_id: condo_id.to_string(),
        name: name.to_string(),
        cpf: None,
        block: "A".to_string(),
        unit: "101".to_string(),
        phone: "(11) 99999-0000".to_string(),
        email: email.to_string(),
        resident_type: ResidentType::Owner,
        status: None,
    }
}

fn services() -> (CondominiumService, ResidentService, Arc<ResidentRepository>) {
    let condos = Arc::new(CondominiumRepository::new());
    let residents = Arc::new(ResidentRepository::new());
    (
        CondominiumService::new(condos.clone()),
        ResidentService::new(residents.clone(), condos),
        residents,
    )
}

#[tokio::test]
async fn pending_resident_is_invisible_until_approved() {
    let (condo_service, resident_service, _) = services();
    let condo = condo_service.register(condo_request("Aurora")).await.unwrap();

    let pending = resident_service
        .register(resident_request(&condo.public_id, "Lucas", "lucas@email.com"))
        .await
        .unwrap();
    assert_eq!(pending.status, ResidentStatus::Pending);

    let active = resident_service.list_active(&condo.public_id).await.unwrap();
    assert!(active.is_empty());

    let approved = resident_service.approve(&pending.public_id).await.unwrap();
    assert_eq!(approved.status, ResidentStatus::Active);

    let active = resident_service.list_active(&condo.public_id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].public_id, pending.public_id);

    let still_pending = resident_service.list_pending(&condo.public_id).await.unwrap();
    assert!(still_pending.is_empty());
}

#[tokio::test]
async fn approve_then_reject_scenario() {
    let (condo_service, resident_service, repository) = services();
    let condo = condo_service.register(condo_request("Aurora")).await.unwrap();

    let mut r1_request = resident_request(&condo.public_id, "Ana Paula", "ana@email.com");
    r1_request.status = Some(ResidentStatus::Active);
    let r1 = resident_service.register(r1_request).await.unwrap();

    let r4 = resident_service
        .register(resident_request(&condo.public_id, "Lucas Pendente", "lucas@email.com"))
        .await
        .unwrap();

    resident_service.approve(&r4.public_id).await.unwrap();

    let active: Vec<String> = resident_service
        .list_active(&condo.public_id)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.public_id)
        .collect();
    assert_eq!(active, vec![r1.public_id.clone(), r4.public_id.clone()]);
    assert!(resident_service
        .list_pending(&condo.public_id)
        .await
        .unwrap()
        .is_empty());

    // Rejecting instead removes the record entirely
    let r5 = resident_service
        .register(resident_request(&condo.public_id, "Outro", "outro@email.com"))
        .await
        .unwrap();
    let before = repository.count_all().await.unwrap();

    resident_service.reject(&r5.public_id).await.unwrap();

    assert_eq!(repository.count_all().await.unwrap(), before - 1);
    assert!(matches!(
        resident_service.reject(&r5.public_id).await,
        Err(DirectoryError::ResidentNotFound { .. })
    ));
}

#[tokio::test]
async fn approving_an_active_resident_is_rejected() {
    let (condo_service, resident_service, _) = services();
    let condo = condo_service.register(condo_request("Aurora")).await.unwrap();

    let resident = resident_service
        .register(resident_request(&condo.public_id, "Ana", "ana@email.com"))
        .await
        .unwrap();
    resident_service.approve(&resident.public_id).await.unwrap();

    assert!(matches!(
        resident_service.approve(&resident.public_id).await,
        Err(DirectoryError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn residents_are_scoped_to_their_condominium() {
    let (condo_service, resident_service, _) = services();
    let aurora = condo_service.register(condo_request("Aurora")).await.unwrap();
    let horizonte = condo_service
        .register(condo_request("Horizonte"))
        .await
        .unwrap();

    let ana = resident_service
        .register(resident_request(&aurora.public_id, "Ana", "ana@email.com"))
        .await
        .unwrap();
    let mari = resident_service
        .register(resident_request(&horizonte.public_id, "Mariana", "mari@email.com"))
        .await
        .unwrap();

    resident_service.approve(&ana.public_id).await.unwrap();
    resident_service.approve(&mari.public_id).await.unwrap();

    let aurora_residents = resident_service.list_active(&aurora.public_id).await.unwrap();
    assert_eq!(aurora_residents.len(), 1);
    assert_eq!(aurora_residents[0].public_id, ana.public_id);

    let horizonte_residents = resident_service
        .list_active(&horizonte.public_id)
        .await
        .unwrap();
    assert_eq!(horizonte_residents.len(), 1);
    assert_eq!(horizonte_residents[0].public_id, mari.public_id);
}

#[tokio::test]
async fn duplicate_email_is_refused() {
    let (condo_service, resident_service, _) = services();
    let condo = condo_service.register(condo_request("Aurora")).await.unwrap();

    resident_service
        .register(resident_request(&condo.public_id, "Ana", "ana@email.com"))
        .await
        .unwrap();

    assert!(matches!(
        resident_service
            .register(resident_request(&condo.public_id, "Ana Clone", "ana@email.com"))
            .await,
        Err(DirectoryError::EmailAlreadyExists { .. })
    ));
}

#[tokio::test]
async fn profile_update_merges_only_supplied_fields() {
    let (condo_service, resident_service, _) = services();
    let condo = condo_service.register(condo_request("Aurora")).await.unwrap();

    let resident = resident_service
        .register(resident_request(&condo.public_id, "Ana", "ana@email.com"))
        .await
        .unwrap();

    let updated = resident_service
        .update_profile(
            &resident.public_id,
            UpdateResidentRequest {
                phone: Some("(11) 90000-1234".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone, "(11) 90000-1234");
    assert_eq!(updated.name, "Ana");
    assert_eq!(updated.email, "ana@email.com");
    assert_eq!(updated.condo_id, condo.public_id);
}
