//! Fixed sample records loaded at startup.
//!
//! The store is process-lifetime only, so every run starts from this
//! snapshot: two condominiums, a handful of residents (one still
//! pending), providers, meetings, notices, a small ledger, and a seeded
//! chat history.

use condoboard_community::{
    CreateMeetingRequest, CreateNoticeRequest, CreateTransactionRequest, NoticeCategory,
    TransactionKind,
};
use condoboard_directory::{
    CreateCondominiumRequest, CreateProviderRequest, CreateResidentRequest, ResidentStatus,
    ResidentType,
};
use condoboard_messaging::ChatMessage;
use tracing::info;

use crate::dashboard::Dashboard;
use crate::errors::DashboardResult;

/// Public ids of the seeded records, for wiring demo flows and tests
#[derive(Debug, Clone)]
pub struct SeededRecords {
    pub aurora: String,
    pub horizonte: String,
    pub ana: String,
    pub roberto: String,
    pub mariana: String,
    pub lucas: String,
}

/// Populate the store with the fixed sample data set.
pub async fn load_sample_data(dashboard: &Dashboard) -> DashboardResult<SeededRecords> {
    let aurora = dashboard
        .condominium_service
        .register(CreateCondominiumRequest {
            name: "Residencial Aurora".to_string(),
            address: "Av. das Flores, 123, São Paulo".to_string(),
            cnpj: Some("12.345.678/0001-99".to_string()),
            units_total: 45,
            manager_name: "Carlos Silva".to_string(),
        })
        .await?;

    let horizonte = dashboard
        .condominium_service
        .register(CreateCondominiumRequest {
            name: "Edifício Horizonte".to_string(),
            address: "Rua do Sol, 88, Rio de Janeiro".to_string(),
            cnpj: Some("98.765.432/0001-11".to_string()),
            units_total: 20,
            manager_name: "Carlos Silva".to_string(),
        })
        .await?;

    let ana = dashboard
        .resident_service
        .register(CreateResidentRequest {
            condo_id: aurora.public_id.clone(),
            name: "Ana Paula".to_string(),
            cpf: Some("123.456.789-00".to_string()),
            block: "A".to_string(),
            unit: "101".to_string(),
            phone: "(11) 99999-1111".to_string(),
            email: "ana@email.com".to_string(),
            resident_type: ResidentType::Owner,
            status: Some(ResidentStatus::Active),
        })
        .await?;

    let roberto = dashboard
        .resident_service
        .register(CreateResidentRequest {
            condo_id: aurora.public_id.clone(),
            name: "Roberto Santos".to_string(),
            cpf: Some("234.567.890-11".to_string()),
            block: "A".to_string(),
            unit: "102".to_string(),
            phone: "(11) 99999-2222".to_string(),
            email: "beto@email.com".to_string(),
            resident_type: ResidentType::Tenant,
            status: Some(ResidentStatus::Active),
        })
        .await?;

    let mariana = dashboard
        .resident_service
        .register(CreateResidentRequest {
            condo_id: horizonte.public_id.clone(),
            name: "Mariana Costa".to_string(),
            cpf: Some("345.678.901-22".to_string()),
            block: "Único".to_string(),
            unit: "501".to_string(),
            phone: "(21) 98888-3333".to_string(),
            email: "mari@email.com".to_string(),
            resident_type: ResidentType::Owner,
            status: Some(ResidentStatus::Active),
        })
        .await?;

    // Pending registration awaiting the manager's decision
    let lucas = dashboard
        .resident_service
        .register(CreateResidentRequest {
            condo_id: aurora.public_id.clone(),
            name: "Lucas Pendente".to_string(),
            cpf: Some("999.888.777-66".to_string()),
            block: "B".to_string(),
            unit: "202".to_string(),
            phone: "(11) 90000-0000".to_string(),
            email: "lucas@email.com".to_string(),
            resident_type: ResidentType::Resident,
            status: None,
        })
        .await?;

    dashboard
        .provider_service
        .register(CreateProviderRequest {
            condo_id: aurora.public_id.clone(),
            name: "João Eletricista".to_string(),
            specialty: "Elétrica".to_string(),
            phone: "(11) 97777-0000".to_string(),
            email: "joao@servicos.com".to_string(),
            company: "JM Elétrica".to_string(),
        })
        .await?;

    dashboard
        .provider_service
        .register(CreateProviderRequest {
            condo_id: aurora.public_id.clone(),
            name: "Clean Pool".to_string(),
            specialty: "Piscina".to_string(),
            phone: "(11) 3333-4444".to_string(),
            email: "contato@cleanpool.com".to_string(),
            company: "Clean Pool Ltda".to_string(),
        })
        .await?;

    dashboard
        .meeting_service
        .schedule(CreateMeetingRequest {
            condo_id: aurora.public_id.clone(),
            title: "Assembleia Geral Ordinária".to_string(),
            date: "2024-06-15T19:00:00".to_string(),
            description: "Aprovação de contas".to_string(),
            agenda: "1. Leitura da ata anterior\n2. Aprovação de contas 2023\n3. Eleição de subsíndico"
                .to_string(),
        })
        .await?;

    dashboard
        .meeting_service
        .schedule(CreateMeetingRequest {
            condo_id: horizonte.public_id.clone(),
            title: "Reunião de Obras".to_string(),
            date: "2024-06-20T10:00:00".to_string(),
            description: "Reforma da fachada".to_string(),
            agenda: "Escolha de fornecedores".to_string(),
        })
        .await?;

    dashboard
        .notice_service
        .publish(CreateNoticeRequest {
            condo_id: aurora.public_id.clone(),
            title: "Manutenção do Elevador".to_string(),
            message: "O elevador social estará parado para manutenção na terça-feira das 9h às 12h."
                .to_string(),
            category: NoticeCategory::Maintenance,
            pinned: true,
        })
        .await?;

    dashboard
        .notice_service
        .publish(CreateNoticeRequest {
            condo_id: aurora.public_id.clone(),
            title: "Festa Junina".to_string(),
            message: "Nossa festa será dia 24/06 no salão de festas. Tragam pratos típicos!"
                .to_string(),
            category: NoticeCategory::Event,
            pinned: false,
        })
        .await?;

    let ledger = [
        (TransactionKind::Income, 15_000.0, "Taxa Condominial", "Arrecadação mensal", None),
        (TransactionKind::Expense, 1_200.0, "Limpeza", "Serviço mensal de limpeza", Some("Clean Service")),
        (TransactionKind::Expense, 4_500.0, "Manutenção", "Reparo motor portão", Some("Elevadores Tech")),
        (TransactionKind::Income, 500.0, "Multas", "Multa barulho apto 302", None),
    ];
    for (kind, amount, category, description, supplier) in ledger {
        dashboard
            .transaction_service
            .record(CreateTransactionRequest {
                condo_id: aurora.public_id.clone(),
                kind,
                amount,
                category: category.to_string(),
                date: "2024-05-10".to_string(),
                description: description.to_string(),
                supplier: supplier.map(str::to_string),
            })
            .await?;
    }

    dashboard
        .transaction_service
        .record(CreateTransactionRequest {
            condo_id: horizonte.public_id.clone(),
            kind: TransactionKind::Income,
            amount: 8_000.0,
            category: "Taxa Condominial".to_string(),
            date: "2024-05-05".to_string(),
            description: "Arrecadação mensal".to_string(),
            supplier: None,
        })
        .await?;

    // Seeded chat history: Ana's thread is fully read except her last
    // message; Roberto's single message is still unread.
    let chat = [
        (&ana, "Bom dia! Poderia reservar o salão para o dia 20?", false, true),
        (&ana, "Olá Ana, vou verificar a disponibilidade.", true, true),
        (&ana, "Confirmado! Já está reservado.", true, true),
        (&ana, "Muito obrigada!", false, false),
        (&roberto, "O portão da garagem está fazendo barulho novamente.", false, false),
    ];
    for (resident, content, sent_by_manager, read) in chat {
        let mut message = ChatMessage::new(
            &aurora.public_id,
            &resident.public_id,
            content,
            sent_by_manager,
        );
        message.read = read;
        dashboard.message_repository.append(message).await?;
    }

    info!("loaded sample data set");

    Ok(SeededRecords {
        aurora: aurora.public_id,
        horizonte: horizonte.public_id,
        ana: ana.public_id,
        roberto: roberto.public_id,
        mariana: mariana.public_id,
        lucas: lucas.public_id,
    })
}
