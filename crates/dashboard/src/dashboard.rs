//! The application facade.
//!
//! `Dashboard` owns every repository and service, resolves the viewer's
//! scope on each call, and consults the capability table before every
//! role-gated operation. It is the only entry point the UI shell talks
//! to; nothing here relies on ambient globals.

use std::sync::Arc;

use condoboard_community::{
    CreateMeetingRequest, CreateNoticeRequest, CreateTransactionRequest, FinancialSummary,
    Meeting, MeetingRepository, MeetingService, Notice, NoticeRepository, NoticeService,
    Transaction, TransactionRepository, TransactionService,
};
use condoboard_config::AppConfig;
use condoboard_directory::{
    Condominium, CondominiumRepository, CondominiumService, CreateCondominiumRequest,
    CreateProviderRequest, CreateResidentRequest, DirectoryError, Provider, ProviderRepository,
    ProviderService, Resident, ResidentRepository, ResidentService, UpdateResidentRequest,
};
use condoboard_drafting::NoticeDrafter;
use condoboard_messaging::{
    ChatMessage, MessageRepository, ThreadService, ThreadSummary,
};
use condoboard_sessions::{ensure, Action, Role, Session, SessionManager};

use crate::errors::DashboardResult;
use crate::notifications::{DashboardBadges, NotificationAggregator};
use crate::seed;

pub struct Dashboard {
    pub(crate) sessions: SessionManager,
    pub(crate) condominium_service: CondominiumService,
    pub(crate) resident_service: Arc<ResidentService>,
    pub(crate) provider_service: ProviderService,
    pub(crate) meeting_service: MeetingService,
    pub(crate) notice_service: NoticeService,
    pub(crate) transaction_service: TransactionService,
    pub(crate) thread_service: Arc<ThreadService>,
    pub(crate) message_repository: Arc<MessageRepository>,
    notifications: NotificationAggregator,
    drafter: NoticeDrafter,
}

impl Dashboard {
    /// Wire an empty dashboard from configuration
    pub fn new(config: &AppConfig) -> Self {
        let condominium_repository = Arc::new(CondominiumRepository::new());
        let resident_repository = Arc::new(ResidentRepository::new());
        let provider_repository = Arc::new(ProviderRepository::new());
        let meeting_repository = Arc::new(MeetingRepository::new());
        let notice_repository = Arc::new(NoticeRepository::new());
        let transaction_repository = Arc::new(TransactionRepository::new());
        let message_repository = Arc::new(MessageRepository::new());

        let sessions = SessionManager::new(
            condominium_repository.clone(),
            resident_repository.clone(),
        );
        let residents = Arc::new(ResidentService::new(
            resident_repository,
            condominium_repository.clone(),
        ));
        let threads = Arc::new(ThreadService::new(message_repository.clone()));
        let notifications = NotificationAggregator::new(residents.clone(), threads.clone());

        Self {
            sessions,
            condominium_service: CondominiumService::new(condominium_repository.clone()),
            resident_service: residents,
            provider_service: ProviderService::new(provider_repository, condominium_repository),
            meeting_service: MeetingService::new(meeting_repository),
            notice_service: NoticeService::new(notice_repository),
            transaction_service: TransactionService::new(transaction_repository),
            thread_service: threads,
            message_repository,
            notifications,
            drafter: NoticeDrafter::new(config),
        }
    }

    /// Wire a dashboard and, when configured, load the fixed sample records
    pub async fn bootstrap(config: &AppConfig) -> DashboardResult<Self> {
        let dashboard = Self::new(config);
        if config.seed.sample_data {
            seed::load_sample_data(&dashboard).await?;
        }
        Ok(dashboard)
    }

    // -- Sessions --

    pub async fn login_manager(&self) -> DashboardResult<Session> {
        Ok(self.sessions.login_manager().await?)
    }

    pub async fn login_resident(&self, email: &str) -> DashboardResult<Session> {
        Ok(self.sessions.login_resident(email).await?)
    }

    pub async fn logout(&self) {
        self.sessions.logout().await;
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.sessions.current().await
    }

    // -- Condominiums --

    /// Register a condominium and make it the active one
    pub async fn create_condominium(
        &self,
        request: CreateCondominiumRequest,
    ) -> DashboardResult<Condominium> {
        let session = self.sessions.require_session().await?;
        ensure(session.role, Action::CreateCondominium)?;

        let condominium = self.condominium_service.register(request).await?;
        self.sessions.focus_condominium(&condominium.public_id).await;
        Ok(condominium)
    }

    /// Every condominium, for the manager's switcher
    pub async fn condominiums(&self) -> DashboardResult<Vec<Condominium>> {
        let session = self.sessions.require_session().await?;
        ensure(session.role, Action::SwitchCondominium)?;

        Ok(self.condominium_service.list().await?)
    }

    pub async fn switch_condominium(&self, public_id: &str) -> DashboardResult<Condominium> {
        Ok(self.sessions.switch_condominium(public_id).await?)
    }

    pub async fn active_condominium(&self) -> DashboardResult<Condominium> {
        let (_, condo_id) = self.sessions.scope().await?;
        Ok(self.condominium_service.get(&condo_id).await?)
    }

    // -- Residents --

    /// Self-service registration: anyone may apply, entering the store
    /// as `pending` until the manager decides.
    pub async fn apply_for_residency(
        &self,
        mut request: CreateResidentRequest,
    ) -> DashboardResult<Resident> {
        request.status = None;
        Ok(self.resident_service.register(request).await?)
    }

    /// Manager-side registration within the active condominium
    pub async fn register_resident(
        &self,
        mut request: CreateResidentRequest,
    ) -> DashboardResult<Resident> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ManageResidents)?;

        request.condo_id = condo_id;
        Ok(self.resident_service.register(request).await?)
    }

    pub async fn active_residents(&self) -> DashboardResult<Vec<Resident>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ManageResidents)?;

        Ok(self.resident_service.list_active(&condo_id).await?)
    }

    pub async fn pending_residents(&self) -> DashboardResult<Vec<Resident>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ApproveResidents)?;

        Ok(self.resident_service.list_pending(&condo_id).await?)
    }

    pub async fn approve_resident(&self, resident_id: &str) -> DashboardResult<Resident> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ApproveResidents)?;

        self.resident_in_scope(resident_id, &condo_id).await?;
        Ok(self.resident_service.approve(resident_id).await?)
    }

    pub async fn reject_resident(&self, resident_id: &str) -> DashboardResult<()> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ApproveResidents)?;

        self.resident_in_scope(resident_id, &condo_id).await?;
        Ok(self.resident_service.reject(resident_id).await?)
    }

    /// The resident record behind the current session
    pub async fn my_profile(&self) -> DashboardResult<Resident> {
        let session = self.sessions.require_session().await?;
        ensure(session.role, Action::EditOwnProfile)?;

        Ok(self.sessions.current_resident().await?)
    }

    pub async fn update_my_profile(
        &self,
        request: UpdateResidentRequest,
    ) -> DashboardResult<Resident> {
        let session = self.sessions.require_session().await?;
        ensure(session.role, Action::EditOwnProfile)?;

        let me = self.sessions.current_resident().await?;
        Ok(self.resident_service.update_profile(&me.public_id, request).await?)
    }

    // -- Providers --

    pub async fn register_provider(
        &self,
        mut request: CreateProviderRequest,
    ) -> DashboardResult<Provider> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ManageProviders)?;

        request.condo_id = condo_id;
        Ok(self.provider_service.register(request).await?)
    }

    pub async fn providers(&self) -> DashboardResult<Vec<Provider>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ManageProviders)?;

        Ok(self.provider_service.list_active(&condo_id).await?)
    }

    // -- Meetings --

    pub async fn schedule_meeting(
        &self,
        mut request: CreateMeetingRequest,
    ) -> DashboardResult<Meeting> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ScheduleMeetings)?;

        request.condo_id = condo_id;
        Ok(self.meeting_service.schedule(request).await?)
    }

    pub async fn meetings(&self) -> DashboardResult<Vec<Meeting>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ViewMeetings)?;

        Ok(self.meeting_service.list(&condo_id).await?)
    }

    // -- Notices --

    pub async fn publish_notice(
        &self,
        mut request: CreateNoticeRequest,
    ) -> DashboardResult<Notice> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::PublishNotices)?;

        request.condo_id = condo_id;
        Ok(self.notice_service.publish(request).await?)
    }

    pub async fn notices(&self) -> DashboardResult<Vec<Notice>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ViewNotices)?;

        Ok(self.notice_service.list(&condo_id).await?)
    }

    /// Ask the AI collaborator for a notice body. The returned text is
    /// always displayable; provider failures come back as fixed
    /// fallback strings rather than errors.
    pub async fn draft_notice(&self, topic: &str, tone: &str) -> DashboardResult<String> {
        let session = self.sessions.require_session().await?;
        ensure(session.role, Action::DraftNotices)?;

        Ok(self.drafter.draft_notice(topic, tone).await)
    }

    // -- Finances --

    pub async fn record_transaction(
        &self,
        mut request: CreateTransactionRequest,
    ) -> DashboardResult<Transaction> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::RecordTransactions)?;

        request.condo_id = condo_id;
        Ok(self.transaction_service.record(request).await?)
    }

    pub async fn transactions(&self) -> DashboardResult<Vec<Transaction>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ViewFinances)?;

        Ok(self.transaction_service.list(&condo_id).await?)
    }

    pub async fn financial_summary(&self) -> DashboardResult<FinancialSummary> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::ViewFinances)?;

        Ok(self.transaction_service.summary(&condo_id).await?)
    }

    // -- Messaging --

    /// The manager's inbox: one summary per active resident, most recent
    /// conversation first
    pub async fn inbox(&self) -> DashboardResult<Vec<ThreadSummary>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::MessageResidents)?;

        let resident_ids: Vec<String> = self
            .resident_service
            .list_active(&condo_id)
            .await?
            .into_iter()
            .map(|r| r.public_id)
            .collect();

        Ok(self.thread_service.thread_overview(&condo_id, &resident_ids).await?)
    }

    /// Open a resident's thread as the manager, marking the resident's
    /// messages as read
    pub async fn open_thread(&self, resident_id: &str) -> DashboardResult<Vec<ChatMessage>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::MessageResidents)?;

        self.resident_in_scope(resident_id, &condo_id).await?;
        self.thread_service
            .mark_thread_read(&condo_id, resident_id, Role::Manager)
            .await?;
        Ok(self.thread_service.thread(&condo_id, resident_id).await?)
    }

    pub async fn send_message_to_resident(
        &self,
        resident_id: &str,
        content: &str,
    ) -> DashboardResult<ChatMessage> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::MessageResidents)?;

        let resident = self.resident_in_scope(resident_id, &condo_id).await?;
        Ok(self
            .thread_service
            .send(&condo_id, &resident.public_id, content, Role::Manager)
            .await?)
    }

    /// Open the viewer's own thread as a resident, marking the manager's
    /// messages as read
    pub async fn open_my_thread(&self) -> DashboardResult<Vec<ChatMessage>> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::MessageManager)?;

        let me = self.sessions.current_resident().await?;
        self.thread_service
            .mark_thread_read(&condo_id, &me.public_id, Role::Resident)
            .await?;
        Ok(self.thread_service.thread(&condo_id, &me.public_id).await?)
    }

    pub async fn send_message_to_manager(&self, content: &str) -> DashboardResult<ChatMessage> {
        let (session, condo_id) = self.sessions.scope().await?;
        ensure(session.role, Action::MessageManager)?;

        let me = self.sessions.current_resident().await?;
        Ok(self
            .thread_service
            .send(&condo_id, &me.public_id, content, Role::Resident)
            .await?)
    }

    // -- Notifications --

    /// Badge counters for the current viewer, recomputed on every call
    pub async fn badges(&self) -> DashboardResult<DashboardBadges> {
        let (session, condo_id) = self.sessions.scope().await?;
        self.notifications.badges(&session, &condo_id).await
    }

    /// Resolve a resident within the active condominium. A record
    /// belonging to another condominium is reported as not found, so
    /// nothing leaks across tenants.
    async fn resident_in_scope(
        &self,
        resident_id: &str,
        condo_id: &str,
    ) -> DashboardResult<Resident> {
        let resident = self.resident_service.get(resident_id).await?;
        if resident.condo_id != condo_id {
            return Err(DirectoryError::resident_not_found(resident_id).into());
        }
        Ok(resident)
    }
}
