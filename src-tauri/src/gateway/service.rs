//! Persistence Gateway
//!
//! Authenticates save requests, sanitizes their payload and overwrites the
//! caller's notes or task list record.

use crate::domain::{NotesRecord, TaskListRecord, UserId, WidgetStrings};
use crate::repository::{RecordRepository, RecordStore};
use crate::sanitize::sanitize_textarea_field;
use crate::security::HostSession;

use super::error::GatewayError;
use super::response::{
    GatewayRequest, SaveResponse, WidgetBootstrap, INVALID_REQUEST_MESSAGE, NOTES_SAVED_MESSAGE,
    TASKS_SAVED_MESSAGE,
};
use super::tasks_payload::parse_task_list;

pub struct PersistenceGateway<S: RecordStore, H: HostSession> {
    records: RecordRepository<S>,
    session: H,
}

impl<S: RecordStore, H: HostSession> PersistenceGateway<S, H> {
    pub fn new(store: S, session: H) -> Self {
        Self {
            records: RecordRepository::new(store),
            session,
        }
    }

    pub fn session(&self) -> &H {
        &self.session
    }

    /// Token first, then privilege. Both abort the request.
    fn authorize(&self, token: &str) -> Result<UserId, GatewayError> {
        if !self.session.verify_token(token) {
            log::warn!("Rejected save: anti-forgery token did not verify");
            return Err(GatewayError::Authentication);
        }

        let user = self.session.current_user();
        if !self.session.has_administrator_privilege(user) {
            log::warn!("Rejected save: user {} lacks administrator privilege", user);
            return Err(GatewayError::Permission);
        }
        Ok(user)
    }

    /// A user may only write their own records.
    fn targets_caller(request: &GatewayRequest, caller: UserId) -> bool {
        request.user_id.is_valid() && request.user_id == caller
    }

    /// The widget is only shown to administrators.
    fn widget_user(&self) -> Result<UserId, GatewayError> {
        let user = self.session.current_user();
        if !self.session.has_administrator_privilege(user) {
            return Err(GatewayError::Permission);
        }
        Ok(user)
    }

    /// Initial widget data for the current user
    pub async fn load_widget(&self, strings: &WidgetStrings) -> Result<WidgetBootstrap, GatewayError> {
        let user = self.widget_user()?;

        let notes = self
            .records
            .load::<NotesRecord>(user)
            .await?
            .map(|record| sanitize_textarea_field(&record.text))
            .unwrap_or_default();

        let tasks = match self.records.load_raw::<TaskListRecord>(user).await? {
            Some(raw) => parse_task_list(&raw).unwrap_or_else(|e| {
                log::warn!("Stored task list for user {} is unreadable: {}", user, e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(WidgetBootstrap {
            user_id: user,
            token: self.session.issue_token(),
            notes,
            tasks,
            strings: strings.clone(),
        })
    }

    /// Fresh token for a widget that outlived the one it was loaded with
    pub fn refresh_token(&self) -> Result<String, GatewayError> {
        let user = self.widget_user()?;
        log::info!("Issued a fresh token for user {}", user);
        Ok(self.session.issue_token())
    }

    pub async fn save_notes(&self, request: GatewayRequest) -> Result<SaveResponse, GatewayError> {
        let caller = self.authorize(&request.token)?;
        let notes = sanitize_textarea_field(&request.payload);

        if !Self::targets_caller(&request, caller) {
            log::warn!("Rejected notes save for user {} by user {}", request.user_id, caller);
            return Ok(SaveResponse::failure(INVALID_REQUEST_MESSAGE));
        }

        self.records.save(&NotesRecord::new(caller, notes)).await?;
        log::info!("Saved notes for user {}", caller);
        Ok(SaveResponse::success(NOTES_SAVED_MESSAGE))
    }

    pub async fn save_tasks(&self, request: GatewayRequest) -> Result<SaveResponse, GatewayError> {
        let caller = self.authorize(&request.token)?;

        if !Self::targets_caller(&request, caller) {
            log::warn!("Rejected task save for user {} by user {}", request.user_id, caller);
            return Ok(SaveResponse::failure(INVALID_REQUEST_MESSAGE));
        }

        let tasks = match parse_task_list(&request.payload) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Rejected task save for user {}: {}", caller, e);
                return Ok(SaveResponse::failure(INVALID_REQUEST_MESSAGE));
            }
        };

        let record = TaskListRecord::new(caller, tasks);
        self.records.save(&record).await?;
        log::info!(
            "Saved {} tasks ({} completed) for user {}",
            record.tasks.len(),
            record.completed_count(),
            caller
        );
        Ok(SaveResponse::success(TASKS_SAVED_MESSAGE).with_count(record.tasks.len()))
    }
}
