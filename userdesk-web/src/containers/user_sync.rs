//! Requests issued by the user form: loading one record and saving the batch.

use super::user_drafts::DraftList;
use super::user_form_state::UserFormAction;
use crate::api::UsersApi;
use crate::errors::ApiError;
use futures::future::join_all;
use shared::models::{UserId, UserRecord, ValidationErrors};

/// Fetch the record being edited and turn the answer into a form action.
///
/// A failed fetch is logged and otherwise dropped; the form simply stops
/// loading.
pub async fn fetch_draft<A>(api: &A, id: UserId) -> UserFormAction
where
    A: UsersApi + ?Sized,
{
    match api.get_user(id).await {
        Ok(record) => UserFormAction::Loaded(record),
        Err(err) => {
            log::warn!("loading user {id} failed: {err}");
            UserFormAction::LoadFailed
        }
    }
}

/// Result of one "Save All".
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every issued request succeeded; `sent` requests were issued.
    Saved { sent: usize },
    /// A request was answered with HTTP 422.
    Rejected(ValidationErrors),
    /// A request failed for any other reason.
    Failed(ApiError),
}

/// What the page does after a batch settles, beyond updating form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleEffect {
    /// Show the "saved" notification and go back to the user list.
    NotifyAndLeave,
}

/// Turn a finished batch into the form action to dispatch and the page effect.
///
/// Only a saved batch notifies and navigates, including one that sent nothing.
pub fn settle(outcome: SubmitOutcome) -> (UserFormAction, Option<SettleEffect>) {
    match outcome {
        SubmitOutcome::Saved { sent } => {
            log::info!("saved {sent} user(s)");
            (
                UserFormAction::SubmitSucceeded,
                Some(SettleEffect::NotifyAndLeave),
            )
        }
        SubmitOutcome::Rejected(errors) => (UserFormAction::SubmitRejected(errors), None),
        SubmitOutcome::Failed(err) => {
            log::error!("saving users failed: {err}");
            (UserFormAction::SubmitFailed, None)
        }
    }
}

/// Whether a draft takes part in a batch submit.
///
/// Only drafts with at least one empty field are sent; complete drafts are
/// skipped.
// TODO: confirm the intended polarity with product; the likely intent is to
// send complete drafts and hold back incomplete ones.
pub fn should_submit(record: &UserRecord) -> bool {
    !record.is_complete()
}

async fn save_draft<A>(api: &A, record: &UserRecord) -> Result<(), ApiError>
where
    A: UsersApi + ?Sized,
{
    match record.id {
        Some(id) => api.update_user(id, record).await,
        None => api.create_user(record).await,
    }
}

/// Issue one create-or-update per selected draft, all at once, and wait for
/// every request to settle.
///
/// Nothing is rolled back when some requests fail. The reported failure is
/// the first one in draft order.
pub async fn submit_drafts<A>(api: &A, drafts: &DraftList) -> SubmitOutcome
where
    A: UsersApi + ?Sized,
{
    let pending: Vec<_> = drafts
        .rows()
        .iter()
        .filter(|row| should_submit(&row.record))
        .map(|row| save_draft(api, &row.record))
        .collect();
    let sent = pending.len();
    log::debug!("submitting {sent} of {} draft(s)", drafts.len());

    let results = join_all(pending).await;
    match results.into_iter().find_map(Result::err) {
        None => SubmitOutcome::Saved { sent },
        Some(ApiError::Validation(errors)) => SubmitOutcome::Rejected(errors),
        Some(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::user_form_state::UserFormState;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use reqwest::StatusCode;
    use shared::models::UserField;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Get(UserId),
        Post(UserRecord),
        Put(UserId, UserRecord),
    }

    #[derive(Debug, Clone, Copy)]
    enum Reply {
        Ok,
        Unprocessable,
        ServerError,
    }

    #[derive(Debug)]
    struct FakeUsersApi {
        calls: RefCell<Vec<Call>>,
        reply: Reply,
        reads_fail: bool,
    }

    impl FakeUsersApi {
        fn replying(reply: Reply) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
                reads_fail: false,
            }
        }

        fn failing_reads(self) -> Self {
            Self {
                reads_fail: true,
                ..self
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn answer(&self) -> Result<(), ApiError> {
            match self.reply {
                Reply::Ok => Ok(()),
                Reply::Unprocessable => Err(ApiError::Validation(
                    [("email", "Email is required")].into_iter().collect(),
                )),
                Reply::ServerError => Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            }
        }
    }

    #[async_trait(?Send)]
    impl UsersApi for FakeUsersApi {
        async fn get_user(&self, id: UserId) -> Result<UserRecord, ApiError> {
            self.calls.borrow_mut().push(Call::Get(id));
            if self.reads_fail {
                return Err(ApiError::Status(StatusCode::NOT_FOUND));
            }
            Ok(UserRecord {
                id: Some(id),
                ..UserRecord::default()
            })
        }

        async fn create_user(&self, record: &UserRecord) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Post(record.clone()));
            self.answer()
        }

        async fn update_user(&self, id: UserId, record: &UserRecord) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Put(id, record.clone()));
            self.answer()
        }
    }

    fn complete(id: Option<u64>) -> UserRecord {
        UserRecord {
            id: id.map(UserId),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            password_confirmation: "p".to_string(),
        }
    }

    fn drafts_of(records: Vec<UserRecord>) -> DraftList {
        let mut list = DraftList::new();
        for (index, record) in records.into_iter().enumerate() {
            if index > 0 {
                list = list.with_row_added();
            }
            let key = list.last().key;
            list = list.with_field(key, UserField::Name, &record.name);
            list = list.with_field(key, UserField::Email, &record.email);
            list = list.with_field(key, UserField::Password, &record.password);
            list = list.with_field(
                key,
                UserField::PasswordConfirmation,
                &record.password_confirmation,
            );
        }
        list
    }

    #[test]
    fn test_complete_draft_is_not_sent() {
        let api = FakeUsersApi::replying(Reply::Ok);
        let drafts = drafts_of(vec![complete(None)]);

        let outcome = block_on(submit_drafts(&api, &drafts));

        assert!(api.calls().is_empty());
        assert!(matches!(outcome, SubmitOutcome::Saved { sent: 0 }));
    }

    #[test]
    fn test_incomplete_new_draft_is_posted() {
        let api = FakeUsersApi::replying(Reply::Ok);
        let draft = UserRecord {
            email: String::new(),
            ..complete(None)
        };
        let drafts = drafts_of(vec![draft.clone()]);

        let outcome = block_on(submit_drafts(&api, &drafts));

        assert_eq!(api.calls(), vec![Call::Post(draft)]);
        assert!(matches!(outcome, SubmitOutcome::Saved { sent: 1 }));
    }

    #[test]
    fn test_incomplete_existing_draft_is_put() {
        let api = FakeUsersApi::replying(Reply::Ok);
        let draft = UserRecord {
            password: String::new(),
            password_confirmation: String::new(),
            ..complete(Some(4))
        };
        let drafts = DraftList::new().replaced_with(draft.clone());

        block_on(submit_drafts(&api, &drafts));

        assert_eq!(api.calls(), vec![Call::Put(UserId(4), draft)]);
    }

    #[test]
    fn test_only_incomplete_drafts_of_a_batch_are_sent() {
        let api = FakeUsersApi::replying(Reply::Ok);
        let incomplete = UserRecord {
            name: String::new(),
            ..complete(None)
        };
        let drafts = drafts_of(vec![complete(None), incomplete.clone(), complete(None)]);

        let outcome = block_on(submit_drafts(&api, &drafts));

        assert_eq!(api.calls(), vec![Call::Post(incomplete)]);
        assert!(matches!(outcome, SubmitOutcome::Saved { sent: 1 }));
    }

    #[test]
    fn test_unprocessable_entity_surfaces_field_errors() {
        let api = FakeUsersApi::replying(Reply::Unprocessable);
        let drafts = DraftList::new();

        let outcome = block_on(submit_drafts(&api, &drafts));

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.first_message("email"), Some("Email is required"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_other_failure_is_reported_as_failed() {
        let api = FakeUsersApi::replying(Reply::ServerError);
        let drafts = DraftList::new().with_row_added();

        let outcome = block_on(submit_drafts(&api, &drafts));

        assert_eq!(api.calls().len(), 2);
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }

    #[test]
    fn test_fetch_issues_one_read_and_replaces_drafts() {
        let api = FakeUsersApi::replying(Reply::Ok);
        let state = UserFormState::default()
            .apply(UserFormAction::AddRow)
            .apply(UserFormAction::LoadStarted);

        let action = block_on(fetch_draft(&api, UserId(2)));
        let state = state.apply(action);

        assert_eq!(api.calls(), vec![Call::Get(UserId(2))]);
        assert_eq!(state.drafts.len(), 1);
        assert_eq!(state.drafts.first().record.id, Some(UserId(2)));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_fetch_failure_stops_loading_silently() {
        let api = FakeUsersApi::replying(Reply::Ok).failing_reads();
        let before = UserFormState::default().apply(UserFormAction::LoadStarted);

        let state = before.apply(block_on(fetch_draft(&api, UserId(3))));

        assert!(!state.is_loading());
        assert_eq!(state.drafts, before.drafts);
        assert!(state.errors.is_none());
    }

    #[test]
    fn test_saved_batch_notifies_and_leaves() {
        let (action, effect) = settle(SubmitOutcome::Saved { sent: 2 });

        assert!(matches!(action, UserFormAction::SubmitSucceeded));
        assert_eq!(effect, Some(SettleEffect::NotifyAndLeave));
    }

    #[test]
    fn test_batch_of_complete_drafts_leaves_without_requests() {
        let api = FakeUsersApi::replying(Reply::Ok);
        let drafts = drafts_of(vec![complete(None), complete(None)]);
        let state = UserFormState {
            drafts: drafts.clone(),
            ..UserFormState::default()
        }
        .apply(UserFormAction::SubmitStarted);
        assert!(state.is_submitting());

        let (action, effect) = settle(block_on(submit_drafts(&api, &drafts)));
        let state = state.apply(action);

        assert!(api.calls().is_empty());
        assert_eq!(effect, Some(SettleEffect::NotifyAndLeave));
        assert!(!state.is_submitting());
        assert!(state.errors.is_none());
    }

    #[test]
    fn test_rejected_batch_shows_errors_and_stays() {
        let api = FakeUsersApi::replying(Reply::Unprocessable);
        let state = UserFormState::default().apply(UserFormAction::SubmitStarted);

        let (action, effect) = settle(block_on(submit_drafts(&api, &state.drafts)));
        let state = state.apply(action);

        assert_eq!(effect, None);
        assert!(state.can_submit());
        assert_eq!(
            state.errors.as_ref().and_then(|errors| errors.first_message("email")),
            Some("Email is required")
        );
    }

    #[test]
    fn test_failed_batch_neither_notifies_nor_leaves() {
        let (action, effect) = settle(SubmitOutcome::Failed(ApiError::Status(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));

        assert!(matches!(action, UserFormAction::SubmitFailed));
        assert_eq!(effect, None);
    }

    #[test]
    fn test_should_submit_matches_incompleteness() {
        assert!(!should_submit(&complete(None)));
        assert!(should_submit(&UserRecord::default()));
    }
}
