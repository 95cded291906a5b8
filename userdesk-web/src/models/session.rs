//! Client-side session: the access token and the notification banner.
//!
//! The store lives at the application root. Components never reach into it
//! directly; `App` reads it and hands the values down as props.

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use yew::{AttrValue, Callback};
use yewdux::{Context, Dispatch, Store};

/// Local storage key holding the access token between page loads. The value
/// is the bare token string, not JSON.
pub const TOKEN_STORAGE_KEY: &str = "ACCESS_TOKEN";

/// A message shown in the notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    notification: Option<Notification>,
    notification_seq: u64,
}

impl Store for SessionState {
    fn new(_cx: &Context) -> Self {
        Self::with_token(load_token())
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl SessionState {
    /// Session seeded with `token`; an empty token counts as none.
    pub fn with_token(token: Option<String>) -> Self {
        let mut state = Self::default();
        state.replace_token(token);
        state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub(crate) fn replace_token(&mut self, token: Option<String>) {
        self.token = token.filter(|value| !value.is_empty());
    }

    /// Show `message`, replacing whatever was shown before. Returns its id.
    pub(crate) fn show_notification(&mut self, message: impl Into<String>) -> u64 {
        self.notification_seq += 1;
        self.notification = Some(Notification {
            id: self.notification_seq,
            message: message.into(),
        });
        self.notification_seq
    }

    /// Clear the banner if it still shows notification `id`.
    pub(crate) fn expire_notification(&mut self, id: u64) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.id == id)
        {
            self.notification = None;
        }
    }

    pub(crate) fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

/// Session values and setters handed to guarded routes and pages.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionHandle {
    pub token: Option<AttrValue>,
    pub notification: Option<Notification>,
    pub on_notify: Callback<String>,
    pub on_dismiss: Callback<()>,
    pub on_logout: Callback<()>,
}

fn load_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

fn persist_token(token: Option<&str>) {
    let storage = LocalStorage::raw();
    let written = match token {
        Some(value) => storage.set_item(TOKEN_STORAGE_KEY, value),
        None => storage.remove_item(TOKEN_STORAGE_KEY),
    };
    if let Err(err) = written {
        log::warn!("could not persist access token: {err:?}");
    }
}

/// Store a new token (or clear it) and mirror it to local storage.
pub fn set_token(dispatch: &Dispatch<SessionState>, token: Option<String>) {
    let token = token.filter(|value| !value.is_empty());
    persist_token(token.as_deref());
    dispatch.reduce_mut(|state| state.replace_token(token));
}

/// Show `message` in the banner and clear it after `timeout_ms`.
pub fn notify(dispatch: &Dispatch<SessionState>, message: impl Into<String>, timeout_ms: u32) {
    let message = message.into();
    dispatch.reduce_mut(|state| {
        state.show_notification(message);
    });
    let Some(id) = dispatch.get().notification().map(|notification| notification.id) else {
        return;
    };
    let expiring = dispatch.clone();
    Timeout::new(timeout_ms, move || {
        expiring.reduce_mut(|state| state.expire_notification(id));
    })
    .forget();
}
