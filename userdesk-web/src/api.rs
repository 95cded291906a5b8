use crate::config::FrontendConfig;
use crate::errors::{ApiError, error_for_status};
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use shared::models::{DataEnvelope, UserId, UserRecord};
use std::sync::{Arc, Mutex};

const USERS_PATH: &str = "users";

thread_local! {
    static SHARED_CLIENT: OnceCell<UserDeskClient> = OnceCell::new();
}

/// Persistence operations the user form depends on.
#[async_trait(?Send)]
pub trait UsersApi {
    /// `GET /users/{id}`, unwrapping the `{ data }` envelope.
    async fn get_user(&self, id: UserId) -> Result<UserRecord, ApiError>;

    /// `POST /users` with the full draft as body.
    async fn create_user(&self, record: &UserRecord) -> Result<(), ApiError>;

    /// `PUT /users/{id}` with the full draft as body.
    async fn update_user(&self, id: UserId, record: &UserRecord) -> Result<(), ApiError>;
}

/// Lightweight API client for the users backend.
#[derive(Clone, Debug)]
pub struct UserDeskClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl UserDeskClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Base client shared on this thread; pages scope their token onto it
    /// with [`Self::with_token`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    /// Copy of this client that sends `token` and nothing else; the original
    /// keeps its own token.
    #[must_use]
    pub fn with_token(&self, token: Option<String>) -> Self {
        let scoped = Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            token: Arc::new(Mutex::new(None)),
        };
        scoped.set_token(token);
        scoped
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Replace the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token.filter(|value| !value.is_empty());
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.header(AUTHORIZATION, format!("Bearer {token}"))
        } else {
            request
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.apply_auth(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::debug!("request failed with {status}");
        Err(error_for_status(status, &body))
    }
}

pub(crate) fn user_path(id: UserId) -> String {
    format!("{USERS_PATH}/{id}")
}

#[async_trait(?Send)]
impl UsersApi for UserDeskClient {
    async fn get_user(&self, id: UserId) -> Result<UserRecord, ApiError> {
        let url = self.api_url(&user_path(id));
        let response = self.send(self.client.get(url)).await?;
        let envelope: DataEnvelope<UserRecord> = response.json().await?;
        Ok(envelope.into_inner())
    }

    async fn create_user(&self, record: &UserRecord) -> Result<(), ApiError> {
        let url = self.api_url(USERS_PATH);
        self.send(self.client.post(url).json(record)).await?;
        Ok(())
    }

    async fn update_user(&self, id: UserId, record: &UserRecord) -> Result<(), ApiError> {
        let url = self.api_url(&user_path(id));
        self.send(self.client.put(url).json(record)).await?;
        Ok(())
    }
}
