//! Network access to the todo API.

use futures::future::BoxFuture;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tasko_domain::{Priority, Todo, TodoId};

use crate::config::ClientConfig;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Fields to change on an existing todo. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoChanges {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    title: &'a str,
    priority: Priority,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

// =============================================================================
// TodoGateway
// =============================================================================

/// The four calls the board makes.
pub trait TodoGateway: Send + Sync {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, ClientError>>;

    fn create(&self, title: String, priority: Priority) -> BoxFuture<'_, Result<Todo, ClientError>>;

    fn update(&self, id: TodoId, changes: TodoChanges)
    -> BoxFuture<'_, Result<Todo, ClientError>>;

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), ClientError>>;
}

// =============================================================================
// HttpTodoGateway
// =============================================================================

/// [`TodoGateway`] over HTTP. No timeout or retry is applied.
#[derive(Debug, Clone)]
pub struct HttpTodoGateway {
    client: Client,
    base_url: String,
}

impl HttpTodoGateway {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.clone(),
        }
    }

    fn item_url(&self, id: TodoId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

/// Passes 2xx responses through; anything else becomes
/// [`ClientError::Status`] carrying the server's `{message}` when present.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(ClientError::Status { status, message })
}

impl TodoGateway for HttpTodoGateway {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Todo>, ClientError>> {
        Box::pin(async move {
            let response = self.client.get(&self.base_url).send().await?;
            Ok(check(response).await?.json().await?)
        })
    }

    fn create(&self, title: String, priority: Priority) -> BoxFuture<'_, Result<Todo, ClientError>> {
        Box::pin(async move {
            let body = CreateBody {
                title: &title,
                priority,
            };
            let response = self.client.post(&self.base_url).json(&body).send().await?;
            Ok(check(response).await?.json().await?)
        })
    }

    fn update(
        &self,
        id: TodoId,
        changes: TodoChanges,
    ) -> BoxFuture<'_, Result<Todo, ClientError>> {
        Box::pin(async move {
            let response = self
                .client
                .patch(self.item_url(id))
                .json(&changes)
                .send()
                .await?;
            Ok(check(response).await?.json().await?)
        })
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async move {
            let response = self.client.delete(self.item_url(id)).send().await?;
            check(response).await?;
            Ok(())
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
