use crate::config::ApiConfig;
use crate::console_logf;
use crate::models::*;
use async_trait::async_trait;
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{context} ({status})")]
    Status { context: String, status: StatusCode },

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("request rejected by the API: {0}")]
    Rejected(String),

    #[error("couldn't build endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body, sent with `content-type: application/json`.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        ApiRequest {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub fn post_json(url: Url, body: String) -> Self {
        ApiRequest {
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    pub fn delete(url: Url) -> Self {
        ApiRequest {
            method: Method::DELETE,
            url,
            body: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn error_for_status(self, context: impl Into<String>) -> Result<Self, ApiError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                context: context.into(),
                status: self.status,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    fn data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self.json()?;
        if !envelope.success {
            let reason = match envelope.error {
                Some(serde_json::Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => "unknown error".to_owned(),
            };
            return Err(ApiError::Rejected(reason));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Rejected("response carried no data".to_owned()))
    }
}

/// Sends one HTTP request. Implemented over `window.fetch` in the browser
/// and by in-memory doubles in tests.
#[async_trait(?Send)]
pub trait Fetch {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait(?Send)]
impl<F: Fetch + ?Sized> Fetch for Rc<F> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

/// The four operations the roster needs from the remote collection.
pub struct PlayerApi<F> {
    config: ApiConfig,
    fetch: F,
}

impl<F: Fetch> PlayerApi<F> {
    pub fn new(config: ApiConfig, fetch: F) -> Self {
        PlayerApi { config, fetch }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetch
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let url = self.config.players_url()?;
        let resp = self
            .fetch
            .send(ApiRequest::get(url))
            .await?
            .error_for_status("Failed to fetch players")?;
        let data: PlayersData = resp.data()?;
        console_logf!("{:?}", data.players);
        Ok(data.players)
    }

    pub async fn get_player(&self, id: PlayerId) -> Result<Player, ApiError> {
        let url = self.config.player_url(id)?;
        let resp = self
            .fetch
            .send(ApiRequest::get(url))
            .await?
            .error_for_status(format!("Failed to fetch player #{}", id))?;
        let data: PlayerData = resp.data()?;
        console_logf!("{:?}", data.player);
        Ok(data.player)
    }

    pub async fn create_player(&self, new_player: &NewPlayer) -> Result<Player, ApiError> {
        let url = self.config.players_url()?;
        let body = serde_json::to_string(new_player)?;
        let resp = self
            .fetch
            .send(ApiRequest::post_json(url, body))
            .await?
            .error_for_status("Failed to add a new player")?;
        let data: NewPlayerData = resp.data()?;
        console_logf!("New player added: {:?}", data.new_player);
        Ok(data.new_player)
    }

    pub async fn remove_player(&self, id: PlayerId) -> Result<(), ApiError> {
        let url = self.config.player_url(id)?;
        self.fetch
            .send(ApiRequest::delete(url))
            .await?
            .error_for_status(format!("Failed to remove player #{}", id))?;
        console_logf!("Player #{} has been removed from the roster", id);
        Ok(())
    }
}
