//! HTTP implementation of the email resource client.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::response::error_message;
use crate::model::{CreateAck, Email, EmailId, EmailUpdate, Mailbox, NewEmail};
use crate::{Config, Error, Result};

/// Client for the backend's `/emails` endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    get_retries: u32,
    retry_delay: Duration,
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL {:?} cannot carry a path",
                config.base_url
            )));
        }
        // Keep the configured path prefix when joining endpoint paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            get_retries: config.get_retries,
            retry_delay: config.retry_delay(),
        })
    }

    /// Root URL the endpoints are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists the emails in `mailbox`, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not an email array.
    pub async fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>> {
        self.get_json(&format!("emails/{mailbox}")).await
    }

    /// Fetches a single email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not an email.
    pub async fn get_email(&self, id: EmailId) -> Result<Email> {
        self.get_json(&format!("emails/{id}")).await
    }

    /// Asks the backend to create and deliver an email.
    ///
    /// Recipients are not validated locally; the backend rejects malformed
    /// addresses with an [`Error::Api`] carrying its message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_email(&self, email: &NewEmail) -> Result<CreateAck> {
        let url = self.endpoint("emails")?;
        debug!("POST {}", url);
        let response = self.http.post(url).json(email).send().await?;
        let response = check_status(response).await?;

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CreateAck::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Changes only the flags named in `update`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_email(&self, id: EmailId, update: &EmailUpdate) -> Result<()> {
        let url = self.endpoint(&format!("emails/{id}"))?;
        debug!("PUT {} {:?}", url, update);
        let response = self.http.put(url).json(update).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// GETs and decodes a JSON resource, retrying transient failures.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let mut attempt = 0;
        loop {
            match self.get_once(url.clone()).await {
                Err(e) if e.is_transient() && attempt < self.get_retries => {
                    attempt += 1;
                    warn!("GET {} failed ({}), retry {}/{}", url, e, attempt, self.get_retries);
                    tokio::time::sleep(self.retry_delay).await;
                }
                result => return result,
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint {path:?}: {e}")))
    }
}

/// Turns a non-success response into [`Error::Api`].
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}
