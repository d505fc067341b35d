//! HTTP client for the random-profile source.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use roster_core::error::{Error, TransportError};
use roster_core::{NewUser, ProfileSource, Result};

/// The public random-profile endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://random-data-api.com/api/v2/users";

/// One profile as the external source shapes it.
#[derive(Debug, Deserialize)]
struct RandomProfile {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    date_of_birth: String,
    #[serde(default)]
    avatar: String,
}

impl RandomProfile {
    /// Map the source's field names onto creation input. The result carries
    /// no id; one is assigned if the profile is ever inserted.
    fn into_new_user(self) -> NewUser {
        NewUser {
            id: None,
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            avatar: self.avatar,
            phone: self.phone_number,
            birth_date: self.date_of_birth,
        }
    }
}

/// HTTP client for a random-profile source.
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RandomUserClient {
    /// Create a client for the given profile endpoint.
    pub fn new(base_url: Url) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base_url }
    }

    /// Returns the endpoint this client is configured for.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Handle a profile response, parsing the body or mapping the failure.
    async fn handle_response(&self, response: reqwest::Response) -> Result<RandomProfile> {
        let status = response.status();
        if status.is_success() {
            let profile = response.json::<RandomProfile>().await.map_err(transport)?;
            Ok(profile)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(Error::Transport(TransportError::Status {
                status: status.as_u16(),
                message,
            }))
        }
    }
}

/// Map a reqwest failure onto the transport error tree.
fn transport(err: reqwest::Error) -> Error {
    let inner = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(inner)
}

#[async_trait]
impl ProfileSource for RandomUserClient {
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn fetch_random(&self) -> Result<NewUser> {
        debug!("Fetching random profile");

        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(transport)?;

        let profile = self.handle_response(response).await?;
        Ok(profile.into_new_user())
    }
}
