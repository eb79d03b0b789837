use crate::server::model::discord::{CurrentUser, PartialGuild};

/// Calls Discord's REST API on behalf of the user owning an OAuth token.
#[derive(Clone)]
pub struct DiscordClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DiscordClient {
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `base_url` - API root without trailing slash, e.g. `https://discord.com/api`
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Fetches the token owner's Discord ID from `GET /users/@me`.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Discord answered with a numeric user ID
    /// - `Ok(None)` - Discord rejected the token or returned no usable ID
    /// - `Err(reqwest::Error)` - Transport failure or malformed response body
    pub async fn current_user_id(&self, token: &str) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .http_client
            .get(format!("{}/users/@me", self.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        Ok(response.json::<CurrentUser>().await?.snowflake())
    }

    /// Fetches the guilds the token owner belongs to from `GET /users/@me/guilds`.
    ///
    /// # Returns
    /// - `Ok(Vec<PartialGuild>)` - Guilds in the order Discord returned them
    /// - `Err(reqwest::Error)` - Non-success status, transport failure, or malformed body
    pub async fn current_user_guilds(&self, token: &str) -> Result<Vec<PartialGuild>, reqwest::Error> {
        self.http_client
            .get(format!("{}/users/@me/guilds", self.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<PartialGuild>>()
            .await
    }
}
