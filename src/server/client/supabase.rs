use crate::server::model::session::SessionUser;

/// Validates session tokens against Supabase's `GET /auth/v1/user`.
#[derive(Clone)]
pub struct SupabaseAuthClient {
    http_client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl SupabaseAuthClient {
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `base_url` - Project URL without trailing slash, e.g. `https://xyz.supabase.co`
    /// - `service_key` - Service role key sent as the `apikey` header
    pub fn new(http_client: reqwest::Client, base_url: String, service_key: String) -> Self {
        Self {
            http_client,
            base_url,
            service_key,
        }
    }

    /// Resolves the user that owns a session access token.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - Token is valid
    /// - `Ok(None)` - Supabase rejected the token
    /// - `Err(reqwest::Error)` - Transport failure or malformed response body
    pub async fn get_user(&self, access_token: &str) -> Result<Option<SessionUser>, reqwest::Error> {
        let response = self
            .http_client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        Ok(Some(response.json::<SessionUser>().await?))
    }
}
