// Cloud authentication flow
//
// Two-step handshake: the Enlighten session portal takes the account
// email/password and returns a session id; the Entrez auth portal exchanges
// that session id plus the gateway serial for a bearer token. Both values
// are ephemeral inside `login()` — only the token survives, in memory, for
// the lifetime of the client.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::{EnvoyClient, body_preview, decode_json};
use crate::error::Error;
use crate::models::{SessionResponse, TokenRequest};

impl EnvoyClient {
    /// Authenticate against the cloud portals and store the bearer token.
    ///
    /// On failure the client stays unauthenticated and no state changes.
    /// No verification call is made against the gateway afterwards; callers
    /// wanting proof the token works can follow up with
    /// [`system_info()`](EnvoyClient::system_info).
    pub async fn login(&self, password: &SecretString) -> Result<(), Error> {
        if self.config().username.is_empty() {
            return Err(Error::MissingField { field: "username" });
        }
        if password.expose_secret().is_empty() {
            return Err(Error::MissingField { field: "password" });
        }

        let session_id = self.request_session_id(password).await?;
        let token = self.request_auth_token(&session_id).await?;
        self.set_token(token);

        debug!("login successful");
        Ok(())
    }

    /// POST the login form to the session portal and extract the session id.
    async fn request_session_id(&self, password: &SecretString) -> Result<String, Error> {
        let url = self.config().session_portal.clone();
        debug!("requesting session at {url}");

        let form = [
            ("user[email]", self.config().username.as_str()),
            ("user[password]", password.expose_secret()),
        ];
        let resp = self.http().post(url).form(&form).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("session login failed (HTTP {status}): {}", body_preview(&body)),
            });
        }

        let session: SessionResponse = decode_json(&body)?;

        if session.message != "success" {
            return Err(Error::Authentication {
                message: format!("session portal replied: {}", session.message),
            });
        }
        if session.session_id.is_empty() {
            return Err(Error::EmptySessionId);
        }

        Ok(session.session_id)
    }

    /// Exchange the session id + serial for a bearer token.
    ///
    /// The portal answers with the raw token text, not JSON.
    async fn request_auth_token(&self, session_id: &str) -> Result<SecretString, Error> {
        if session_id.is_empty() {
            return Err(Error::MissingField {
                field: "session id",
            });
        }
        if self.config().serial.is_empty() {
            return Err(Error::MissingField {
                field: "serial number",
            });
        }

        let request = TokenRequest {
            session_id: session_id.to_owned(),
            serial_num: self.config().serial.clone(),
            username: self.config().username.clone(),
        };

        let url = self.config().auth_portal.clone();
        debug!("requesting token at {url}");

        let resp = self.http().post(url).json(&request).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("token exchange failed (HTTP {status}): {}", body_preview(&body)),
            });
        }

        let token = body.trim();
        if token.is_empty() {
            return Err(Error::Authentication {
                message: "auth portal returned an empty token".into(),
            });
        }

        Ok(SecretString::from(token.to_owned()))
    }
}
