use crate::hitron::client::{Body, CableModem, HitronError};
use reqwest::Method;
use tracing::{info, instrument};

impl CableModem {
    /// Starts a session. The device answers with a session cookie that is replayed on every
    /// request after this one.
    #[instrument(skip(self))]
    pub async fn login(&self) -> Result<(), HitronError> {
        let model = serde_json::to_string(self.credentials())?;
        self.send(Method::POST, "/Users/Login", Body::Form(vec![("model", model)])).await?;

        info!("🔑 Logged in");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), HitronError> {
        self.send(Method::POST, "/Users/Logout", Body::Empty).await?;

        info!("👋 Logged out");
        Ok(())
    }
}
