use crate::domain::Status;
use crate::hitron::client::{Body, CableModem, HitronError};
use reqwest::Method;
use tracing::{info, instrument};

impl CableModem {
    /// Fetches a fresh CSRF token, every state-changing request needs one.
    async fn csrf_token(&self) -> Result<String, HitronError> {
        let csrf = self.users_csrf().await.map_err(|e| HitronError::Csrf(Box::new(e)))?;
        Ok(csrf.csrf)
    }

    /// Reboots the modem. The returned status is the device's answer to the request, the reboot
    /// itself happens after the response.
    #[instrument(skip(self))]
    pub async fn cm_reboot(&self) -> Result<Status, HitronError> {
        let csrf = self.csrf_token().await?;
        let form = vec![("model", r#"{"reboot":1}"#.to_string()), ("csrf", csrf)];

        let status: Status = self.send_and_decode(Method::POST, "/CM/Reboot", Body::Form(form)).await?;
        info!("🔄 Requested a reboot: {:?}", status);
        Ok(status)
    }

    /// Clears the cable modem's event log.
    #[instrument(skip(self))]
    pub async fn cm_clear_log(&self) -> Result<Status, HitronError> {
        let csrf = self.csrf_token().await?;
        let form = vec![
            ("model", "[]".to_string()),
            ("csrf", csrf),
            ("_method", "PUT".to_string()),
        ];

        let status: Status = self.send_and_decode(Method::POST, "/CM/Log", Body::Form(form)).await?;
        info!("🧹 Cleared the event log: {:?}", status);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use crate::app_config::AppConfigBuilder;
    use crate::domain::Status;
    use crate::hitron::{HitronError, new_client};
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    async fn csrf_mock(server: &mut Server) -> mockito::Mock {
        server
            .mock("GET", "/1/Device/Users/CSRF")
            .with_status(200)
            .with_body(r#"{"errCode":"000","errMsg":"","CSRF":"Y3NyZg"}"#)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn cm_reboot_sends_the_csrf_token() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        let csrf = csrf_mock(&mut server).await;
        let reboot = server
            .mock("POST", "/1/Device/CM/Reboot")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("model".to_string(), r#"{"reboot":1}"#.to_string()),
                Matcher::UrlEncoded("csrf".to_string(), "Y3NyZg".to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"errCode":"000","errMsg":""}"#)
            .create_async()
            .await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let status = modem.cm_reboot().await?;

        csrf.assert_async().await;
        reboot.assert_async().await;
        assert_eq!(status, Status::success());

        Ok(())
    }

    #[tokio::test]
    async fn cm_clear_log_puts_an_empty_log() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        csrf_mock(&mut server).await;
        let clear = server
            .mock("POST", "/1/Device/CM/Log")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("model".to_string(), "[]".to_string()),
                Matcher::UrlEncoded("csrf".to_string(), "Y3NyZg".to_string()),
                Matcher::UrlEncoded("_method".to_string(), "PUT".to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"errCode":"001","errMsg":"Permission denied"}"#)
            .create_async()
            .await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let status = modem.cm_clear_log().await?;

        clear.assert_async().await;
        assert!(!status.is_success());
        assert_eq!(status.to_string(), "Error 001: Permission denied");

        Ok(())
    }

    #[tokio::test]
    async fn csrf_failures_are_reported_as_such() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/1/Device/Users/CSRF")
            .with_status(302)
            .with_header("location", "/login.html")
            .create_async()
            .await;
        let reboot = server.mock("POST", "/1/Device/CM/Reboot").expect(0).create_async().await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let err = modem.cm_reboot().await.expect_err("expected the reboot to fail");

        reboot.assert_async().await;
        assert!(matches!(err, HitronError::Csrf(_)), "unexpected error: {err:?}");
        assert!(err.to_string().starts_with("failed to retrieve CSRF token: failed with status 302"));

        Ok(())
    }
}
