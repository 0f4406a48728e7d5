use crate::app_config::AppConfig;
use crate::hitron::{DecodeError, decode};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Client for the local API of a Hitron CODA cable modem.
///
/// The session cookie handed out by [`CableModem::login`] is kept by the underlying client, so
/// a single instance must be used for a login and the requests that follow it.
#[derive(Debug, Clone)]
pub struct CableModem {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Credentials {
    username: String,
    password: String,
}

/// Request payloads the device accepts.
#[derive(Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Form(Vec<(&'static str, String)>),
    Raw(Vec<u8>),
}

/// A 200 response. The body is untouched, decoding is up to the caller.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

pub fn new_client(config: &AppConfig) -> Result<CableModem, HitronError> {
    // The device answers an expired session with a redirect to its login page
    let client = Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::none())
        .timeout(config.timeout())
        .build()?;

    Ok(CableModem {
        client,
        base_url: format!("http://{}/1/Device", config.host()),
        credentials: Credentials {
            username: config.username().to_string(),
            password: config.password().to_string(),
        },
    })
}

impl CableModem {
    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a request and returns the response when the device answers with 200. Any other
    /// status is an error carrying the response.
    #[instrument(skip(self, body))]
    pub async fn send(&self, method: Method, path: &str, body: Body) -> Result<RawResponse, HitronError> {
        let url = self.url(path);
        debug!("➡️ {} {}", method, url);

        let request = self.client.request(method, &url);
        let request = match body {
            Body::Empty => request,
            Body::Form(fields) => request.form(&fields),
            Body::Raw(bytes) => request.body(bytes),
        };

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        trace!("⬅️ {} {}", status, String::from_utf8_lossy(&body));

        if status != StatusCode::OK {
            return Err(HitronError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
                headers,
            });
        }

        Ok(RawResponse { status, headers, body })
    }

    /// Sends a request and decodes the response body as `T`.
    pub async fn send_and_decode<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> Result<T, HitronError> {
        let response = self.send(method, path, body).await?;
        Ok(decode(&response.body)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HitronError> {
        self.send_and_decode(Method::GET, path, Body::Empty).await
    }
}

#[derive(Error, Debug)]
pub enum HitronError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("failed with status {status}: {body} (headers: {headers:?})")]
    UnexpectedStatus {
        status: StatusCode,
        body: String,
        headers: HeaderMap,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to encode credentials: {0}")]
    Credentials(#[from] serde_json::Error),
    #[error("failed to retrieve CSRF token: {0}")]
    Csrf(#[source] Box<HitronError>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::CmVersionInfo;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn url_joins_paths_to_the_device_root() -> Result<(), HitronError> {
        let modem = new_client(&AppConfigBuilder::new().build())?;

        assert_eq!(modem.url("/CM/Version"), "http://192.168.0.1/1/Device/CM/Version");
        assert_eq!(modem.url("Router/SysInfo"), "http://192.168.0.1/1/Device/Router/SysInfo");

        Ok(())
    }

    #[tokio::test]
    async fn send_returns_the_raw_response() -> Result<(), HitronError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/1/Device/CM/Version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errCode":"000"}"#)
            .create_async()
            .await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let response = modem.send(Method::GET, "/CM/Version", Body::Empty).await?;

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.headers["content-type"], "application/json");
        assert_eq!(response.body, br#"{"errCode":"000"}"#.to_vec());

        Ok(())
    }

    #[tokio::test]
    async fn send_encodes_forms() -> Result<(), HitronError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/1/Device/CM/Reboot")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("model".to_string(), r#"{"reboot":1}"#.to_string()),
                Matcher::UrlEncoded("csrf".to_string(), "token".to_string()),
            ]))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let form = vec![("model", r#"{"reboot":1}"#.to_string()), ("csrf", "token".to_string())];
        modem.send(Method::POST, "/CM/Reboot", Body::Form(form)).await?;

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn redirects_are_not_followed() -> Result<(), HitronError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/1/Device/CM/Version")
            .with_status(302)
            .with_header("location", "/login.html")
            .create_async()
            .await;
        let login_page = server.mock("GET", "/login.html").expect(0).create_async().await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let result = modem.get::<CmVersionInfo>("/CM/Version").await;

        mock.assert_async().await;
        login_page.assert_async().await;
        match result {
            Err(HitronError::UnexpectedStatus { status, headers, .. }) => {
                assert_eq!(status, StatusCode::FOUND);
                assert_eq!(headers["location"], "/login.html");
            }
            other => panic!("expected an unexpected status error, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn non_200_bodies_are_not_decoded() -> Result<(), HitronError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/1/Device/CM/Version")
            .with_status(500)
            .with_body("Internal error")
            .create_async()
            .await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let err = modem.get::<CmVersionInfo>("/CM/Version").await.expect_err("expected an error");

        assert!(err.to_string().starts_with("failed with status 500 Internal Server Error: Internal error"));

        Ok(())
    }

    #[tokio::test]
    async fn decode_errors_carry_the_record_and_body() -> Result<(), HitronError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/1/Device/CM/Version")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let modem = new_client(&AppConfigBuilder::new().server_url(server.url()).build())?;
        let err = modem.get::<CmVersionInfo>("/CM/Version").await.expect_err("expected an error");

        let HitronError::Decode(err) = err else {
            panic!("expected a decode error, got {err:?}");
        };
        assert_eq!(err.record, "CmVersionInfo");
        assert_eq!(err.body, "<html>");

        Ok(())
    }

    #[tokio::test]
    async fn requests_time_out() -> Result<(), HitronError> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("local address");
        // Accept the connection but never answer
        let server = tokio::spawn(async move {
            let _connection = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let config = AppConfigBuilder::new()
            .server_url(address.to_string())
            .timeout(Duration::from_millis(100))
            .build();
        let err = new_client(&config)?.get::<CmVersionInfo>("/CM/Version").await.expect_err("expected a timeout");

        assert!(matches!(err, HitronError::RequestError(ref e) if e.is_timeout()), "unexpected error: {err:?}");
        server.abort();

        Ok(())
    }
}
