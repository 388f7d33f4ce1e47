//! Generic HTTP+JSON client bound to a resolved sub-application endpoint

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::discovery::HubTransport;
use crate::models::{GgError, GgResult};

/// A sub-application that can be looked up by name in the hub registry
pub trait SubApp: Sized {
    /// Key under `subApps` in the registry
    const NAME: &'static str;

    fn from_client(client: SubAppClient) -> Self;
}

/// Client for one sub-application's web server
///
/// Holds only the endpoint and a transport handle; it does not reference the
/// session that resolved it.
#[derive(Debug, Clone)]
pub struct SubAppClient {
    endpoint: String,
    base_url: String,
    transport: HubTransport,
}

impl SubAppClient {
    pub fn new(endpoint: impl Into<String>, transport: HubTransport) -> Self {
        let endpoint = endpoint.into();
        let base_url = transport.base_url(&endpoint);
        Self {
            endpoint,
            base_url,
            transport,
        }
    }

    /// Endpoint as reported by the hub (`host:port`)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &HubTransport {
        &self.transport
    }

    /// Absolute URL for `path`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GgResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let request = self.transport.http_client().get(&url);
        self.send_json(request, url).await
    }

    /// PUT `body` as JSON to `path` and decode the JSON response
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> GgResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PUT {}", url);

        let request = self.transport.http_client().put(&url).json(body);
        self.send_json(request, url).await
    }

    /// PUT `path` with no body, ignoring the response body
    pub async fn put(&self, path: &str) -> GgResult<()> {
        let url = self.url(path);
        debug!("PUT {}", url);

        self.transport
            .http_client()
            .put(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| GgError::Request { url, source })?;

        Ok(())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: String,
    ) -> GgResult<T> {
        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| GgError::Request {
                url: url.clone(),
                source,
            })?;

        let body = response.text().await.map_err(|source| GgError::Request {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| GgError::ResponseMalformed { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::TransportOptions;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SubAppClient {
        let transport = HubTransport::new(&TransportOptions::plain_http()).unwrap();
        SubAppClient::new(server.address().to_string(), transport)
    }

    #[test]
    fn test_urls() {
        let transport = HubTransport::new(&TransportOptions::default()).unwrap();
        let client = SubAppClient::new("127.0.0.1:8080", transport);

        assert_eq!(client.endpoint(), "127.0.0.1:8080");
        assert_eq!(client.base_url(), "https://127.0.0.1:8080");
        assert_eq!(client.url("/mode"), "https://127.0.0.1:8080/mode");
        assert_eq!(client.url("mode"), "https://127.0.0.1:8080/mode");
    }

    #[tokio::test]
    async fn test_get_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/mode"))
            .respond_with(ResponseTemplate::new(200).set_body_json("classic"))
            .mount(&mock_server)
            .await;

        let mode: String = client_for(&mock_server).get_json("/mode").await.unwrap();
        assert_eq!(mode, "classic");
    }

    #[tokio::test]
    async fn test_put_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/settings"))
            .and(body_json(serde_json::json!({ "muted": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply: serde_json::Value = client_for(&mock_server)
            .put_json("/settings", &serde_json::json!({ "muted": true }))
            .await
            .unwrap();
        assert_eq!(reply["ok"], true);
    }

    #[tokio::test]
    async fn test_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/mode/stream"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).put("/mode/stream").await.unwrap_err();
        assert!(matches!(err, GgError::Request { .. }));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/mode"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .get_json::<serde_json::Value>("/mode")
            .await
            .unwrap_err();
        assert!(matches!(err, GgError::ResponseMalformed { .. }));
    }
}
