use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{FetchError, GenerateError};
use crate::parse::{self, schema::SchemaDocument};

use super::SchemaSource;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches schema documents over HTTP with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpSchemaSource {
    client: Client,
}

impl HttpSchemaSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("rfgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl SchemaSource for HttpSchemaSource {
    fn fetch(&self, url: &str) -> Result<SchemaDocument, GenerateError> {
        log::debug!("GET {url}");
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;

        if !status.is_success() {
            log::error!("GET {url} returned {status}:\n{body}");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        parse::from_json(&body).map_err(|e| {
            log::error!("error with data from {url}:\n{body}");
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The blocking client owns its own runtime, so it has to run off the
    // async test thread.
    async fn fetch_blocking(url: String) -> Result<SchemaDocument, GenerateError> {
        tokio::task::spawn_blocking(move || -> Result<SchemaDocument, GenerateError> {
            HttpSchemaSource::new()?.fetch(&url)
        })
        .await
        .expect("fetch task panicked")
    }

    async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetches_schema_document() {
        let server = serve(
            "/schemas/v1/Thing.json",
            ResponseTemplate::new(200)
                .set_body_string(r#"{"definitions": {"Thing": {"type": "object"}}}"#),
        )
        .await;

        let doc = fetch_blocking(format!("{}/schemas/v1/Thing.json", server.uri()))
            .await
            .unwrap();
        assert!(doc.definition("Thing").is_some());
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let server = serve(
            "/schemas/v1/Missing.json",
            ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"),
        )
        .await;
        let url = format!("{}/schemas/v1/Missing.json", server.uri());

        let err = fetch_blocking(url.clone()).await.unwrap_err();
        match err {
            GenerateError::Fetch(FetchError::Status {
                url: failed,
                status,
            }) => {
                assert_eq!(failed, url);
                assert_eq!(status, 404);
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let server = serve(
            "/schemas/v1/Thing.json",
            ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
        )
        .await;

        let err = fetch_blocking(format!("{}/schemas/v1/Thing.json", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::Parse(ParseError::Json(_))));
    }
}
