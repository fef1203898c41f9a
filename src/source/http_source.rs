use crate::{
    domain::BoardPayload,
    error::{BoardError, Result},
    source::DataSource,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the board payload with a single HTTP GET
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Creates a source whose requests give up after `timeout`
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<BoardPayload> {
        tracing::debug!(url = %self.url, "fetching board payload");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let payload: BoardPayload = serde_json::from_str(&body)?;

        Ok(payload)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned response on a local port and returns its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/board", addr)
    }

    #[tokio::test]
    async fn test_fetch_payload() {
        let url = serve_once(
            "200 OK",
            r#"{"users":[{"id":"usr-1","name":"Anoop","available":true}],
               "tickets":[{"id":"CAM-1","title":"A","tag":[],"userId":"usr-1","status":"Done","priority":2}]}"#,
        )
        .await;

        let source = HttpSource::with_timeout(url.clone(), Duration::from_secs(5)).unwrap();
        let payload = source.fetch().await.unwrap();

        assert_eq!(payload.users.len(), 1);
        assert_eq!(payload.tickets[0].priority, 2);
        assert_eq!(source.describe(), url);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let url = serve_once("503 Service Unavailable", "{}").await;

        let err = HttpSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, BoardError::HttpStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let url = serve_once("200 OK", "not json").await;

        let err = HttpSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, BoardError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpSource::new(format!("http://{}/board", addr))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::Fetch(_)));
    }
}
