//! Test server wrapper that starts the speech service on a random port

use std::net::SocketAddr;

use reo_config::Config;
use reo_server::Server;
use tokio_util::sync::CancellationToken;

pub const SPEECH_PATH: &str = "/functions/v1/synthesize-speech";

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config)?;
        let (addr, shutdown) = super::spawn(server.into_router()).await?;

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a JSON body to the speech endpoint with an optional bearer token
    pub async fn speak(&self, token: Option<&str>, body: &serde_json::Value) -> reqwest::Response {
        let mut request = self.client.post(self.url(SPEECH_PATH)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.unwrap()
    }

    /// POST a raw JSON document to the speech endpoint with a bearer token
    pub async fn speak_raw(&self, token: &str, body: &str) -> reqwest::Response {
        self.client
            .post(self.url(SPEECH_PATH))
            .bearer_auth(token)
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .unwrap()
    }

    /// Server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
