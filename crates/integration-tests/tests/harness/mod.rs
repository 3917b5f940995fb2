//! Shared fixtures: mock upstreams and a server on an ephemeral port
#![allow(dead_code)]

pub mod config;
pub mod mock_llm;
pub mod mock_tts;
pub mod server;

use std::net::SocketAddr;

use axum::Router;
use tokio_util::sync::CancellationToken;

/// Serve `app` on an ephemeral local port until `shutdown` is cancelled
pub async fn spawn(app: Router) -> anyhow::Result<(SocketAddr, CancellationToken)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_clone.cancelled().await;
            })
            .await
            .ok();
    });

    Ok((addr, shutdown))
}

/// Speech server wired to its three mock upstreams
pub struct Stack {
    pub identity: mock_identity::MockIdentity,
    pub llm: mock_llm::MockLlm,
    pub tts: mock_tts::MockTts,
    pub server: server::TestServer,
}

impl Stack {
    /// Start healthy upstreams translating everything to `translation`
    pub async fn start(translation: &str) -> anyhow::Result<Self> {
        Self::start_with(
            mock_identity::MockIdentity::start().await?,
            mock_llm::MockLlm::start_with_response(translation).await?,
            mock_tts::MockTts::start().await?,
            |builder| builder,
        )
        .await
    }

    /// Start the server against the given upstreams, adjusting the config first
    pub async fn start_with(
        identity: mock_identity::MockIdentity,
        llm: mock_llm::MockLlm,
        tts: mock_tts::MockTts,
        configure: impl FnOnce(config::ConfigBuilder) -> config::ConfigBuilder,
    ) -> anyhow::Result<Self> {
        let config = configure(config::ConfigBuilder::new().with_upstreams(&identity, &llm, &tts)).build();
        let server = server::TestServer::start(config).await?;

        Ok(Self {
            identity,
            llm,
            tts,
            server,
        })
    }

    /// Upstream call counts as `(identity, llm, tts)`
    pub fn call_counts(&self) -> (u32, u32, u32) {
        (
            self.identity.request_count(),
            self.llm.completion_count(),
            self.tts.request_count(),
        )
    }
}
