use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client for vendor calls, reusing pooled connections
///
/// There is no retry layer; the timeout is the only bound on a single
/// upstream call.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(30)))
                .tcp_nodelay(true)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
