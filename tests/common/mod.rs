//! Shared utilities for integration tests.

use std::net::SocketAddr;

use phonebook::config::PhonebookConfig;
use phonebook::{HttpServer, PersonStore, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: PersonStore,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a seeded server with static files disabled.
pub async fn start_server() -> TestServer {
    let mut config = PhonebookConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.static_files.enabled = false;
    start_server_with(config, PersonStore::seeded()).await
}

pub async fn start_server_with(config: PhonebookConfig, store: PersonStore) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, store.clone());
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
    }
}
