//! Local stand-ins for the contact relays, used during development and by
//! integration tests.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::{net::TcpListener, sync::Mutex};

pub mod function;
pub mod web3forms;

/// Submissions received by a testing server.
#[derive(Debug)]
pub struct Inbox<T>(Arc<Mutex<Vec<T>>>);

impl<T> Inbox<T> {
    async fn push(&self, item: T) {
        self.0.lock().await.push(item);
    }
}

impl<T: Clone> Inbox<T> {
    pub async fn items(&self) -> Vec<T> {
        self.0.lock().await.clone()
    }
}

impl<T> Clone for Inbox<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Inbox<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

/// Serves `router` on an ephemeral port on localhost in the background.
pub async fn spawn(router: Router) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .context("Failed to bind testing server")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(addr)
}

async fn serve(addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}
