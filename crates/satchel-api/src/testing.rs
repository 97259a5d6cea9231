//! Shared helpers for the in-process HTTP test server.
//!
//! Only compiled for tests: the client and checkout suites both need an
//! ephemeral axum server plus a way to observe what the "backend" saw.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;

/// Serves a router on an ephemeral local port, returning the base URL.
pub(crate) async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{}", addr)
}

/// Counts how many requests reached a handler.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub(crate) fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Captures the JSON body the sale endpoint received.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedSale(Arc<Mutex<Option<serde_json::Value>>>);

impl CapturedSale {
    pub(crate) fn record(&self, body: serde_json::Value) {
        *self.0.lock().expect("capture lock") = Some(body);
    }

    pub(crate) fn take(&self) -> Option<serde_json::Value> {
        self.0.lock().expect("capture lock").take()
    }
}
