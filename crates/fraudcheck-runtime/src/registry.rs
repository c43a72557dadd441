//! In-memory stub registry
//!
//! Holds the canned responses served while stub routing is active, keyed by
//! endpoint, plus the delay applied before each stubbed response. Shared by
//! every in-flight request and mutated only through test setup.

use crate::error::{Result, RuntimeError};
use crate::stub::StubEntry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Largest accepted stub response delay, in milliseconds
pub const MAX_STUB_DELAY_MS: i64 = 99_999;

/// Concurrent endpoint -> stub map with a global response delay
///
/// Registering a stub for an endpoint replaces any previous one.
pub struct StubRegistry {
    /// Map of endpoint -> stub
    entries: RwLock<HashMap<String, StubEntry>>,

    delay_ms: AtomicU64,
}

impl StubRegistry {
    /// Create an empty registry with no delay
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            delay_ms: AtomicU64::new(0),
        }
    }

    /// Register a stub, returning the one it replaced
    pub async fn put(&self, entry: StubEntry) -> Option<StubEntry> {
        info!(
            "Setting stub for url = {}, stub = {}",
            entry.endpoint, entry.response
        );
        let mut entries = self.entries.write().await;
        entries.insert(entry.endpoint.clone(), entry)
    }

    pub async fn get(&self, endpoint: &str) -> Option<StubEntry> {
        let entries = self.entries.read().await;
        entries.get(endpoint).cloned()
    }

    /// Snapshot of every registered stub, ordered by endpoint
    pub async fn list(&self) -> Vec<StubEntry> {
        let entries = self.entries.read().await;
        let mut snapshot: Vec<StubEntry> = entries.values().cloned().collect();
        snapshot.sort_by(|a, b| a.endpoint.cmp(&b.endpoint));
        snapshot
    }

    /// Remove every stub
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Set the delay applied before each stubbed response
    ///
    /// Accepts `0..=99999` milliseconds.
    pub fn set_delay(&self, millis: i64) -> Result<()> {
        if !(0..=MAX_STUB_DELAY_MS).contains(&millis) {
            return Err(RuntimeError::Validation(format!(
                "stub delay must be between 0 and {} ms, got {}",
                MAX_STUB_DELAY_MS, millis
            )));
        }

        self.delay_ms.store(millis as u64, Ordering::SeqCst);
        info!("Setting Delay to respond from VerificationService for {} ms", millis);
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_millis())
    }

    pub fn delay_millis(&self) -> u64 {
        self.delay_ms.load(Ordering::SeqCst)
    }
}

impl Default for StubRegistry {
    fn default() -> Self {
        Self::new()
    }
}
