//! Session lifecycle management.
//!
//! A session is one [`McpServer`] value with its own tool router, created by
//! [`SessionFactory::create`] for every streaming connection or stateless
//! request. Each session carries a [`SessionGuard`]; when the transport drops
//! the last handle to the session, the guard releases it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tracing::info;

use super::config::Config;
use super::error::Result;
use super::server::McpServer;
use super::upstream::CoinGeckoClient;
use crate::domains::tools::ToolRegistry;

#[derive(Debug, Default)]
struct SessionStats {
    next_id: AtomicU64,
    active: AtomicUsize,
}

/// Builds isolated sessions that share only immutable state.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    config: Arc<Config>,
    client: Arc<CoinGeckoClient>,
    stats: Arc<SessionStats>,
}

impl SessionFactory {
    /// Create a factory from configuration.
    ///
    /// Fails when the tool table contains duplicate names or the upstream
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        ToolRegistry::ensure_unique_names()?;

        let client = CoinGeckoClient::new(
            &config.upstream,
            config.credentials.coingecko_api_key.clone(),
        )?;

        Ok(Self::with_client(Arc::new(config), Arc::new(client)))
    }

    /// Create a factory around an existing client.
    pub fn with_client(config: Arc<Config>, client: Arc<CoinGeckoClient>) -> Self {
        Self {
            config,
            client,
            stats: Arc::new(SessionStats::default()),
        }
    }

    /// Create a fresh session with every tool registered.
    pub fn create(&self) -> McpServer {
        let id = self.stats.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let active = self.stats.active.fetch_add(1, Ordering::AcqRel) + 1;
        info!(session = id, active, "Session created");

        let guard = SessionGuard {
            id,
            stats: self.stats.clone(),
        };
        McpServer::new(self.config.clone(), self.client.clone(), guard)
    }

    /// Number of sessions that have been created and not yet released.
    pub fn active_sessions(&self) -> usize {
        self.stats.active.load(Ordering::Acquire)
    }

    /// Shared configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Shared upstream client.
    pub fn client(&self) -> &Arc<CoinGeckoClient> {
        &self.client
    }
}

/// Releases a session when dropped.
#[derive(Debug)]
pub struct SessionGuard {
    id: u64,
    stats: Arc<SessionStats>,
}

impl SessionGuard {
    /// Sequence number of this session within its factory.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let active = self.stats.active.fetch_sub(1, Ordering::AcqRel) - 1;
        info!(session = self.id, active, "Session released");
    }
}
