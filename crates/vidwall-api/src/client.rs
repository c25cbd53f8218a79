// Cached device client.
//
// Wraps the raw JSON-RPC client with per-kind entity caches. Each cache
// slot is populated lazily by the first accessor that needs it and then
// served from memory until explicitly invalidated. Aux and screen
// destinations arrive in one device response, so their slots live under
// one lock and refresh together.

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

use crate::cache::CacheSlot;
use crate::error::Error;
use crate::model::{
    AuxDestination, DestinationFilter, DestinationList, ScreenContent, ScreenDestination, Source,
};
use crate::rpc::RpcClient;
use crate::transport::{DEFAULT_TIMEOUT, TransportConfig};

// ── Construction ────────────────────────────────────────────────────

/// Options for constructing a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Device JSON-RPC endpoint, e.g. `http://192.168.0.10:9999/`.
    pub url: Option<Url>,
    /// Per-call timeout.
    pub timeout: std::time::Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientOptions {
    pub fn new(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a [`Client`]. Fails with [`Error::MissingUrl`] if no
    /// endpoint was given.
    pub fn build(self) -> Result<Client, Error> {
        let url = self.url.ok_or(Error::MissingUrl)?;
        let transport = TransportConfig {
            timeout: self.timeout,
        };
        let rpc = RpcClient::new(url, &transport)?;
        Ok(Client::from_rpc(rpc))
    }
}

// ── Request params ──────────────────────────────────────────────────

#[derive(Serialize)]
struct NoParams {}

#[derive(Serialize)]
struct ListDestinationsParams {
    #[serde(rename = "type")]
    filter: i32,
}

#[derive(Serialize)]
struct ListContentParams {
    id: i32,
}

// ── Client ──────────────────────────────────────────────────────────

/// Aux and screen destination slots, behind one lock: the device
/// returns both kinds in a single `listDestinations` response, so a
/// refresh of either populates both atomically.
#[derive(Debug, Default)]
struct DestinationCaches {
    aux: CacheSlot<AuxDestination>,
    screens: CacheSlot<ScreenDestination>,
}

/// Cached client for one device.
///
/// Accessors either answer from an already-populated slot or perform
/// exactly one list call before answering. Holding the slot's mutex
/// across that call makes the refresh single-flight: concurrent callers
/// queue behind it and observe its single outcome. Callers always
/// receive owned copies, never references into cache state.
pub struct Client {
    rpc: RpcClient,
    sources: Mutex<CacheSlot<Source>>,
    destinations: Mutex<DestinationCaches>,
}

impl Client {
    fn from_rpc(rpc: RpcClient) -> Self {
        Self {
            rpc,
            sources: Mutex::new(CacheSlot::default()),
            destinations: Mutex::new(DestinationCaches::default()),
        }
    }

    /// The device endpoint URL.
    pub fn url(&self) -> &Url {
        self.rpc.url()
    }

    // ── Raw list calls (uncached) ────────────────────────────────────

    /// `listSources`: every source the device knows about.
    pub async fn list_sources(&self) -> Result<Vec<Source>, Error> {
        self.rpc.invoke("listSources", NoParams {}).await
    }

    /// `listDestinations`, narrowed by `filter`.
    pub async fn list_destinations(
        &self,
        filter: DestinationFilter,
    ) -> Result<DestinationList, Error> {
        let params = ListDestinationsParams {
            filter: filter.wire_value(),
        };
        self.rpc.invoke("listDestinations", params).await
    }

    /// `listContent`: one screen's layered content, with wire sentinels
    /// normalized before it is returned.
    pub async fn list_content(&self, screen_id: i32) -> Result<ScreenContent, Error> {
        let params = ListContentParams { id: screen_id };
        let mut content: ScreenContent = self.rpc.invoke("listContent", params).await?;
        content.normalize();
        Ok(content)
    }

    // ── Cached source accessors ──────────────────────────────────────

    /// All sources, from cache, in unspecified order.
    pub async fn sources(&self) -> Result<Vec<Source>, Error> {
        let mut slot = self.sources.lock().await;
        self.refresh_sources_if_needed(&mut slot).await?;
        Ok(slot.values())
    }

    /// One source by id, from cache.
    pub async fn source(&self, id: i32) -> Result<Source, Error> {
        let mut slot = self.sources.lock().await;
        self.refresh_sources_if_needed(&mut slot).await?;
        slot.get(id).cloned().ok_or(Error::NotFound(id))
    }

    /// Drop the source cache; the next accessor refreshes it.
    pub async fn invalidate_sources(&self) {
        self.sources.lock().await.invalidate();
    }

    // ── Cached destination accessors ─────────────────────────────────

    /// All auxiliary destinations, from cache, in unspecified order.
    pub async fn aux_destinations(&self) -> Result<Vec<AuxDestination>, Error> {
        let mut caches = self.destinations.lock().await;
        self.refresh_destinations_if_needed(&mut caches).await?;
        Ok(caches.aux.values())
    }

    /// One auxiliary destination by id, from cache.
    pub async fn aux_destination(&self, id: i32) -> Result<AuxDestination, Error> {
        let mut caches = self.destinations.lock().await;
        self.refresh_destinations_if_needed(&mut caches).await?;
        caches.aux.get(id).cloned().ok_or(Error::NotFound(id))
    }

    /// All screen destinations, from cache, in unspecified order.
    pub async fn screen_destinations(&self) -> Result<Vec<ScreenDestination>, Error> {
        let mut caches = self.destinations.lock().await;
        self.refresh_destinations_if_needed(&mut caches).await?;
        Ok(caches.screens.values())
    }

    /// One screen destination by id, from cache.
    pub async fn screen_destination(&self, id: i32) -> Result<ScreenDestination, Error> {
        let mut caches = self.destinations.lock().await;
        self.refresh_destinations_if_needed(&mut caches).await?;
        caches.screens.get(id).cloned().ok_or(Error::NotFound(id))
    }

    /// Drop both destination caches; the next accessor refreshes them.
    pub async fn invalidate_destinations(&self) {
        let mut caches = self.destinations.lock().await;
        caches.aux.invalidate();
        caches.screens.invalidate();
    }

    /// Drop every cache slot.
    pub async fn invalidate(&self) {
        self.invalidate_sources().await;
        self.invalidate_destinations().await;
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Populate the source slot if it has never been populated. On
    /// failure the slot is left unpopulated so the next call retries.
    async fn refresh_sources_if_needed(&self, slot: &mut CacheSlot<Source>) -> Result<(), Error> {
        if slot.is_populated() {
            return Ok(());
        }

        let sources = self.list_sources().await?;
        debug!(count = sources.len(), "populated source cache");
        slot.install(sources);
        Ok(())
    }

    /// Populate both destination slots from one `listDestinations`
    /// call if either has never been populated. On failure both are
    /// left unpopulated so the next call retries.
    async fn refresh_destinations_if_needed(
        &self,
        caches: &mut DestinationCaches,
    ) -> Result<(), Error> {
        if caches.aux.is_populated() && caches.screens.is_populated() {
            return Ok(());
        }

        let list = self.list_destinations(DestinationFilter::All).await?;
        debug!(
            aux = list.aux_destinations.len(),
            screens = list.screen_destinations.len(),
            "populated destination caches"
        );
        caches.aux.install(list.aux_destinations);
        caches.screens.install(list.screen_destinations);
        Ok(())
    }
}
