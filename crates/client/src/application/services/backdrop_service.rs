//! Backdrop resolution.
//!
//! Every position change starts a resolution pass that walks a fixed
//! fallback chain until one source yields a usable image:
//!
//! 1. street imagery at the exact coordinates, probing four headings
//! 2. street imagery at the nearest prefecture's landmark
//! 3. the bundled image for the nearest prefecture, if it exists
//! 4. the global default backdrop
//!
//! Passes race: a new pass bumps a generation counter and a finishing pass
//! only publishes its result if no newer pass has started since. A stale
//! pass is discarded whole, so the screen never flips back to an older
//! position's backdrop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use aikata_domain::{Address, Backdrop, GeoPosition, Prefecture};

use crate::ports::{BackgroundCatalogPort, ReverseGeocodePort, StreetImageryPort};

/// Headings probed at each position, in probe order.
pub const PROBE_HEADINGS: [u16; 4] = [0, 90, 180, 270];

/// Everything the screen needs to render the location layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropSnapshot {
    pub backdrop: Backdrop,
    pub prefecture: Option<&'static Prefecture>,
    pub address: Option<Address>,
    pub loading: bool,
}

impl Default for BackdropSnapshot {
    fn default() -> Self {
        Self {
            backdrop: Backdrop::Default,
            prefecture: None,
            address: None,
            loading: false,
        }
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The pass was still the latest and its snapshot was published.
    Applied(BackdropSnapshot),
    /// A newer pass started while this one ran; its result was dropped.
    Superseded,
    /// A character-supplied override is pinned; resolution did not run.
    OverridePinned,
}

pub struct BackdropService {
    imagery: Arc<dyn StreetImageryPort>,
    geocoder: Arc<dyn ReverseGeocodePort>,
    catalog: Arc<dyn BackgroundCatalogPort>,
    generation: AtomicU64,
    state: Mutex<BackdropSnapshot>,
}

impl BackdropService {
    pub fn new(
        imagery: Arc<dyn StreetImageryPort>,
        geocoder: Arc<dyn ReverseGeocodePort>,
        catalog: Arc<dyn BackgroundCatalogPort>,
    ) -> Self {
        Self {
            imagery,
            geocoder,
            catalog,
            generation: AtomicU64::new(0),
            state: Mutex::new(BackdropSnapshot::default()),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> BackdropSnapshot {
        self.lock_state().clone()
    }

    /// Pin the backdrop to a character-supplied image.
    ///
    /// While pinned, resolution passes are skipped entirely; the pin also
    /// bumps the generation so any in-flight pass is discarded rather than
    /// overwriting the override.
    pub fn set_override(&self, url: impl Into<String>) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock_state();
        state.backdrop = Backdrop::Override(url.into());
        state.loading = false;
    }

    /// Drop a pinned override, restoring the default until the next pass.
    pub fn clear_override(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock_state();
        if matches!(state.backdrop, Backdrop::Override(_)) {
            state.backdrop = Backdrop::Default;
        }
        state.loading = false;
    }

    /// Run one resolution pass for `position`.
    ///
    /// A pinned override wins over resolution entirely: the pass is skipped
    /// without touching any provider. `None` clears the location layer back
    /// to the global default, also without touching any provider.
    pub async fn refresh(&self, position: Option<GeoPosition>) -> RefreshOutcome {
        if matches!(self.lock_state().backdrop, Backdrop::Override(_)) {
            debug!("backdrop override pinned, skipping resolution pass");
            return RefreshOutcome::OverridePinned;
        }
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(position) = position else {
            return self.publish(token, BackdropSnapshot::default());
        };

        if self.is_latest(token) {
            self.lock_state().loading = true;
        }

        let prefecture = Prefecture::nearest(position);
        let address = match self.geocoder.reverse(position).await {
            Ok(address) => address,
            Err(e) => {
                warn!(error = %e, "reverse geocoding failed");
                None
            }
        };
        let backdrop = self.resolve_backdrop(position, prefecture).await;

        info!(
            prefecture = %prefecture.name,
            backdrop = ?backdrop,
            "backdrop resolved"
        );
        self.publish(
            token,
            BackdropSnapshot {
                backdrop,
                prefecture: Some(prefecture),
                address,
                loading: false,
            },
        )
    }

    /// Walk the fallback chain; the last step always yields.
    async fn resolve_backdrop(
        &self,
        position: GeoPosition,
        prefecture: &'static Prefecture,
    ) -> Backdrop {
        if let Some(url) = self.probe_headings(position).await {
            return Backdrop::StreetView(url);
        }
        if let Some(url) = self.probe_headings(prefecture.landmark).await {
            debug!(prefecture = %prefecture.name, "using landmark imagery");
            return Backdrop::StreetView(url);
        }
        let path = prefecture.background_image_path();
        if self.catalog.verify(&path).await {
            return Backdrop::RegionImage(path);
        }
        warn!(path = %path, "region image missing, using default backdrop");
        Backdrop::Default
    }

    /// Probe each heading in order; the first validated one wins. Probe
    /// errors count as unavailable so a flaky provider degrades instead of
    /// aborting the chain.
    async fn probe_headings(&self, position: GeoPosition) -> Option<String> {
        for heading in PROBE_HEADINGS {
            match self.imagery.probe(position, heading).await {
                Ok(Some(url)) => return Some(url),
                Ok(None) => {}
                Err(e) => {
                    debug!(heading, error = %e, "imagery probe failed");
                }
            }
        }
        None
    }

    fn publish(&self, token: u64, snapshot: BackdropSnapshot) -> RefreshOutcome {
        if !self.is_latest(token) {
            debug!(token, "resolution pass superseded, discarding result");
            return RefreshOutcome::Superseded;
        }
        *self.lock_state() = snapshot.clone();
        RefreshOutcome::Applied(snapshot)
    }

    fn is_latest(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BackdropSnapshot> {
        // The mutex only guards plain data writes; a poisoned lock would
        // mean a panic mid-assignment, so propagating the data is fine.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
