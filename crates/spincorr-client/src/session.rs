//! # Grid Session — caching and last-request-wins
//!
//! The interactive session layer above a [`GridSource`]. Two concerns:
//!
//! 1. **Caching.** Grids are immutable once generated and addressed
//!    solely by key, so completed loads are cached as `Arc<SpinGrid>`
//!    and shared without copying.
//!
//! 2. **Stale fetch arbitration.** Every `load` call takes a ticket from
//!    a monotonically increasing generation counter. When a fetch
//!    completes, its ticket is compared against the counter: if a newer
//!    load was issued in the meantime the result is reported as
//!    [`LoadOutcome::Superseded`] — last request wins, and a slow stale
//!    response can never overwrite a fresher one. Errors from superseded
//!    fetches are swallowed the same way; only the newest request's
//!    failure reaches the caller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use spincorr_core::GridKey;
use spincorr_grid::SpinGrid;

use crate::error::LoadError;
use crate::source::GridSource;

/// Result of one session load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The grid for the newest requested key.
    Loaded(Arc<SpinGrid>),
    /// This request was superseded by a newer one before it completed;
    /// its result (success or failure) must be ignored.
    Superseded,
}

impl LoadOutcome {
    /// The loaded grid, if this outcome is current.
    pub fn grid(&self) -> Option<&Arc<SpinGrid>> {
        match self {
            Self::Loaded(grid) => Some(grid),
            Self::Superseded => None,
        }
    }
}

/// Session wrapper adding caching and stale-fetch arbitration to a
/// [`GridSource`].
#[derive(Debug)]
pub struct GridSession<S> {
    source: S,
    cache: RwLock<HashMap<GridKey, Arc<SpinGrid>>>,
    generation: AtomicU64,
}

impl<S: GridSource> GridSession<S> {
    /// Create a session over a source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Load the grid for `key`, resolving overlapping loads by
    /// last-request-wins.
    ///
    /// A cache hit completes immediately (and, being the newest request,
    /// still supersedes any fetch in flight). A completed fetch is
    /// cached even when superseded — the data is valid, only this
    /// request's outcome is stale.
    pub async fn load(&self, key: GridKey) -> Result<LoadOutcome, LoadError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(grid) = self.cache.read().get(&key).cloned() {
            return Ok(LoadOutcome::Loaded(grid));
        }

        let result = self.source.fetch(&key).await;
        let superseded = self.generation.load(Ordering::SeqCst) != ticket;

        match result {
            Ok(grid) => {
                let grid = Arc::new(grid);
                self.cache.write().insert(key, Arc::clone(&grid));
                if superseded {
                    tracing::debug!(key = %key, "discarding superseded grid load");
                    Ok(LoadOutcome::Superseded)
                } else {
                    Ok(LoadOutcome::Loaded(grid))
                }
            }
            Err(e) if superseded => {
                tracing::debug!(key = %key, error = %e, "ignoring error from superseded load");
                Ok(LoadOutcome::Superseded)
            }
            Err(e) => Err(e),
        }
    }

    /// The cached grid for `key`, if any.
    pub fn cached(&self, key: &GridKey) -> Option<Arc<SpinGrid>> {
        self.cache.read().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spincorr_core::{EnergyPreset, ProductionMode, SpinBasis};
    use spincorr_grid::generate_grid;
    use std::time::Duration;

    /// Test source that delays each fetch by a per-key duration.
    struct DelayedSource {
        delays: HashMap<GridKey, Duration>,
        fail: Option<GridKey>,
    }

    impl DelayedSource {
        fn new() -> Self {
            Self {
                delays: HashMap::new(),
                fail: None,
            }
        }

        fn with_delay(mut self, key: GridKey, delay: Duration) -> Self {
            self.delays.insert(key, delay);
            self
        }

        fn failing_on(mut self, key: GridKey) -> Self {
            self.fail = Some(key);
            self
        }
    }

    impl GridSource for DelayedSource {
        async fn fetch(&self, key: &GridKey) -> Result<SpinGrid, LoadError> {
            if let Some(delay) = self.delays.get(key) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail == Some(*key) {
                return Err(LoadError::NotFound { key: *key });
            }
            Ok(generate_grid(*key, 3, 3).unwrap())
        }
    }

    fn key_a() -> GridKey {
        GridKey::new(
            ProductionMode::GluonFusion,
            SpinBasis::Helicity,
            EnergyPreset::Tev13,
        )
    }

    fn key_b() -> GridKey {
        GridKey::new(
            ProductionMode::QuarkAntiquark,
            SpinBasis::Beam,
            EnergyPreset::Tev7,
        )
    }

    #[tokio::test]
    async fn single_load_completes() {
        let session = GridSession::new(DelayedSource::new());
        let outcome = session.load(key_a()).await.unwrap();
        assert_eq!(outcome.grid().unwrap().key(), key_a());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_older_fetch_is_superseded_by_newer() {
        let source = DelayedSource::new()
            .with_delay(key_a(), Duration::from_millis(500))
            .with_delay(key_b(), Duration::from_millis(10));
        let session = GridSession::new(source);

        // Issue the slow load first, the fast one second; the fast one
        // is newer, so the slow result must be discarded.
        let (slow, fast) = tokio::join!(session.load(key_a()), session.load(key_b()));

        assert!(matches!(slow.unwrap(), LoadOutcome::Superseded));
        assert_eq!(fast.unwrap().grid().unwrap().key(), key_b());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_failure_is_swallowed() {
        let source = DelayedSource::new()
            .with_delay(key_a(), Duration::from_millis(500))
            .failing_on(key_a());
        let session = GridSession::new(source);

        let (slow, fast) = tokio::join!(session.load(key_a()), session.load(key_b()));

        // The failing load was superseded, so its error must not surface.
        assert!(matches!(slow.unwrap(), LoadOutcome::Superseded));
        assert!(matches!(fast.unwrap(), LoadOutcome::Loaded(_)));
    }

    #[tokio::test]
    async fn current_failure_surfaces() {
        let session = GridSession::new(DelayedSource::new().failing_on(key_a()));
        assert!(matches!(
            session.load(key_a()).await,
            Err(LoadError::NotFound { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_fetch_still_populates_cache() {
        let source = DelayedSource::new().with_delay(key_a(), Duration::from_millis(500));
        let session = GridSession::new(source);

        let (slow, _fast) = tokio::join!(session.load(key_a()), session.load(key_b()));
        assert!(matches!(slow.unwrap(), LoadOutcome::Superseded));

        // The grid itself is valid and cached; a repeat load hits the
        // cache immediately.
        assert!(session.cached(&key_a()).is_some());
        let again = session.load(key_a()).await.unwrap();
        assert!(matches!(again, LoadOutcome::Loaded(_)));
    }

    #[tokio::test]
    async fn cache_hit_returns_same_arc() {
        let session = GridSession::new(DelayedSource::new());
        let first = session.load(key_a()).await.unwrap();
        let second = session.load(key_a()).await.unwrap();
        assert!(Arc::ptr_eq(
            first.grid().unwrap(),
            second.grid().unwrap()
        ));
    }
}
