pub mod clock;
pub mod matches;
pub mod presets;
mod sse;
pub mod status;

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    config::AppConfig,
    state::{matches::MatchStore, presets::TeamPresetStore},
};

pub use self::sse::SseHub;

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Capacity of the live-score broadcast channel; lagging subscribers skip to the newest snapshot.
const LIVE_SCORES_CAPACITY: usize = 16;

/// Central application state: the match store, the team presets and the live-score hub.
///
/// Every mutation of the match store goes through [`AppState::with_matches_mut`], which holds the
/// write lock for the whole closure, so admin requests and clock ticks never interleave.
pub struct AppState {
    config: AppConfig,
    matches: RwLock<MatchStore>,
    presets: Mutex<TeamPresetStore>,
    live_scores: SseHub,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig, presets: TeamPresetStore) -> SharedState {
        Arc::new(Self {
            config,
            matches: RwLock::new(MatchStore::new()),
            presets: Mutex::new(presets),
            live_scores: SseHub::new(LIVE_SCORES_CAPACITY),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Broadcast hub used for the live-score SSE stream.
    pub fn live_scores(&self) -> &SseHub {
        &self.live_scores
    }

    /// Run `f` against a shared view of the match store.
    pub async fn read_matches<R>(&self, f: impl FnOnce(&MatchStore) -> R) -> R {
        let guard = self.matches.read().await;
        f(&guard)
    }

    /// Run `f` with exclusive access to the match store.
    pub async fn with_matches_mut<R>(&self, f: impl FnOnce(&mut MatchStore) -> R) -> R {
        let mut guard = self.matches.write().await;
        f(&mut guard)
    }

    /// Team preset store, locked so file rewrites happen in append order.
    pub fn presets(&self) -> &Mutex<TeamPresetStore> {
        &self.presets
    }
}
