use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::favorites::{FavoritesSet, FavoritesStore, toggle};
use crate::models::{AppState, GiftRecommendation, UserProfile, ViewMode};
use crate::normalize::normalize;
use crate::prompt;
use crate::transport::{GeminiTransport, Transport, first_text};

/// Identifies one submission. A completing call applies its outcome only if
/// its ticket is still the latest issued one, so a slow response from a
/// superseded submission cannot overwrite newer results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    seq: u64,
}

/// Application state orchestrator: owns the transient per-session state, the
/// favorites set, and the model transport. All transitions go through this
/// struct.
pub struct GiftService {
    transport: Arc<dyn Transport>,
    store: FavoritesStore,
    state: AppState,
    favorites: FavoritesSet,
    view: ViewMode,
    seq: u64,
}

impl GiftService {
    pub fn new(cfg: &Config) -> Result<Self> {
        let transport = Arc::new(GeminiTransport::new(
            cfg.gemini.api_key.clone(),
            cfg.gemini.model.clone(),
        )?);
        let store = FavoritesStore::new(cfg.favorites.path.clone());
        Ok(Self::with_transport(transport, store))
    }

    /// Construct over any transport; favorites are loaded from the store
    /// once, here.
    pub fn with_transport(transport: Arc<dyn Transport>, store: FavoritesStore) -> Self {
        let favorites = store.load();
        Self {
            transport,
            store,
            state: AppState::default(),
            favorites,
            view: ViewMode::default(),
            seq: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// The list the surface should render for the current view mode.
    pub fn displayed(&self) -> &[GiftRecommendation] {
        match self.view {
            ViewMode::Results => &self.state.recommendations,
            ViewMode::Saved => self.favorites.as_slice(),
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Start a submission: set loading, clear any previous error, switch the
    /// view back to fresh results. Previous recommendations are kept until a
    /// successful completion replaces them.
    pub fn begin_submission(&mut self) -> SubmissionTicket {
        self.seq += 1;
        self.state.loading = true;
        self.state.error = None;
        self.view = ViewMode::Results;
        SubmissionTicket { seq: self.seq }
    }

    /// Apply the outcome of a submission. A stale ticket (a newer submission
    /// has begun since) is a no-op. On failure the previous recommendations
    /// stay in place and the user sees one collapsed message.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<Vec<GiftRecommendation>>,
    ) {
        if ticket.seq != self.seq {
            tracing::debug!(
                stale = ticket.seq,
                current = self.seq,
                "Discarding stale submission outcome"
            );
            return;
        }
        self.state.loading = false;
        match outcome {
            Ok(recommendations) => {
                tracing::info!(count = recommendations.len(), "Recommendations updated");
                self.state.recommendations = recommendations;
                self.state.error = None;
            }
            Err(e) => {
                tracing::error!("Recommendation request failed: {e}");
                self.state.error = Some(e.user_message().to_string());
            }
        }
    }

    /// One full submission: build the request, call the model, normalize,
    /// and apply the outcome. The model call is the only suspension point;
    /// no retry is attempted.
    pub async fn submit(&mut self, profile: &UserProfile) {
        let ticket = self.begin_submission();
        let request = prompt::build(profile);
        let outcome = match self.transport.generate(&request).await {
            Ok(response) => first_text(&response).and_then(|text| normalize(&text)),
            Err(e) => Err(e),
        };
        self.complete_submission(ticket, outcome);
    }

    /// Toggle a gift in the favorites set and persist the result. A persist
    /// failure keeps the in-memory toggle and is logged, not surfaced; the
    /// file catches up on the next successful persist.
    pub fn toggle_favorite(&mut self, gift: &GiftRecommendation) {
        self.favorites = toggle(std::mem::take(&mut self.favorites), gift);
        if let Err(e) = self.store.persist(&self.favorites) {
            tracing::warn!("Failed to persist favorites: {e}");
        }
    }
}
