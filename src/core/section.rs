//! The partners section component: loads partners once on mount and derives
//! the view from whatever it currently holds.

use crate::core::categories::count_categories;
use crate::core::render::render_section;
use crate::domain::model::{CategoryCount, Partner};
use crate::domain::ports::{DiagnosticSink, PartnerSource};
use crate::utils::error::{Result, SectionError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Number of partners shown on the home page section.
pub const DEFAULT_PARTNER_LIMIT: usize = 6;

#[derive(Debug, Clone)]
struct SectionState {
    partners: Vec<Partner>,
    loading: bool,
}

/// What one render of the section sees.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub partners: Vec<Partner>,
    pub loading: bool,
    pub categories: Vec<CategoryCount>,
}

pub struct PartnersSection {
    state: Arc<Mutex<SectionState>>,
    lifetime: CancellationToken,
    mounted: AtomicBool,
    limit: usize,
}

impl PartnersSection {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_PARTNER_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(SectionState {
                partners: Vec::new(),
                loading: true,
            })),
            lifetime: CancellationToken::new(),
            mounted: AtomicBool::new(false),
            limit,
        }
    }

    /// Starts the one-time partner load. Returns `None` if the section was
    /// already mounted, has been unmounted, or no tokio runtime is running.
    ///
    /// The load runs as a tokio task bound to this section's lifetime: once
    /// [`unmount`](Self::unmount) is called (or the section is dropped) the
    /// fetch is abandoned and its result is never applied.
    pub fn mount(
        &self,
        source: Arc<dyn PartnerSource>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!("Partners section mounted outside a tokio runtime: {}", e);
                return None;
            }
        };
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Partners section already mounted, skipping load");
            return None;
        }
        if self.lifetime.is_cancelled() {
            tracing::debug!("Partners section unmounted before mount, skipping load");
            return None;
        }

        let state = Arc::clone(&self.state);
        let lifetime = self.lifetime.clone();
        let limit = self.limit;

        Some(runtime.spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = lifetime.cancelled() => {
                    tracing::debug!("Partners section unmounted during fetch, dropping load");
                    return;
                }
                outcome = source.get_partners() => outcome,
            };

            settle(&state, &lifetime, outcome, limit, sink.as_ref());
        }))
    }

    /// Ends the section's lifetime. A pending load is cancelled.
    pub fn unmount(&self) {
        // Cancel under the state lock so a load cannot be mid-apply.
        let _state = lock(&self.state);
        self.lifetime.cancel();
    }

    pub fn is_live(&self) -> bool {
        !self.lifetime.is_cancelled()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    /// Snapshot of the current state with freshly derived category counts.
    pub fn view(&self) -> SectionView {
        let state = lock(&self.state);
        SectionView {
            categories: count_categories(&state.partners),
            partners: state.partners.clone(),
            loading: state.loading,
        }
    }

    pub fn render(&self) -> String {
        render_section(&self.view())
    }
}

impl Default for PartnersSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PartnersSection {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn lock(state: &Mutex<SectionState>) -> MutexGuard<'_, SectionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Applies a finished load unless the section was unmounted first. The
/// lifetime is checked while holding the state lock, which `unmount` also
/// takes. Returns whether the outcome was applied.
fn settle(
    state: &Mutex<SectionState>,
    lifetime: &CancellationToken,
    outcome: Result<Vec<Partner>>,
    limit: usize,
    sink: &dyn DiagnosticSink,
) -> bool {
    let failure = {
        let mut state = lock(state);
        if lifetime.is_cancelled() {
            tracing::debug!("Partners section unmounted, discarding fetched partners");
            return false;
        }
        apply_outcome(&mut state, outcome, limit)
    };

    if let Some(e) = failure {
        sink.report("Error loading partners", &e);
    }
    true
}

fn apply_outcome(
    state: &mut SectionState,
    outcome: Result<Vec<Partner>>,
    limit: usize,
) -> Option<SectionError> {
    state.loading = false;
    match outcome {
        Ok(mut partners) => {
            let received = partners.len();
            partners.truncate(limit);
            tracing::debug!(
                "Loaded {} partners, keeping {}",
                received,
                partners.len()
            );
            state.partners = partners;
            None
        }
        // The held list stays as it was.
        Err(e) => Some(e),
    }
}
