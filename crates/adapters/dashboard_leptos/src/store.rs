//! Signal-backed state store.

use leptos::prelude::*;
use picoguard_app::ports::StateStore;
use picoguard_app::state::DashboardState;

/// [`StateStore`] writing through a Leptos signal so the view re-renders.
#[derive(Debug, Clone, Copy)]
pub struct SignalStore(pub RwSignal<DashboardState>);

impl StateStore for SignalStore {
    fn update<F: FnOnce(&mut DashboardState)>(&self, f: F) {
        self.0.update(f);
    }

    fn read<R, F: FnOnce(&DashboardState) -> R>(&self, f: F) -> R {
        self.0.with_untracked(f)
    }
}
