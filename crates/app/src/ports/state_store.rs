//! State store port: the cell holding the rendered dashboard state.

use std::cell::RefCell;

use crate::state::DashboardState;

/// Owner of the [`DashboardState`] the view renders from.
///
/// Adapters back this with whatever makes the view react (a signal, a
/// terminal redraw flag, ...). Updates are applied in call order.
pub trait StateStore {
    /// Mutate the state in place and notify observers.
    fn update<F: FnOnce(&mut DashboardState)>(&self, f: F);

    /// Read the state without subscribing to changes.
    fn read<R, F: FnOnce(&DashboardState) -> R>(&self, f: F) -> R;
}

impl StateStore for RefCell<DashboardState> {
    fn update<F: FnOnce(&mut DashboardState)>(&self, f: F) {
        f(&mut self.borrow_mut());
    }

    fn read<R, F: FnOnce(&DashboardState) -> R>(&self, f: F) -> R {
        f(&self.borrow())
    }
}
