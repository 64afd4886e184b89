use std::cell::Cell;
use std::rc::Rc;

/// Shared refreshing flag for one edge.
///
/// The controller raises it when a pull triggers; the caller lowers it once
/// its work is done. Clones observe the same value. All access happens on the
/// UI thread, so the handle is deliberately `!Send`.
#[derive(Debug, Clone, Default)]
pub struct RefreshFlag(Rc<Cell<bool>>);

impl RefreshFlag {
    pub fn new(initial: bool) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, refreshing: bool) {
        self.0.set(refreshing);
    }
}
