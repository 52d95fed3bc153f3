use std::cell::Cell;
use std::rc::Rc;

/// A cheap-to-clone handle over a shared drop tally, used by teardown tests to confirm that a
/// container drops every element it owns exactly once. Every clone shares the same counter, and
/// each dropped clone bumps it by one.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    /// Creates a fresh counter whose tally starts at zero.
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Returns how many clones of this counter have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
