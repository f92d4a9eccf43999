use std::cell::RefCell;

use super::Location;

/// Single-slot memory for the last fragment seen by one observer.
///
/// Shared between the observer and the scroll tasks it spawns. Borrows never
/// outlive a method call, so holders may await freely in between.
#[derive(Debug, Default)]
pub struct AnchorMemory {
    pending: RefCell<Option<String>>,
}

impl AnchorMemory {
    /// Stores the location's fragment, replacing any previous one.
    ///
    /// Locations without a fragment leave the slot untouched. Returns whether
    /// anything was stored.
    pub fn remember(&self, location: &Location) -> bool {
        match location.fragment() {
            Some(fragment) => {
                self.pending.replace(Some(fragment.to_owned()));
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> Option<String> {
        self.pending.borrow().clone()
    }

    /// Empties the slot and returns what was in it.
    pub fn take(&self) -> Option<String> {
        self.pending.take()
    }
}
