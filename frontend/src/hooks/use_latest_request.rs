use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// Numbers fetches so that only the most recently started one may apply
/// its result.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Start a request and return its ticket. Earlier tickets become stale.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.current
    }
}

pub type SharedGeneration = Rc<RefCell<RequestGeneration>>;

#[hook]
pub fn use_latest_request() -> SharedGeneration {
    use_mut_ref(RequestGeneration::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut generation = RequestGeneration::default();
        let november = generation.begin();
        assert!(generation.is_current(november));

        let december = generation.begin();
        assert!(generation.is_current(december));
        // November resolving after December must be dropped
        assert!(!generation.is_current(november));
    }

    #[test]
    fn test_fresh_generation_has_no_current_ticket() {
        let generation = RequestGeneration::default();
        assert!(!generation.is_current(1));
    }
}
