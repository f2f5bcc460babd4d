use std::cell::Cell;

/// Identifies one list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Orders list refreshes so that only the most recently started fetch may
/// render. A fetch that resolves after a newer one has started is stale.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    latest: Cell<u64>,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RefreshTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RefreshTicket(next)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_only_latest_ticket() {
        let sequencer = RefreshSequencer::new();

        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}
