//! Counter - Click Count

/// Number of clicks seen by a single counter button instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickCounter {
    count: u64,
}

impl ClickCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one click and return the new count
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Current count
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(ClickCounter::new().count(), 0);
    }

    #[test]
    fn count_matches_number_of_clicks() {
        let mut counter = ClickCounter::new();
        for expected in 1..=5 {
            assert_eq!(counter.increment(), expected);
        }
        assert_eq!(counter.count(), 5);
    }

    #[test]
    fn instances_are_independent() {
        let mut first = ClickCounter::new();
        let second = ClickCounter::new();

        first.increment();
        first.increment();

        assert_eq!(first.count(), 2);
        assert_eq!(second.count(), 0);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let mut counter = ClickCounter { count: u64::MAX };
        assert_eq!(counter.increment(), u64::MAX);
    }
}
