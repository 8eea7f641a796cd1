use std::{collections::HashSet, hash::Hash, time::Duration};

/// Visible fraction at which a timeline entry counts as in view.
pub const TIMELINE_THRESHOLD: f64 = 0.3;
/// Visible fraction at which a skill card counts as in view.
pub const SKILL_THRESHOLD: f64 = 0.5;
pub const TIMELINE_STAGGER: Duration = Duration::from_millis(200);

/// Items whose reveal animation already ran. Entries are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSet<K: Eq + Hash> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealSet<K> {
    fn default() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` revealed. Returns false if it already was.
    pub fn reveal(&mut self, key: K) -> bool {
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Delay before the timeline entry at `index` animates in.
pub fn stagger_delay(index: usize) -> Duration {
    TIMELINE_STAGGER * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way_and_idempotent() {
        let mut set = RevealSet::new();
        assert!(!set.is_revealed(&"React"));
        assert!(set.reveal("React"));
        assert!(!set.reveal("React"));
        assert!(set.is_revealed(&"React"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(3), Duration::from_millis(600));
    }
}
