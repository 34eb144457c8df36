//! Scroll-aware header state
//!
//! Tracks the page scroll offset and flips the header into compact mode once
//! the offset passes a fixed threshold. Recomputed on every scroll
//! observation; a plain strict comparison, no hysteresis.

/// Rows of scroll before the header compacts.
pub const DEFAULT_SCROLL_THRESHOLD: u16 = 20;

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    threshold: u16,
    compact: bool,
}

impl ScrollSpy {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            compact: false,
        }
    }

    /// Feed the current scroll offset; returns the resulting compact flag.
    pub fn observe(&mut self, offset: u16) -> bool {
        self.compact = offset > self.threshold;
        self.compact
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_past_threshold() {
        let mut spy = ScrollSpy::new(20);
        assert!(!spy.observe(0));
        assert!(!spy.observe(20), "exactly at threshold stays tall");
        assert!(spy.observe(21));
        assert!(spy.is_compact());
    }

    #[test]
    fn test_recomputed_every_observation() {
        let mut spy = ScrollSpy::new(20);
        assert!(spy.observe(40));
        assert!(!spy.observe(3));
        assert!(spy.observe(25));
    }
}
