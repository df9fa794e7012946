//! Clamped resource pools (hit points, spell slots, feature uses).

use serde::{Deserialize, Serialize};

/// A named numeric resource clamped between a minimum and a maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Display name of the pool.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
    /// Minimum value (usually 0).
    pub min: i32,
}

impl Pool {
    /// Create a pool starting at its maximum value.
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        Self {
            name: name.into(),
            current: max,
            max,
            min: 0,
        }
    }

    /// Create a pool with a custom minimum and starting value.
    pub fn with_range(name: impl Into<String>, current: i32, min: i32, max: i32) -> Self {
        Self {
            name: name.into(),
            current: current.clamp(min, max),
            max,
            min,
        }
    }

    /// Adjust the pool by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(self.min, self.max);
        self.current
    }

    /// Returns true if the pool is at its minimum value.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the pool is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_max() {
        let pool = Pool::new("Hit Points", 10);
        assert_eq!(pool.current, 10);
        assert!(pool.is_full());
        assert!(!pool.is_empty());
    }

    #[test]
    fn adjust_clamps_to_bounds() {
        let mut pool = Pool::new("Hit Points", 10);
        assert_eq!(pool.adjust(-15), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.adjust(25), 10);
        assert!(pool.is_full());
    }

    #[test]
    fn adjust_normal() {
        let mut pool = Pool::new("Hit Points", 10);
        assert_eq!(pool.adjust(-3), 7);
        assert!(!pool.is_empty());
        assert!(!pool.is_full());
    }

    #[test]
    fn with_range_clamps_initial() {
        let pool = Pool::with_range("Slots", 9, 0, 4);
        assert_eq!(pool.current, 4);
    }

    #[test]
    fn display() {
        let mut pool = Pool::new("Hit Points", 12);
        pool.adjust(-5);
        assert_eq!(pool.to_string(), "Hit Points: 7/12");
    }
}
