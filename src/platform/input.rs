//! Keyboard state
//!
//! Key names are the DOM `KeyboardEvent.key` values, lower-cased.

use std::collections::HashSet;

use glam::Vec2;

/// Keys whose default browser action (page scrolling) is suppressed
const SCROLL_KEYS: [&str; 5] = ["arrowup", "arrowdown", "arrowleft", "arrowright", " "];

/// Should the browser's default action for `key` be prevented?
pub fn suppresses_default(key: &str) -> bool {
    let key = key.to_lowercase();
    SCROLL_KEYS.contains(&key.as_str())
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase());
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(&key.to_lowercase());
    }

    /// Forget everything, e.g. when the window loses focus and key-up events
    /// will never arrive
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(&key.to_lowercase())
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.keys.contains(*k))
    }

    fn axis(&self, negative: &[&str], positive: &[&str]) -> f32 {
        let pos = if self.any_held(positive) { 1.0 } else { 0.0 };
        let neg = if self.any_held(negative) { 1.0 } else { 0.0 };
        pos - neg
    }

    /// Movement direction; each axis is -1, 0 or 1 and opposing keys cancel
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            self.axis(&["a", "arrowleft"], &["d", "arrowright"]),
            self.axis(&["w", "arrowup"], &["s", "arrowdown"]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_is_case_insensitive() {
        let mut keys = HeldKeys::new();
        keys.press("ArrowLeft");
        keys.press("W");
        assert!(keys.is_held("arrowleft"));
        assert!(keys.is_held("w"));
        assert_eq!(keys.direction(), Vec2::new(-1.0, -1.0));

        keys.release("ARROWLEFT");
        assert_eq!(keys.direction(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut keys = HeldKeys::new();
        keys.press("a");
        keys.press("ArrowRight");
        keys.press("s");
        assert_eq!(keys.direction(), Vec2::new(0.0, 1.0));

        // Both bindings for one direction still count once
        keys.press("d");
        keys.release("a");
        assert_eq!(keys.direction(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_clear_and_unrelated_keys() {
        let mut keys = HeldKeys::new();
        keys.press("q");
        assert_eq!(keys.direction(), Vec2::ZERO);
        keys.press("d");
        keys.clear();
        assert_eq!(keys.direction(), Vec2::ZERO);
        assert!(!keys.is_held("q"));
    }

    #[test]
    fn test_suppresses_default() {
        assert!(suppresses_default("ArrowUp"));
        assert!(suppresses_default(" "));
        assert!(!suppresses_default("w"));
        assert!(!suppresses_default("Enter"));
    }
}
