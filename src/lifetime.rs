//! View Lifetime Tokens
//!
//! An async completion handler may run after the view that started it is
//! gone. The view holds a `ViewLifetime`, ends it on cleanup, and hands out
//! tokens that handlers check before touching shared state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn token(&self) -> LifetimeToken {
        LifetimeToken { alive: self.alive.clone() }
    }

    /// Mark the view as torn down
    pub fn end(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct LifetimeToken {
    alive: Arc<AtomicBool>,
}

impl LifetimeToken {
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_follow_view() {
        let lifetime = ViewLifetime::new();
        let early = lifetime.token();
        assert!(early.is_active());

        lifetime.end();

        assert!(!early.is_active());
        assert!(!lifetime.token().is_active());
    }
}
