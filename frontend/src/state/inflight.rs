use std::{cell::RefCell, collections::HashSet, rc::Rc};

/// Per-entity single-flight registry. At most one guard exists per key.
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    active: Rc<RefCell<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when an operation for `key` is already running.
    pub fn try_acquire(&self, key: &str) -> Option<InFlightGuard> {
        if !self.active.borrow_mut().insert(key.to_string()) {
            log::debug!("operation on {} already in flight", key);
            return None;
        }
        Some(InFlightGuard {
            key: key.to_string(),
            active: Rc::clone(&self.active),
        })
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.active.borrow().contains(key)
    }
}

/// Releases its key when dropped, whether the operation finished, failed or
/// its future was dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    key: String,
    active: Rc<RefCell<HashSet<String>>>,
}

impl InFlightGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.active.borrow_mut().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_for_same_key_is_refused() {
        let registry = InFlightRegistry::new();
        let guard = registry.try_acquire("req-1").unwrap();
        assert_eq!(guard.key(), "req-1");
        assert!(registry.try_acquire("req-1").is_none());
        assert!(registry.try_acquire("req-2").is_some());
        assert!(registry.is_in_flight("req-1"));
    }

    #[test]
    fn dropping_guard_releases_key() {
        let registry = InFlightRegistry::new();
        {
            let _guard = registry.try_acquire("req-1").unwrap();
        }
        assert!(!registry.is_in_flight("req-1"));
        assert!(registry.try_acquire("req-1").is_some());
    }

    #[test]
    fn clones_share_state() {
        let registry = InFlightRegistry::new();
        let other = registry.clone();
        let _guard = registry.try_acquire("req-1").unwrap();
        assert!(other.try_acquire("req-1").is_none());
    }
}
