//! Page scroll suspension as a scoped acquisition
//!
//! [`ScrollLock::acquire`] hides page overflow and remembers the previous
//! value; the lock restores it when released or dropped, once.

/// Something with an `overflow` style (the document body in the browser)
pub trait OverflowTarget {
    /// Current inline `overflow` value, empty when unset
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Overflow value applied while the lock is held
pub const SUSPENDED_OVERFLOW: &str = "hidden";

/// Holds page scrolling suspended until released
#[derive(Debug)]
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
    previous: Option<String>,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow(SUSPENDED_OVERFLOW);
        Self {
            target,
            previous: Some(previous),
        }
    }

    /// Restore the prior overflow value. Later calls and the drop are no-ops.
    pub fn release(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.target.set_overflow(&previous);
        }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every write so restores can be counted
    #[derive(Clone, Default)]
    struct FakeBody {
        value: Arc<Mutex<String>>,
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl FakeBody {
        fn with_overflow(value: &str) -> Self {
            let body = Self::default();
            *body.value.lock().unwrap() = value.to_string();
            body
        }

        fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl OverflowTarget for FakeBody {
        fn overflow(&self) -> String {
            self.value.lock().unwrap().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.value.lock().unwrap() = value.to_string();
            self.writes.lock().unwrap().push(value.to_string());
        }
    }

    #[test]
    fn test_acquire_hides_overflow() {
        let body = FakeBody::with_overflow("auto");
        let _lock = ScrollLock::acquire(body.clone());

        assert_eq!(body.overflow(), "hidden");
    }

    #[test]
    fn test_drop_restores_previous_value() {
        let body = FakeBody::with_overflow("scroll");
        drop(ScrollLock::acquire(body.clone()));
        assert_eq!(body.overflow(), "scroll");
    }

    #[test]
    fn test_release_then_drop_restores_once() {
        let body = FakeBody::with_overflow("");
        let mut lock = ScrollLock::acquire(body.clone());
        lock.release();
        lock.release();
        drop(lock);

        assert_eq!(body.writes(), vec!["hidden".to_string(), String::new()]);
    }

    #[test]
    fn test_repeated_mount_cycles_restore_once_each() {
        let body = FakeBody::with_overflow("auto");

        for _ in 0..5 {
            let lock = ScrollLock::acquire(body.clone());
            assert_eq!(body.overflow(), "hidden");
            drop(lock);
            assert_eq!(body.overflow(), "auto");
        }

        let writes = body.writes();
        assert_eq!(writes.len(), 10);
        assert_eq!(writes.iter().filter(|w| *w == "auto").count(), 5);
    }
}
