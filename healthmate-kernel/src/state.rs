use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub type Shared<T> = Arc<Mutex<T>>;

pub fn new_state<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

/// Issues monotonically increasing request tokens. A completed operation
/// may apply its result only while its token is still the latest one
/// issued, so a newer refresh silently retires an older in-flight response.
#[derive(Clone, Default)]
pub struct TokenSeries {
    latest: Arc<AtomicU64>,
}

impl TokenSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_is_current_until_superseded() {
        let series = TokenSeries::new();
        let first = series.issue();
        assert!(series.is_current(first));

        let second = series.issue();
        assert!(!series.is_current(first));
        assert!(series.is_current(second));
    }

    #[test]
    fn clones_share_the_same_series() {
        let series = TokenSeries::new();
        let clone = series.clone();
        let token = series.issue();
        assert!(clone.is_current(token));
        clone.issue();
        assert!(!series.is_current(token));
    }
}
