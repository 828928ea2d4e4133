//! Stack depth watching.

/// Default minimum stack depth before a refill is requested.
pub const DEFAULT_REFILL_FLOOR: usize = 4;
/// Default number of extra cards requested on top of the shortfall.
pub const DEFAULT_REFILL_BUFFER: usize = 2;

/// Decides how many cards to request when the stack runs low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefillPolicy {
    pub floor: usize,
    pub buffer: usize,
}

impl Default for RefillPolicy {
    fn default() -> Self {
        Self {
            floor: DEFAULT_REFILL_FLOOR,
            buffer: DEFAULT_REFILL_BUFFER,
        }
    }
}

impl RefillPolicy {
    pub fn new(floor: usize, buffer: usize) -> Self {
        Self { floor, buffer }
    }

    /// Cards missing below the floor.
    pub fn shortfall(&self, len: usize) -> usize {
        self.floor.saturating_sub(len)
    }

    /// Number of cards to request for a stack of `len`, or `None` when the
    /// stack is at or above the floor.
    pub fn request_size(&self, len: usize) -> Option<usize> {
        match self.shortfall(len) {
            0 => None,
            needed => Some(needed + self.buffer),
        }
    }

    /// Request size for an explicit refill command: the shortfall (if any)
    /// plus the buffer, never zero.
    pub fn forced_request_size(&self, len: usize) -> usize {
        (self.shortfall(len) + self.buffer).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = RefillPolicy::default();
        assert_eq!(policy.floor, 4);
        assert_eq!(policy.buffer, 2);
    }

    #[test]
    fn test_no_request_at_or_above_floor() {
        let policy = RefillPolicy::default();
        assert_eq!(policy.request_size(4), None);
        assert_eq!(policy.request_size(10), None);
    }

    #[test]
    fn test_request_includes_buffer() {
        let policy = RefillPolicy::default();
        assert_eq!(policy.request_size(3), Some(3));
        assert_eq!(policy.request_size(1), Some(5));
        assert_eq!(policy.request_size(0), Some(6));
    }

    #[test]
    fn test_forced_request() {
        let policy = RefillPolicy::default();
        assert_eq!(policy.forced_request_size(10), 2);
        assert_eq!(policy.forced_request_size(2), 4);
        assert_eq!(RefillPolicy::new(4, 0).forced_request_size(8), 1);
    }
}
