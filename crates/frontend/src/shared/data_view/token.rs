use std::cell::Cell;

/// Identifies one started request. Only the most recently minted token is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic token counter owned by one controller
#[derive(Debug, Default)]
pub struct TokenSource {
    current: Cell<u64>,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a new token; every previously minted token becomes stale
    pub fn mint(&self) -> RequestToken {
        let next = self.current.get() + 1;
        self.current.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.get() == token.0
    }

    /// Makes all outstanding tokens stale without starting anything
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let tokens = TokenSource::new();
        let first = tokens.mint();
        assert!(tokens.is_current(first));

        let second = tokens.mint();
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_invalidate_makes_everything_stale() {
        let tokens = TokenSource::new();
        let token = tokens.mint();
        tokens.invalidate();
        assert!(!tokens.is_current(token));
    }
}
