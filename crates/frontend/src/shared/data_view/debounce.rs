use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use super::ports::Timer;
use super::token::TokenSource;

/// Coalesces keystrokes into one committed search value.
///
/// Every call to [`Debouncer::input`] mints a token and sleeps; after the
/// sleep only the holder of the current token commits. Consecutive identical
/// commits are dropped.
#[derive(Clone)]
pub struct Debouncer {
    inner: Rc<DebounceInner>,
}

struct DebounceInner {
    timer: Rc<dyn Timer>,
    delay_ms: u32,
    tokens: TokenSource,
    last_committed: RefCell<String>,
    disposed: Cell<bool>,
}

impl Debouncer {
    pub fn new(timer: Rc<dyn Timer>, delay_ms: u32, committed: &str) -> Self {
        Self {
            inner: Rc::new(DebounceInner {
                timer,
                delay_ms,
                tokens: TokenSource::new(),
                last_committed: RefCell::new(committed.trim().to_string()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Registers a keystroke. Resolves to `Some(trimmed text)` only if no
    /// newer keystroke arrived during the quiet period.
    pub fn input(&self, raw: &str) -> impl Future<Output = Option<String>> + 'static {
        let inner = self.inner.clone();
        let token = inner.tokens.mint();
        let text = raw.trim().to_string();

        async move {
            if inner.disposed.get() {
                return None;
            }
            inner.timer.sleep(inner.delay_ms).await;

            if inner.disposed.get() || !inner.tokens.is_current(token) {
                return None;
            }
            if *inner.last_committed.borrow() == text {
                return None;
            }
            log::debug!("search committed: '{}'", text);
            *inner.last_committed.borrow_mut() = text.clone();
            Some(text)
        }
    }

    /// Drops a pending emission
    pub fn cancel(&self) {
        self.inner.tokens.invalidate();
    }

    /// Records a value committed outside the debouncer (e.g. clear button)
    pub fn sync(&self, committed: &str) {
        *self.inner.last_committed.borrow_mut() = committed.trim().to_string();
    }

    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.tokens.invalidate();
    }
}
