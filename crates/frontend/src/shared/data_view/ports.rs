use async_trait::async_trait;

/// User-visible feedback (toasts)
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Navigation used for redirects after a fatal load failure
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Suspends the current task; the only time source of the controllers
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// `setTimeout`-backed timer for the browser
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
