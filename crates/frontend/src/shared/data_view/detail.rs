use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;

use super::error::FetchError;
use super::ports::{Navigator, Notifier};
use super::token::{RequestToken, TokenSource};

/// Loads one record and, optionally, its secondary summary
#[async_trait(?Send)]
pub trait DetailSource {
    type Id: Clone + PartialEq + Display + 'static;
    type Entity: Clone + 'static;
    type Summary: Clone + 'static;

    async fn fetch_entity(&self, id: &Self::Id) -> Result<Self::Entity, FetchError>;

    /// Whether the summary makes sense for this record
    fn wants_summary(&self, _entity: &Self::Entity) -> bool {
        true
    }

    async fn fetch_summary(
        &self,
        id: &Self::Id,
        entity: &Self::Entity,
    ) -> Result<Self::Summary, FetchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPhase {
    #[default]
    Idle,
    LoadingEntity,
    EntityLoaded,
    EntityFailed,
    LoadingSummary,
    SummaryLoaded,
    SummaryFailed,
    /// No id was given; the user was sent to the fallback page
    Redirected,
}

impl DetailPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailPhase::LoadingEntity | DetailPhase::LoadingSummary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<E, S> {
    pub phase: DetailPhase,
    pub entity: Option<E>,
    pub summary: Option<S>,
    pub error: Option<FetchError>,
}

impl<E, S> Default for DetailView<E, S> {
    fn default() -> Self {
        Self {
            phase: DetailPhase::Idle,
            entity: None,
            summary: None,
            error: None,
        }
    }
}

type DetailSubscriber<E, S> = Box<dyn Fn(&DetailView<E, S>)>;

/// Detail page loader: entity first, summary second.
///
/// Only the most recent load may write the view; a load for the id that is
/// already being fetched is ignored.
pub struct DetailLoader<S: DetailSource> {
    inner: Rc<DetailInner<S>>,
}

impl<S: DetailSource> Clone for DetailLoader<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct DetailInner<S: DetailSource> {
    source: S,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    fallback_path: String,
    view: RefCell<DetailView<S::Entity, S::Summary>>,
    tokens: TokenSource,
    current_id: RefCell<Option<S::Id>>,
    in_flight: Cell<bool>,
    redirected: Cell<bool>,
    disposed: Cell<bool>,
    subscribers: RefCell<Vec<DetailSubscriber<S::Entity, S::Summary>>>,
}

impl<S: DetailSource + 'static> DetailLoader<S> {
    pub fn new(
        source: S,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        fallback_path: impl Into<String>,
    ) -> Self {
        Self {
            inner: Rc::new(DetailInner {
                source,
                navigator,
                notifier,
                fallback_path: fallback_path.into(),
                view: RefCell::new(DetailView::default()),
                tokens: TokenSource::new(),
                current_id: RefCell::new(None),
                in_flight: Cell::new(false),
                redirected: Cell::new(false),
                disposed: Cell::new(false),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn subscribe(&self, subscriber: impl Fn(&DetailView<S::Entity, S::Summary>) + 'static) {
        self.inner
            .subscribers
            .borrow_mut()
            .push(Box::new(subscriber));
    }

    pub fn view(&self) -> DetailView<S::Entity, S::Summary> {
        self.inner.view.borrow().clone()
    }

    pub fn current_id(&self) -> Option<S::Id> {
        self.inner.current_id.borrow().clone()
    }

    /// Loads the record `id`. Without an id the loader redirects to the
    /// fallback path (once) and fetches nothing.
    pub fn load(&self, id: Option<S::Id>) -> impl Future<Output = ()> + 'static {
        let begun = match id {
            None => {
                self.inner.redirect_without_id();
                None
            }
            Some(id) => {
                let duplicate = self.inner.in_flight.get()
                    && self.inner.current_id.borrow().as_ref() == Some(&id);
                if duplicate {
                    log::debug!("detail load for {} already in flight", id);
                    None
                } else {
                    self.inner.begin(id, false)
                }
            }
        };
        DetailInner::run(self.inner.clone(), begun)
    }

    /// Fetches the current record again, even if a load is in flight
    pub fn reload(&self) -> impl Future<Output = ()> + 'static {
        let id = self.inner.current_id.borrow().clone();
        let begun = id.and_then(|id| self.inner.begin(id, true));
        DetailInner::run(self.inner.clone(), begun)
    }

    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        self.inner.tokens.invalidate();
        self.inner.in_flight.set(false);
        self.inner.subscribers.borrow_mut().clear();
    }
}

impl<S: DetailSource + 'static> DetailInner<S> {
    fn redirect_without_id(&self) {
        if self.disposed.get() || self.redirected.replace(true) {
            return;
        }
        self.tokens.invalidate();
        self.in_flight.set(false);
        *self.current_id.borrow_mut() = None;
        *self.view.borrow_mut() = DetailView {
            phase: DetailPhase::Redirected,
            ..DetailView::default()
        };
        self.notify();
        log::warn!("detail opened without id, redirecting to {}", self.fallback_path);
        self.navigator.navigate(&self.fallback_path);
    }

    fn begin(&self, id: S::Id, keep_entity: bool) -> Option<(RequestToken, S::Id)> {
        if self.disposed.get() {
            return None;
        }
        let token = self.tokens.mint();
        self.in_flight.set(true);
        *self.current_id.borrow_mut() = Some(id.clone());
        {
            let mut view = self.view.borrow_mut();
            if !keep_entity {
                view.entity = None;
                view.summary = None;
            }
            view.phase = DetailPhase::LoadingEntity;
            view.error = None;
        }
        self.notify();
        Some((token, id))
    }

    async fn run(inner: Rc<Self>, begun: Option<(RequestToken, S::Id)>) {
        let Some((token, id)) = begun else {
            return;
        };

        let entity = match inner.source.fetch_entity(&id).await {
            _ if !inner.is_current(token) => {
                log::debug!("detail #{} for {}: stale entity discarded", token.value(), id);
                return;
            }
            Ok(entity) => entity,
            Err(error) => {
                inner.fail_entity(id, error);
                return;
            }
        };

        if !inner.source.wants_summary(&entity) {
            inner.finish(DetailPhase::EntityLoaded, Some(entity), None);
            return;
        }

        inner.finish(DetailPhase::LoadingSummary, Some(entity.clone()), None);
        let summary = inner.source.fetch_summary(&id, &entity).await;
        if !inner.is_current(token) {
            log::debug!("detail #{} for {}: stale summary discarded", token.value(), id);
            return;
        }
        match summary {
            Ok(summary) => inner.finish(DetailPhase::SummaryLoaded, Some(entity), Some(summary)),
            Err(error) => {
                log::warn!("summary for {} unavailable: {}", id, error);
                inner.finish(DetailPhase::SummaryFailed, Some(entity), None);
            }
        }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        !self.disposed.get() && self.tokens.is_current(token)
    }

    fn finish(&self, phase: DetailPhase, entity: Option<S::Entity>, summary: Option<S::Summary>) {
        if phase != DetailPhase::LoadingSummary {
            self.in_flight.set(false);
        }
        {
            let mut view = self.view.borrow_mut();
            view.phase = phase;
            view.entity = entity;
            view.summary = summary;
        }
        self.notify();
    }

    fn fail_entity(&self, id: S::Id, error: FetchError) {
        log::error!("failed to load {}: {}", id, error);
        self.in_flight.set(false);
        {
            let mut view = self.view.borrow_mut();
            view.phase = DetailPhase::EntityFailed;
            view.error = Some(error.clone());
        }
        self.notify();
        self.notifier.error(&error.to_string());
        self.navigator.navigate(&self.fallback_path);
    }

    fn notify(&self) {
        let view = self.view.borrow().clone();
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::testing::{RecordingNavigator, RecordingNotifier, ScriptedDetail};
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    struct Harness {
        pool: LocalPool,
        source: ScriptedDetail,
        navigator: Rc<RecordingNavigator>,
        notifier: Rc<RecordingNotifier>,
        loader: DetailLoader<ScriptedDetail>,
    }

    impl Harness {
        fn new() -> Self {
            let source = ScriptedDetail::new();
            let navigator = Rc::new(RecordingNavigator::default());
            let notifier = Rc::new(RecordingNotifier::default());
            let loader = DetailLoader::new(
                source.clone(),
                navigator.clone(),
                notifier.clone(),
                "a001_product",
            );
            Self {
                pool: LocalPool::new(),
                source,
                navigator,
                notifier,
                loader,
            }
        }

        fn load(&mut self, id: Option<&str>) {
            let fut = self.loader.load(id.map(String::from));
            self.pool.spawner().spawn_local(fut).unwrap();
            self.pool.run_until_stalled();
        }

        fn settle(&mut self) {
            self.pool.run_until_stalled();
        }

        fn entity_calls(&self) -> usize {
            self.source.entity_calls.borrow().len()
        }

        fn summary_calls(&self) -> usize {
            self.source.summary_calls.borrow().len()
        }
    }

    #[test]
    fn test_absent_id_redirects_once_without_fetching() {
        let mut h = Harness::new();
        h.load(None);
        h.load(None);

        assert_eq!(h.entity_calls(), 0);
        assert_eq!(*h.navigator.visited.borrow(), vec!["a001_product"]);
        assert_eq!(h.loader.view().phase, DetailPhase::Redirected);
    }

    #[test]
    fn test_entity_then_summary() {
        let mut h = Harness::new();
        h.load(Some("p-1"));
        assert_eq!(h.loader.view().phase, DetailPhase::LoadingEntity);

        h.source.resolve_entity(0, Ok("Chair".into()));
        h.settle();
        let view = h.loader.view();
        assert_eq!(view.phase, DetailPhase::LoadingSummary);
        assert_eq!(view.entity.as_deref(), Some("Chair"));

        h.source.resolve_summary(0, Ok(7));
        h.settle();
        let view = h.loader.view();
        assert_eq!(view.phase, DetailPhase::SummaryLoaded);
        assert_eq!(view.summary, Some(7));
    }

    #[test]
    fn test_summary_failure_keeps_entity() {
        let mut h = Harness::new();
        h.load(Some("p-1"));
        h.source.resolve_entity(0, Ok("Chair".into()));
        h.settle();
        h.source
            .resolve_summary(0, Err(FetchError::Status { status: 500, message: "x".into() }));
        h.settle();

        let view = h.loader.view();
        assert_eq!(view.phase, DetailPhase::SummaryFailed);
        assert_eq!(view.entity.as_deref(), Some("Chair"));
        assert_eq!(view.summary, None);
        assert!(h.navigator.visited.borrow().is_empty());
        assert!(h.notifier.errors.borrow().is_empty());
    }

    #[test]
    fn test_entity_failure_notifies_and_redirects() {
        let mut h = Harness::new();
        h.load(Some("missing"));
        h.source.resolve_entity(0, Err(FetchError::NotFound));
        h.settle();

        assert_eq!(h.loader.view().phase, DetailPhase::EntityFailed);
        assert_eq!(h.notifier.errors.borrow().len(), 1);
        assert_eq!(*h.navigator.visited.borrow(), vec!["a001_product"]);
        assert_eq!(h.summary_calls(), 0);
    }

    #[test]
    fn test_stale_id_is_discarded() {
        let mut h = Harness::new();
        h.load(Some("p-1"));
        h.load(Some("p-2"));
        assert_eq!(h.entity_calls(), 2);

        h.source.resolve_entity(1, Ok("Table".into()));
        h.settle();
        h.source.resolve_entity(0, Ok("Chair".into()));
        h.settle();

        assert_eq!(h.loader.view().entity.as_deref(), Some("Table"));
        assert_eq!(h.summary_calls(), 1);
        assert_eq!(h.source.summary_calls.borrow()[0].0, "p-2");
    }

    #[test]
    fn test_duplicate_load_is_suppressed() {
        let mut h = Harness::new();
        h.load(Some("p-1"));
        h.load(Some("p-1"));
        assert_eq!(h.entity_calls(), 1);

        h.source.resolve_entity(0, Ok("Chair".into()));
        h.settle();
        h.source.resolve_summary(0, Ok(1));
        h.settle();

        h.load(Some("p-1"));
        assert_eq!(h.entity_calls(), 2);
    }

    #[test]
    fn test_reload_forces_fetch() {
        let mut h = Harness::new();
        h.load(Some("p-1"));
        let fut = h.loader.reload();
        h.pool.spawner().spawn_local(fut).unwrap();
        h.settle();
        assert_eq!(h.entity_calls(), 2);
    }

    #[test]
    fn test_summary_skipped_when_not_wanted() {
        let mut h = Harness::new();
        h.source.with_summary.set(false);
        h.load(Some("p-1"));
        h.source.resolve_entity(0, Ok("Chair".into()));
        h.settle();

        assert_eq!(h.loader.view().phase, DetailPhase::EntityLoaded);
        assert_eq!(h.summary_calls(), 0);
    }

    #[test]
    fn test_dispose_ignores_late_entity() {
        let mut h = Harness::new();
        h.load(Some("p-1"));
        h.loader.dispose();
        h.source.resolve_entity(0, Err(FetchError::NotFound));
        h.settle();

        assert_eq!(h.loader.view().phase, DetailPhase::LoadingEntity);
        assert!(h.navigator.visited.borrow().is_empty());
        assert!(h.notifier.errors.borrow().is_empty());
    }
}
