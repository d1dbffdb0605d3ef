use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::shared::list_query::{
    FetchResult, Filter, FilterOperator, ListRequest, ListResponse, SortSpec,
};

use super::config::ListConfig;
use super::context::ViewContext;
use super::debounce::Debouncer;
use super::error::FetchError;
use super::pagination::PaginationUpdate;
use super::ports::{Notifier, Timer};
use super::query::QueryState;
use super::token::{RequestToken, TokenSource};

/// Source of list pages (usually a REST endpoint)
#[async_trait(?Send)]
pub trait ListFetcher {
    type Row: Clone + 'static;

    async fn fetch_page(&self, request: ListRequest)
        -> Result<ListResponse<Self::Row>, FetchError>;
}

/// What the table shows
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub total: usize,
    pub loading: bool,
    pub error: Option<FetchError>,
    /// At least one page arrived since the last invalidation
    pub loaded: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            loaded: false,
        }
    }
}

type Subscriber<T> = Box<dyn Fn(&ListView<T>, &QueryState)>;

/// Server-paged list controller: owns the query state of one list screen,
/// issues fetches and keeps only the result of the most recently started one.
///
/// All methods that may fetch return a `'static` future; the token of the
/// request is minted when the method is called, not when the future is
/// first polled.
pub struct ListController<F: ListFetcher> {
    inner: Rc<ControllerInner<F>>,
}

impl<F: ListFetcher> Clone for ListController<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct ControllerInner<F: ListFetcher> {
    fetcher: F,
    context: ViewContext,
    config: ListConfig,
    query: RefCell<QueryState>,
    view: RefCell<ListView<F::Row>>,
    tokens: TokenSource,
    debouncer: Debouncer,
    notifier: RefCell<Option<Rc<dyn Notifier>>>,
    subscribers: RefCell<Vec<Subscriber<F::Row>>>,
    started: Cell<bool>,
    disposed: Cell<bool>,
}

impl<F: ListFetcher + 'static> ListController<F> {
    pub fn new(fetcher: F, timer: Rc<dyn Timer>, context: ViewContext, config: ListConfig) -> Self {
        let query = QueryState::new(&config);
        let debouncer = Debouncer::new(timer, config.debounce_ms, &query.search);

        Self {
            inner: Rc::new(ControllerInner {
                fetcher,
                context,
                config,
                query: RefCell::new(query),
                view: RefCell::new(ListView::default()),
                tokens: TokenSource::new(),
                debouncer,
                notifier: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                started: Cell::new(false),
                disposed: Cell::new(false),
            }),
        }
    }

    pub fn set_notifier(&self, notifier: Rc<dyn Notifier>) {
        *self.inner.notifier.borrow_mut() = Some(notifier);
    }

    /// Called after every state change with fresh snapshots
    pub fn subscribe(&self, subscriber: impl Fn(&ListView<F::Row>, &QueryState) + 'static) {
        self.inner
            .subscribers
            .borrow_mut()
            .push(Box::new(subscriber));
    }

    pub fn view(&self) -> ListView<F::Row> {
        self.inner.view.borrow().clone()
    }

    pub fn query(&self) -> QueryState {
        self.inner.query.borrow().clone()
    }

    pub fn config(&self) -> &ListConfig {
        &self.inner.config
    }

    /// Initial fetch; later calls do nothing
    pub fn start(&self) -> impl Future<Output = ()> + 'static {
        let first = !self.inner.started.replace(true);
        self.refresh_if(first)
    }

    /// Fetches the current query state. Supersedes any fetch in flight.
    pub fn refresh(&self) -> impl Future<Output = ()> + 'static {
        let inner = self.inner.clone();
        let begun = inner.begin();

        async move {
            let Some((token, request)) = begun else {
                return;
            };
            let result = inner.fetcher.fetch_page(request).await;
            inner.complete(token, result);
        }
    }

    fn refresh_if(&self, condition: bool) -> impl Future<Output = ()> + 'static {
        let pending = condition.then(|| self.refresh());
        async move {
            if let Some(pending) = pending {
                pending.await;
            }
        }
    }

    /// Keystroke in the search box; fetches once typing settles
    pub fn search_input(&self, raw: &str) -> impl Future<Output = ()> + 'static {
        let pending = self.inner.debouncer.input(raw);
        let this = self.clone();

        async move {
            let Some(text) = pending.await else {
                return;
            };
            let changed = this.inner.query.borrow_mut().set_search(&text);
            if changed {
                this.refresh().await;
            }
        }
    }

    /// Sets search text bypassing the debounce (clear button, restored state)
    pub fn set_search_now(&self, text: &str) -> impl Future<Output = ()> + 'static {
        self.inner.debouncer.cancel();
        self.inner.debouncer.sync(text);
        let changed = self.inner.query.borrow_mut().set_search(text);
        self.refresh_if(changed)
    }

    pub fn set_filters(&self, filters: Vec<Filter>) -> impl Future<Output = ()> + 'static {
        self.inner.query.borrow_mut().set_filters(filters);
        self.refresh()
    }

    pub fn upsert_filter(&self, filter: Filter) -> impl Future<Output = ()> + 'static {
        self.inner.query.borrow_mut().upsert_filter(filter);
        self.refresh()
    }

    pub fn remove_filter(
        &self,
        key: &str,
        operator: FilterOperator,
    ) -> impl Future<Output = ()> + 'static {
        let removed = self.inner.query.borrow_mut().remove_filter(key, operator);
        self.refresh_if(removed)
    }

    pub fn set_sort(&self, sort: Vec<SortSpec>) -> impl Future<Output = ()> + 'static {
        self.inner.query.borrow_mut().set_sort(sort);
        self.refresh()
    }

    pub fn toggle_sort(&self, key: &str) -> impl Future<Output = ()> + 'static {
        self.inner.query.borrow_mut().toggle_sort(key);
        self.refresh()
    }

    pub fn set_pagination(&self, update: PaginationUpdate) -> impl Future<Output = ()> + 'static {
        let changed = self.inner.query.borrow_mut().apply_pagination(update);
        self.refresh_if(changed)
    }

    /// 0-based page
    pub fn set_page(&self, page: usize) -> impl Future<Output = ()> + 'static {
        self.set_pagination(PaginationUpdate::page(page))
    }

    pub fn set_page_size(&self, page_size: usize) -> impl Future<Output = ()> + 'static {
        self.set_pagination(PaginationUpdate::page_size(page_size))
    }

    /// Drops the displayed rows (e.g. after the data became meaningless)
    pub fn invalidate(&self) {
        {
            let mut view = self.inner.view.borrow_mut();
            view.rows.clear();
            view.total = 0;
            view.loaded = false;
        }
        self.inner.notify();
    }

    /// Detaches the controller: in-flight completions and pending search
    /// commits become no-ops and no subscriber is called again.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        self.inner.tokens.invalidate();
        self.inner.debouncer.dispose();
        self.inner.subscribers.borrow_mut().clear();
        self.inner.view.borrow_mut().loading = false;
    }
}

impl<F: ListFetcher> ControllerInner<F> {
    fn begin(&self) -> Option<(RequestToken, ListRequest)> {
        if self.disposed.get() {
            return None;
        }
        let token = self.tokens.mint();
        let request = self.query.borrow().to_request(&self.context, &self.config);
        log::debug!(
            "list fetch #{}: page {} size {} filters {}",
            token.value(),
            request.page,
            request.page_size,
            request.filters.len()
        );

        {
            let mut view = self.view.borrow_mut();
            view.loading = true;
        }
        self.notify();
        Some((token, request))
    }

    fn complete(&self, token: RequestToken, result: Result<ListResponse<F::Row>, FetchError>) {
        if self.disposed.get() || !self.tokens.is_current(token) {
            log::debug!("list fetch #{}: stale response discarded", token.value());
            return;
        }

        match result {
            Ok(response) => {
                self.reconcile_pagination(&response);
                let page = FetchResult::from(response);
                let mut view = self.view.borrow_mut();
                view.rows = page.rows;
                view.total = page.total;
                view.loading = false;
                view.error = None;
                view.loaded = true;
            }
            Err(error) => {
                log::error!("list fetch #{} failed: {}", token.value(), error);
                {
                    let mut view = self.view.borrow_mut();
                    view.loading = false;
                    view.error = Some(error.clone());
                }
                let notifier = self.notifier.borrow().clone();
                if let Some(notifier) = notifier {
                    notifier.error(&error.to_string());
                }
            }
        }
        self.notify();
    }

    /// Adopts the page the server actually returned (it may clamp past-the-end pages)
    fn reconcile_pagination(&self, response: &ListResponse<F::Row>) {
        let info = response.pagination;
        if info.page_size == 0 {
            return;
        }
        let mut query = self.query.borrow_mut();
        query.pagination.page = self.config.page_base.from_base(info.page_number);
        query.pagination.page_size = info.page_size;
    }

    fn notify(&self) {
        let view = self.view.borrow().clone();
        let query = self.query.borrow().clone();
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&view, &query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_view::testing::{
        page_of, ManualTimer, RecordingNotifier, ScriptedFetcher,
    };
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    struct Harness {
        pool: LocalPool,
        timer: Rc<ManualTimer>,
        fetcher: ScriptedFetcher<String>,
        controller: ListController<ScriptedFetcher<String>>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_context(ViewContext::default())
        }

        fn with_context(context: ViewContext) -> Self {
            let timer = ManualTimer::new();
            let fetcher = ScriptedFetcher::new();
            let config = ListConfig {
                page_size: 10,
                ..ListConfig::default()
            };
            let controller = ListController::new(fetcher.clone(), timer.clone(), context, config);
            Self {
                pool: LocalPool::new(),
                timer,
                fetcher,
                controller,
            }
        }

        fn spawn(&mut self, fut: impl Future<Output = ()> + 'static) {
            self.pool.spawner().spawn_local(fut).unwrap();
            self.pool.run_until_stalled();
        }

        fn settle(&mut self) {
            self.pool.run_until_stalled();
        }

        fn rows(&self) -> Vec<String> {
            self.controller.view().rows
        }
    }

    #[test]
    fn test_last_initiated_wins_when_first_completes_last() {
        let mut h = Harness::new();
        let first = h.controller.refresh();
        let second = h.controller.refresh();
        h.spawn(first);
        h.spawn(second);
        assert_eq!(h.fetcher.call_count(), 2);

        h.fetcher.resolve(1, Ok(page_of(&["b1", "b2"], 2, 1)));
        h.settle();
        assert_eq!(h.rows(), vec!["b1", "b2"]);
        assert!(!h.controller.view().loading);

        h.fetcher.resolve(0, Ok(page_of(&["a1"], 1, 1)));
        h.settle();
        assert_eq!(h.rows(), vec!["b1", "b2"]);
        assert_eq!(h.controller.view().total, 2);
    }

    #[test]
    fn test_last_initiated_wins_when_first_completes_first() {
        let mut h = Harness::new();
        let first = h.controller.refresh();
        let second = h.controller.refresh();
        h.spawn(first);
        h.spawn(second);

        h.fetcher.resolve(0, Ok(page_of(&["a1"], 1, 1)));
        h.settle();
        assert!(h.rows().is_empty());
        assert!(h.controller.view().loading);

        h.fetcher.resolve(1, Ok(page_of(&["b1"], 1, 1)));
        h.settle();
        assert_eq!(h.rows(), vec!["b1"]);
        assert!(!h.controller.view().loading);
    }

    #[test]
    fn test_stale_failure_is_not_surfaced() {
        let mut h = Harness::new();
        let notifier = Rc::new(RecordingNotifier::default());
        h.controller.set_notifier(notifier.clone());

        let first = h.controller.refresh();
        let second = h.controller.refresh();
        h.spawn(first);
        h.spawn(second);

        h.fetcher.resolve(1, Ok(page_of(&["b1"], 1, 1)));
        h.fetcher
            .resolve(0, Err(FetchError::Network("timeout".into())));
        h.settle();

        assert_eq!(h.controller.view().error, None);
        assert!(notifier.errors.borrow().is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut h = Harness::new();
        let notifier = Rc::new(RecordingNotifier::default());
        h.controller.set_notifier(notifier.clone());

        let fut = h.controller.refresh();
        h.spawn(fut);
        h.fetcher.resolve(0, Ok(page_of(&["r1", "r2"], 2, 1)));
        h.settle();

        let fut = h.controller.refresh();
        h.spawn(fut);
        h.fetcher.resolve(
            1,
            Err(FetchError::Status {
                status: 500,
                message: "boom".into(),
            }),
        );
        h.settle();

        let view = h.controller.view();
        assert_eq!(view.rows, vec!["r1", "r2"]);
        assert!(!view.loading);
        assert!(matches!(view.error, Some(FetchError::Status { status: 500, .. })));
        assert_eq!(notifier.errors.borrow().len(), 1);

        h.controller.invalidate();
        assert!(h.rows().is_empty());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut h = Harness::new();
        let fut = h.controller.refresh();
        h.spawn(fut);
        h.fetcher.resolve(0, Err(FetchError::NotFound));
        h.settle();
        assert!(h.controller.view().error.is_some());

        let fut = h.controller.refresh();
        h.spawn(fut);
        h.fetcher.resolve(1, Ok(page_of(&["x"], 1, 1)));
        h.settle();
        assert_eq!(h.controller.view().error, None);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut h = Harness::new();
        let fut = h.controller.set_page(3);
        h.spawn(fut);
        assert_eq!(h.fetcher.request(0).page, 4);
        h.fetcher.resolve(0, Ok(page_of(&["p4"], 40, 4)));
        h.settle();
        assert_eq!(h.controller.query().page(), 3);

        let fut = h.controller.set_page_size(20);
        h.spawn(fut);
        assert_eq!(h.controller.query().page(), 0);
        let request = h.fetcher.request(1);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 20);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut h = Harness::new();
        let fut = h.controller.set_page(2);
        h.spawn(fut);

        let fut = h.controller.upsert_filter(Filter::eq("status", "ACTIVE"));
        h.spawn(fut);
        assert_eq!(h.controller.query().page(), 0);
        let request = h.fetcher.request(1);
        assert_eq!(request.page, 1);
        assert_eq!(request.filters, vec![Filter::eq("status", "ACTIVE")]);
    }

    #[test]
    fn test_unchanged_pagination_does_not_fetch() {
        let mut h = Harness::new();
        let fut = h.controller.set_page(0);
        h.spawn(fut);
        let fut = h.controller.set_page_size(10);
        h.spawn(fut);
        assert_eq!(h.fetcher.call_count(), 0);
    }

    #[test]
    fn test_server_page_is_adopted() {
        let mut h = Harness::new();
        let fut = h.controller.set_page(9);
        h.spawn(fut);
        h.fetcher.resolve(0, Ok(page_of(&["last"], 25, 3)));
        h.settle();
        assert_eq!(h.controller.query().page(), 2);
    }

    #[test]
    fn test_rapid_search_input_fetches_once() {
        let mut h = Harness::new();
        let fut = h.controller.search_input("a");
        h.spawn(fut);
        h.timer.advance(40);
        let fut = h.controller.search_input("ab");
        h.spawn(fut);
        h.timer.advance(30);
        let fut = h.controller.search_input("abc");
        h.spawn(fut);

        h.timer.advance(499);
        h.settle();
        assert_eq!(h.fetcher.call_count(), 0);

        h.timer.advance(1);
        h.settle();
        assert_eq!(h.fetcher.call_count(), 1);
        let request = h.fetcher.request(0);
        assert_eq!(request.search.as_deref(), Some("abc"));
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_committed_search_resets_page() {
        let mut h = Harness::new();
        let fut = h.controller.set_page(5);
        h.spawn(fut);

        let fut = h.controller.search_input("chair");
        h.spawn(fut);
        h.timer.advance(500);
        h.settle();

        assert_eq!(h.controller.query().page(), 0);
        assert_eq!(h.fetcher.request(1).page, 1);
    }

    #[test]
    fn test_clear_search_cancels_pending_input() {
        let mut h = Harness::new();
        let fut = h.controller.search_input("chair");
        h.spawn(fut);
        h.timer.advance(500);
        h.settle();
        assert_eq!(h.fetcher.call_count(), 1);

        let fut = h.controller.search_input("chairs");
        h.spawn(fut);
        let fut = h.controller.set_search_now("");
        h.spawn(fut);
        h.timer.advance(500);
        h.settle();

        assert_eq!(h.fetcher.call_count(), 2);
        assert_eq!(h.fetcher.request(1).search, None);
    }

    #[test]
    fn test_double_refresh_shows_same_result() {
        let mut h = Harness::new();
        let first = h.controller.refresh();
        let second = h.controller.refresh();
        h.spawn(first);
        h.spawn(second);

        h.fetcher.resolve(0, Ok(page_of(&["same"], 1, 1)));
        h.fetcher.resolve(1, Ok(page_of(&["same"], 1, 1)));
        h.settle();

        let view = h.controller.view();
        assert_eq!(view.rows, vec!["same"]);
        assert_eq!(view.total, 1);
        assert!(!view.loading);
    }

    #[test]
    fn test_start_fetches_once() {
        let mut h = Harness::new();
        let fut = h.controller.start();
        h.spawn(fut);
        let fut = h.controller.start();
        h.spawn(fut);
        assert_eq!(h.fetcher.call_count(), 1);
    }

    #[test]
    fn test_dispose_ignores_in_flight_completion() {
        let mut h = Harness::new();
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        h.controller.subscribe(move |_, _| counter.set(counter.get() + 1));

        let fut = h.controller.refresh();
        h.spawn(fut);
        let before = notified.get();

        h.controller.dispose();
        h.fetcher.resolve(0, Ok(page_of(&["late"], 1, 1)));
        h.settle();

        assert!(h.rows().is_empty());
        assert_eq!(notified.get(), before);

        let fut = h.controller.refresh();
        h.spawn(fut);
        assert_eq!(h.fetcher.call_count(), 1);
    }

    #[test]
    fn test_subscribers_see_loading_then_rows() {
        let mut h = Harness::new();
        let seen: Rc<RefCell<Vec<(bool, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        h.controller
            .subscribe(move |view, _| log.borrow_mut().push((view.loading, view.rows.len())));

        let fut = h.controller.refresh();
        h.spawn(fut);
        h.fetcher.resolve(0, Ok(page_of(&["a", "b"], 2, 1)));
        h.settle();

        assert_eq!(*seen.borrow(), vec![(true, 0), (false, 2)]);
    }

    #[test]
    fn test_context_filters_are_sent() {
        let mut h = Harness::with_context(ViewContext::for_vendor("v-9").with_branch("b-1"));
        let fut = h.controller.set_filters(vec![Filter::any_of("brandId", ["x"])]);
        h.spawn(fut);

        let filters = h.fetcher.request(0).filters;
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0], Filter::eq("vendorId", "v-9"));
        assert_eq!(filters[1], Filter::eq("branchId", "b-1"));
    }
}
