//! Leptos bindings: controllers live in local stored values, their state is
//! mirrored into signals, and every fetch runs on `spawn_local`.

use std::future::Future;
use std::rc::Rc;

use contracts::shared::list_query::{Filter, FilterOperator, SortSpec};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::ListConfig;
use super::context::ViewContext;
use super::controller::{ListController, ListFetcher, ListView};
use super::detail::{DetailLoader, DetailSource, DetailView};
use super::ports::{BrowserTimer, Navigator, Notifier};
use super::query::QueryState;

/// Handle of a server-paged list bound to the current reactive owner
pub struct ServerPagination<F: ListFetcher + 'static>
where
    F::Row: Send + Sync,
{
    pub view: RwSignal<ListView<F::Row>>,
    pub query: RwSignal<QueryState>,
    controller: StoredValue<ListController<F>, LocalStorage>,
}

impl<F: ListFetcher + 'static> Clone for ServerPagination<F>
where
    F::Row: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ListFetcher + 'static> Copy for ServerPagination<F> where F::Row: Send + Sync {}

/// Creates the list controller, starts the first fetch and disposes the
/// controller together with the owner.
pub fn use_server_pagination<F>(
    fetcher: F,
    context: ViewContext,
    config: ListConfig,
) -> ServerPagination<F>
where
    F: ListFetcher + 'static,
    F::Row: Send + Sync,
{
    let controller = ListController::new(fetcher, Rc::new(BrowserTimer), context, config);

    let view = RwSignal::new(controller.view());
    let query = RwSignal::new(controller.query());
    controller.subscribe(move |v, q| {
        view.try_set(v.clone());
        query.try_set(q.clone());
    });

    let stored = StoredValue::new_local(controller);
    on_cleanup(move || {
        stored.try_with_value(|c| c.dispose());
    });

    let handle = ServerPagination {
        view,
        query,
        controller: stored,
    };
    handle.run(|c| c.start());
    handle
}

impl<F: ListFetcher + 'static> ServerPagination<F>
where
    F::Row: Send + Sync,
{
    fn run<Fut>(&self, action: impl FnOnce(&ListController<F>) -> Fut)
    where
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(fut) = self.controller.try_with_value(action) {
            spawn_local(fut);
        }
    }

    /// Errors of list fetches are reported here as well
    pub fn with_notifier(self, notifier: Rc<dyn Notifier>) -> Self {
        self.controller.try_with_value(|c| c.set_notifier(notifier));
        self
    }

    pub fn config(&self) -> ListConfig {
        self.controller
            .try_with_value(|c| c.config().clone())
            .unwrap_or_default()
    }

    pub fn refresh(&self) {
        self.run(|c| c.refresh());
    }

    pub fn invalidate(&self) {
        self.controller.try_with_value(|c| c.invalidate());
    }

    pub fn search_input(&self, raw: String) {
        self.run(move |c| c.search_input(&raw));
    }

    pub fn clear_search(&self) {
        self.run(|c| c.set_search_now(""));
    }

    pub fn set_filters(&self, filters: Vec<Filter>) {
        self.run(move |c| c.set_filters(filters));
    }

    pub fn upsert_filter(&self, filter: Filter) {
        self.run(move |c| c.upsert_filter(filter));
    }

    pub fn remove_filter(&self, key: &str, operator: FilterOperator) {
        self.run(|c| c.remove_filter(key, operator));
    }

    pub fn set_sort(&self, sort: Vec<SortSpec>) {
        self.run(move |c| c.set_sort(sort));
    }

    pub fn toggle_sort(&self, key: &str) {
        self.run(|c| c.toggle_sort(key));
    }

    /// 0-based page
    pub fn set_page(&self, page: usize) {
        self.run(|c| c.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.run(|c| c.set_page_size(page_size));
    }
}

/// Handle of a detail loader bound to the current reactive owner
pub struct DetailWithSummary<S: DetailSource + 'static>
where
    S::Entity: Send + Sync,
    S::Summary: Send + Sync,
{
    pub view: RwSignal<DetailView<S::Entity, S::Summary>>,
    loader: StoredValue<DetailLoader<S>, LocalStorage>,
}

impl<S: DetailSource + 'static> Clone for DetailWithSummary<S>
where
    S::Entity: Send + Sync,
    S::Summary: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: DetailSource + 'static> Copy for DetailWithSummary<S>
where
    S::Entity: Send + Sync,
    S::Summary: Send + Sync,
{
}

/// Starts loading `id` (or redirects to `fallback_path` when there is none)
pub fn use_detail_with_summary<S>(
    source: S,
    id: Option<S::Id>,
    fallback_path: &str,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
) -> DetailWithSummary<S>
where
    S: DetailSource + 'static,
    S::Entity: Send + Sync,
    S::Summary: Send + Sync,
{
    let loader = DetailLoader::new(source, navigator, notifier, fallback_path);

    let view = RwSignal::new(loader.view());
    loader.subscribe(move |v| {
        view.try_set(v.clone());
    });

    let stored = StoredValue::new_local(loader);
    on_cleanup(move || {
        stored.try_with_value(|l| l.dispose());
    });

    let handle = DetailWithSummary {
        view,
        loader: stored,
    };
    if let Some(fut) = stored.try_with_value(|l| l.load(id)) {
        spawn_local(fut);
    }
    handle
}

impl<S: DetailSource + 'static> DetailWithSummary<S>
where
    S::Entity: Send + Sync,
    S::Summary: Send + Sync,
{
    pub fn reload(&self) {
        if let Some(fut) = self.loader.try_with_value(|l| l.reload()) {
            spawn_local(fut);
        }
    }

    pub fn current_id(&self) -> Option<S::Id> {
        self.loader.try_with_value(|l| l.current_id()).flatten()
    }
}
