//! Scripted collaborators for controller tests: a manual clock, fetchers
//! whose replies are released by the test, and recording ports.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use contracts::shared::list_query::{ListRequest, ListResponse, PaginationInfo};
use futures::channel::oneshot;

use super::controller::ListFetcher;
use super::detail::DetailSource;
use super::error::FetchError;
use super::ports::{Navigator, Notifier, Timer};

pub struct ManualTimer {
    now: Cell<u64>,
    sleepers: RefCell<Vec<(u64, oneshot::Sender<()>)>>,
}

impl ManualTimer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(0),
            sleepers: RefCell::new(Vec::new()),
        })
    }

    /// Moves the clock and wakes every sleeper whose deadline has passed
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
        let now = self.now.get();
        let due: Vec<oneshot::Sender<()>> = {
            let mut sleepers = self.sleepers.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) =
                sleepers.drain(..).partition(|(deadline, _)| *deadline <= now);
            *sleepers = waiting;
            due.into_iter().map(|(_, tx)| tx).collect()
        };
        for tx in due {
            let _ = tx.send(());
        }
    }
}

#[async_trait(?Send)]
impl Timer for ManualTimer {
    async fn sleep(&self, ms: u32) {
        let (tx, rx) = oneshot::channel();
        self.sleepers
            .borrow_mut()
            .push((self.now.get() + u64::from(ms), tx));
        let _ = rx.await;
    }
}

type Reply<T> = oneshot::Sender<Result<T, FetchError>>;

/// List fetcher that parks every call until the test resolves it
pub struct ScriptedFetcher<T> {
    calls: Rc<RefCell<Vec<(ListRequest, Option<Reply<ListResponse<T>>>)>>>,
}

impl<T> Clone for ScriptedFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T> ScriptedFetcher<T> {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn request(&self, index: usize) -> ListRequest {
        self.calls.borrow()[index].0.clone()
    }

    pub fn resolve(&self, index: usize, result: Result<ListResponse<T>, FetchError>) {
        let reply = self.calls.borrow_mut()[index]
            .1
            .take()
            .expect("call already resolved");
        let _ = reply.send(result);
    }
}

#[async_trait(?Send)]
impl<T: Clone + 'static> ListFetcher for ScriptedFetcher<T> {
    type Row = T;

    async fn fetch_page(&self, request: ListRequest) -> Result<ListResponse<T>, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.calls.borrow_mut().push((request, Some(tx)));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("reply dropped".into())))
    }
}

pub fn page_of(rows: &[&str], total: usize, page_number: usize) -> ListResponse<String> {
    ListResponse {
        list: rows.iter().map(|r| r.to_string()).collect(),
        pagination: PaginationInfo {
            total_count: total,
            page_size: 10,
            page_number,
        },
    }
}

/// Detail source: entity is a `String`, summary a `u32`
pub struct ScriptedDetail {
    pub entity_calls: Rc<RefCell<Vec<(String, Option<Reply<String>>)>>>,
    pub summary_calls: Rc<RefCell<Vec<(String, Option<Reply<u32>>)>>>,
    pub with_summary: Rc<Cell<bool>>,
}

impl Clone for ScriptedDetail {
    fn clone(&self) -> Self {
        Self {
            entity_calls: self.entity_calls.clone(),
            summary_calls: self.summary_calls.clone(),
            with_summary: self.with_summary.clone(),
        }
    }
}

impl ScriptedDetail {
    pub fn new() -> Self {
        Self {
            entity_calls: Rc::new(RefCell::new(Vec::new())),
            summary_calls: Rc::new(RefCell::new(Vec::new())),
            with_summary: Rc::new(Cell::new(true)),
        }
    }

    pub fn resolve_entity(&self, index: usize, result: Result<String, FetchError>) {
        let reply = self.entity_calls.borrow_mut()[index]
            .1
            .take()
            .expect("entity call already resolved");
        let _ = reply.send(result);
    }

    pub fn resolve_summary(&self, index: usize, result: Result<u32, FetchError>) {
        let reply = self.summary_calls.borrow_mut()[index]
            .1
            .take()
            .expect("summary call already resolved");
        let _ = reply.send(result);
    }
}

#[async_trait(?Send)]
impl DetailSource for ScriptedDetail {
    type Id = String;
    type Entity = String;
    type Summary = u32;

    async fn fetch_entity(&self, id: &String) -> Result<String, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.entity_calls.borrow_mut().push((id.clone(), Some(tx)));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("reply dropped".into())))
    }

    fn wants_summary(&self, _entity: &String) -> bool {
        self.with_summary.get()
    }

    async fn fetch_summary(&self, id: &String, _entity: &String) -> Result<u32, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.summary_calls.borrow_mut().push((id.clone(), Some(tx)));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("reply dropped".into())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: RefCell<Vec<String>>,
    pub successes: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
