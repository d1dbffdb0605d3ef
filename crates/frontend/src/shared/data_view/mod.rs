//! Server-driven list and detail data views: query state, debounced search,
//! stale-response guarded fetching, pagination and the Leptos bindings.

pub mod config;
pub mod context;
pub mod controller;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod hooks;
pub mod pagination;
pub mod ports;
pub mod query;
pub mod token;

#[cfg(test)]
mod testing;

pub use config::ListConfig;
pub use context::ViewContext;
pub use controller::{ListController, ListFetcher, ListView};
pub use detail::{DetailLoader, DetailPhase, DetailSource, DetailView};
pub use error::FetchError;
pub use hooks::{use_detail_with_summary, use_server_pagination, DetailWithSummary, ServerPagination};
pub use pagination::{PageBase, PaginationModel, PaginationUpdate};
pub use ports::{BrowserTimer, Navigator, Notifier, Timer};
pub use query::QueryState;
