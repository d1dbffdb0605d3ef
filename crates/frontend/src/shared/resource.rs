//! REST resources of the back-office and their list/detail sources.
//!
//! Every resource follows the same endpoint layout:
//! `POST /api/{path}/list`, `GET /api/{path}/{id}`,
//! `GET /api/{path}/{id}/summary`, `DELETE /api/{path}/{id}?stamp=...`.

use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::list_query::{ListRequest, ListResponse, SortSpec};
use contracts::shared::record::AdminRecord;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{delete_with_stamp, get_json, post_json};
use crate::shared::data_view::{DetailSource, FetchError, ListConfig, ListFetcher};

/// Single-value filter offered above a list (usually the record status)
#[derive(Debug, Clone)]
pub struct StatusFilter {
    pub key: &'static str,
    pub label: &'static str,
    /// (wire value, label)
    pub options: Vec<(&'static str, &'static str)>,
}

impl StatusFilter {
    /// Filter on the `isActive` flag
    pub fn active() -> Self {
        Self {
            key: "isActive",
            label: "Активность",
            options: vec![("true", "Активные"), ("false", "Отключённые")],
        }
    }
}

/// A list endpoint of the backend
pub trait AdminResource: 'static {
    type Row: AdminRecord + DeserializeOwned + Clone + Send + Sync + 'static;

    /// URL segment after `/api/`
    const PATH: &'static str;
    /// Tab key of the list page
    const TAB_KEY: &'static str;
    const TITLE: &'static str;

    fn default_sort() -> Vec<SortSpec> {
        vec![SortSpec::desc("createdAt")]
    }

    fn status_filter() -> Option<StatusFilter> {
        None
    }

    fn list_config() -> ListConfig {
        ListConfig::default().with_default_sort(Self::default_sort())
    }

    fn list_path() -> String {
        format!("/api/{}/list", Self::PATH)
    }

    fn item_path(id: &str) -> String {
        format!("/api/{}/{}", Self::PATH, urlencoding::encode(id))
    }

    /// Tab key of the detail page of `id`
    fn detail_key(id: &str) -> String {
        format!("{}_detail_{}", Self::TAB_KEY, id)
    }
}

/// A resource whose records have a detail page with a secondary summary
pub trait DetailResource: AdminResource {
    type Summary: DeserializeOwned + Clone + Send + Sync + 'static;

    fn wants_summary(_row: &Self::Row) -> bool {
        true
    }

    fn summary_path(id: &str) -> String {
        format!("{}/summary", Self::item_path(id))
    }
}

/// Deletes `record`, sending its concurrency stamp
pub async fn delete_record<R: AdminResource>(record: &R::Row) -> Result<(), FetchError> {
    delete_with_stamp(&R::item_path(record.id()), record.concurrency_stamp()).await
}

pub struct RestList<R>(PhantomData<R>);

impl<R> RestList<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for RestList<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<R: AdminResource> ListFetcher for RestList<R> {
    type Row = R::Row;

    async fn fetch_page(&self, request: ListRequest) -> Result<ListResponse<R::Row>, FetchError> {
        post_json(&R::list_path(), &request).await
    }
}

pub struct RestDetail<R>(PhantomData<R>);

impl<R> RestDetail<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for RestDetail<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<R: DetailResource> DetailSource for RestDetail<R> {
    type Id = String;
    type Entity = R::Row;
    type Summary = R::Summary;

    async fn fetch_entity(&self, id: &String) -> Result<R::Row, FetchError> {
        get_json(&R::item_path(id)).await
    }

    fn wants_summary(&self, entity: &R::Row) -> bool {
        R::wants_summary(entity)
    }

    async fn fetch_summary(&self, id: &String, _entity: &R::Row) -> Result<R::Summary, FetchError> {
        get_json(&R::summary_path(id)).await
    }
}
