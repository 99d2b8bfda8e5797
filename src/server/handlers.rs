//! Generic create/list/get handlers shared by every record type
//!
//! One set of handlers, instantiated per record type `T`:
//! - `POST /{resource}`: validate, build, insert, 201
//! - `GET /{resource}`: page through the store in key order, 200 or 404
//! - `GET /{resource}/{id}`: single lookup, 200 or 404

use crate::core::query::{QueryParams, paginate};
use crate::core::validation::Validated;
use crate::core::{ApiError, Envelope, IdGenerator, Record, RecordStore};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

/// Services shared by the routes of every record type
#[derive(Clone)]
pub struct RouteContext {
    /// Identifier source for created records
    pub ids: Arc<dyn IdGenerator>,

    /// Largest page size a list request may ask for, if capped
    pub max_limit: Option<usize>,
}

/// Per-record-type handler state
pub struct RecordState<T: Record> {
    pub store: Arc<dyn RecordStore<T>>,
    pub ids: Arc<dyn IdGenerator>,
    pub max_limit: Option<usize>,
}

impl<T: Record> RecordState<T> {
    /// Bind a store to the shared route context
    pub fn new(store: Arc<dyn RecordStore<T>>, context: &RouteContext) -> Self {
        Self {
            store,
            ids: Arc::clone(&context.ids),
            max_limit: context.max_limit,
        }
    }
}

impl<T: Record> Clone for RecordState<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            ids: Arc::clone(&self.ids),
            max_limit: self.max_limit,
        }
    }
}

fn respond<D: Serialize>(
    status: StatusCode,
    message: String,
    data: &D,
) -> Result<Envelope, ApiError> {
    Ok(Envelope::with_data(status, message, data)?)
}

/// POST /{resource}: create a record from a validated payload
pub async fn create_record<T: Record>(
    State(state): State<RecordState<T>>,
    Validated(draft): Validated<T>,
) -> Result<Envelope, ApiError> {
    let record = T::create(state.ids.as_ref(), draft);
    let key = record.id().to_owned();

    let created = state.store.insert(&key, record).await?;
    tracing::info!(
        resource = T::resource_name(),
        id = %key,
        restaurant_id = created.restaurant_id(),
        "record created"
    );

    respond(
        StatusCode::CREATED,
        format!("{} created successfully.", T::label()),
        &created,
    )
}

/// GET /{resource}: list records, paginated
///
/// A query string that cannot be read at all (e.g., a repeated `page`) is
/// treated like one without paging parameters.
pub async fn list_records<T: Record>(
    State(state): State<RecordState<T>>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Envelope, ApiError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unreadable query, using defaults");
            QueryParams::default()
        }
    };

    let page = params.page();
    let limit = params.limit(state.max_limit);

    let records = paginate(state.store.values().await?, page, limit);
    tracing::debug!(
        resource = T::resource_name(),
        page,
        limit,
        returned = records.len(),
        "listed records"
    );

    if records.is_empty() {
        return Err(ApiError::empty_collection(T::label_plural()));
    }

    respond(
        StatusCode::OK,
        format!("{} retrieved successfully.", T::label_plural()),
        &records,
    )
}

/// GET /{resource}/{id}: fetch one record
pub async fn get_record<T: Record>(
    State(state): State<RecordState<T>>,
    Path(id): Path<String>,
) -> Result<Envelope, ApiError> {
    match state.store.get(&id).await? {
        Some(record) => respond(
            StatusCode::OK,
            format!("{} retrieved successfully.", T::label()),
            &record,
        ),
        None => {
            tracing::debug!(resource = T::resource_name(), id = %id, "record not found");
            Err(ApiError::not_found(T::label(), id))
        }
    }
}
