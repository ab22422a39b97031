//! Data layer shared by every management screen.
//!
//! Collections come from `GET /api/<collection>`; when the backend is
//! unreachable the screen falls back to its fixed sample collection so
//! the UI stays demonstrable. The fallback is deterministic, not a
//! timer-driven simulation.

use std::future::Future;

use contracts::domain::common::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{get_json, post_json, put_json};

/// Fetch the ordered collection for an entity type.
pub async fn fetch_list<T>() -> Result<Vec<T>, String>
where
    T: Entity + DeserializeOwned,
{
    get_json(&format!("/api/{}", T::collection_name())).await
}

/// Create a record; the server assigns the identifier.
pub async fn create_record<T, D>(dto: &D) -> Result<T, String>
where
    T: Entity + DeserializeOwned,
    D: Serialize,
{
    post_json(&format!("/api/{}", T::collection_name()), dto).await
}

/// Update an existing record.
pub async fn update_record<T, D>(id: i32, dto: &D) -> Result<T, String>
where
    T: Entity + DeserializeOwned,
    D: Serialize,
{
    put_json(&format!("/api/{}/{}", T::collection_name(), id), dto).await
}

/// Resolve `fetch`, or fall back to the sample collection on error.
pub async fn load_or_fallback<T, F>(fetch: F, sample: fn() -> Vec<T>) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, String>>,
{
    match fetch.await {
        Ok(items) => items,
        Err(err) => {
            log::warn!("list fetch failed, using sample data: {err}");
            sample()
        }
    }
}
