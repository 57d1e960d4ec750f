#![allow(dead_code)]

pub mod fake_api;

/// Run a blocking client call on the blocking pool
///
/// The client under test is synchronous, so it must never run on a runtime
/// worker thread.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
