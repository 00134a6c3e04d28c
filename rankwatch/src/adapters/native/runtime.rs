//! Task and timer primitives backed by tokio.
//!
//! Tasks are `!Send` and must be spawned from inside a
//! [`tokio::task::LocalSet`]; `spawn_local` panics otherwise.

use std::future::Future;
use std::time::Duration;

pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    tokio::task::spawn_local(future);
}

pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
