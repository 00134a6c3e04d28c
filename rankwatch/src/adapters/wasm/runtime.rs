//! Task and timer primitives backed by the browser event loop.

use std::future::Future;
use std::time::Duration;

pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
