//! Timer glue so requests can be bounded on both wasm and native targets.

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Races `fut` against a timer. Returns `None` when the timer fires first.
pub async fn with_timeout<F: Future>(timeout_ms: u64, fut: F) -> Option<F::Output> {
    let timer = sleep_ms(timeout_ms);
    pin_mut!(fut);
    pin_mut!(timer);

    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}
