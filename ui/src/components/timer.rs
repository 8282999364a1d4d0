use std::time::Duration;

/// Wait for `duration` on the browser's timer.
pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32).await;
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = duration;
        std::future::pending::<()>().await; // never runs on native
    }
}
