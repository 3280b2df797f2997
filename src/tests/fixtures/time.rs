/// Lets spawned timer tasks run after the paused clock was advanced.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
