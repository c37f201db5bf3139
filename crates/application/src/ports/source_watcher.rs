use async_trait::async_trait;

/// A stream of "something changed" notifications for one source.
#[async_trait]
pub trait SourceWatcher: Send {
    /// Waits for the next change. `false` means no further changes will
    /// ever be reported.
    async fn changed(&mut self) -> bool;
}
