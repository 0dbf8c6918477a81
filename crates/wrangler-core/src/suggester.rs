use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::SuggestError>;

#[async_trait]
pub trait Suggester: Send + Sync + 'static {
    /// Suggests a batch of usernames that are unique at the time of the call.
    ///
    /// The returned names are pairwise distinct and were free in the store
    /// when each one was accepted. They are not reserved.
    async fn suggest(&self, seed: Option<&str>) -> Result<Vec<String>>;
}
