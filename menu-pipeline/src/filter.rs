use crate::util;

/// Result of a filter operation, partitioning candidates into kept and removed.
pub struct FilterResult<C> {
    pub kept: Vec<C>,
    pub removed: Vec<C>,
}

/// Filters partition candidates into kept and removed sets, preserving
/// relative order within each set.
pub trait Filter<C>: Send + Sync {
    /// Evaluate each candidate against the filter's criteria.
    fn filter(&self, candidates: Vec<C>) -> FilterResult<C>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
