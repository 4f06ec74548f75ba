use crate::filter::{Filter, FilterResult};
use crate::types::DerivedItem;

/// Keeps items classified into one of the four quadrants.
#[derive(Default)]
pub struct KnownCategoryFilter;

impl Filter<DerivedItem> for KnownCategoryFilter {
    fn filter(&self, candidates: Vec<DerivedItem>) -> FilterResult<DerivedItem> {
        let (kept, removed): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|d| d.item.category.is_known());

        FilterResult { kept, removed }
    }
}
