use crate::components::known_category_filter::KnownCategoryFilter;
use crate::filter::{Filter, FilterResult};
use crate::types::{DerivedItem, MenuCategory, QuadrantGroups};

/// Buckets items by their assigned quadrant.
///
/// Items with an unrecognized category land in no quadrant. They are
/// returned in `dropped` and reported with a warning instead of being
/// guessed into a bucket.
#[derive(Default)]
pub struct QuadrantGrouper {
    filter: KnownCategoryFilter,
}

impl QuadrantGrouper {
    pub fn group(&self, items: &[DerivedItem]) -> QuadrantGroups {
        let FilterResult { kept, removed } = self.filter.filter(items.to_vec());

        if !removed.is_empty() {
            let labels: Vec<&str> = removed.iter().map(|d| d.item.category.as_str()).collect();
            log::warn!(
                "{} dropped {} item(s) with unrecognized category: {:?}",
                self.filter.name(),
                removed.len(),
                labels
            );
        }

        let mut groups = QuadrantGroups {
            dropped: removed,
            ..QuadrantGroups::default()
        };
        for derived in kept {
            match derived.item.category {
                MenuCategory::Star => groups.stars.push(derived),
                MenuCategory::Puzzle => groups.puzzles.push(derived),
                MenuCategory::Plowhorse => groups.plowhorses.push(derived),
                MenuCategory::Dog => groups.dogs.push(derived),
                // Unreachable: KnownCategoryFilter already removed these.
                MenuCategory::Unknown(_) => groups.dropped.push(derived),
            }
        }
        groups
    }
}
