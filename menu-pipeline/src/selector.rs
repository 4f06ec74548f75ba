use std::cmp::Ordering;

use crate::util;

/// Selectors rank a candidate list by a score and truncate it.
///
/// Selection always works on a copy: the input slice is never reordered.
pub trait Selector<C>: Send + Sync
where
    C: Clone,
{
    /// Default selection: sort and truncate based on provided configs.
    fn select(&self, candidates: &[C]) -> Vec<C> {
        let mut sorted = self.sort(candidates.to_vec());
        if let Some(limit) = self.size() {
            sorted.truncate(limit);
        }
        sorted
    }

    /// Extract the score from a candidate to use for sorting.
    fn score(&self, candidate: &C) -> f64;

    /// Rank lowest scores first instead of highest.
    fn ascending(&self) -> bool {
        false
    }

    /// Stable sort by score. Equal scores keep their input order.
    ///
    /// NaN scores are pushed to the end of the list in either direction
    /// so they never appear as top or bottom candidates.
    fn sort(&self, candidates: Vec<C>) -> Vec<C> {
        let ascending = self.ascending();
        let mut sorted = candidates;
        sorted.sort_by(|a, b| {
            let sa = self.score(a);
            let sb = self.score(b);
            match (sa.is_nan(), sb.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) if ascending => sa.partial_cmp(&sb).unwrap_or(Ordering::Equal),
                (false, false) => sb.partial_cmp(&sa).unwrap_or(Ordering::Equal),
            }
        });
        sorted
    }

    /// Optionally provide a maximum number of candidates to select.
    /// Defaults to no truncation if not overridden.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
