use crate::types::{DerivedItem, PriceBucket};

/// Half-open `[low, upper)` bins. The last bin is open-ended.
const PRICE_BINS: [(&str, f64); 6] = [
    ("$0-10", 10.0),
    ("$10-20", 20.0),
    ("$20-30", 30.0),
    ("$30-40", 40.0),
    ("$40-50", 50.0),
    ("$50+", f64::INFINITY),
];

/// Counts items per price band. Every band is emitted, empty or not.
pub struct PriceHistogram;

impl PriceHistogram {
    /// Index of the first bin whose upper edge lies above `price`.
    /// Negative prices land in the first bin.
    pub fn bin_index(price: f64) -> usize {
        PRICE_BINS
            .iter()
            .position(|(_, upper)| price < *upper)
            .unwrap_or(PRICE_BINS.len() - 1)
    }

    pub fn build(&self, items: &[DerivedItem]) -> Vec<PriceBucket> {
        let mut counts = [0usize; PRICE_BINS.len()];
        for derived in items {
            counts[Self::bin_index(derived.item.price)] += 1;
        }
        PRICE_BINS
            .iter()
            .zip(counts)
            .map(|((label, _), count)| PriceBucket {
                range: label.to_string(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;

    fn priced(price: f64) -> DerivedItem {
        DerivedItem {
            item: MenuItem {
                price,
                ..MenuItem::default()
            },
            total_profit: 0.0,
        }
    }

    fn counts(buckets: &[PriceBucket]) -> Vec<usize> {
        buckets.iter().map(|b| b.count).collect()
    }

    #[test]
    fn all_bins_present_for_empty_input() {
        let buckets = PriceHistogram.build(&[]);
        let labels: Vec<&str> = buckets.iter().map(|b| b.range.as_str()).collect();
        assert_eq!(labels, vec!["$0-10", "$10-20", "$20-30", "$30-40", "$40-50", "$50+"]);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn boundaries_fall_into_upper_bin() {
        let items: Vec<_> = [9.99, 10.0, 20.0, 30.0, 40.0, 50.0]
            .into_iter()
            .map(priced)
            .collect();
        assert_eq!(counts(&PriceHistogram.build(&items)), vec![1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn negative_and_huge_prices() {
        let items: Vec<_> = [-4.0, 0.0, 1_000_000.0].into_iter().map(priced).collect();
        assert_eq!(counts(&PriceHistogram.build(&items)), vec![2, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn counts_sum_to_item_count() {
        let items: Vec<_> = [6.0, 12.0, 14.0, 15.0, 16.0, 24.5, 28.0, 48.0]
            .into_iter()
            .map(priced)
            .collect();
        let buckets = PriceHistogram.build(&items);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), items.len());
        assert_eq!(counts(&buckets), vec![1, 4, 2, 0, 1, 0]);
    }
}
