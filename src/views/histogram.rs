use std::collections::BTreeMap;

use crate::models::{Dated, YearBucket};

/// Count results per local year, newest year first.
///
/// Takes the already-filtered results so the histogram follows the active query.
pub fn year_histogram<T: Dated>(results: &[T]) -> Vec<YearBucket> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for result in results {
        *years.entry(result.local_year()).or_insert(0) += 1;
    }

    years.into_iter().rev().map(|(year, count)| YearBucket { year, count }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Year(i32);

    impl Dated for Year {
        fn local_year(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_histogram_descending() {
        let results = [Year(2019), Year(2021), Year(2019), Year(2020), Year(2021), Year(2019)];
        let buckets = year_histogram(&results);
        assert_eq!(
            buckets,
            vec![
                YearBucket { year: 2021, count: 2 },
                YearBucket { year: 2020, count: 1 },
                YearBucket { year: 2019, count: 3 },
            ]
        );
    }

    #[test]
    fn test_histogram_sums_to_input_length() {
        let results: Vec<Year> = (0..97).map(|i| Year(2010 + i % 7)).collect();
        let total: usize = year_histogram(&results).iter().map(|b| b.count).sum();
        assert_eq!(total, results.len());
    }

    #[test]
    fn test_histogram_empty() {
        assert!(year_histogram::<Year>(&[]).is_empty());
    }
}
