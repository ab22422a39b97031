use serde::{Deserialize, Serialize};

/// Which collection a summary metric is computed over.
///
/// `Visible` metrics mirror whatever the list currently renders;
/// `Global` metrics are labeled totals and ignore the active filter.
/// Every stat card declares its scope instead of leaving the choice
/// implicit per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricScope {
    Visible,
    Global,
}

/// Number of records matching a predicate.
pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

/// Sum of a numeric field across records matching a predicate.
pub fn sum_where<T>(items: &[T], pred: impl Fn(&T) -> bool, value: impl Fn(&T) -> f64) -> f64 {
    items
        .iter()
        .filter(|item| pred(item))
        .map(|item| value(item))
        .sum()
}

/// Mean of a numeric field; `0.0` for an empty collection, never NaN.
pub fn average<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(|item| value(item)).sum::<f64>() / items.len() as f64
}

/// `(numerator / denominator) * 100`, rounded to one decimal place.
/// A zero denominator degrades to `0.0`, never an error.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    (numerator / denominator * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_sum_respect_predicate() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(count_where(&values, |v| *v > 2.0), 2);
        assert_eq!(sum_where(&values, |v| *v > 2.0, |v| *v), 7.0);
        assert_eq!(sum_where(&values, |_| false, |v| *v), 0.0);
    }

    #[test]
    fn average_of_empty_is_zero_not_nan() {
        let empty: [f64; 0] = [];
        let avg = average(&empty, |v| *v);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
        assert_eq!(average(&[2.0, 4.0], |v| *v), 3.0);
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1.0, 3.0), 33.3);
        assert_eq!(percentage(2.0, 3.0), 66.7);
        assert_eq!(percentage(1.0, 2.0), 50.0);
        assert_eq!(percentage(0.0, 7.0), 0.0);
    }
}
