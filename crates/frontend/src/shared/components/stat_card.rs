use contracts::shared::listview::MetricScope;
use contracts::shared::summary::{SummaryMeta, SummaryStatus, ValueFormat};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Format a numeric value per its `ValueFormat`.
pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => {
            format!("{}{}", currency, group_thousands(value, 2))
        }
        ValueFormat::Number { decimals } => group_thousands(value, *decimals as usize),
        ValueFormat::Percent { decimals } => {
            format!("{:.*}%", *decimals as usize, value)
        }
        ValueFormat::Integer => group_thousands(value, 0),
    }
}

/// US-style digit grouping: `1234567.5` with 2 decimals -> `1,234,567.50`.
fn group_thousands(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Tooltip for metrics that ignore the active filter; visible-scope
/// cards need no hint because they mirror the rendered list.
fn scope_hint(scope: &MetricScope) -> Option<&'static str> {
    match scope {
        MetricScope::Global => Some("Across all records"),
        MetricScope::Visible => None,
    }
}

fn status_class(status: &SummaryStatus) -> &'static str {
    match status {
        SummaryStatus::Good => "stat-card--good",
        SummaryStatus::Bad => "stat-card--bad",
        SummaryStatus::Warning => "stat-card--warning",
        SummaryStatus::Neutral => "stat-card--neutral",
    }
}

/// One summary tile above a list: label, icon and a formatted value that
/// tracks the signal it was given.
#[component]
pub fn StatCard(
    meta: SummaryMeta,
    #[prop(into)] value: Signal<f64>,
    #[prop(optional, into)] status: Signal<SummaryStatus>,
) -> impl IntoView {
    let format = meta.format.clone();
    view! {
        <div
            class=move || format!("stat-card {}", status_class(&status.get()))
            title=scope_hint(&meta.scope)
        >
            <div class="stat-card__icon">{icon(meta.icon)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{meta.label}</div>
                <div class="stat-card__value">
                    {move || format_value(value.get(), &format)}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping() {
        let fmt = ValueFormat::usd();
        assert_eq!(format_value(1234.56, &fmt), "$1,234.56");
        assert_eq!(format_value(0.0, &fmt), "$0.00");
        assert_eq!(format_value(1_234_567.5, &fmt), "$1,234,567.50");
    }

    #[test]
    fn test_integer_and_number() {
        assert_eq!(format_value(42.0, &ValueFormat::Integer), "42");
        assert_eq!(format_value(1200.0, &ValueFormat::Integer), "1,200");
        assert_eq!(
            format_value(87.25, &ValueFormat::Number { decimals: 1 }),
            "87.2"
        );
    }

    #[test]
    fn test_percent() {
        let pct = ValueFormat::Percent { decimals: 1 };
        assert_eq!(format_value(33.3, &pct), "33.3%");
        assert_eq!(format_value(0.0, &pct), "0.0%");
    }

    #[test]
    fn test_negative_money() {
        assert_eq!(format_value(-1500.0, &ValueFormat::usd()), "$-1,500.00");
    }

    #[test]
    fn test_only_global_cards_get_a_scope_hint() {
        assert_eq!(scope_hint(&MetricScope::Global), Some("Across all records"));
        assert_eq!(scope_hint(&MetricScope::Visible), None);
    }
}
