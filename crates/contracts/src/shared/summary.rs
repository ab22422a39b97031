use serde::{Deserialize, Serialize};

use crate::shared::listview::MetricScope;

/// How to format a summary value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn usd() -> Self {
        ValueFormat::Money {
            currency: "$".to_string(),
        }
    }
}

/// Visual status of a stat card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SummaryStatus {
    Good,
    Bad,
    Warning,
    #[default]
    Neutral,
}

/// Static metadata for one stat card: label, icon, format, and the
/// collection scope its reduction runs over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMeta {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub format: ValueFormat,
    pub scope: MetricScope,
}

impl SummaryMeta {
    pub fn count(id: &'static str, label: &'static str, icon: &'static str, scope: MetricScope) -> Self {
        Self {
            id,
            label,
            icon,
            format: ValueFormat::Integer,
            scope,
        }
    }

    pub fn money(id: &'static str, label: &'static str, icon: &'static str, scope: MetricScope) -> Self {
        Self {
            id,
            label,
            icon,
            format: ValueFormat::usd(),
            scope,
        }
    }
}
