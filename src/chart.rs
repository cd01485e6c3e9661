//! Chart models for spending-by-tag visualizations.
//!
//! [chart_entries] turns the per-tag sums from an
//! [Aggregate](crate::Aggregate) into labelled slices, and [donut_chart]
//! renders those slices as ECharts JSON configuration for a donut chart.

use std::collections::HashMap;

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Tooltip, Trigger},
    series::Pie,
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::tag::TransactionTag;

/// One slice of a per-tag breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// The tag's display title.
    pub label: String,
    /// The sum of amounts carrying the tag.
    pub value: Decimal,
}

/// Turn per-tag sums into chart slices, largest first.
///
/// Tags whose sum is not positive are left out. Ties are broken by label
/// so the same sums always produce the same slice order.
pub fn chart_entries(by_tag: &HashMap<TransactionTag, Decimal>) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = by_tag
        .iter()
        .filter(|(_, value)| **value > Decimal::ZERO)
        .map(|(tag, value)| ChartEntry {
            label: tag.title().to_owned(),
            value: *value,
        })
        .collect();

    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));

    entries
}

/// Build the ECharts configuration for a donut chart of `entries`.
pub fn donut_chart(title: &str, entries: &[ChartEntry]) -> Chart {
    let data: Vec<(f64, &str)> = entries
        .iter()
        .map(|entry| {
            (
                entry.value.to_f64().unwrap_or_default(),
                entry.label.as_str(),
            )
        })
        .collect();

    Chart::new()
        .title(Title::new().text(title))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().left("center").top("bottom"))
        .series(Pie::new().name(title).radius(vec!["35%", "70%"]).data(data))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal::Decimal;

    use crate::{
        chart::{ChartEntry, chart_entries, donut_chart},
        tag::TransactionTag,
    };

    #[test]
    fn builds_one_entry_per_positive_tag() {
        let by_tag = HashMap::from([
            (TransactionTag::Food, Decimal::from(140)),
            (TransactionTag::Transport, Decimal::from(10)),
        ]);

        let entries = chart_entries(&by_tag);

        assert_eq!(
            entries,
            vec![
                ChartEntry {
                    label: "Food".to_owned(),
                    value: Decimal::from(140),
                },
                ChartEntry {
                    label: "Transport".to_owned(),
                    value: Decimal::from(10),
                },
            ]
        );
    }

    #[test]
    fn labels_are_display_titles() {
        let by_tag = HashMap::from([(TransactionTag::Medical, Decimal::from(55))]);

        let entries = chart_entries(&by_tag);

        assert_eq!(entries[0].label, "Medical");
    }

    #[test]
    fn non_positive_sums_are_left_out() {
        let by_tag = HashMap::from([
            (TransactionTag::Food, Decimal::from(20)),
            (TransactionTag::Savings, Decimal::ZERO),
        ]);

        let entries = chart_entries(&by_tag);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Food");
    }

    #[test]
    fn empty_sums_give_no_entries() {
        assert!(chart_entries(&HashMap::new()).is_empty());
    }

    #[test]
    fn equal_sums_are_ordered_by_label() {
        let by_tag = HashMap::from([
            (TransactionTag::Utilities, Decimal::from(30)),
            (TransactionTag::Car, Decimal::from(30)),
            (TransactionTag::Entertainment, Decimal::from(30)),
        ]);

        let entries = chart_entries(&by_tag);

        let labels: Vec<_> = entries.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Car", "Entertainment", "Utilities"]);
    }

    #[test]
    fn donut_chart_includes_title_and_slices() {
        let entries = vec![
            ChartEntry {
                label: "Food".to_owned(),
                value: Decimal::from(140),
            },
            ChartEntry {
                label: "Transport".to_owned(),
                value: Decimal::from(10),
            },
        ];

        let options = donut_chart("Spending by tag", &entries).to_string();

        assert!(options.contains("Spending by tag"));
        assert!(options.contains("Food"));
        assert!(options.contains("Transport"));
    }
}
