//! # Order-Item Lifecycle Policy
//!
//! How order items are presented on both the kitchen display and the
//! point-of-sale screen: the label and badge tier of each status, and the
//! order in which items are listed.
//!
//! Everything here is a pure function over the closed [`OrderItemStatus`]
//! domain. There is no fallback branch anywhere; adding a status is a compile
//! error in every function until it is handled.
//!
//! ## Display order
//!
//! Items are sorted by two keys, both ascending:
//!
//! 1. workflow stage: `pending` < `ready-for-serving` < `served` < `paid`,
//! 2. product name, compared with [`compare_names`].
//!
//! ```rust
//! use order_board::model::{OrderItem, OrderItemStatus, Price, Product, Relation};
//! use order_board::policy;
//!
//! let fries = Product::new("p1", "Fries", Price::from_cents(350), "c1");
//! let item = |id: &str, status| {
//!     OrderItem::new(id, Relation::expanded(fries.clone()), "o1", fries.price).with_status(status)
//! };
//!
//! let mut board = vec![
//!     item("a", OrderItemStatus::Paid),
//!     item("b", OrderItemStatus::Pending),
//!     item("c", OrderItemStatus::Served),
//!     item("d", OrderItemStatus::ReadyForServing),
//! ];
//! policy::sort_for_display(&mut board);
//!
//! let ids: Vec<_> = board.iter().map(|i| i.id.as_str()).collect();
//! assert_eq!(ids, ["b", "d", "c", "a"]);
//! ```

pub mod collation;

pub use collation::compare_names;

use crate::model::{OrderItem, OrderItemStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Visual tier of a status badge. Carries no meaning beyond styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Secondary,
    Warning,
    Info,
    Success,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Secondary => "secondary",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unsupported locale: {0:?} (expected \"en\" or \"de\")")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

/// The display label of a status.
pub fn label(status: OrderItemStatus) -> &'static str {
    label_in(status, Locale::En)
}

/// The display label of a status in the given language.
pub fn label_in(status: OrderItemStatus, locale: Locale) -> &'static str {
    match (locale, status) {
        (Locale::En, OrderItemStatus::Pending) => "waiting",
        (Locale::En, OrderItemStatus::ReadyForServing) => "ready",
        (Locale::En, OrderItemStatus::Served) => "served",
        (Locale::En, OrderItemStatus::Paid) => "paid",
        (Locale::De, OrderItemStatus::Pending) => "Wartet",
        (Locale::De, OrderItemStatus::ReadyForServing) => "Bereit",
        (Locale::De, OrderItemStatus::Served) => "Serviert",
        (Locale::De, OrderItemStatus::Paid) => "Bezahlt",
    }
}

/// The badge tier of a status.
pub fn severity(status: OrderItemStatus) -> Severity {
    match status {
        OrderItemStatus::Pending => Severity::Secondary,
        OrderItemStatus::ReadyForServing => Severity::Warning,
        OrderItemStatus::Served => Severity::Info,
        OrderItemStatus::Paid => Severity::Success,
    }
}

/// Position of a status in the workflow, `0..=3`.
pub fn stage(status: OrderItemStatus) -> u8 {
    match status {
        OrderItemStatus::Pending => 0,
        OrderItemStatus::ReadyForServing => 1,
        OrderItemStatus::Served => 2,
        OrderItemStatus::Paid => 3,
    }
}

/// The status that follows in the workflow; `None` once paid.
pub fn next(status: OrderItemStatus) -> Option<OrderItemStatus> {
    match status {
        OrderItemStatus::Pending => Some(OrderItemStatus::ReadyForServing),
        OrderItemStatus::ReadyForServing => Some(OrderItemStatus::Served),
        OrderItemStatus::Served => Some(OrderItemStatus::Paid),
        OrderItemStatus::Paid => None,
    }
}

/// What the comparator needs to know about a listed item.
pub trait DisplayKey {
    fn status(&self) -> OrderItemStatus;

    /// Product name; `""` when it is not known.
    fn product_name(&self) -> &str;
}

impl DisplayKey for OrderItem {
    fn status(&self) -> OrderItemStatus {
        self.status
    }

    fn product_name(&self) -> &str {
        OrderItem::product_name(self).unwrap_or_default()
    }
}

/// Display order of two items: workflow stage first, then product name.
pub fn compare<T: DisplayKey + ?Sized>(a: &T, b: &T) -> Ordering {
    stage(a.status())
        .cmp(&stage(b.status()))
        .then_with(|| compare_names(a.product_name(), b.product_name()))
}

/// Stable sort into display order; items that compare equal keep their relative order.
pub fn sort_for_display<T: DisplayKey>(items: &mut [T]) {
    items.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Line {
        status: OrderItemStatus,
        name: &'static str,
    }

    impl DisplayKey for Line {
        fn status(&self) -> OrderItemStatus {
            self.status
        }

        fn product_name(&self) -> &str {
            self.name
        }
    }

    fn line(status: OrderItemStatus, name: &'static str) -> Line {
        Line { status, name }
    }

    /// Status-by-status cascade, checked pair by pair against `compare`.
    fn cascading_compare(a: &Line, b: &Line) -> Ordering {
        use OrderItemStatus::*;
        if a.status == b.status {
            compare_names(a.name, b.name)
        } else if a.status == Pending {
            Ordering::Less
        } else if b.status == Pending {
            Ordering::Greater
        } else if a.status == ReadyForServing {
            Ordering::Less
        } else if b.status == ReadyForServing {
            Ordering::Greater
        } else if a.status == Served {
            Ordering::Less
        } else if b.status == Served {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn sample() -> Vec<Line> {
        let names = ["A", "b", "B", "Äpfel", ""];
        OrderItemStatus::ALL
            .into_iter()
            .flat_map(|status| names.into_iter().map(move |name| line(status, name)))
            .collect()
    }

    #[test]
    fn labels_are_defined_and_distinct() {
        for locale in [Locale::En, Locale::De] {
            let labels: Vec<_> = OrderItemStatus::ALL.iter().map(|s| label_in(*s, locale)).collect();
            assert!(labels.iter().all(|l| !l.is_empty()));
            for (i, a) in labels.iter().enumerate() {
                for b in &labels[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
        assert_eq!(label(OrderItemStatus::Pending), "waiting");
        assert_eq!(label(OrderItemStatus::Paid), "paid");
        assert_eq!(label_in(OrderItemStatus::Paid, Locale::De), "Bezahlt");
    }

    #[test]
    fn each_status_has_its_own_severity() {
        let tiers: Vec<_> = OrderItemStatus::ALL.iter().map(|s| severity(*s)).collect();
        assert_eq!(
            tiers,
            [Severity::Secondary, Severity::Warning, Severity::Info, Severity::Success]
        );
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), r#""warning""#);
    }

    #[test]
    fn stages_follow_the_workflow() {
        let stages: Vec<_> = OrderItemStatus::ALL.iter().map(|s| stage(*s)).collect();
        assert_eq!(stages, [0, 1, 2, 3]);
        for pair in OrderItemStatus::ALL.windows(2) {
            assert_eq!(next(pair[0]), Some(pair[1]));
        }
        assert_eq!(next(OrderItemStatus::Paid), None);
    }

    #[test]
    fn different_status_ignores_the_name() {
        let served_b = line(OrderItemStatus::Served, "B");
        let pending_a = line(OrderItemStatus::Pending, "A");
        assert_eq!(compare(&served_b, &pending_a), Ordering::Greater);
        assert_eq!(compare(&pending_a, &served_b), Ordering::Less);

        let pending_z = line(OrderItemStatus::Pending, "Z");
        let paid_a = line(OrderItemStatus::Paid, "A");
        assert_eq!(compare(&pending_z, &paid_a), Ordering::Less);
    }

    #[test]
    fn same_status_orders_by_name() {
        let b = line(OrderItemStatus::Pending, "B");
        let a = line(OrderItemStatus::Pending, "A");
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn sorting_yields_workflow_order() {
        let mut lines = vec![
            line(OrderItemStatus::Paid, "x"),
            line(OrderItemStatus::Pending, "y"),
            line(OrderItemStatus::Served, "z"),
            line(OrderItemStatus::ReadyForServing, "w"),
        ];
        sort_for_display(&mut lines);
        let statuses: Vec<_> = lines.iter().map(|l| l.status).collect();
        assert_eq!(statuses, OrderItemStatus::ALL);
    }

    #[test]
    fn is_a_total_order() {
        let items = sample();
        for a in &items {
            for b in &items {
                assert_eq!(compare(a, b), compare(b, a).reverse(), "{a:?} / {b:?}");
                for c in &items {
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(compare(a, c), Ordering::Greater, "{a:?} <= {b:?} <= {c:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn matches_the_cascading_comparator_for_every_pair() {
        let items = sample();
        for a in &items {
            for b in &items {
                assert_eq!(compare(a, b), cascading_compare(a, b), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("DE".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
