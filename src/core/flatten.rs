//! Projection of the group tree into the single list that is drawn and
//! navigated.
//!
//! Each group contributes its header, then either one entry per connection
//! or a single placeholder when it has none.

use super::model::Group;

/// One row of the flattened list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    GroupHeader(String),
    /// A leaf connection; the name doubles as its search key.
    ConnectionEntry(String),
    /// Shown under a group that has no connections.
    EmptyPlaceholder,
}

impl DisplayItem {
    /// The connection this row stands for, if it is a leaf.
    pub fn connection_name(&self) -> Option<&str> {
        match self {
            DisplayItem::ConnectionEntry(name) => Some(name),
            DisplayItem::GroupHeader(_) | DisplayItem::EmptyPlaceholder => None,
        }
    }
}

/// Number of rows [`flatten`] produces for `groups`.
pub fn flat_len(groups: &[Group]) -> usize {
    groups
        .iter()
        .map(|g| 1 + g.connections.len().max(1))
        .sum()
}

/// Flatten `groups` into display order.
pub fn flatten(groups: &[Group]) -> Vec<DisplayItem> {
    let mut items = Vec::with_capacity(flat_len(groups));

    for group in groups {
        items.push(DisplayItem::GroupHeader(group.name.clone()));

        if group.is_empty() {
            items.push(DisplayItem::EmptyPlaceholder);
            continue;
        }

        items.extend(
            group
                .connections
                .iter()
                .cloned()
                .map(DisplayItem::ConnectionEntry),
        );
    }

    items
}
