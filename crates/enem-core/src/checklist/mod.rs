//! Static checklist reference data.
//!
//! Items are compiled into the binary and never created or destroyed at
//! runtime. Each id belongs to exactly one phase.

mod catalog;

use serde::Serialize;

use crate::model::ChecklistList;

pub use catalog::CATALOG;

/// Phase tag of a reference item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemPhase {
    Preparation,
    Morning,
    During,
    Closing,
}

impl From<ChecklistList> for ItemPhase {
    fn from(list: ChecklistList) -> Self {
        match list {
            ChecklistList::Preparation => ItemPhase::Preparation,
            ChecklistList::Morning => ItemPhase::Morning,
            ChecklistList::Closing => ItemPhase::Closing,
        }
    }
}

/// Citation of the coordinator manual backing an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoSource {
    pub manual: &'static str,
    pub page: u16,
}

/// Explanatory note attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemInfo {
    pub title: &'static str,
    pub body: &'static str,
    pub source: InfoSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: &'static str,
    pub text: &'static str,
    pub phase: ItemPhase,
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_time: Option<&'static str>,
    pub critical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ItemInfo>,
}

/// All reference items tagged with `phase`, in catalog order.
pub fn items(phase: ItemPhase) -> impl Iterator<Item = &'static ChecklistItem> {
    CATALOG.iter().filter(move |item| item.phase == phase)
}

/// Number of reference items in a completion list.
pub fn total(list: ChecklistList) -> usize {
    items(list.into()).count()
}

/// Looks up `item_id` within a single list. Ids of other phases do not match.
pub fn find(list: ChecklistList, item_id: &str) -> Option<&'static ChecklistItem> {
    items(list.into()).find(|item| item.id == item_id)
}

/// Looks up an item of any phase.
pub fn find_any(item_id: &str) -> Option<&'static ChecklistItem> {
    CATALOG.iter().find(|item| item.id == item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for item in CATALOG {
            assert!(seen.insert(item.id), "duplicate id {}", item.id);
        }
    }

    #[test]
    fn every_list_has_items() {
        for list in ChecklistList::ALL {
            assert!(total(list) > 0, "{list} has no items");
        }
        assert!(items(ItemPhase::During).count() > 0);
    }

    #[test]
    fn find_is_scoped_to_the_list() {
        let closing = items(ItemPhase::Closing).next().unwrap();
        assert!(find(ChecklistList::Closing, closing.id).is_some());
        assert!(find(ChecklistList::Preparation, closing.id).is_none());
        assert!(find(ChecklistList::Morning, "nope").is_none());
    }

    #[test]
    fn building_check_carries_manual_citation() {
        let item = find_any("enc-10").unwrap();
        let info = item.info.unwrap();
        assert_eq!(info.source.manual, "Coordenador");
        assert_eq!(info.source.page, 64);
    }
}
