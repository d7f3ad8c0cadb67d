//! Result ordering

use crate::records::FarmerRecord;
use std::cmp::Ordering;

/// Sortable record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Age,
    Gender,
    District,
    State,
    LandOwned,
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Order after the user picks `key`: asc, then desc, then unsorted
    pub fn next(current: Option<SortOrder>, key: SortKey) -> Option<SortOrder> {
        match current {
            Some(order) if order.key == key => match order.direction {
                SortDirection::Ascending => Some(Self::descending(key)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(key)),
        }
    }

    fn compare(&self, a: &FarmerRecord, b: &FarmerRecord) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Gender => a.gender.as_str().cmp(b.gender.as_str()),
            SortKey::District => a.district.cmp(&b.district),
            SortKey::State => a.state.cmp(&b.state),
            SortKey::LandOwned => a.land_owned.total_cmp(&b.land_owned),
            SortKey::Source => a.source.cmp(&b.source),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort of borrowed records; `None` keeps the evaluation order
pub fn sort_records(records: &[FarmerRecord], order: Option<SortOrder>) -> Vec<&FarmerRecord> {
    let mut sorted: Vec<&FarmerRecord> = records.iter().collect();
    if let Some(order) = order {
        sorted.sort_by(|a, b| order.compare(a, b));
    }
    sorted
}
