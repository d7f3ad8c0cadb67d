//! Filter cleanup into canonical form

use crate::filter::{Filter, Section};

/// Remove unset leaves and empty sections
///
/// Idempotent: `normalize(normalize(f)) == normalize(f)`.
pub fn normalize(filter: Filter) -> Filter {
    Filter {
        demographics: filter.demographics.and_then(Section::prune),
        crop_data: filter.crop_data.and_then(Section::prune),
        organization: filter.organization.and_then(Section::prune),
        source: filter.source.and_then(Section::prune),
    }
}

impl Filter {
    /// Canonical copy of this filter
    pub fn normalized(&self) -> Filter {
        normalize(self.clone())
    }

    /// True when no section or leaf would be pruned
    pub fn is_canonical(&self) -> bool {
        self.normalized() == *self
    }
}
