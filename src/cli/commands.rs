//! Command implementations for the CLI

use sam_core::registry;
use sam_core::{RealizationId, TextPredicate};

/// Construct both realizations without invoking either.
///
/// Realization A is an explicit named type. Realization B is an inline function value adapted to the contract at the
/// construction site. Both are held behind the shared contract type.
pub fn construct_filters() -> Vec<(RealizationId, Box<dyn TextPredicate>)> {
    let constructed = sam_core::realizations();

    for (id, _) in &constructed {
        let info = registry::info_for(*id);
        tracing::debug!(realization = info.canonical, style = ?info.style, "constructed");
    }

    constructed
}
