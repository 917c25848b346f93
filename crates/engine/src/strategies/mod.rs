// ABOUTME: Strategy trait and the ordered default strategy set for stats extraction.
// ABOUTME: Each strategy is a pure function from a document snapshot to an optional partial record.

//! Extraction strategies.
//!
//! Each strategy is one self-contained rule set operating over the same
//! document snapshot, independent of the others. A strategy either
//! contributes a [`PartialStats`](crate::record::PartialStats) with the fields
//! it positively identified, or reports no contribution (`None`). Keyword
//! constants are deliberately per-strategy: the rule sets evolved against
//! different page generations and must not be unified.
//!
//! Submodules:
//! - `admin`: structured admin-page heuristic (counts, weekly series, posts).
//! - `legacy`: tabular legacy-page heuristic (keyword cell → next cell value).
//! - `widget`: counter-widget heuristic (today/total only).

use scraper::{ElementRef, Html};

use crate::options::Options;
use crate::record::PartialStats;

pub mod admin;
pub mod legacy;
pub mod widget;

pub use admin::AdminPageStrategy;
pub use legacy::LegacyTableStrategy;
pub use widget::WidgetCounterStrategy;

/// One self-contained extraction rule set.
///
/// `extract` must be a pure read of the document: no strategy may observe
/// another's output, and any DOM-access or parse fault inside the strategy
/// degrades to a non-match or to `None`, never to an error.
pub trait Strategy: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Runs the rule set against the document snapshot.
    ///
    /// Returns `None` when none of the strategy's signals fired.
    fn extract(&self, doc: &Html) -> Option<PartialStats>;
}

/// The fixed default strategy order: admin page, then legacy tables, then
/// counter widgets.
///
/// The order is positional, preserved for compatibility with the original
/// extractor: a later strategy's fields silently overwrite an earlier one's
/// during reconciliation. It is not a confidence ranking.
pub fn default_strategies(opts: &Options) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(AdminPageStrategy::new(opts)),
        Box::new(LegacyTableStrategy::new()),
        Box::new(WidgetCounterStrategy::new()),
    ]
}

/// Concatenated descendant text of an element, like the DOM `textContent`.
pub(crate) fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>()
}
