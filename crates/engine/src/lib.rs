// ABOUTME: Main library entry point for the blogstats extraction engine.
// ABOUTME: Re-exports the public API: Engine, EngineBuilder, StatsRecord, transport and store types.

//! blogstats-engine - best-effort extraction of blog visitor statistics from HTML.
//!
//! This crate locates visitor counts, a weekly visitor series, and a ranked
//! post list inside an arbitrary, unstable DOM by running three independent
//! heuristic strategies over one document snapshot and reconciling their
//! partial results into a single [`StatsRecord`].
//!
//! # Example
//!
//! ```
//! use blogstats_engine::Engine;
//!
//! let engine = Engine::builder().build();
//! let record = engine.extract_html("<table><tr><td>오늘</td><td>3,410</td></tr></table>");
//! assert_eq!(record.today, 3410);
//! ```

pub mod engine;
pub mod error;
pub mod formats;
pub mod options;
pub mod record;
pub mod store;
pub mod strategies;
pub mod text;
pub mod transport;

pub use crate::engine::Engine;
pub use crate::error::StatsError;
pub use crate::formats::{format_change, format_number, format_summary};
pub use crate::options::{EngineBuilder, Options};
pub use crate::record::{PartialStats, StatsRecord, TopPost};
pub use crate::store::{export_record, StatsStore, LAST_RECORD_KEY};
pub use crate::strategies::{
    default_strategies, AdminPageStrategy, LegacyTableStrategy, Strategy, WidgetCounterStrategy,
};
pub use crate::transport::{handle_request, Request, Response};
