// ABOUTME: Request/response message types for the popup <-> engine boundary.
// ABOUTME: Mirrors the extension wire shape: {"action":"getStats"} and {"success","data"}.

//! Transport message types.
//!
//! The engine's only boundary besides the in-process DOM is one
//! request/response message pair. `success` is true whenever the extraction
//! body ran to completion, even if every field came back default: callers
//! distinguish "ran but empty" from "crashed" only via this flag. (That a
//! zero-finding run and a successful run are indistinguishable is a known
//! ambiguity of the original contract, preserved here deliberately.)

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::record::StatsRecord;

/// Inbound request from the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    /// Ask the engine for one fresh extraction of the current document.
    #[serde(rename = "getStats")]
    GetStats,
}

/// Outbound response to the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default)]
    pub data: Option<StatsRecord>,
}

impl Response {
    /// A successful extraction carrying its record.
    pub fn ok(record: StatsRecord) -> Self {
        Self {
            success: true,
            data: Some(record),
        }
    }

    /// An engine-level fault: no record at all.
    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}

/// Handles one request against one HTML snapshot.
///
/// The extraction body runs under `catch_unwind`: an engine-level fault
/// (which the per-strategy recovery should already have prevented) surfaces
/// as `success: false, data: null` rather than unwinding into the caller.
pub fn handle_request(engine: &Engine, html: &str, request: &Request) -> Response {
    match request {
        Request::GetStats => {
            match panic::catch_unwind(AssertUnwindSafe(|| engine.extract_html(html))) {
                Ok(record) => Response::ok(record),
                Err(_) => Response::failed(),
            }
        }
    }
}
