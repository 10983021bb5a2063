//! Expose the `revision_trail` crate's functionality to WebAssembly.
//!
//! Revisions are passed in as a JSON array of objects with `author`,
//! `created_at` (`YYYY-MM-DDTHH:MM:SS`), `title`, `content` and
//! `version_number` fields.
use wasm_bindgen::prelude::*;

use crate::{Revision, RevisionField, TrackChanges};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::TrackChanges::execute`. Returns the merged
/// ranges as a JSON array.
///
/// # Errors
///
/// Returns an error if the revisions can't be parsed or `field` is neither
/// `title` nor `content`.
#[wasm_bindgen(js_name = trackChanges)]
pub fn track_changes(revisions_json: &str, field: &str) -> Result<String, JsError> {
    set_panic_hook();

    let revisions = parse_revisions(revisions_json)?;
    let merged = TrackChanges::with_field(field.parse::<RevisionField>()?).execute(&revisions);

    Ok(serde_json::to_string(&merged)?)
}

/// Text of the newest revision as reconstructed from the merged ranges.
///
/// # Errors
///
/// Returns an error if the revisions can't be parsed or `field` is neither
/// `title` nor `content`.
#[wasm_bindgen(js_name = visibleText)]
pub fn visible_text(revisions_json: &str, field: &str) -> Result<String, JsError> {
    set_panic_hook();

    let revisions = parse_revisions(revisions_json)?;

    Ok(TrackChanges::with_field(field.parse::<RevisionField>()?)
        .execute(&revisions)
        .visible_text())
}

fn parse_revisions(revisions_json: &str) -> Result<Vec<Revision>, serde_json::Error> {
    serde_json::from_str(revisions_json)
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
