use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::date;

/// Pretty-printed (2-space indent) JSON text of the full collection.
/// The same text backs file export, the `json` command and clipboard copy.
pub fn pretty_json(events: &[Event]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

/// Default export filename: `relationship-timeline-<YYYY-MM-DD>.json`.
pub fn default_filename() -> String {
    format!(
        "relationship-timeline-{}.json",
        date::today().format("%Y-%m-%d")
    )
}

pub fn write_json(path: &str, events: &[Event]) -> AppResult<()> {
    let json = pretty_json(events)?;
    std::fs::write(path, json)?;
    Ok(())
}
