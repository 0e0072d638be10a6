use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ids::ClockIds;
use crate::core::transform;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventDraft;
use crate::ui::i18n;
use crate::ui::messages::success;
use crate::utils::date;

/// Add an event: build it through the transform library, append, re-sort,
/// persist the whole collection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        description,
        score,
        month_only,
    } = cmd
    {
        let d = date::parse_event_date(date_str, *month_only)
            .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let mut events = store::load_events(&db)?;

        let draft = EventDraft {
            description: description.clone(),
            score: *score,
            date: d,
            month_only: *month_only,
        };
        let event = transform::build_event(&draft, None, &events, &mut ClockIds);

        events.push(event);
        let sorted = transform::sort_by_date(&events);
        store::save_events(&mut db, &sorted)?;

        success(t.event_added);
    }

    Ok(())
}
