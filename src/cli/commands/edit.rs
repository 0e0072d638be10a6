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

/// Edit an event in place: unchanged fields keep their values, the id is
/// preserved, the display date is recomputed, then the collection is
/// re-sorted and persisted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        description,
        score,
        date: date_str,
        month_only,
        no_month_only,
    } = cmd
    {
        let mut db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let mut events = store::load_events(&db)?;

        // 1-based in the CLI, like `list` shows them
        let idx = index
            .checked_sub(1)
            .filter(|i| *i < events.len())
            .ok_or(AppError::InvalidIndex(*index))?;

        let current = &events[idx];

        let final_month_only = if *month_only {
            true
        } else if *no_month_only {
            false
        } else {
            current.month_only
        };

        let final_date = match date_str {
            Some(s) => date::parse_event_date(s, final_month_only)
                .ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => current.date,
        };

        let draft = EventDraft {
            description: description.clone().unwrap_or_else(|| current.description.clone()),
            score: score.unwrap_or(current.score),
            date: final_date,
            month_only: final_month_only,
        };

        let updated = transform::build_event(&draft, Some(idx), &events, &mut ClockIds);
        events[idx] = updated;

        let sorted = transform::sort_by_date(&events);
        store::save_events(&mut db, &sorted)?;

        success(t.event_updated);
    }

    Ok(())
}
