use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::i18n;
use crate::ui::messages::{header, info};
use crate::utils::chart::render_chart;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart = cmd {
        let db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let events = store::load_events(&db)?;

        if events.is_empty() {
            info(t.no_events);
            return Ok(());
        }

        header(t.timeline);
        print!("{}", render_chart(&events));
    }

    Ok(())
}
