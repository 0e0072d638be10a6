use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::parse_import;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::i18n;
use crate::ui::messages::{error, success};
use std::fs;

/// Replace the whole journal with the events from a JSON file.
/// On any parse or validation failure the stored collection is untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let text = fs::read_to_string(file)?;

        match parse_import(&text) {
            Ok(events) => {
                store::save_events(&mut db, &events)?;
                success(t.import_success);
            }
            Err(e) => {
                error(t.import_error);
                return Err(e);
            }
        }
    }

    Ok(())
}
