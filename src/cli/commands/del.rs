use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::ui::i18n;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index } = cmd {
        let mut db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let mut events = store::load_events(&db)?;

        let idx = index
            .checked_sub(1)
            .filter(|i| *i < events.len())
            .ok_or(AppError::InvalidIndex(*index))?;

        if !ask_confirmation(t.delete_confirm) {
            info(t.cancelled);
            return Ok(());
        }

        events.remove(idx);
        store::save_events(&mut db, &events)?;

        success(t.event_deleted);
    }

    Ok(())
}
