use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::export::{default_filename, write_json};
use crate::ui::i18n;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let events = store::load_events(&db)?;

        let path = file.clone().unwrap_or_else(default_filename);

        if Path::new(&path).exists() && !force {
            return Err(AppError::Export(format!("{}: {}", t.file_exists, path)));
        }

        write_json(&path, &events)?;
        success(format!("{}: {}", t.exported_to, path));
    }

    Ok(())
}
