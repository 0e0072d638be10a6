use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::ui::i18n;
use crate::ui::messages::success;

/// Show or set the persisted interface language.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lang { code } = cmd {
        let mut db = store::open(&cfg.database)?;

        match code {
            None => {
                let current = store::load_language(&db)?
                    .unwrap_or_else(|| cfg.default_language.clone());
                let t = i18n::for_code(&current);
                println!("{}: {}", t.current_language, current);
            }
            Some(code) => {
                if !i18n::is_supported(code) {
                    return Err(AppError::InvalidLanguage(code.clone()));
                }
                store::save_language(&mut db, code)?;
                // confirm in the language just chosen
                let t = i18n::for_code(code);
                success(format!("{}: {}", t.language_set, code));
            }
        }
    }

    Ok(())
}
