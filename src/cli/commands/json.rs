use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store;
use crate::errors::AppResult;
use crate::export::pretty_json;

/// Print the journal JSON to stdout, same text as the file export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Json = cmd {
        let db = store::open(&cfg.database)?;
        let events = store::load_events(&db)?;
        println!("{}", pretty_json(&events)?);
    }

    Ok(())
}
