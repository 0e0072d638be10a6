use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config file and the event store.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)
}
