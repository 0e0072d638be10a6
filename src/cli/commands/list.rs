use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::score::{ScoreBand, format_score};
use crate::ui::i18n;
use crate::ui::messages::{header, info};
use crate::utils::colors;
use unicode_width::UnicodeWidthStr;

const DESCRIPTION_WIDTH: usize = 56;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let db = store::open(&cfg.database)?;
        let t = i18n::resolve(&db, cfg);

        let events = store::load_events(&db)?;

        if events.is_empty() {
            info(t.no_events);
            return Ok(());
        }

        header(t.events);
        for (n, ev) in events.iter().enumerate() {
            print_row(n + 1, ev);
        }
    }

    Ok(())
}

fn print_row(n: usize, ev: &Event) {
    let band = ScoreBand::from_score(ev.score);
    let dot = colors::paint(band.color(), "●");

    // score column padded on the plain text, color codes are zero-width
    let score_plain = format_score(ev.score);
    let score_pad = " ".repeat(3usize.saturating_sub(score_plain.width()));
    let score = format!("{score_pad}{}", colors::paint(band.color(), &score_plain));

    // index(3) + gap(2) + dot(1) + gap(1) + date(10) + gap(1) + score(3) + gap(2)
    let indent = " ".repeat(23);
    let description = textwrap::fill(
        &ev.description,
        textwrap::Options::new(DESCRIPTION_WIDTH).subsequent_indent(&indent),
    );

    println!("{n:>3}  {dot} {:<10} {score}  {description}", ev.display_date);
}
