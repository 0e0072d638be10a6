//! ASCII line chart of scores over the chronological event sequence.
//!
//! One column per event, y-axis from +8 down to -8, dashed zero axis.
//! Points are colored by score band; the legend below maps column numbers
//! to display dates and descriptions.

use crate::models::event::Event;
use crate::models::score::{ScoreBand, format_score};
use crate::utils::colors;

const COL_WIDTH: usize = 4;

pub fn render_chart(events: &[Event]) -> String {
    let mut out = String::new();

    for score in (-8..=8).rev() {
        let label = if score % 4 == 0 {
            format!("{:>3}", format_score(score))
        } else {
            "   ".to_string()
        };
        let axis = if score == 0 { '+' } else { '|' };
        out.push_str(&format!("{label} {axis}"));

        for ev in events {
            let cell = if ev.score == score {
                let point = colors::paint(ScoreBand::from_score(ev.score).color(), "●");
                // the color codes are zero-width on screen, pad manually
                format!("{}{}", " ".repeat(COL_WIDTH - 1), point)
            } else if score == 0 {
                format!("{}┄", " ".repeat(COL_WIDTH - 1))
            } else {
                " ".repeat(COL_WIDTH)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    // column numbers under the axis
    out.push_str("    ");
    for n in 1..=events.len() {
        out.push_str(&format!("{:>width$}", n, width = COL_WIDTH));
    }
    out.push('\n');

    // legend: column → date → description
    out.push('\n');
    for (n, ev) in events.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {}  {}\n",
            n + 1,
            ev.display_date,
            ev.description
        ));
    }

    out
}
