use crate::utils::colors;

/// Sentiment band of a satisfaction score.
///
/// The mapping is total over every integer score:
/// - `> 4`        → StrongPositive
/// - `1 ..= 4`    → MildPositive
/// - `0`          → Neutral
/// - `-3 ..= -1`  → MildNegative
/// - `<= -4`      → StrongNegative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    StrongPositive,
    MildPositive,
    Neutral,
    MildNegative,
    StrongNegative,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        if score > 4 {
            ScoreBand::StrongPositive
        } else if score > 0 {
            ScoreBand::MildPositive
        } else if score == 0 {
            ScoreBand::Neutral
        } else if score > -4 {
            ScoreBand::MildNegative
        } else {
            ScoreBand::StrongNegative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::StrongPositive => "strong-positive",
            ScoreBand::MildPositive => "mild-positive",
            ScoreBand::Neutral => "neutral",
            ScoreBand::MildNegative => "mild-negative",
            ScoreBand::StrongNegative => "strong-negative",
        }
    }

    /// ANSI color used for list dots and chart points.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::StrongPositive => colors::GREEN,
            ScoreBand::MildPositive => colors::CYAN,
            ScoreBand::Neutral => colors::GREY,
            ScoreBand::MildNegative => colors::YELLOW,
            ScoreBand::StrongNegative => colors::RED,
        }
    }
}

/// Signed display form of a score: positives get an explicit `+`,
/// zero and negatives keep their natural decimal form.
pub fn format_score(score: i32) -> String {
    if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}
