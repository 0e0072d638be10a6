pub mod event;
pub mod score;

pub use event::Event;
pub use score::ScoreBand;
