pub mod chart;
pub mod colors;
pub mod date;
