pub mod json;

pub use json::{default_filename, pretty_json, write_json};
