pub mod ids;
pub mod import;
pub mod transform;
