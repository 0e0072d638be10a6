pub mod add;
pub mod chart;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod json;
pub mod lang;
pub mod list;
