pub mod config;
pub mod dataset;
pub mod fetch;
pub mod status;
pub mod update;
