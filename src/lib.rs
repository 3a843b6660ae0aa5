pub mod analysis;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod sort;
pub mod ui;
