pub mod assets;
pub mod config;
pub mod error;
pub mod filename;
pub mod http;
pub mod logging;
pub mod state;
pub mod utils;
