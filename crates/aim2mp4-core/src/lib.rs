pub mod config;
pub mod logging;

// Pipeline stages, in the order the CLI runs them.
pub mod fetch;
pub mod extract;
pub mod download;
pub mod filename;
pub mod encode;
