pub mod config;
#[cfg(unix)]
pub mod interrupt;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod session;
