pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod locator;
pub mod payload;
pub mod relay;
pub mod sink;
pub mod source;
