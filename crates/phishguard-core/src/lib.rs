pub mod config;
pub mod logging;

pub mod checksum;
pub mod classify;
pub mod error;
pub mod models;
pub mod predict;
pub mod server;
pub mod url_features;
pub mod vectorize;
