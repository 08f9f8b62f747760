pub mod api;
pub mod config;
pub mod logger;
pub mod models;
pub mod server;
pub mod services;

#[cfg(test)]
mod test;
