pub mod client;
pub mod config;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
