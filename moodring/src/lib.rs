pub mod analysis;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod sentiment;
pub mod services;
