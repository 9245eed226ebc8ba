pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod models;
