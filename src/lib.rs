pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod report;
pub mod server;
pub mod utils;

pub use error::SpendlensError;
