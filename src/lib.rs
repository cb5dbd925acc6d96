pub mod config;
pub mod crawler;
pub mod error;
pub mod output;
pub mod parser;
pub mod storage;

pub use error::{Result, ScrapeyError};
