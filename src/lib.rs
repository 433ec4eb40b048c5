//! Stock media metadata generator
//!
//! Derives a title, description and keyword list for each uploaded file name
//! from a set of [`settings::Settings`], keeps the results editable, and
//! exports them as CSV or JSON.

pub mod config;
pub mod export;
pub mod generator;
pub mod models;
pub mod random;
pub mod results;
pub mod settings;
pub mod studio;
pub mod traits;
pub mod vocabulary;
