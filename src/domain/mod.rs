pub mod assumption;
pub mod config;
pub mod error;
pub mod value;
