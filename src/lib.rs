pub mod aggregate;
pub mod api;
pub mod config;
pub mod decoder;
pub mod display;
pub mod error;
pub mod filter;
pub mod rank;
pub mod report;
pub mod script;
pub mod table;
pub mod tokenizer;
pub mod window;
// cmd and reports are binary modules, declared in main.rs.
