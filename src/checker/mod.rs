pub mod app;
pub mod checks;
pub mod config;
pub mod console;
pub mod logger;
pub mod printer;
pub mod service;
