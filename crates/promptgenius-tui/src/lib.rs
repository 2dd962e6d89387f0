pub mod app;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod indicator;
pub mod wizard;
