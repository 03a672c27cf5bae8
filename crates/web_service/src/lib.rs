pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod server;
