pub mod cancel;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod forms;
pub mod maps;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
pub mod views;
