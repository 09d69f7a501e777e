//! Headless screens: the state and actions behind each dashboard page,
//! with rendering left to whatever front end drives them.

pub mod account;
pub mod dashboard;
pub mod delete;
pub mod detail;
pub mod directory;
pub mod gallery;
pub mod listing;
pub mod modal;
pub mod products;
pub mod resources;
pub mod stock;
pub mod table;
