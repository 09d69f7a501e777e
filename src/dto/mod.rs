pub mod auth;
pub mod directory;
pub mod orders;
pub mod products;
pub mod stocks;
