//! Domain layer containing entities and domain logic

pub mod entities;

pub use entities::account::Account;
