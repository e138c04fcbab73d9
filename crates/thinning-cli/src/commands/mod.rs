pub mod config;
pub mod directions;
pub mod inspect;
pub mod thin;
