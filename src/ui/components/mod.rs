pub mod cover;
pub mod gauge;
pub mod header;
pub mod hints;
