pub mod health;
pub mod status;
