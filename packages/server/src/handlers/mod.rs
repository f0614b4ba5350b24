pub mod health;
pub mod workshop;
