pub mod deposit;
pub mod health;
pub mod players;
