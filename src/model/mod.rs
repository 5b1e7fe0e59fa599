pub mod display;
pub mod ticket;
