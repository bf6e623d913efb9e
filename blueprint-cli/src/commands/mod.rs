pub mod check;
pub mod write;
