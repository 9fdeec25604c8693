pub mod email;
pub mod index;
