pub mod platform;
pub mod system;
