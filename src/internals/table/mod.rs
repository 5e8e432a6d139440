pub mod builder;
pub mod ports;
pub mod system;
