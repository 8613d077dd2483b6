pub mod entities;
pub mod ports;
pub mod profile;
pub mod scoring;
pub mod services;
pub mod suggestion;

pub use entities::*;
pub use ports::*;
