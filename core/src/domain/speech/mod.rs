pub mod entities;
pub mod lexicon;
pub mod ports;
pub mod services;

pub use entities::*;
pub use ports::*;
