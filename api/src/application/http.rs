pub mod challenge;
pub mod experience;
pub mod flavor;
pub mod health;
pub mod ingredient;
pub mod journal;
pub mod mood;
pub mod server;
