pub mod challenge;
pub mod common;
pub mod experience;
pub mod flavor;
pub mod ingredient;
pub mod speech;
