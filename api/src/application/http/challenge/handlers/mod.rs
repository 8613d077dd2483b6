pub mod get_challenge;
