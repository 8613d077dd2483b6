pub mod get_dishes;
