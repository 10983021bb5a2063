pub mod side;
pub mod split_at_char;
