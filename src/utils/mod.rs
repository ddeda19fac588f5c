pub mod constants;
pub mod sanitize;
pub mod string_utils;

pub use constants::*;
pub use sanitize::{sanitize_query, sanitize_url};
pub use string_utils::truncate_with_marker;
