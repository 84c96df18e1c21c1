pub mod json;

pub use crate::error::InputError;
pub use json::{load_config, load_context, parse_context};
