mod inspect;
mod validate;

pub use inspect::{InspectType, inspect_command};
pub use validate::validate_command;
