pub mod flatten;
pub mod matcher;

pub use flatten::flatten_codes;
pub use matcher::{code_digits, match_phone};
