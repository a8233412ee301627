pub mod code;
pub mod phone;

pub use code::{CodeEntry, CodeNode, CodeTree, MatchResult, PLACEHOLDER_CODE, PLACEHOLDER_NAME};
pub use phone::{normalize_phone, CanonicalPhone, PhoneError, MOBILE_PREFIX};
