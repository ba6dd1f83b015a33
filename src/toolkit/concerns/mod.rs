

pub mod dictionary;
pub mod keywords;

pub use dictionary::{ConcernDictionary, MatchMode};
pub use keywords::CONCERN_KEYWORDS;
