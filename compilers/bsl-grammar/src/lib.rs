//! BSL grammar engine: word classes, gloss reordering, and rule explanations.

pub mod explain;
pub mod order;
pub mod topic;
pub mod wordlists;

pub use explain::explain_bsl_order;
pub use order::apply_bsl_word_order;
pub use topic::reorder_topic_comment;
pub use wordlists::{classify, role_of};
