//! Static teaching material: explanation notes and curated resource links.
//!
//! Both tables are immutable and compiled into the binary.

pub mod explanations;
pub mod resources;

pub use explanations::{explanation, explanation_keys};
pub use resources::{ResourceLink, Topic, topic, topic_keys, topics};
