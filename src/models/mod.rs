//! Domain data types: questions and the topic catalog.

pub mod question;
pub mod topic;

pub use question::{normalize_answer, Question, QuestionBody, QuestionKind, WireQuestion};
pub use topic::{catalog, find_topic, Level, TopicColor, TopicConfig, TopicIcon};
