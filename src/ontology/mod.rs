pub mod collector;
pub mod containment;
pub mod entity_set;
pub mod sanitize;
pub mod synthesizer;
