pub mod sink;
pub mod turtle;
pub mod vocab;
