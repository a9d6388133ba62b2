pub mod spec;
pub mod text;
