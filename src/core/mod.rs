//! Output validation, copying and the flatten pipeline

pub mod copier;
pub mod flatten;
pub mod target;
