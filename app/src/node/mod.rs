//! The grade node: canvas controls wired to a shared property bag.

pub mod adapter;
pub mod numeric;

pub use adapter::GradeNode;
