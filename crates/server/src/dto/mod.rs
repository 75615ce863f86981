mod project;
mod summary;

pub use project::*;
pub use summary::*;
