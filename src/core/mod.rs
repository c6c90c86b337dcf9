pub mod bodies;
pub mod constants;
pub mod engine;
pub mod rings;
pub mod starfield;
pub mod viewport;

pub use bodies::*;
pub use engine::*;
pub use rings::*;
pub use starfield::*;
pub use viewport::*;
