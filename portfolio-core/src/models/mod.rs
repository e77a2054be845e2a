mod assignment;
mod employee;
mod filter_spec;
mod phase;
mod project;
mod tone;

pub use assignment::*;
pub use employee::*;
pub use filter_spec::*;
pub use phase::*;
pub use project::*;
pub use tone::*;
