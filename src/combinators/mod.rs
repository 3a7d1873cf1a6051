mod consume;
mod flatten;
mod last;
mod next;

pub use flatten::*;
