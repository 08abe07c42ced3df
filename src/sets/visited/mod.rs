mod atomic_set;
mod uncompressed_set;
mod visitor_set;

pub use atomic_set::*;
pub use uncompressed_set::*;
pub use visitor_set::*;
