mod collection;
mod id;
mod properties;
mod single;

pub use collection::*;
pub use id::*;
pub use properties::*;
pub use single::*;
