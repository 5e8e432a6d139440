mod error;
mod kelvin;
mod resistance;
mod voltage;

pub use error::*;
pub use kelvin::*;
pub use resistance::*;
pub use voltage::*;
