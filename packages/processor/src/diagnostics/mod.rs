pub mod src {
    pub mod diagnostic;
    pub mod error;
    pub mod sink;
}

pub use src::diagnostic::*;
pub use src::error::*;
pub use src::sink::*;
