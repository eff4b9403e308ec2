pub mod src {
    pub mod element;
    pub mod method;
    pub mod modifiers;
    pub mod types;
}

pub use src::element::*;
pub use src::method::*;
pub use src::modifiers::*;
pub use src::types::*;
