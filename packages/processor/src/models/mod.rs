pub mod src {
    pub mod attr_info;
    pub mod code_refs;
    pub mod extractor;
}

pub use src::attr_info::*;
pub use src::code_refs::*;
pub use src::extractor::*;
