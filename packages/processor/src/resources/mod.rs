pub mod src {
    pub mod id;
    pub mod resolver;
    pub mod symbol_table;
}

pub use src::id::*;
pub use src::resolver::*;
pub use src::symbol_table::*;
