pub mod collaborators;
pub mod table;
pub mod terminal;
pub mod types;

pub use collaborators::*;
pub use table::*;
pub use types::*;
