mod clauses;
mod delete;
mod insert;
mod raw;
mod select;
mod update;

pub use clauses::*;
pub use delete::*;
pub use insert::*;
pub use raw::*;
pub use select::*;
pub use update::*;
