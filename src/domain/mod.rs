//! Domain layer: tree entities, path attachment, expansion state, row model.

pub mod entities;
pub mod error;
pub mod expansion;
pub mod path;
pub mod rows;

pub use entities::Node;
pub use error::{DomainError, DomainResult};
pub use expansion::ExpansionState;
pub use path::attach_paths;
pub use rows::{visible_rows, Row};
