//! Scene graphs produced by importers, and their flattening into a single mesh.

mod config;
mod error;
mod flatten;
mod import;
mod node;

pub use config::*;
pub use error::*;
pub use flatten::*;
pub use import::*;
pub use node::*;
