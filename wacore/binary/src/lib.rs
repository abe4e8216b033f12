pub mod attrs;
pub mod builder;
pub mod error;
pub mod jid;
pub mod node;
pub mod util;

pub use attrs::AttrParser;
pub use error::{BinaryError, Result};
pub use node::{Attrs, Node, NodeContent};
