pub mod attachment;
pub mod category;
pub mod field;
pub mod kind;
pub mod node;

pub use attachment::{Attachment, SequencePosition};
pub use category::Category;
pub use field::{Field, Shape};
pub use kind::NodeKind;
pub use node::{Node, NodeId, ParentLink, Slot};
