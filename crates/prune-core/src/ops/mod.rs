pub mod tree;
pub mod tree_ops;

pub use tree::Tree;
