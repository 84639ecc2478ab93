pub mod ancestry;
pub mod path;

pub use ancestry::ancestors;
pub use path::{path_to, resolve_path};
