pub mod router;

pub use router::{DirectoryState, directory_router};
