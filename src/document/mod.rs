mod descriptor;
mod error;


pub use descriptor::{DocumentDescriptor, DocumentMeta};
pub use error::DocumentError;
