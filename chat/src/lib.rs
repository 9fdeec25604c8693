pub mod error;
pub mod gemini;
pub mod providers;

pub use error::GenerationFault;
pub use providers::{GenerateContentProvider, GenerationClient};
