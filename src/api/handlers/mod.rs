//! HTTP request handlers.

mod echo;
mod notes;
mod system;


pub use echo::*;
pub use notes::*;
pub use system::*;
