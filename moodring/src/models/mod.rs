mod message;
mod schema;
mod score;
mod summary;

pub use message::*;
pub use schema::*;
pub use score::*;
pub use summary::*;
