mod messages;
mod schema;

pub use messages::MessageRepository;
pub use schema::SchemaRepository;
