mod message;
mod value;

pub use message::Message;
pub use value::Value;
