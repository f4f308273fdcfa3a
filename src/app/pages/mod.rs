pub mod chat;
pub mod input;

pub use chat::ChatPage;
pub use input::InputPage;
