pub mod common;

pub use common::{ErrorMessage, LoadingText, NotFoundMessage};
