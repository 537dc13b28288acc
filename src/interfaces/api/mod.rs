pub mod request;
pub mod translator;

pub use request::{FieldErrors, TranslateBody};
pub use translator::{get_translation, TranslateReply};
