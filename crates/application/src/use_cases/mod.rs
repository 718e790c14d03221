pub mod dns;

pub use dns::{QuestionHandler, QuestionResponder};
