mod handlers;
mod question_responder;

pub use handlers::QuestionHandler;
pub use question_responder::QuestionResponder;
