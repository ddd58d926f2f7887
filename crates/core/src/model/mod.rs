mod answer;
mod form;
mod handoff;
mod payload;
mod progress;
mod question;
mod result;
mod submission;

pub use answer::Answer;
pub use form::{FormError, FormSource, FormValues};
pub use handoff::{Handoff, HandoffSlot};
pub use payload::ScreeningPayload;
pub use progress::{Progress, ProgressTracker};
pub use question::{QuestionId, TOTAL_QUESTIONS};
pub use result::ScreeningResult;
pub use submission::{Navigation, SubmissionPhase};
