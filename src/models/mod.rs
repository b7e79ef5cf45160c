pub mod resume;
pub mod meta;

pub use resume::{ResumeSummary, Feedback, ScoreTone};
pub use meta::{PageMeta, AUTH_META, HOME_META};
