pub mod compose;
pub mod extract;
pub mod invoke;
pub mod orchestrator;
pub mod sources;
pub mod templates;
pub mod verify;

pub use compose::{PromptDocument, compose};
pub use invoke::ReportText;
pub use orchestrator::{EntryPoint, Submission, run};
pub use sources::SourceBundle;
