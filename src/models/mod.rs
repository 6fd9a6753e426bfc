pub mod envelope;
pub mod task;
pub mod user;

pub use envelope::Envelope;
pub use task::{DeleteSummary, Task, TaskFields, TaskUpdate};
pub use user::{Credentials, User};
