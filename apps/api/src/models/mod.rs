pub mod resume;

pub use resume::{ContentField, LayoutMode, ResumeContent, StudentIdentity, DEFAULT_STUDENT_NAME};
