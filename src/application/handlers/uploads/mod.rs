//! Upload handlers.

mod upload_template;

pub use upload_template::{UploadTemplateCommand, UploadTemplateError, UploadTemplateHandler};
