pub mod report;
pub use report::{REPORT_FILE_NAME, write_summary_json};
