pub mod constants;
pub mod functions;
pub mod types;

pub use functions::{render_json, render_table, sort_records};
pub use types::{DisplayOptions, OutputFormat};
