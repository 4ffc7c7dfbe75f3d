pub mod detail;
pub mod raw;
pub mod table;

pub use detail::render_details;
pub use raw::render_raw;
pub use table::{render_row, render_table, summary_line, TableStyle, Truncation};
