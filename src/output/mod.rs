pub mod formatter;

pub use formatter::{
    format_header, format_json, format_result, format_score, format_section, should_use_colors,
    ResultScale,
};
