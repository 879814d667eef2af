pub mod annotation_utils;
pub mod format_utils;
pub mod image_utils;
pub mod io_utils;
pub mod layout_utils;
pub mod logger_utils;
