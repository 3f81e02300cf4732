mod contained_path_ext;
mod outline_line_ext;

pub use contained_path_ext::ContainedPathExt;
pub use outline_line_ext::OutlineLineExt;
