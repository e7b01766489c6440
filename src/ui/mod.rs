pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, prompt, section, success, summary_row, warn};
pub use table::{course_table, student_table, TableBuilder};
pub use theme::{theme, Theme};
