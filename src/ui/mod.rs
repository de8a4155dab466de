pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, info, success, warn};
pub use table::address_table;
pub use theme::{theme, Theme};
