pub mod display;

pub use display::{format_year_bar, single_line};
