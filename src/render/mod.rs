pub mod pdf;
pub mod sheet;
pub mod surface;

pub use sheet::{SheetOptions, render_pdf, render_sheet};
pub use surface::{Align, DrawSurface, Logo, TextStyle};
