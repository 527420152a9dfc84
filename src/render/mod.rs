//! Rendering: shaped reports to xlsx bytes, HTML and PDF.

mod excel;
mod html;
mod interactive;
mod pdf;

pub use excel::{render_workbook, WorkbookStyle};
pub use html::{render_document, DocumentStyle};
pub use interactive::render_listing_page;
pub use pdf::{ChromiumEngine, PdfEngine};
