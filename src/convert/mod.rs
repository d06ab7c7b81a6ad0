mod pandoc;
mod request;

pub use pandoc::{Pandoc, convert_markdown};
pub use request::{ConversionRequest, OutputFormat, file_stem};
