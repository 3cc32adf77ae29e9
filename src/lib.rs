pub mod format;
pub mod parse;
pub mod services;
pub mod types;

pub use format::{AttributeFormatter, FormatOptions, HtmlTextFormatter, TextFormatOptions};
pub use parse::XmlAttributeParser;
pub use services::{Catalog, FixedWorkContext};
pub use types::{AttributeControlType, LanguageId, VendorAttribute, VendorAttributeValue};
