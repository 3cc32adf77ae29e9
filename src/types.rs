use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type LanguageId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorAttribute {
    pub id: u32,
    pub name: String,
    pub control_type: AttributeControlType,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub locales: BTreeMap<LanguageId, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorAttributeValue {
    pub id: u32,
    pub attribute_id: u32,
    pub name: String,
    #[serde(default)]
    pub is_pre_selected: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub locales: BTreeMap<LanguageId, String>,
}

/// The input control an attribute is edited with.
///
/// Discriminants are the stable codes stored by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeControlType {
    DropdownList = 1,
    RadioList = 2,
    Checkboxes = 3,
    TextBox = 4,
    MultilineTextbox = 10,
    Datepicker = 20,
    FileUpload = 30,
    ColorSquares = 40,
    ImageSquares = 45,
    ReadonlyCheckboxes = 50,
}
impl AttributeControlType {
    /// Whether attributes of this kind pick from a predefined set of values
    /// (stored as value ids) rather than holding free input.
    pub fn should_have_values(self) -> bool {
        !matches!(
            self,
            Self::TextBox | Self::MultilineTextbox | Self::Datepicker | Self::FileUpload
        )
    }
}

impl VendorAttribute {
    pub fn should_have_values(&self) -> bool {
        self.control_type.should_have_values()
    }
}

pub trait Localizable {
    fn localized_name(&self, language_id: LanguageId) -> String;
}

impl Localizable for VendorAttribute {
    fn localized_name(&self, language_id: LanguageId) -> String {
        localized_or_default(&self.locales, language_id, &self.name)
    }
}
impl Localizable for VendorAttributeValue {
    fn localized_name(&self, language_id: LanguageId) -> String {
        localized_or_default(&self.locales, language_id, &self.name)
    }
}

fn localized_or_default(
    locales: &BTreeMap<LanguageId, String>,
    language_id: LanguageId,
    default: &str,
) -> String {
    locales
        .get(&language_id)
        .filter(|name| !name.trim().is_empty())
        .map(String::as_str)
        .unwrap_or(default)
        .to_string()
}
