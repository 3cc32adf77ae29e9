//! The read-only collaborators the formatter is built on, and simple
//! in-memory implementations of them.

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::types::{LanguageId, VendorAttribute, VendorAttributeValue};

pub trait AttributeParser {
    /// The attributes referenced by the blob, in document order.
    fn parse_attributes(&self, attributes_xml: &str) -> Vec<VendorAttribute>;
    /// The raw values stored for one attribute, in document order.
    fn parse_values(&self, attributes_xml: &str, attribute_id: u32) -> Vec<String>;
}

pub trait AttributeService {
    fn vendor_attribute_by_id(&self, id: u32) -> Option<VendorAttribute>;
    fn vendor_attribute_value_by_id(&self, id: u32) -> Option<VendorAttributeValue>;
}

pub trait WorkContext {
    fn working_language_id(&self) -> LanguageId;
}

/// Normalizes free text (multiline input) into display HTML.
pub trait TextFormatter {
    fn format_text(&self, text: &str) -> String;
}

impl<T: AttributeService + ?Sized> AttributeService for &T {
    fn vendor_attribute_by_id(&self, id: u32) -> Option<VendorAttribute> {
        (**self).vendor_attribute_by_id(id)
    }
    fn vendor_attribute_value_by_id(&self, id: u32) -> Option<VendorAttributeValue> {
        (**self).vendor_attribute_value_by_id(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWorkContext(pub LanguageId);
impl WorkContext for FixedWorkContext {
    fn working_language_id(&self) -> LanguageId {
        self.0
    }
}

/// Attribute definitions and their predefined values, held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub attributes: Vec<VendorAttribute>,
    #[serde(default)]
    pub values: Vec<VendorAttributeValue>,
}
impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn values_for_attribute(&self, attribute_id: u32) -> Vec<&VendorAttributeValue> {
        let mut values: Vec<_> = self
            .values
            .iter()
            .filter(|value| value.attribute_id == attribute_id)
            .collect();
        values.sort_by_key(|value| (value.display_order, value.id));
        values
    }
}
impl AttributeService for Catalog {
    fn vendor_attribute_by_id(&self, id: u32) -> Option<VendorAttribute> {
        self.attributes.iter().find(|a| a.id == id).cloned()
    }
    fn vendor_attribute_value_by_id(&self, id: u32) -> Option<VendorAttributeValue> {
        self.values.iter().find(|v| v.id == id).cloned()
    }
}
