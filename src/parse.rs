use markup5ever_rcdom::{Handle, NodeData, RcDom};
use xml5ever::{
    driver::{parse_document, XmlParseOpts},
    tendril::TendrilSink,
};

use crate::{
    services::{AttributeParser, AttributeService},
    types::VendorAttribute,
};

const ROOT: &str = "Attributes";
const ATTRIBUTE: &str = "VendorAttribute";
const ATTRIBUTE_VALUE: &str = "VendorAttributeValue";
const VALUE: &str = "Value";

/// Reads attribute blobs of the form:
///
/// ```xml
/// <Attributes>
///     <VendorAttribute ID="1">
///         <VendorAttributeValue><Value>Red</Value></VendorAttributeValue>
///     </VendorAttribute>
/// </Attributes>
/// ```
///
/// The underlying parser recovers from malformed markup instead of failing,
/// so garbage in simply yields fewer (or no) attributes.
#[derive(Debug, Clone)]
pub struct XmlAttributeParser<S> {
    service: S,
}
impl<S: AttributeService> XmlAttributeParser<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn parse_attribute_ids(&self, attributes_xml: &str) -> Vec<u32> {
        read_blob(attributes_xml).into_iter().map(|(id, _)| id).collect()
    }
}
impl<S: AttributeService> AttributeParser for XmlAttributeParser<S> {
    fn parse_attributes(&self, attributes_xml: &str) -> Vec<VendorAttribute> {
        self.parse_attribute_ids(attributes_xml)
            .into_iter()
            .filter_map(|id| {
                let attribute = self.service.vendor_attribute_by_id(id);
                if attribute.is_none() {
                    log::debug!("Attribute {id} referenced by blob is not in the catalog");
                }
                attribute
            })
            .collect()
    }

    fn parse_values(&self, attributes_xml: &str, attribute_id: u32) -> Vec<String> {
        read_blob(attributes_xml)
            .into_iter()
            .filter(|(id, _)| *id == attribute_id)
            .flat_map(|(_, values)| values)
            .collect()
    }
}

/// Returns a copy of the blob with `value` appended to the attribute's values.
pub fn add_attribute(attributes_xml: &str, attribute_id: u32, value: &str) -> String {
    let mut entries = read_blob(attributes_xml);

    match entries.iter_mut().find(|(id, _)| *id == attribute_id) {
        Some((_, values)) => values.push(value.to_string()),
        None => entries.push((attribute_id, vec![value.to_string()])),
    }

    write_blob(&entries)
}

/// Attribute ids with their raw values, in document order.
fn read_blob(attributes_xml: &str) -> Vec<(u32, Vec<String>)> {
    let dom = parse_document(RcDom::default(), XmlParseOpts::default()).one(attributes_xml);

    let mut entries = vec![];
    for root in child_elements(&dom.document, ROOT) {
        for attribute in child_elements(&root, ATTRIBUTE) {
            let Some(id) = attribute_value(&attribute, "ID").and_then(|id| id.trim().parse().ok())
            else {
                continue;
            };

            let values = child_elements(&attribute, ATTRIBUTE_VALUE)
                .iter()
                .flat_map(|value| child_elements(value, VALUE))
                .map(|value| inner_text(&value).trim().to_string())
                .collect();

            entries.push((id, values));
        }
    }
    entries
}

fn write_blob(entries: &[(u32, Vec<String>)]) -> String {
    let mut xml = format!("<{ROOT}>");
    for (id, values) in entries {
        xml.push_str(&format!(r#"<{ATTRIBUTE} ID="{id}">"#));
        for value in values {
            let value = html_escape::encode_text(value);
            xml.push_str(&format!(
                "<{ATTRIBUTE_VALUE}><{VALUE}>{value}</{VALUE}></{ATTRIBUTE_VALUE}>"
            ));
        }
        xml.push_str(&format!("</{ATTRIBUTE}>"));
    }
    xml.push_str(&format!("</{ROOT}>"));
    xml
}

fn child_elements(node: &Handle, local_name: &str) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| match &child.data {
            NodeData::Element { name, .. } => &*name.local == local_name,
            _ => false,
        })
        .cloned()
        .collect()
}

fn attribute_value(node: &Handle, local_name: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    let value = attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == local_name)
        .map(|attr| attr.value.to_string());
    value
}

fn inner_text(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}
fn collect_text(node: &Handle, text: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        text.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, text);
    }
}
