mod text;
mod transform;

use crate::{
    services::{AttributeParser, AttributeService, TextFormatter, WorkContext},
    types::{AttributeControlType, LanguageId, Localizable, VendorAttribute},
};

pub use text::{HtmlTextFormatter, TextFormatOptions};
pub use transform::encode_html;

pub const DEFAULT_SEPARATOR: &str = "<br />";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Placed between two rendered attribute values.
    pub separator: String,
    /// Encode the rendered values for embedding in HTML.
    ///
    /// Multiline values are always left to the [TextFormatter], which applies
    /// its own encoding.
    pub html_encode: bool,
}
impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            html_encode: true,
        }
    }
}

/// Renders vendor attribute blobs as `Name: value` lines.
pub struct AttributeFormatter<'a> {
    parser: &'a dyn AttributeParser,
    service: &'a dyn AttributeService,
    work_context: &'a dyn WorkContext,
    text_formatter: &'a dyn TextFormatter,
}
impl<'a> AttributeFormatter<'a> {
    pub fn new(
        parser: &'a dyn AttributeParser,
        service: &'a dyn AttributeService,
        work_context: &'a dyn WorkContext,
        text_formatter: &'a dyn TextFormatter,
    ) -> Self {
        Self {
            parser,
            service,
            work_context,
            text_formatter,
        }
    }

    pub fn format(&self, attributes_xml: &str, separator: &str, html_encode: bool) -> String {
        let language_id = self.work_context.working_language_id();

        let mut result = String::new();
        for attribute in self.parser.parse_attributes(attributes_xml) {
            for value in self.parser.parse_values(attributes_xml, attribute.id) {
                let Some(fragment) = self.fragment(&attribute, &value, language_id, html_encode)
                else {
                    continue;
                };
                if fragment.is_empty() {
                    continue;
                }

                if !result.is_empty() {
                    result.push_str(separator);
                }
                result.push_str(&fragment);
            }
        }
        result
    }

    pub fn format_with(&self, attributes_xml: &str, options: &FormatOptions) -> String {
        self.format(attributes_xml, &options.separator, options.html_encode)
    }

    fn fragment(
        &self,
        attribute: &VendorAttribute,
        value: &str,
        language_id: LanguageId,
        html_encode: bool,
    ) -> Option<String> {
        let name = attribute.localized_name(language_id);

        let fragment = if attribute.should_have_values() {
            let Ok(value_id) = value.trim().parse::<u32>() else {
                log::debug!(
                    "Attribute {} holds a non-numeric value id {value:?}, skipping it",
                    attribute.id
                );
                return None;
            };
            let Some(value) = self.service.vendor_attribute_value_by_id(value_id) else {
                log::debug!(
                    "Value {value_id} of attribute {} does not exist, skipping it",
                    attribute.id
                );
                return None;
            };
            format!("{name}: {}", value.localized_name(language_id))
        } else {
            match attribute.control_type {
                AttributeControlType::MultilineTextbox => {
                    let name = if html_encode {
                        encode_html(&name).into_owned()
                    } else {
                        name
                    };
                    // The text formatter does its own encoding.
                    return Some(format!("{name}: {}", self.text_formatter.format_text(value)));
                }
                AttributeControlType::FileUpload => return None,
                _ => format!("{name}: {value}"),
            }
        };

        if html_encode {
            Some(encode_html(&fragment).into_owned())
        } else {
            Some(fragment)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::types::VendorAttributeValue;

    /// Serves the blob as a list of (attribute, values) pairs, ignoring the xml.
    struct StaticParser(Vec<(VendorAttribute, Vec<&'static str>)>);
    impl AttributeParser for StaticParser {
        fn parse_attributes(&self, _: &str) -> Vec<VendorAttribute> {
            self.0.iter().map(|(attribute, _)| attribute.clone()).collect()
        }
        fn parse_values(&self, _: &str, attribute_id: u32) -> Vec<String> {
            self.0
                .iter()
                .filter(|(attribute, _)| attribute.id == attribute_id)
                .flat_map(|(_, values)| values.iter().map(|v| v.to_string()))
                .collect()
        }
    }

    #[derive(Default)]
    struct Values {
        values: Vec<VendorAttributeValue>,
        lookups: RefCell<Vec<u32>>,
    }
    impl AttributeService for Values {
        fn vendor_attribute_by_id(&self, _: u32) -> Option<VendorAttribute> {
            None
        }
        fn vendor_attribute_value_by_id(&self, id: u32) -> Option<VendorAttributeValue> {
            self.lookups.borrow_mut().push(id);
            self.values.iter().find(|v| v.id == id).cloned()
        }
    }

    struct Language(LanguageId);
    impl WorkContext for Language {
        fn working_language_id(&self) -> LanguageId {
            self.0
        }
    }

    /// Marks its output so tests can see it was used.
    struct Bracketing;
    impl TextFormatter for Bracketing {
        fn format_text(&self, text: &str) -> String {
            format!("[{text}]")
        }
    }

    fn attribute(id: u32, name: &str, control_type: AttributeControlType) -> VendorAttribute {
        VendorAttribute {
            id,
            name: name.to_string(),
            control_type,
            display_order: 0,
            locales: [(2, format!("{name}-fr"))].into(),
        }
    }
    fn value(id: u32, attribute_id: u32, name: &str) -> VendorAttributeValue {
        VendorAttributeValue {
            id,
            attribute_id,
            name: name.to_string(),
            is_pre_selected: false,
            display_order: 0,
            locales: Default::default(),
        }
    }

    fn format(
        pairs: Vec<(VendorAttribute, Vec<&'static str>)>,
        values: &Values,
        separator: &str,
        html_encode: bool,
    ) -> String {
        let parser = StaticParser(pairs);
        AttributeFormatter::new(&parser, values, &Language(1), &Bracketing).format(
            "",
            separator,
            html_encode,
        )
    }

    #[test]
    fn simple_values_are_encoded_on_request() {
        let pairs = vec![(
            attribute(1, "A&B", AttributeControlType::TextBox),
            vec!["<x>"],
        )];

        assert_eq!(
            format(pairs.clone(), &Values::default(), ", ", true),
            "A&amp;B: &lt;x&gt;"
        );
        assert_eq!(format(pairs, &Values::default(), ", ", false), "A&B: <x>");
    }

    #[test]
    fn multiline_text_is_never_encoded_again() {
        let pairs = vec![(
            attribute(1, "<Note>", AttributeControlType::MultilineTextbox),
            vec!["<p>"],
        )];

        assert_eq!(
            format(pairs.clone(), &Values::default(), ", ", true),
            "&lt;Note&gt;: [<p>]"
        );
        assert_eq!(format(pairs, &Values::default(), ", ", false), "<Note>: [<p>]");
    }

    #[test]
    fn file_uploads_add_nothing() {
        let pairs = vec![
            (attribute(1, "Upload", AttributeControlType::FileUpload), vec!["guid"]),
            (attribute(2, "Date", AttributeControlType::Datepicker), vec!["2024-01-01"]),
            (attribute(3, "File", AttributeControlType::FileUpload), vec!["guid"]),
        ];

        assert_eq!(
            format(pairs, &Values::default(), " | ", true),
            "Date: 2024-01-01"
        );
    }

    #[test]
    fn predefined_values_are_resolved_by_id() {
        let values = Values {
            values: vec![value(10, 1, "Red & Blue")],
            ..Values::default()
        };
        let pairs = vec![(
            attribute(1, "Color", AttributeControlType::DropdownList),
            vec!["not a number", "11", "10"],
        )];

        assert_eq!(format(pairs, &values, ", ", true), "Color: Red &amp; Blue");
        // Non-numeric ids never reach the service.
        assert_eq!(*values.lookups.borrow(), [11, 10]);
    }

    #[test]
    fn separator_only_between_fragments() {
        let values = Values {
            values: vec![value(10, 2, "S"), value(11, 2, "M")],
            ..Values::default()
        };
        let pairs = vec![
            (attribute(1, "Upload", AttributeControlType::FileUpload), vec!["x"]),
            (attribute(2, "Size", AttributeControlType::Checkboxes), vec!["99", "10", "11"]),
            (attribute(3, "Gift", AttributeControlType::TextBox), vec!["yes"]),
        ];

        let output = format(pairs, &values, "<br />", false);
        assert_eq!(output, "Size: S<br />Size: M<br />Gift: yes");
        assert_eq!(output.matches("<br />").count(), 2);
    }

    #[test]
    fn nothing_to_render_is_empty() {
        assert_eq!(format(vec![], &Values::default(), ", ", true), "");

        let pairs = vec![(
            attribute(1, "Color", AttributeControlType::RadioList),
            vec!["1", "x"],
        )];
        assert_eq!(format(pairs, &Values::default(), ", ", true), "");
    }

    #[test]
    fn names_follow_the_working_language() {
        let values = Values {
            values: vec![value(10, 1, "Rouge")],
            ..Values::default()
        };
        let parser = StaticParser(vec![(
            attribute(1, "Color", AttributeControlType::ColorSquares),
            vec!["10"],
        )]);

        let output = AttributeFormatter::new(&parser, &values, &Language(2), &Bracketing)
            .format_with("", &FormatOptions::default());
        assert_eq!(output, "Color-fr: Rouge");
    }
}
