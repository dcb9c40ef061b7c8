/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Tag-wrapped markup rendering of parsed messages.
//!
//! Turns one parsed message into a small XML block, one `<field>` element
//! per field in mapping order. A [`TagInfoProvider`] can annotate each
//! element with the field's dictionary name; without one the block carries
//! tags and values only.

use fixlens_core::ParsedMessage;
use fixlens_dictionary::TagInfoProvider;

/// Renders a parsed message as a tag-wrapped markup block.
#[derive(Debug, Clone, Copy)]
pub struct MarkupWriter {
    /// Spaces of indentation per field element.
    indent: usize,
}

impl MarkupWriter {
    /// Creates a writer with two-space indentation.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { indent: 2 }
    }

    /// Sets the field indentation width.
    ///
    /// # Arguments
    /// * `indent` - Spaces in front of each `<field>` element
    #[inline]
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Renders a message without name annotation.
    ///
    /// # Arguments
    /// * `message` - The parsed message
    ///
    /// # Returns
    /// The markup block, without a trailing newline. An empty message
    /// renders as a self-closing `<message/>`.
    #[must_use]
    pub fn render(&self, message: &ParsedMessage<'_>) -> String {
        self.render_impl(message, None)
    }

    /// Renders a message with dictionary names where the provider has them.
    ///
    /// # Arguments
    /// * `message` - The parsed message
    /// * `provider` - The tag metadata source
    #[must_use]
    pub fn render_with(
        &self,
        message: &ParsedMessage<'_>,
        provider: &dyn TagInfoProvider,
    ) -> String {
        self.render_impl(message, Some(provider))
    }

    fn render_impl(
        &self,
        message: &ParsedMessage<'_>,
        provider: Option<&dyn TagInfoProvider>,
    ) -> String {
        if message.is_empty() {
            return "<message/>".to_string();
        }

        let mut out = String::with_capacity(32 + message.len() * 48);
        out.push_str("<message>\n");
        for field in message.iter() {
            for _ in 0..self.indent {
                out.push(' ');
            }
            out.push_str("<field tag=\"");
            escape_into(&mut out, field.tag);
            out.push('"');
            if let Some(def) = provider.and_then(|p| p.field_info(field.tag)) {
                out.push_str(" name=\"");
                escape_into(&mut out, &def.name);
                out.push('"');
            }
            out.push('>');
            escape_into(&mut out, field.value);
            out.push_str("</field>\n");
        }
        out.push_str("</message>");
        out
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends text with the XML-reserved characters escaped.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_dictionary::{EmbeddedDictionary, NoDictionary};
    use fixlens_tagvalue::parse_line;

    #[test]
    fn test_render_plain() {
        let message = parse_line("35=D|55=EURUSD");
        let markup = MarkupWriter::new().render(&message);
        assert_eq!(
            markup,
            "<message>\n  <field tag=\"35\">D</field>\n  <field tag=\"55\">EURUSD</field>\n</message>"
        );
    }

    #[test]
    fn test_render_with_names() {
        let message = parse_line("35=D|9999=custom");
        let markup = MarkupWriter::new().render_with(&message, &EmbeddedDictionary::new());

        assert!(markup.contains("<field tag=\"35\" name=\"MsgType\">D</field>"));
        // Tags the provider cannot name stay unannotated.
        assert!(markup.contains("<field tag=\"9999\">custom</field>"));
    }

    #[test]
    fn test_render_with_unavailable_provider() {
        let message = parse_line("35=D");
        let markup = MarkupWriter::new().render_with(&message, &NoDictionary);
        assert_eq!(
            markup,
            "<message>\n  <field tag=\"35\">D</field>\n</message>"
        );
    }

    #[test]
    fn test_render_escapes_reserved_characters() {
        let message = parse_line("58=a<b&c\"d");
        let markup = MarkupWriter::new().render(&message);
        assert!(markup.contains("<field tag=\"58\">a&lt;b&amp;c&quot;d</field>"));
    }

    #[test]
    fn test_render_empty_message() {
        let message = parse_line("");
        assert_eq!(MarkupWriter::new().render(&message), "<message/>");
    }

    #[test]
    fn test_render_custom_indent() {
        let message = parse_line("35=D");
        let markup = MarkupWriter::new().with_indent(4).render(&message);
        assert_eq!(
            markup,
            "<message>\n    <field tag=\"35\">D</field>\n</message>"
        );
    }
}
