//! HTML serialization of the visual tree

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::element::{Element, Node};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

impl Node {
    /// Append this node's markup to `out`
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text { content } => out.push_str(&encode_text(content)),
            Node::Raw { markup } => out.push_str(markup),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl Element {
    /// Append this element's markup to `out`
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());

        if !self.classes().is_empty() {
            out.push_str(" class=\"");
            out.push_str(&encode_double_quoted_attribute(&self.classes().to_string()));
            out.push('"');
        }

        for (name, value) in self.attributes() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }

        if is_void(self.tag()) {
            if !self.children().is_empty() {
                tracing::warn!("<{}> cannot have children; dropping them", self.tag());
            }
            out.push_str(" />");
            return;
        }

        out.push('>');
        for child in self.children() {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }

    /// Serialize the element and its subtree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::element::{div, img, p, raw, span};

    #[test]
    fn test_nested_markup() {
        let html = div()
            .class("card p-4")
            .id("c1")
            .child(p().text("Hello"))
            .child(span())
            .to_html();
        assert_eq!(
            html,
            r#"<div class="card p-4" id="c1"><p>Hello</p><span></span></div>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let html = div()
            .attr("title", r#"a "quoted" <b>"#)
            .text("<script>alert(1)</script> & co")
            .to_html();
        assert_eq!(
            html,
            "<div title=\"a &quot;quoted&quot; &lt;b&gt;\">\
             &lt;script&gt;alert(1)&lt;/script&gt; &amp; co</div>"
        );
    }

    #[test]
    fn test_void_elements_self_close() {
        let html = img("https://x.test/a.png", "Profile").class("h-full").to_html();
        assert_eq!(
            html,
            r#"<img class="h-full" src="https://x.test/a.png" alt="Profile" />"#
        );
    }

    #[test]
    fn test_raw_markup_is_verbatim() {
        let html = span().child(raw("<svg></svg>")).to_html();
        assert_eq!(html, "<span><svg></svg></span>");
    }
}
