use std::fmt;

use crate::model::{FilterAttrs, GroupByAttrs};

/// Editing sub-widget placed in the tree, bound to the state it edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget<'a> {
    FilterOperation(&'a FilterAttrs),
    GroupByOperation(&'a GroupByAttrs),
}

impl Widget<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Widget::FilterOperation(_) => "FilterOperation",
            Widget::GroupByOperation(_) => "GroupByOperation",
        }
    }
}

/// Declarative view tree. Selectors use the `tag.class` shorthand; a bare
/// `.class` means a `div`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode<'a> {
    Element { selector: String, children: Vec<ViewNode<'a>> },
    Text(String),
    Widget(Widget<'a>),
}

impl<'a> ViewNode<'a> {
    pub fn element(selector: &str, children: Vec<ViewNode<'a>>) -> Self {
        ViewNode::Element { selector: selector.to_string(), children }
    }

    pub fn text(text: &str) -> Self {
        ViewNode::Text(text.to_string())
    }

    pub fn selector(&self) -> Option<&str> {
        match self {
            ViewNode::Element { selector, .. } => Some(selector),
            _ => None,
        }
    }

    pub fn children(&self) -> &[ViewNode<'a>] {
        match self {
            ViewNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Widget leaves in document order.
    pub fn find_widgets(&self) -> Vec<Widget<'a>> {
        let mut found = vec![];
        self.collect_widgets(&mut found);
        found
    }

    fn collect_widgets(&self, found: &mut Vec<Widget<'a>>) {
        match self {
            ViewNode::Element { children, .. } => {
                for child in children {
                    child.collect_widgets(found);
                }
            }
            ViewNode::Widget(widget) => found.push(*widget),
            ViewNode::Text(_) => {}
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            ViewNode::Element { selector, children } => {
                writeln!(f, "{pad}{selector}")?;
                for child in children {
                    child.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
            ViewNode::Text(text) => writeln!(f, "{pad}\"{text}\""),
            ViewNode::Widget(widget) => writeln!(f, "{pad}<{}>", widget.name()),
        }
    }
}

impl fmt::Display for ViewNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_outline() {
        let attrs = FilterAttrs::default();
        let node = ViewNode::element(".box", vec![
            ViewNode::element("h2", vec![ViewNode::text("Title")]),
            ViewNode::Widget(Widget::FilterOperation(&attrs)),
        ]);

        assert_eq!(node.to_string(), ".box\n  h2\n    \"Title\"\n  <FilterOperation>\n");
    }

    #[test]
    fn test_text_has_no_children() {
        let node = ViewNode::text("x");
        assert!(node.children().is_empty());
        assert_eq!(node.selector(), None);
        assert!(node.find_widgets().is_empty());
    }
}
