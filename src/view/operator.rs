use crate::{model::OperatorAttrs, view::{ViewNode, Widget}};

/// The operations panel: a "Filters" section and an "Aggregations" section,
/// each hosting the editor bound to its slice of the state.
pub struct Operator;

impl Operator {
    pub fn view(attrs: &OperatorAttrs) -> ViewNode<'_> {
        ViewNode::element(".pf-query-operations", vec![
            Self::section("Filters", Widget::FilterOperation(&attrs.filter)),
            Self::section("Aggregations", Widget::GroupByOperation(&attrs.groupby)),
        ])
    }

    fn section<'a>(title: &str, widget: Widget<'a>) -> ViewNode<'a> {
        ViewNode::element(".section", vec![
            ViewNode::element("h2", vec![ViewNode::text(title)]),
            ViewNode::element("div.operations-container", vec![ViewNode::Widget(widget)]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filter, FilterOp};

    #[test]
    fn test_two_sections() {
        let attrs = OperatorAttrs::default();
        let view = Operator::view(&attrs);

        assert_eq!(view.selector(), Some(".pf-query-operations"));
        assert_eq!(view.children().len(), 2);

        let titles: Vec<_> = view.children().iter()
            .map(|section| section.children()[0].children()[0].clone())
            .collect();
        assert_eq!(titles, vec![ViewNode::text("Filters"), ViewNode::text("Aggregations")]);
    }

    #[test]
    fn test_each_section_binds_its_state() {
        let mut attrs = OperatorAttrs::default();
        attrs.filter.filters.push(Filter::new("ts", FilterOp::Equal));
        let view = Operator::view(&attrs);

        for section in view.children() {
            let container = &section.children()[1];
            assert_eq!(container.selector(), Some("div.operations-container"));
            assert_eq!(container.children().len(), 1);
        }

        match view.find_widgets().as_slice() {
            [Widget::FilterOperation(f), Widget::GroupByOperation(g)] => {
                assert!(std::ptr::eq(*f, &attrs.filter));
                assert!(std::ptr::eq(*g, &attrs.groupby));
            }
            other => panic!("unexpected widgets {:?}", other),
        }
    }

    #[test]
    fn test_outline() {
        let attrs = OperatorAttrs::default();
        let expected = "\
.pf-query-operations
  .section
    h2
      \"Filters\"
    div.operations-container
      <FilterOperation>
  .section
    h2
      \"Aggregations\"
    div.operations-container
      <GroupByOperation>
";
        assert_eq!(Operator::view(&attrs).to_string(), expected);
    }
}
