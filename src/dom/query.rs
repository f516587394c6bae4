//! Simple selectors: `Type`, `#id`, `.class` and compounds like
//! `Panel#main.active`.
//!
//! Only a single compound selector is supported. Whitespace (descendant
//! combinators) and anything else the lexer does not recognise is a parse
//! error, and queries with an invalid selector return no matches.

use logos::Logos;
use tracing::debug;

use super::node::{NodeData, NodeId};
use super::tree::WidgetTree;

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorToken {
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_-]*")]
    Id,

    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_-]*")]
    Class,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Type,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected {found:?} at offset {position}")]
    UnexpectedToken { position: usize, found: String },
    #[error("combinators are not supported (whitespace at offset {0})")]
    Whitespace(usize),
}

/// A compound selector. Every present part must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub type_name: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Selector, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut selector = Selector::default();
        let mut lexer = SelectorToken::lexer(input);
        while let Some(token) = lexer.next() {
            let span = lexer.span();
            let slice = lexer.slice();
            let unexpected = || SelectorError::UnexpectedToken {
                position: span.start,
                found: slice.to_owned(),
            };
            match token {
                Ok(SelectorToken::Type) if span.start == 0 => {
                    selector.type_name = Some(slice.to_owned());
                }
                Ok(SelectorToken::Id) if selector.id.is_none() => {
                    selector.id = Some(slice[1..].to_owned());
                }
                Ok(SelectorToken::Class) => selector.classes.push(slice[1..].to_owned()),
                Ok(SelectorToken::Whitespace) => return Err(SelectorError::Whitespace(span.start)),
                Ok(_) | Err(()) => return Err(unexpected()),
            }
        }
        Ok(selector)
    }

    pub fn matches(&self, data: &NodeData) -> bool {
        self.type_name.as_ref().is_none_or(|t| *t == data.widget_type)
            && self.id.as_ref().is_none_or(|id| data.id.as_ref() == Some(id))
            && self.classes.iter().all(|c| data.has_class(c))
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl WidgetTree {
    /// All nodes under the root matching `selector`, in pre-order.
    pub fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_all_from(self.root(), selector)
    }

    /// First node in pre-order matching `selector`.
    pub fn query_one(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    pub fn query_all_from(&self, start: NodeId, selector: &str) -> Vec<NodeId> {
        let selector = match Selector::parse(selector) {
            Ok(s) => s,
            Err(e) => {
                debug!(selector, error = %e, "invalid selector");
                return Vec::new();
            }
        };
        self.query_matching(start, |data| selector.matches(data))
    }

    /// All nodes under `start` for which `predicate` holds, in pre-order.
    pub fn query_matching(&self, start: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(start)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetExt;
    use crate::widgets::{Container, Static};

    /// ```text
    ///       root (Container)
    ///      /    \
    ///    a        b
    ///  (Container (Container
    ///   #sidebar   #main .active)
    ///   /     \
    ///  c       d
    /// (Static  (Static
    ///  .item)   .item .active)
    /// ```
    fn build() -> (WidgetTree, [NodeId; 4]) {
        let mut tree = WidgetTree::new(Box::new(Container::column()));
        let root = tree.root();
        let a = tree.add_child(root, Box::new(Container::column().with_id("sidebar"))).unwrap();
        let b = tree
            .add_child(root, Box::new(Container::column().with_id("main").add_class("active")))
            .unwrap();
        let c = tree.add_child(a, Box::new(Static::new("c").with_class("item"))).unwrap();
        let d = tree
            .add_child(a, Box::new(Static::new("d").with_classes(&["item", "active"])))
            .unwrap();
        (tree, [a, b, c, d])
    }

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_compound() {
        let s = Selector::parse("Panel#main.a.b").unwrap();
        assert_eq!(s.type_name.as_deref(), Some("Panel"));
        assert_eq!(s.id.as_deref(), Some("main"));
        assert_eq!(s.classes, vec!["a", "b"]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("A B"), Err(SelectorError::Whitespace(1)));
        assert!(matches!(
            Selector::parse("#a#b"),
            Err(SelectorError::UnexpectedToken { position: 2, .. })
        ));
        assert!(matches!(Selector::parse(".a Type"), Err(SelectorError::Whitespace(2))));
        assert!(matches!(Selector::parse(".aType>b"), Err(SelectorError::UnexpectedToken { .. })));
        assert!(matches!(Selector::parse("#1"), Err(SelectorError::UnexpectedToken { .. })));
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[test]
    fn query_by_id() {
        let (tree, [a, ..]) = build();
        assert_eq!(tree.query_one("#sidebar"), Some(a));
        assert_eq!(tree.query_one("#missing"), None);
    }

    #[test]
    fn query_by_class_in_pre_order() {
        let (tree, [_, b, c, d]) = build();
        assert_eq!(tree.query_all(".item"), vec![c, d]);
        assert_eq!(tree.query_all(".active"), vec![d, b]);
    }

    #[test]
    fn query_by_type() {
        let (tree, [_, _, c, d]) = build();
        assert_eq!(tree.query_all("Static"), vec![c, d]);
        assert_eq!(tree.query_all("Container").len(), 3);
    }

    #[test]
    fn compound_requires_every_part() {
        let (tree, [_, b, _, d]) = build();
        assert_eq!(tree.query_all("Static.active"), vec![d]);
        assert_eq!(tree.query_all("Container.active"), vec![b]);
        assert!(tree.query_all("Static#main").is_empty());
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let (tree, _) = build();
        assert!(tree.query_all("Container > Static").is_empty());
        assert_eq!(tree.query_one(""), None);
    }

    #[test]
    fn query_from_subtree() {
        let (tree, [a, b, ..]) = build();
        assert_eq!(tree.query_all_from(a, ".active").len(), 1);
        assert_eq!(tree.query_all_from(b, ".item"), Vec::<NodeId>::new());
        assert_eq!(tree.query_matching(a, |d| d.widget_type == "Container"), vec![a]);
    }
}
