// src/rewrite/walker.rs

//! Traversal of text-bearing nodes in a parsed document.

use ego_tree::{NodeId, NodeRef};
use scraper::Node;

/// Visit every text node under `root` in document order (depth-first,
/// pre-order), skipping the subtrees of elements named in `skip_tags`.
///
/// Only `Text` nodes reach `visit`; element names, attribute values, and
/// comments never do. The traversal itself performs no mutation.
pub fn for_each_text<F>(root: NodeRef<'_, Node>, skip_tags: &[String], mut visit: F)
where
    F: FnMut(NodeId, &str),
{
    let mut stack: Vec<NodeRef<'_, Node>> = root.children().rev().collect();
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) => {
                if skip_tags
                    .iter()
                    .any(|tag| tag.eq_ignore_ascii_case(element.name()))
                {
                    continue;
                }
                stack.extend(node.children().rev());
            }
            Node::Text(text) => visit(node.id(), &text.text),
            // Comments, doctypes, processing instructions carry no prose
            _ => {}
        }
    }
}

/// Collect the ids of every text node under `root`, in document order.
///
/// Taking a snapshot of ids before mutating lets the caller rewrite node
/// payloads without traversing a tree it is changing.
pub fn collect_text_ids(root: NodeRef<'_, Node>, skip_tags: &[String]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    for_each_text(root, skip_tags, |id, _| ids.push(id));
    ids
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn body_texts(html: &str, skip_tags: &[String]) -> Vec<String> {
        let document = Html::parse_document(html);
        let body_sel = Selector::parse("body").unwrap();
        let body = document.select(&body_sel).next().unwrap();
        let mut texts = Vec::new();
        for_each_text(*body, skip_tags, |_, text| texts.push(text.to_string()));
        texts
    }

    #[test]
    fn test_visits_nested_text_in_document_order() {
        let texts = body_texts(
            "<html><body><h1>First</h1><ul><li>Second</li><li><span>Third</span></li></ul></body></html>",
            &[],
        );
        assert_eq!(texts, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_skips_comments_and_attributes() {
        let texts = body_texts(
            r#"<html><body><!-- Yale --><a href="https://yale.edu">About</a></body></html>"#,
            &[],
        );
        assert_eq!(texts, ["About"]);
    }

    #[test]
    fn test_skip_tags_prune_whole_subtree() {
        let skip = ["script".to_string(), "style".to_string()];
        let texts = body_texts(
            "<html><body><p>Keep</p><script>var yale = 1;</script><style>.yale {}</style><div><script>skip()</script><p>Also</p></div></body></html>",
            &skip,
        );
        assert_eq!(texts, ["Keep", "Also"]);
    }

    #[test]
    fn test_table_cells_are_visited() {
        let texts = body_texts(
            "<html><body><table><tr><td>Cell one</td><td>Cell two</td></tr></table></body></html>",
            &[],
        );
        assert_eq!(texts, ["Cell one", "Cell two"]);
    }

    #[test]
    fn test_collect_ids_matches_visit_count() {
        let document = Html::parse_document("<html><body><p>a</p><p>b</p></body></html>");
        let body_sel = Selector::parse("body").unwrap();
        let body = document.select(&body_sel).next().unwrap();
        assert_eq!(collect_text_ids(*body, &[]).len(), 2);
    }
}
