use crate::ast::Node;
use std::fmt::Write;

/// Renders the tree as indented text, one node per line, ending with a
/// newline. Nodes appear in pre-order (node, left subtree, right subtree)
/// and each level indents four more spaces.
pub fn format_tree(root: &Node) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: &Node, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    match node {
        Node::Number(value) => {
            let _ = writeln!(out, "{}NUMBER: {}", pad, value);
        }
        Node::Binary(op, left, right) => {
            let _ = writeln!(out, "{}OPERATOR: {}", pad, op);
            write_node(left, indent + 4, out);
            write_node(right, indent + 4, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;

    #[test]
    fn test_single_number_is_one_line() {
        let tree = parse_expression("42").unwrap();
        assert_eq!(format_tree(&tree), "NUMBER: 42\n");
    }

    #[test]
    fn test_mixed_precedence_layout() {
        let tree = parse_expression("1+2*3+4").unwrap();
        let expected = "\
OPERATOR: +
    OPERATOR: +
        NUMBER: 1
        OPERATOR: *
            NUMBER: 2
            NUMBER: 3
    NUMBER: 4
";
        assert_eq!(format_tree(&tree), expected);
    }

    #[test]
    fn test_grouped_expression_layout() {
        let tree = parse_expression("(1+2)*3").unwrap();
        let expected = "\
OPERATOR: *
    OPERATOR: +
        NUMBER: 1
        NUMBER: 2
    NUMBER: 3
";
        assert_eq!(format_tree(&tree), expected);
    }

    #[test]
    fn test_every_operator_label() {
        for (source, glyph) in [("1+2", '+'), ("1-2", '-'), ("1*2", '*'), ("1/2", '/')] {
            let tree = parse_expression(source).unwrap();
            let text = format_tree(&tree);
            assert!(text.starts_with(&format!("OPERATOR: {}\n", glyph)));
        }
    }
}
