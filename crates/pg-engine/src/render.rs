//! Box-drawn outline rendering of story trees.

use crate::story::StoryNode;

const BRANCH: &str = " ├─";
const LAST_BRANCH: &str = " └─";
const CONTINUE: &str = " │ ";
const CLOSED: &str = "   ";

/// Render a story tree as an indented outline, one node per line.
///
/// ```text
///  └─coin
///     └─heads
/// ```
pub fn render(node: &StoryNode) -> String {
    let mut out = String::new();
    for line in render_lines(node) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// The lines of [`render`], without trailing newlines.
pub fn render_lines(node: &StoryNode) -> Vec<String> {
    let mut lines = Vec::with_capacity(node.node_count());
    push_lines(node, "", true, &mut lines);
    lines
}

fn push_lines(node: &StoryNode, indent: &str, is_last: bool, lines: &mut Vec<String>) {
    let (branch, continuation) = if is_last {
        (LAST_BRANCH, CLOSED)
    } else {
        (BRANCH, CONTINUE)
    };
    lines.push(format!("{indent}{branch}{}", node.label()));

    let children = node.children();
    if children.is_empty() {
        return;
    }
    let child_indent = format!("{indent}{continuation}");
    for (i, child) in children.iter().enumerate() {
        push_lines(child, &child_indent, i + 1 == children.len(), lines);
    }
}
