//! Box-drawing rendering of the tree for debugging.

use crate::node::{Node, NodeId, LEFT, NIL, RIGHT};

/// Renders the subtree under `root`, one node per line with its aggregates
/// and any pending lazy tag. Read-only: tags are shown, not pushed.
pub(crate) fn dump(nodes: &[Node], root: NodeId) -> String {
    let mut out = String::new();
    render(nodes, root, "", &mut out);
    out
}

fn render(nodes: &[Node], x: NodeId, tab: &str, out: &mut String) {
    let n = &nodes[x as usize];
    out.push_str(&format!("#{x} key={} size={} sum={}", n.key, n.size, n.sum));
    if n.lazy != 0 {
        out.push_str(&format!(" lazy={}", n.lazy));
    }

    let children: Vec<(&str, NodeId)> = [("L", n.children[LEFT]), ("R", n.children[RIGHT])]
        .into_iter()
        .filter(|(_, c)| *c != NIL)
        .collect();
    for (i, (label, child)) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(label);
        out.push_str(": ");
        let child_tab = format!("{tab}{}    ", if is_last { " " } else { "│" });
        render(nodes, *child, &child_tab, out);
    }
}
