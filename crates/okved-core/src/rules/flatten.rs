use crate::domain::{CodeEntry, CodeNode, CodeTree};

/// Collects every node carrying both a code and a name, in pre-order.
///
/// Walks with an explicit stack so nesting depth is bounded only by memory.
pub fn flatten_codes(tree: &CodeTree) -> Vec<CodeEntry> {
    let mut out = Vec::new();
    let mut stack: Vec<&CodeNode> = tree.nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if let Some(entry) = node.entry() {
            out.push(entry);
        }
        if let Some(items) = &node.items {
            stack.extend(items.iter().rev());
        }
    }

    out
}
