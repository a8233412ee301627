use crate::{Result, SyncError};
use okved_core::{CodeNode, CodeTree};
use serde_json::{Map, Value};

const CODE_KEY: &str = "code";
const NAME_KEY: &str = "name";
const ITEMS_KEY: &str = "items";

/// Parses the published OKVED JSON document.
///
/// The reader is lenient about shape: a root that is not an array yields an
/// empty tree, scalar codes and names are kept as text, and an `items` value
/// that is not an array ends that branch. Only malformed JSON is an error.
pub fn parse_code_tree(body: &str) -> Result<CodeTree> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| SyncError::Parse(err.to_string()))?;
    Ok(tree_from_value(value))
}

pub fn tree_from_value(value: Value) -> CodeTree {
    match value {
        Value::Array(items) => CodeTree::new(nodes_from_values(items)),
        _ => CodeTree::default(),
    }
}

// serde_json stops at 128 levels of nesting, which bounds this recursion.
fn nodes_from_values(values: Vec<Value>) -> Vec<CodeNode> {
    values.into_iter().map(node_from_value).collect()
}

fn node_from_value(value: Value) -> CodeNode {
    let Value::Object(mut fields) = value else {
        return CodeNode::default();
    };

    CodeNode {
        code: scalar_text(&mut fields, CODE_KEY),
        name: scalar_text(&mut fields, NAME_KEY),
        items: match fields.remove(ITEMS_KEY) {
            Some(Value::Array(items)) => Some(nodes_from_values(items)),
            _ => None,
        },
    }
}

fn scalar_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
