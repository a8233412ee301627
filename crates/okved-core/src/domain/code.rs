use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_CODE: &str = "00.00";
pub const PLACEHOLDER_NAME: &str = "Код не найден";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub name: String,
}

impl CodeEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Stand-in used when the fallback has nothing to pick from.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_CODE, PLACEHOLDER_NAME)
    }
}

/// One node of the OKVED hierarchy as published upstream.
///
/// Section and group nodes may lack a code or a name; `items` is `None` when
/// the source had no usable child array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CodeNode>>,
}

impl CodeNode {
    pub fn leaf(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            items: None,
        }
    }

    pub fn with_items(mut self, items: Vec<CodeNode>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn entry(&self) -> Option<CodeEntry> {
        match (&self.code, &self.name) {
            (Some(code), Some(name)) => Some(CodeEntry::new(code.as_str(), name.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTree {
    pub nodes: Vec<CodeNode>,
}

impl CodeTree {
    pub fn new(nodes: Vec<CodeNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub entry: CodeEntry,
    /// Digits shared with the end of the phone; zero when the fallback chose the entry.
    pub match_length: usize,
}

impl MatchResult {
    pub fn is_fallback(&self) -> bool {
        self.match_length == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{CodeEntry, CodeNode, CodeTree};

    #[test]
    fn entry_requires_code_and_name() {
        let full = CodeNode::leaf("62.01", "Разработка ПО");
        assert_eq!(full.entry(), Some(CodeEntry::new("62.01", "Разработка ПО")));

        let nameless = CodeNode {
            code: Some("62".to_string()),
            ..Default::default()
        };
        assert!(nameless.entry().is_none());
    }

    #[test]
    fn tree_serializes_as_array() {
        let tree = CodeTree::new(vec![CodeNode::leaf("A", "Сельское хозяйство")
            .with_items(vec![CodeNode::leaf("01", "Растениеводство")])]);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.starts_with('['));
        let back: CodeTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
