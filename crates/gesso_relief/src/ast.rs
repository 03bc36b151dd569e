//! Style sheet tree node types.
//!
//! The tree mirrors the shape postcss produces for SCSS: a root holding an
//! ordered list of nodes, where at-rules and qualified rules may own children.
//! Child order is significant and is preserved by every operation here.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::path::NodePath;

/// Position of a node in its originating file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
    /// Byte offset from start of file
    #[serde(default)]
    pub offset: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Source span of a node. Synthesized nodes have no positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl SourceLocation {
    /// Location for nodes created by a fix rather than a parser
    pub const SYNTHETIC: Self = Self {
        start: None,
        end: None,
    };

    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// A node of the style sheet tree.
///
/// The set of node kinds is closed; code that branches on kind matches
/// exhaustively so that a new kind shows up as a compile error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StyleNode {
    #[serde(rename = "atrule")]
    AtRule(AtRule),
    #[serde(rename = "rule")]
    Rule(QualifiedRule),
    #[serde(rename = "decl")]
    Declaration(Declaration),
    #[serde(rename = "comment")]
    Comment(Comment),
}

impl StyleNode {
    /// Children of this node, empty for leaves and statement at-rules
    pub fn children(&self) -> &[StyleNode] {
        match self {
            StyleNode::AtRule(rule) => rule.children(),
            StyleNode::Rule(rule) => &rule.nodes,
            StyleNode::Declaration(_) | StyleNode::Comment(_) => &[],
        }
    }

    /// Mutable child list, `None` for nodes that cannot own children
    pub fn children_mut(&mut self) -> Option<&mut Vec<StyleNode>> {
        match self {
            StyleNode::AtRule(rule) => rule.nodes.as_mut(),
            StyleNode::Rule(rule) => Some(&mut rule.nodes),
            StyleNode::Declaration(_) | StyleNode::Comment(_) => None,
        }
    }

    pub fn source(&self) -> &SourceLocation {
        match self {
            StyleNode::AtRule(n) => &n.source,
            StyleNode::Rule(n) => &n.source,
            StyleNode::Declaration(n) => &n.source,
            StyleNode::Comment(n) => &n.source,
        }
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, StyleNode::Comment(_))
    }

    #[inline]
    pub fn as_at_rule(&self) -> Option<&AtRule> {
        match self {
            StyleNode::AtRule(rule) => Some(rule),
            _ => None,
        }
    }

    #[inline]
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            StyleNode::Comment(comment) => Some(comment),
            _ => None,
        }
    }
}

/// `@name params;` or `@name params { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtRule {
    pub name: CompactString,
    #[serde(default)]
    pub params: CompactString,
    /// `None` for statement at-rules, `Some` (possibly empty) for block at-rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<StyleNode>>,
    #[serde(default)]
    pub source: SourceLocation,
}

impl AtRule {
    /// Statement at-rule without a block, e.g. `@include foo;`
    pub fn new(name: impl Into<CompactString>, params: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: None,
            source: SourceLocation::SYNTHETIC,
        }
    }

    /// At-rule with a block holding `nodes`
    pub fn block(
        name: impl Into<CompactString>,
        params: impl Into<CompactString>,
        nodes: Vec<StyleNode>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: Some(nodes),
            source: SourceLocation::SYNTHETIC,
        }
    }

    #[inline]
    pub fn children(&self) -> &[StyleNode] {
        self.nodes.as_deref().unwrap_or(&[])
    }

    /// Insert `node` before the child at `index`.
    ///
    /// Indices past the end append. A statement at-rule gains a block.
    pub fn insert_before(&mut self, index: usize, node: StyleNode) {
        let nodes = self.nodes.get_or_insert_with(Vec::new);
        let index = index.min(nodes.len());
        nodes.insert(index, node);
    }
}

/// `selector { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedRule {
    pub selector: CompactString,
    #[serde(default)]
    pub nodes: Vec<StyleNode>,
    #[serde(default)]
    pub source: SourceLocation,
}

impl QualifiedRule {
    pub fn new(selector: impl Into<CompactString>, nodes: Vec<StyleNode>) -> Self {
        Self {
            selector: selector.into(),
            nodes,
            source: SourceLocation::SYNTHETIC,
        }
    }
}

/// `prop: value;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub prop: CompactString,
    pub value: CompactString,
    #[serde(default)]
    pub source: SourceLocation,
}

impl Declaration {
    pub fn new(prop: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            source: SourceLocation::SYNTHETIC,
        }
    }
}

/// `/* text */` or `// text`, with delimiters and surrounding whitespace stripped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: CompactString,
    #[serde(default)]
    pub source: SourceLocation,
}

impl Comment {
    pub fn new(text: impl Into<CompactString>) -> Self {
        Self {
            text: text.into(),
            source: SourceLocation::SYNTHETIC,
        }
    }
}

impl From<AtRule> for StyleNode {
    fn from(node: AtRule) -> Self {
        StyleNode::AtRule(node)
    }
}

impl From<QualifiedRule> for StyleNode {
    fn from(node: QualifiedRule) -> Self {
        StyleNode::Rule(node)
    }
}

impl From<Declaration> for StyleNode {
    fn from(node: Declaration) -> Self {
        StyleNode::Declaration(node)
    }
}

impl From<Comment> for StyleNode {
    fn from(node: Comment) -> Self {
        StyleNode::Comment(node)
    }
}

/// Root of one parsed style sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    /// Path of the file the tree was parsed from, if known
    pub file: Option<String>,
    pub nodes: Vec<StyleNode>,
}

impl StyleSheet {
    pub fn new(file: Option<&str>, nodes: Vec<StyleNode>) -> Self {
        Self {
            file: file.map(str::to_owned),
            nodes,
        }
    }

    /// Resolve a path to a node for mutation
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut StyleNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get_mut(*first as usize)?;
        for index in rest {
            node = node.children_mut()?.get_mut(*index as usize)?;
        }
        Some(node)
    }

    /// Resolve a path that must point at an at-rule
    pub fn at_rule_mut(&mut self, path: &NodePath) -> Option<&mut AtRule> {
        match self.get_mut(path)? {
            StyleNode::AtRule(rule) => Some(rule),
            _ => None,
        }
    }

    /// Visit every node in document order (pre-order) with its path
    pub fn walk<'s>(&'s self, mut f: impl FnMut(&NodePath, &'s StyleNode)) {
        let mut path = NodePath::root();
        walk_nodes(&self.nodes, &mut path, &mut f);
    }
}

fn walk_nodes<'s>(
    nodes: &'s [StyleNode],
    path: &mut NodePath,
    f: &mut impl FnMut(&NodePath, &'s StyleNode),
) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        f(path, node);
        walk_nodes(node.children(), path, f);
        path.pop();
    }
}
