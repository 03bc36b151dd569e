//! Child-index paths addressing nodes in a [`StyleSheet`](crate::ast::StyleSheet).

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Sequence of child indices from the root to a node.
///
/// `[1, 0]` is the first child of the second top-level node. The empty path
/// denotes the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(SmallVec<[u32; 8]>);

impl NodePath {
    #[inline]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        Self(indices.into_iter().collect())
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn push(&mut self, index: usize) {
        self.0.push(index as u32);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop().map(|i| i as usize)
    }

    /// Path of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(index);
        path
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
