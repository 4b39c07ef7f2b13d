//! Prefix trie over code-point sequences
//!
//! Nodes live in an arena owned by the [`Trie`] and are addressed by
//! [`NodeId`]. Children are kept in an ordered map keyed by code point, so
//! the shape of the trie does not depend on insertion order.

use crate::error::{CoreError, Result};
use crate::literal::{Literal, LiteralSet};
use std::collections::BTreeMap;

/// Handle of a node inside its trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena, for side tables indexed by node
    pub fn index(self) -> usize {
        self.0
    }
}

/// One position in the prefix structure
#[derive(Debug, Clone, Default)]
pub struct Node {
    children: BTreeMap<u32, NodeId>,
    terminal: bool,
}

impl Node {
    /// Whether the path to this node is itself a complete literal
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Children in ascending code-point order
    pub fn children(&self) -> impl ExactSizeIterator<Item = (u32, NodeId)> + '_ {
        self.children.iter().map(|(&cp, &id)| (cp, id))
    }

    /// Number of distinct continuations
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether nothing continues from this node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Prefix-sharing set of literals
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Build a trie from a literal set
    pub fn from_set(set: &LiteralSet) -> Result<Self> {
        Self::build(set.iter())
    }

    /// Build a trie from arbitrary literals.
    ///
    /// The literals are sorted by descending code-point count (ties
    /// lexicographic) before insertion. Duplicates are absorbed.
    pub fn build<'a, I>(literals: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Literal>,
    {
        let mut ordered: Vec<&Literal> = literals.into_iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut trie = Self::new();
        for literal in ordered {
            trie.insert(literal)?;
        }
        Ok(trie)
    }

    /// Root handle
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Access a node
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Insert a literal, returning `true` if it was not already present.
    ///
    /// Fails with [`CoreError::InvalidInput`] on a zero-length literal.
    pub fn insert(&mut self, literal: &Literal) -> Result<bool> {
        if literal.is_empty() {
            return Err(CoreError::InvalidInput {
                reason: "zero-length literal".to_string(),
            });
        }

        let mut current = self.root();
        for &cp in literal.code_points() {
            current = match self.nodes[current.0].children.get(&cp) {
                Some(&next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(Node::default());
                    self.nodes[current.0].children.insert(cp, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if node.terminal {
            Ok(false)
        } else {
            node.terminal = true;
            self.len += 1;
            Ok(true)
        }
    }

    /// Whether `literal` was inserted
    pub fn contains(&self, literal: &Literal) -> bool {
        let mut current = self.root();
        for cp in literal.code_points() {
            match self.node(current).children.get(cp) {
                Some(&next) => current = next,
                None => return false,
            }
        }
        !literal.is_empty() && self.node(current).terminal
    }

    /// Number of literals stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no literal is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node handles ordered so that every child precedes its parent.
    ///
    /// A node is always allocated after its parent, so walking the arena
    /// backwards is a post-order.
    pub fn post_order(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).rev().map(NodeId)
    }

    /// Enumerate the stored literals in lexicographic order
    pub fn literals(&self) -> Vec<Literal> {
        let mut out = Vec::with_capacity(self.len);
        let mut path: Vec<u32> = Vec::new();

        // (node, path length above it, edge code point)
        let mut stack = vec![(self.root(), 0, None)];
        while let Some((id, depth, edge)) = stack.pop() {
            path.truncate(depth);
            if let Some(cp) = edge {
                path.push(cp);
            }
            let node = self.node(id);
            if node.terminal {
                out.push(Literal::from_code_points(path.clone()));
            }
            let depth = path.len();
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|(&cp, &child)| (child, depth, Some(cp))),
            );
        }
        out
    }
}
