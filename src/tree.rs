//! Coding tree construction.
//!
//! Each distinct character becomes a leaf weighted by its frequency. The
//! leaves are fed through a [`PriorityQueue`] ordered by frequency with the
//! highest frequency ranking first, and pairs are merged until a single
//! root remains. Merging the heaviest pair first departs from the textbook
//! minimum-first greedy rule, so the resulting code is decodable and
//! prefix-free but makes no minimum-redundancy claim.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::heap::PriorityQueue;

/// A node of the coding tree.
///
/// The tree is full by construction: every node is either a character
/// leaf or an internal merge point with exactly two children.
#[derive(Debug, Clone)]
pub enum Node {
    /// A leaf holding one input character and its occurrence count.
    Leaf {
        /// The character this leaf encodes.
        ch: char,
        /// Occurrence count in the filtered source text.
        freq: usize,
    },
    /// An internal merge point weighing the sum of its children.
    Internal {
        /// Combined frequency of the two subtrees.
        freq: usize,
        /// Subtree reached on a `'0'` bit.
        left: Box<Node>,
        /// Subtree reached on a `'1'` bit.
        right: Box<Node>,
    },
}

impl Node {
    /// The weight of this node: a leaf's count or an internal sum.
    pub fn freq(&self) -> usize {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for nodes with no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

// Nodes are ordered by frequency alone; equal frequencies compare equal
// regardless of shape, and ties surface in whatever order the heap holds
// them.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.freq() == other.freq()
    }
}

impl Eq for Node {}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq().cmp(&other.freq())
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the coding tree for a frequency table.
///
/// Returns `None` for an empty table. A table with one entry yields that
/// single leaf as the whole tree; otherwise the two highest-ranked nodes
/// are merged repeatedly, the first extraction becoming the left child,
/// until one root remains.
pub fn build_tree(frequencies: &HashMap<char, usize>) -> Option<Node> {
    let mut queue = PriorityQueue::with_capacity(frequencies.len());
    for (&ch, &freq) in frequencies {
        // The queue is sized to hold every leaf.
        let _ = queue.add(Node::Leaf { ch, freq });
    }

    while queue.size() > 1 {
        let Some(left) = queue.remove() else { break };
        let Some(right) = queue.remove() else { break };
        let merged = Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        };
        // Two extractions just freed room for the merge node.
        let _ = queue.add(merged);
    }

    queue.remove()
}
