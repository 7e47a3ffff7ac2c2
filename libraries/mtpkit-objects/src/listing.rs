//! Listing materialization
//!
//! Native enumeration calls hand back their results as linked chains:
//! flat listings link through `next`, folder listings through `sibling`
//! with a `child` link descending one level. This module turns either
//! shape into an owned, ordered collection, preserving source order and
//! transferring ownership of every node.

use crate::types::Folder;

/// A linked enumeration node that can be split into its object and the
/// rest of the chain
pub trait Linked: Sized {
    /// The owned object each node carries
    type Object;

    /// Detach this node's object and hand back the remainder of the chain
    fn into_parts(self) -> (Self::Object, Option<Self>);
}

/// A node in a flat, `next`-linked listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNode<T> {
    /// The object this node carries
    pub object: T,
    /// The rest of the chain
    pub next: Option<Box<ChainNode<T>>>,
}

impl<T> ChainNode<T> {
    /// Create a terminal node
    pub fn new(object: T) -> Self {
        Self { object, next: None }
    }

    /// Build a chain from objects in order; empty input yields no chain
    pub fn from_objects<I>(objects: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head: Option<Box<ChainNode<T>>> = None;
        let collected: Vec<T> = objects.into_iter().collect();
        for object in collected.into_iter().rev() {
            head = Some(Box::new(ChainNode { object, next: head }));
        }
        head.map(|node| *node)
    }
}

impl<T> Linked for ChainNode<T> {
    type Object = T;

    fn into_parts(self) -> (T, Option<Self>) {
        (self.object, self.next.map(|node| *node))
    }
}

/// A node in a folder listing.
///
/// Folder enumerations come back as a forest: `sibling` links nodes at
/// the same level, `child` descends. Materializing walks the sibling
/// chain only; each yielded node keeps its subtree attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// The folder record this node carries
    pub folder: Folder,
    /// Next folder at the same level
    pub sibling: Option<Box<FolderNode>>,
    /// First folder one level down
    pub child: Option<Box<FolderNode>>,
}

impl FolderNode {
    /// Create a leaf node
    pub fn new(folder: Folder) -> Self {
        Self {
            folder,
            sibling: None,
            child: None,
        }
    }

    /// Split this node into its folder record and its materialized
    /// children (one level down, in sibling order)
    pub fn into_children(self) -> (Folder, Vec<FolderNode>) {
        let children = materialize(self.child.map(|node| *node));
        (self.folder, children)
    }
}

impl Linked for FolderNode {
    type Object = FolderNode;

    fn into_parts(mut self) -> (FolderNode, Option<FolderNode>) {
        let sibling = self.sibling.take().map(|node| *node);
        (self, sibling)
    }
}

/// Materialize a chain into an owned collection.
///
/// A `None` head is the "no items" case and yields an empty collection.
pub fn materialize<N: Linked>(head: Option<N>) -> Vec<N::Object> {
    let mut objects = Vec::new();
    let mut current = head;
    while let Some(node) = current {
        let (object, next) = node.into_parts();
        objects.push(object);
        current = next;
    }
    objects
}

/// Materialize a fallible enumeration result.
///
/// `Ok(None)` ("no items") becomes an empty collection, distinct from
/// `Err`, which propagates the enumeration failure untouched.
pub fn try_materialize<N: Linked, E>(
    source: std::result::Result<Option<N>, E>,
) -> std::result::Result<Vec<N::Object>, E> {
    source.map(|head| materialize(head))
}
