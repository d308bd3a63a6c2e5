//! Storage cell of a singly linked list.

use list_common::ArenaId;

/// Id of a [`Node`] inside its list's arena.
pub type NodeId<T> = ArenaId<Node<T>>;

/// One value and the link to the cell after it.
///
/// ```
/// use singly_linked::Node;
///
/// let node = Node::new("a");
/// assert_eq!(node.value(), &"a");
/// assert!(node.next().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    value: T,
    pub(crate) next: Option<NodeId<T>>,
}

impl<T> Node<T> {
    /// Creates an unlinked node.
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Id of the successor, or `None` for the last node of a chain.
    pub fn next(&self) -> Option<NodeId<T>> {
        self.next
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
