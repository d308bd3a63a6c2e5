//! # Singly Linked List
//!
//! An ordered chain of [`Node`]s starting at `head`. Nodes live in an
//! [`Arena`] and link to their successor by id, so the list never holds a
//! raw pointer and never needs `Rc<RefCell<_>>`.
//!
//! Every read, search and removal is a specialization of [`LinkedList::walk`],
//! which visits nodes from head to tail and stops at the first
//! [`ControlFlow::Break`].
//!
//! Index operations come in two flavours:
//!
//! - permissive (`at`, `insert_at`, `remove_at`): an out-of-range index yields
//!   `None` or does nothing, and never panics;
//! - checked (`try_at`, `try_insert_at`, `try_remove_at`): the same operations
//!   returning [`ListError::IndexOutOfBounds`].
//!
//! ```
//! use singly_linked::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.prepend(0);
//!
//! assert_eq!(list.to_string(), "( 0 ) -> ( 1 ) -> ( 2 ) -> ( null )");
//! assert_eq!(list.at(1), Some(&1));
//! assert_eq!(list.at(5), None);
//! ```

use std::fmt;
use std::ops::ControlFlow;

use list_common::{Arena, write_chain};
use log::{debug, trace};

use crate::error::ListError;
use crate::node::{Node, NodeId};

pub struct LinkedList<T> {
    head: Option<NodeId<T>>,
    nodes: Arena<Node<T>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            nodes: Arena::new(),
        }
    }

    /// O(1): only looks at `head`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First node of the chain.
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|id| self.nodes.get(id))
    }

    /// Follows `node`'s link to its successor in this list.
    ///
    /// ```
    /// use singly_linked::LinkedList;
    ///
    /// let list: LinkedList<_> = ["a", "b"].into_iter().collect();
    /// let head = list.head().unwrap();
    /// let second = list.next_node(head).unwrap();
    /// assert_eq!(second.value(), &"b");
    /// assert!(list.next_node(second).is_none());
    /// ```
    #[must_use]
    pub fn next_node(&self, node: &Node<T>) -> Option<&Node<T>> {
        node.next.and_then(|id| self.nodes.try_get(id))
    }

    /// Visits nodes from head to tail, passing each node's position and id.
    ///
    /// Stops at the first `Break(r)` and returns `Some(r)`; returns `None`
    /// when the chain is exhausted. The visitor is never called on an empty
    /// list.
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use singly_linked::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=5).collect();
    /// let first_even = list.walk(|position, _, node| {
    ///     if node.value() % 2 == 0 {
    ///         ControlFlow::Break(position)
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    /// assert_eq!(first_even, Some(1));
    /// ```
    pub fn walk<R, F>(&self, mut visitor: F) -> Option<R>
    where
        F: FnMut(usize, NodeId<T>, &Node<T>) -> ControlFlow<R>,
    {
        let mut cursor = self.head;
        let mut position = 0;
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            if let ControlFlow::Break(found) = visitor(position, id, node) {
                return Some(found);
            }
            cursor = node.next;
            position += 1;
        }
        None
    }

    /// Number of nodes, counted by walking the chain.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _, _| {
            count += 1;
            ControlFlow::<()>::Continue(())
        });
        count
    }

    fn id_at(&self, index: usize) -> Option<NodeId<T>> {
        self.walk(|position, id, _| {
            if position == index {
                ControlFlow::Break(id)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    fn last_id(&self) -> Option<NodeId<T>> {
        self.walk(|_, id, node| match node.next {
            None => ControlFlow::Break(id),
            Some(_) => ControlFlow::Continue(()),
        })
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            size: self.size(),
        }
    }

    /// Node at `index`, or `None` if `index >= size`.
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<&Node<T>> {
        self.id_at(index).map(|id| self.nodes.get(id))
    }

    /// Value at `index`, or `None` if `index >= size`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(Node::value)
    }

    pub fn try_at(&self, index: usize) -> Result<&T, ListError> {
        self.at(index).ok_or_else(|| self.out_of_bounds(index))
    }

    /// Value of the last node.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.last_id().map(|id| self.nodes.get(id).value())
    }

    pub fn append(&mut self, value: T) {
        let id = self.nodes.alloc(Node::new(value));
        match self.last_id() {
            None => self.head = Some(id),
            Some(last) => self.nodes.get_mut(last).next = Some(id),
        }
        trace!("appended node {}", id.index());
    }

    pub fn prepend(&mut self, value: T) {
        let mut node = Node::new(value);
        node.next = self.head;
        let id = self.nodes.alloc(node);
        self.head = Some(id);
        trace!("prepended node {}", id.index());
    }

    /// Unlinks the last node and returns its value.
    pub fn pop(&mut self) -> Option<T> {
        let mut previous = None;
        let (previous, last) = self.walk(|_, id, node| match node.next {
            None => ControlFlow::Break((previous, id)),
            Some(_) => {
                previous = Some(id);
                ControlFlow::Continue(())
            }
        })?;

        match previous {
            None => self.head = None,
            Some(previous) => self.nodes.get_mut(previous).next = None,
        }
        trace!("popped node {}", last.index());
        self.nodes.remove(last).map(Node::into_value)
    }

    /// Inserts `value` so that it ends up at `index`, shifting later nodes
    /// back by one. Valid indices are `0..=size`.
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }

        let Some(previous) = self.id_at(index - 1) else {
            return Err(self.out_of_bounds(index));
        };
        let mut node = Node::new(value);
        node.next = self.nodes.get(previous).next;
        let id = self.nodes.alloc(node);
        self.nodes.get_mut(previous).next = Some(id);
        trace!("inserted node {} at {index}", id.index());
        Ok(())
    }

    /// Like [`try_insert_at`](Self::try_insert_at), but an index past the end
    /// leaves the list untouched and drops `value`.
    pub fn insert_at(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert_at(index, value) {
            debug!("insert_at ignored: {err}");
        }
    }

    /// Unlinks the node at `index` and returns its value. Valid indices are
    /// `0..size`; removing the last node goes through [`pop`](Self::pop).
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index == 0 {
            let head = self.head.ok_or_else(|| self.out_of_bounds(index))?;
            let removed = self.nodes.remove(head).ok_or_else(|| self.out_of_bounds(index))?;
            self.head = removed.next;
            trace!("removed head node {}", head.index());
            return Ok(removed.into_value());
        }

        let target = self
            .id_at(index - 1)
            .and_then(|previous| self.nodes.get(previous).next.map(|id| (previous, id)));
        let Some((previous, target)) = target else {
            return Err(self.out_of_bounds(index));
        };

        if self.nodes.get(target).next.is_none() {
            return self.pop().ok_or_else(|| self.out_of_bounds(index));
        }

        let removed = self
            .nodes
            .remove(target)
            .ok_or_else(|| self.out_of_bounds(index))?;
        self.nodes.get_mut(previous).next = removed.next;
        trace!("removed node {} at {index}", target.index());
        Ok(removed.into_value())
    }

    /// Like [`try_remove_at`](Self::try_remove_at), but an out-of-range index
    /// returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.try_remove_at(index)
            .inspect_err(|err| debug!("remove_at ignored: {err}"))
            .ok()
    }

    /// Values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// True if any node holds a value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.walk(|_, _, node| {
            if node.value() == value {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_some()
    }

    /// Position of the first node equal to `value`, scanning from head.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.walk(|position, _, node| {
            if node.value() == value {
                ControlFlow::Break(position)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

/// Iterator over a list's values, head to tail.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeId<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?);
        self.cursor = node.next;
        Some(node.value())
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

/// `( v1 ) -> ( v2 ) -> ( null )`; an empty list renders as `( null )`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
