//! Arena-backed red-black tree map implementation.
//!
//! Nodes live in a flat `Vec` arena and every structural link (`parent`,
//! `left`, `right`, root) is a [`NodeId`] handle into that arena. Slot zero
//! is the nil sentinel: it is always black, and the delete fixup may write
//! its parent link transiently, exactly like the classic sentinel
//! formulation of the algorithm.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Handle Definition
// =============================================================================

/// Handle of a node slot in the arena.
///
/// Slot zero is reserved for the nil sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct NodeId(usize);

/// The nil sentinel handle.
const NIL: NodeId = NodeId(0);

impl NodeId {
    #[inline]
    const fn is_nil(self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the red-black tree.
#[derive(Clone, Debug)]
struct Node {
    key: i64,
    payload: String,
    color: Color,
    parent: NodeId,
    left: NodeId,
    right: NodeId,
}

impl Node {
    /// Creates a new red node with all links pointing at the sentinel.
    const fn new_red(key: i64, payload: String) -> Self {
        Self {
            key,
            payload,
            color: Color::Red,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }

    /// Creates the nil sentinel occupying arena slot zero.
    ///
    /// The sentinel is always black; its key and payload are never read.
    const fn sentinel() -> Self {
        Self {
            key: 0,
            payload: String::new(),
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }
}

// =============================================================================
// Error Definition
// =============================================================================

/// Error returned when a requested key is not present in the map.
///
/// This is the single recoverable error of the tree core; it is reported by
/// [`RedBlackTreeMap::find`] and [`RedBlackTreeMap::remove`] and leaves the
/// map untouched.
///
/// # Examples
///
/// ```rust
/// use crimson::tree::{KeyNotFoundError, RedBlackTreeMap};
///
/// let map = RedBlackTreeMap::new();
/// assert_eq!(map.find(42), Err(KeyNotFoundError { key: 42 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFoundError {
    /// The key that was requested.
    pub key: i64,
}

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "key {} not found", self.key)
    }
}

impl std::error::Error for KeyNotFoundError {}

// =============================================================================
// RedBlackTreeMap Definition
// =============================================================================

/// An ordered map based on an arena-backed red-black tree.
///
/// `RedBlackTreeMap` keeps entries sorted by key and guarantees logarithmic
/// search, insertion, and removal through the usual red-black coloring
/// scheme. Unlike `std::collections::BTreeMap`, inserting an existing key
/// never overwrites: equal keys route to the right subtree and coexist, and
/// [`find`](Self::find) / [`remove`](Self::remove) resolve to the *first*
/// match on the search path from the root.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `find`     | O(log N)   |
/// | `insert`   | O(log N)   |
/// | `remove`   | O(log N)   |
/// | `iter`     | O(N)       |
/// | `clear`    | O(N)       |
/// | `len`      | O(1)       |
/// | `is_empty` | O(1)       |
///
/// # Examples
///
/// ```rust
/// use crimson::tree::RedBlackTreeMap;
///
/// let mut map = RedBlackTreeMap::new();
/// map.insert(3, "three");
/// map.insert(1, "one");
/// map.insert(2, "two");
///
/// // Ordered iteration
/// let keys: Vec<i64> = map.keys().collect();
/// assert_eq!(keys, vec![1, 2, 3]);
///
/// map.remove(2).unwrap();
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct RedBlackTreeMap {
    /// Node arena; slot zero is the nil sentinel
    nodes: Vec<Node>,
    /// Vacated arena slots available for reuse
    free_slots: Vec<NodeId>,
    /// Root handle (the sentinel when the map is empty)
    root: NodeId,
    /// Number of live entries
    length: usize,
}

impl RedBlackTreeMap {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let map = RedBlackTreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            free_slots: Vec::new(),
            root: NIL,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// Duplicate keys count once per inserted node.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    /// map.insert(1, "uno");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(1, "one");
    /// assert!(!map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Inserts a key-payload pair into the map.
    ///
    /// Insertion always succeeds and always creates a new node, even when
    /// the key is already present: the descent goes left on strictly
    /// smaller keys and right otherwise, so equal keys accumulate in the
    /// right subtree of the first occurrence. In-order position, not
    /// insertion order, disambiguates duplicates.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert
    /// * `payload` - The payload to associate with the key
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    /// map.insert(1, "uno");
    ///
    /// assert_eq!(map.len(), 2);
    /// let payloads: Vec<&str> = map.payloads().collect();
    /// assert_eq!(payloads, vec!["one", "uno"]);
    /// ```
    pub fn insert(&mut self, key: i64, payload: impl Into<String>) {
        let node = self.allocate(key, payload.into());

        let mut parent = NIL;
        let mut current = self.root;
        while !current.is_nil() {
            parent = current;
            current = if key < self.node(current).key {
                self.node(current).left
            } else {
                self.node(current).right
            };
        }

        self.node_mut(node).parent = parent;
        if parent.is_nil() {
            self.root = node;
        } else if key < self.node(parent).key {
            self.node_mut(parent).left = node;
        } else {
            self.node_mut(parent).right = node;
        }

        self.fix_insert(node);
        self.length += 1;
    }

    /// Returns the payload associated with the key.
    ///
    /// With duplicate keys, this resolves to the first match on the search
    /// path from the root.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the key is not present.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    ///
    /// assert_eq!(map.find(1), Ok("one"));
    /// assert!(map.find(2).is_err());
    /// ```
    pub fn find(&self, key: i64) -> Result<&str, KeyNotFoundError> {
        let node = self.find_node(key);
        if node.is_nil() {
            Err(KeyNotFoundError { key })
        } else {
            Ok(self.node(node).payload.as_str())
        }
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    ///
    /// assert!(map.contains_key(1));
    /// assert!(!map.contains_key(2));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: i64) -> bool {
        !self.find_node(key).is_nil()
    }

    /// Removes one entry matching the key.
    ///
    /// With duplicate keys, exactly one node is removed: the first match on
    /// the search path from the root. Remaining duplicates stay findable.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the key is not present; the map is
    /// left untouched in that case.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    ///
    /// assert!(map.remove(1).is_ok());
    /// assert!(map.remove(1).is_err());
    /// ```
    pub fn remove(&mut self, key: i64) -> Result<(), KeyNotFoundError> {
        let target = self.find_node(key);
        if target.is_nil() {
            return Err(KeyNotFoundError { key });
        }

        // `spliced_color` is the color physically removed from the
        // structure; losing a black node breaks the black-height invariant
        // and requires a fixup starting at `fixup_start`.
        let mut spliced_color = self.color(target);
        let fixup_start;

        if self.left(target).is_nil() {
            fixup_start = self.right(target);
            self.transplant(target, fixup_start);
        } else if self.right(target).is_nil() {
            fixup_start = self.left(target);
            self.transplant(target, fixup_start);
        } else {
            let successor = self.min_node(self.right(target));
            spliced_color = self.color(successor);
            fixup_start = self.right(successor);

            if self.parent(successor) == target {
                // Needed even when `fixup_start` is the sentinel, so the
                // fixup can walk back up from it.
                self.node_mut(fixup_start).parent = successor;
            } else {
                let successor_right = self.right(successor);
                self.transplant(successor, successor_right);
                let target_right = self.right(target);
                self.node_mut(successor).right = target_right;
                self.node_mut(target_right).parent = successor;
            }

            self.transplant(target, successor);
            let target_left = self.left(target);
            self.node_mut(successor).left = target_left;
            self.node_mut(target_left).parent = successor;
            let target_color = self.color(target);
            self.set_color(successor, target_color);
        }

        self.release(target);
        if spliced_color == Color::Black {
            self.fix_remove(fixup_start);
        }
        self.length -= 1;
        Ok(())
    }

    /// Removes every entry and resets the root.
    ///
    /// Safe to call on an already-empty map. With the arena representation
    /// this is a truncation back to the sentinel slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::sentinel();
        self.free_slots.clear();
        self.root = NIL;
        self.length = 0;
    }

    /// Returns an iterator over `(key, payload)` entries in ascending key
    /// order.
    ///
    /// Iteration does not mutate the map and may be restarted at will. The
    /// walk uses an explicit stack bounded by the tree height.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    ///
    /// let entries: Vec<(i64, &str)> = map.iter().collect();
    /// assert_eq!(entries, vec![(1, "one"), (2, "two")]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> RedBlackTreeMapIterator<'_> {
        RedBlackTreeMapIterator::new(self)
    }

    /// Returns an iterator over `(key, payload)` entries in ascending key
    /// order.
    ///
    /// Alias for [`iter`](Self::iter).
    #[must_use]
    pub fn entries(&self) -> RedBlackTreeMapIterator<'_> {
        self.iter()
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// Duplicate keys are yielded once per entry.
    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the payloads in ascending key order.
    pub fn payloads(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, payload)| payload)
    }

    /// Renders the physical tree shape as indented text.
    ///
    /// Each line shows one node in pre-order with an `L----`/`R----` branch
    /// marker and its color. This is a debugging aid only; it never mutates
    /// the map and the exact shape is not part of the logical contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crimson::tree::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    /// map.insert(3, "three");
    ///
    /// let rendered = map.render_structure();
    /// assert!(rendered.starts_with("Root  2: two(BLACK)"));
    /// ```
    #[must_use]
    pub fn render_structure(&self) -> String {
        if self.root.is_nil() {
            return String::from("Tree is empty.\n");
        }

        let mut output = String::new();
        self.render_node(self.root, "", Branch::Root, &mut output);
        output
    }

    // =========================================================================
    // Arena Accessors
    // =========================================================================

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn color(&self, id: NodeId) -> Color {
        self.nodes[id.0].color
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id.0].color = color;
    }

    fn swap_colors(&mut self, first: NodeId, second: NodeId) {
        let first_color = self.color(first);
        let second_color = self.color(second);
        self.set_color(first, second_color);
        self.set_color(second, first_color);
    }

    fn parent(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].parent
    }

    fn left(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].left
    }

    fn right(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].right
    }

    /// Takes a slot from the free list or grows the arena.
    fn allocate(&mut self, key: i64, payload: String) -> NodeId {
        if let Some(id) = self.free_slots.pop() {
            *self.node_mut(id) = Node::new_red(key, payload);
            id
        } else {
            self.nodes.push(Node::new_red(key, payload));
            NodeId(self.nodes.len() - 1)
        }
    }

    /// Returns a spliced-out slot to the free list.
    fn release(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.payload = String::new();
        node.parent = NIL;
        node.left = NIL;
        node.right = NIL;
        self.free_slots.push(id);
    }

    // =========================================================================
    // Search Helpers
    // =========================================================================

    /// BST descent; returns the first node matching the key on the search
    /// path, or the sentinel.
    fn find_node(&self, key: i64) -> NodeId {
        let mut current = self.root;
        while !current.is_nil() {
            let node = self.node(current);
            if node.key == key {
                break;
            }
            current = if node.key > key { node.left } else { node.right };
        }
        current
    }

    /// Leftmost node of the subtree rooted at `node`.
    fn min_node(&self, mut node: NodeId) -> NodeId {
        while !self.left(node).is_nil() {
            node = self.left(node);
        }
        node
    }

    // =========================================================================
    // Rotation and Transplant Primitives
    // =========================================================================

    /// Pivots `node`'s right child up, preserving BST order.
    fn rotate_left(&mut self, node: NodeId) {
        let child = self.right(node);
        let child_left = self.left(child);

        self.node_mut(node).right = child_left;
        if !child_left.is_nil() {
            self.node_mut(child_left).parent = node;
        }

        let parent = self.parent(node);
        self.node_mut(child).parent = parent;
        if parent.is_nil() {
            self.root = child;
        } else if node == self.left(parent) {
            self.node_mut(parent).left = child;
        } else {
            self.node_mut(parent).right = child;
        }

        self.node_mut(child).left = node;
        self.node_mut(node).parent = child;
    }

    /// Pivots `node`'s left child up, preserving BST order.
    fn rotate_right(&mut self, node: NodeId) {
        let child = self.left(node);
        let child_right = self.right(child);

        self.node_mut(node).left = child_right;
        if !child_right.is_nil() {
            self.node_mut(child_right).parent = node;
        }

        let parent = self.parent(node);
        self.node_mut(child).parent = parent;
        if parent.is_nil() {
            self.root = child;
        } else if node == self.left(parent) {
            self.node_mut(parent).left = child;
        } else {
            self.node_mut(parent).right = child;
        }

        self.node_mut(child).right = node;
        self.node_mut(node).parent = child;
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v`.
    ///
    /// Does not touch `u`'s former children; callers relink them first if
    /// needed. The sentinel's parent link is deliberately written when `v`
    /// is nil, so the delete fixup can walk back up from it.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        if parent.is_nil() {
            self.root = v;
        } else if u == self.left(parent) {
            self.node_mut(parent).left = v;
        } else {
            self.node_mut(parent).right = v;
        }
        self.node_mut(v).parent = parent;
    }

    // =========================================================================
    // Fixups
    // =========================================================================

    /// Restores the red-black invariants after attaching a red leaf.
    fn fix_insert(&mut self, mut node: NodeId) {
        while node != self.root
            && self.color(node) == Color::Red
            && self.color(self.parent(node)) == Color::Red
        {
            let mut parent = self.parent(node);
            let grandparent = self.parent(parent);

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);

                if self.color(uncle) == Color::Red {
                    self.set_color(grandparent, Color::Red);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    node = grandparent;
                } else {
                    if node == self.right(parent) {
                        self.rotate_left(parent);
                        node = parent;
                        parent = self.parent(node);
                    }

                    self.rotate_right(grandparent);
                    self.swap_colors(parent, grandparent);
                    node = parent;
                }
            } else {
                let uncle = self.left(grandparent);

                if self.color(uncle) == Color::Red {
                    self.set_color(grandparent, Color::Red);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    node = grandparent;
                } else {
                    if node == self.left(parent) {
                        self.rotate_right(parent);
                        node = parent;
                        parent = self.parent(node);
                    }

                    self.rotate_left(grandparent);
                    self.swap_colors(parent, grandparent);
                    node = parent;
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Restores the black-height invariant after splicing out a black node.
    ///
    /// `node` may be the sentinel; its parent link is valid at entry (see
    /// [`Self::transplant`]).
    fn fix_remove(&mut self, mut node: NodeId) {
        while node != self.root && self.color(node) == Color::Black {
            let parent = self.parent(node);

            if node == self.left(parent) {
                let mut sibling = self.right(parent);

                if self.color(sibling) == Color::Red {
                    self.swap_colors(sibling, parent);
                    self.rotate_left(parent);
                    sibling = self.right(parent);
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                } else {
                    if self.color(self.right(sibling)) == Color::Black {
                        let near = self.left(sibling);
                        self.swap_colors(near, sibling);
                        self.rotate_right(sibling);
                        sibling = self.right(parent);
                    }

                    self.swap_colors(sibling, parent);
                    let far = self.right(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    node = self.root;
                }
            } else {
                let mut sibling = self.left(parent);

                if self.color(sibling) == Color::Red {
                    self.swap_colors(sibling, parent);
                    self.rotate_right(parent);
                    sibling = self.left(parent);
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                } else {
                    if self.color(self.left(sibling)) == Color::Black {
                        let near = self.right(sibling);
                        self.swap_colors(near, sibling);
                        self.rotate_left(sibling);
                        sibling = self.left(parent);
                    }

                    self.swap_colors(sibling, parent);
                    let far = self.left(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    node = self.root;
                }
            }
        }

        self.set_color(node, Color::Black);
    }

    // =========================================================================
    // Rendering Helper
    // =========================================================================

    fn render_node(&self, node: NodeId, indent: &str, branch: Branch, output: &mut String) {
        if node.is_nil() {
            return;
        }

        output.push_str(indent);
        let child_indent = match branch {
            Branch::Root => {
                output.push_str("Root  ");
                format!("{indent}    ")
            }
            Branch::Left => {
                output.push_str("L----");
                format!("{indent}|  ")
            }
            Branch::Right => {
                output.push_str("R----");
                format!("{indent}   ")
            }
        };

        let entry = self.node(node);
        let color_name = match entry.color {
            Color::Red => "RED",
            Color::Black => "BLACK",
        };
        output.push_str(&format!("{}: {}({})\n", entry.key, entry.payload, color_name));

        self.render_node(entry.left, &child_indent, Branch::Left, output);
        self.render_node(entry.right, &child_indent, Branch::Right, output);
    }
}

/// Position of a node relative to its parent in the rendered dump.
#[derive(Clone, Copy)]
enum Branch {
    Root,
    Left,
    Right,
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// Borrowing in-order iterator over `(key, payload)` entries.
pub struct RedBlackTreeMapIterator<'a> {
    map: &'a RedBlackTreeMap,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> RedBlackTreeMapIterator<'a> {
    fn new(map: &'a RedBlackTreeMap) -> Self {
        let mut iterator = Self {
            map,
            stack: Vec::new(),
            remaining: map.len(),
        };
        iterator.push_left_spine(map.root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: NodeId) {
        while !node.is_nil() {
            self.stack.push(node);
            node = self.map.node(node).left;
        }
    }
}

impl<'a> Iterator for RedBlackTreeMapIterator<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let map = self.map;
        let node = map.node(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some((node.key, node.payload.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RedBlackTreeMapIterator<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// Owning in-order iterator over `(key, payload)` entries.
pub struct RedBlackTreeMapIntoIterator {
    entries: std::vec::IntoIter<(i64, String)>,
}

impl Iterator for RedBlackTreeMapIntoIterator {
    type Item = (i64, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for RedBlackTreeMapIntoIterator {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Default for RedBlackTreeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Into<String>> FromIterator<(i64, P)> for RedBlackTreeMap {
    fn from_iter<I: IntoIterator<Item = (i64, P)>>(iterable: I) -> Self {
        let mut map = Self::new();
        map.extend(iterable);
        map
    }
}

impl<P: Into<String>> Extend<(i64, P)> for RedBlackTreeMap {
    fn extend<I: IntoIterator<Item = (i64, P)>>(&mut self, iterable: I) {
        for (key, payload) in iterable {
            self.insert(key, payload);
        }
    }
}

impl IntoIterator for RedBlackTreeMap {
    type Item = (i64, String);
    type IntoIter = RedBlackTreeMapIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        let entries: Vec<(i64, String)> = self
            .iter()
            .map(|(key, payload)| (key, payload.to_owned()))
            .collect();
        RedBlackTreeMapIntoIterator {
            entries: entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a RedBlackTreeMap {
    type Item = (i64, &'a str);
    type IntoIter = RedBlackTreeMapIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for RedBlackTreeMap {
    /// Maps are equal when their ascending entry sequences are equal;
    /// physical tree shape is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl Eq for RedBlackTreeMap {}

impl Hash for RedBlackTreeMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for (key, payload) in self.iter() {
            key.hash(state);
            payload.hash(state);
        }
    }
}

impl fmt::Debug for RedBlackTreeMap {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for RedBlackTreeMap {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, payload)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {payload}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(RedBlackTreeMap: Send, Sync, Clone);

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for RedBlackTreeMap {
    /// Serializes as a sequence of `(key, payload)` pairs in ascending key
    /// order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            sequence.serialize_element(&entry)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeMapVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RedBlackTreeMapVisitor {
    type Value = RedBlackTreeMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of (key, payload) pairs")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut map = RedBlackTreeMap::new();
        while let Some((key, payload)) = access.next_element::<(i64, String)>()? {
            map.insert(key, payload);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RedBlackTreeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeMapVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
