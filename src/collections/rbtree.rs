//! Node layer of a red-black tree.
//!
//! A red-black tree keeps itself approximately balanced by coloring every
//! node red or black and repairing color violations after each edit. Only
//! the node representation lives here; the rebalancing rotations that
//! consume it are out of scope.

/// The color of a [`RedBlackNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the opposite color.
    ///
    /// # Examples
    ///
    /// ```
    /// use fundamentals::collections::rbtree::Color;
    ///
    /// assert_eq!(Color::Red.flipped(), Color::Black);
    /// assert_eq!(Color::Black.flipped(), Color::Red);
    /// ```
    #[must_use]
    pub fn flipped(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A single key-value node of a red-black tree.
///
/// Rebalancing recolors nodes in place via [`flip_color`]; everything else
/// about a node is immutable after construction.
///
/// [`flip_color`]: RedBlackNode::flip_color
///
/// # Examples
///
/// ```
/// use fundamentals::collections::rbtree::{Color, RedBlackNode};
///
/// let mut node = RedBlackNode::new(2, "A", Color::Red);
/// assert!(node.is_red());
///
/// node.flip_color();
/// assert_eq!(node.color(), Color::Black);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedBlackNode<K, V> {
    key: K,
    value: V,
    color: Color,
}

impl<K, V> RedBlackNode<K, V> {
    /// Creates a node with the given key, payload and starting color.
    #[must_use]
    pub fn new(key: K, value: V, color: Color) -> Self {
        RedBlackNode { key, value, color }
    }

    /// Returns a reference to the node's key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the node's payload.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the node's current color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns `true` if the node is currently red.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Returns `true` if the node is currently black.
    #[must_use]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Switches the node to the opposite color.
    pub fn flip_color(&mut self) {
        self.color = self.color.flipped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_keeps_its_parts() {
        let node = RedBlackNode::new(2, "A", Color::Red);

        assert_eq!(*node.key(), 2);
        assert_eq!(*node.value(), "A");
        assert_eq!(node.color(), Color::Red);
        assert!(node.is_red());
        assert!(!node.is_black());
    }

    #[test]
    fn flip_color_toggles_and_round_trips() {
        let mut node = RedBlackNode::new(2, "A", Color::Red);

        node.flip_color();
        assert_eq!(node.color(), Color::Black);
        assert!(node.is_black());

        node.flip_color();
        assert_eq!(node.color(), Color::Red);
    }

    #[test]
    fn flipped_is_an_involution() {
        for color in [Color::Red, Color::Black] {
            assert_eq!(color.flipped().flipped(), color);
            assert_ne!(color.flipped(), color);
        }
    }
}
