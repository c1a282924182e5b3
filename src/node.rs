use crate::mapping::NodeMapping;
use crate::mapping::direct_mapping::DirectMapping;
use crate::mapping::indexed_mapping::IndexedMapping;
use crate::mapping::sorted_keyed_mapping::SortedKeyedMapping;
use crate::prefix::Prefix;

/// A tree node: a compressed path prefix, an optional value (present exactly
/// when the path down to this node spells a stored key), and a child map in
/// one of four layouts picked by fan-out.
///
/// A leaf is simply a node with no children; an interior node may or may not
/// carry a value of its own.
pub(crate) struct ArtNode<V> {
    pub(crate) prefix: Prefix,
    pub(crate) value: Option<V>,
    pub(crate) children: ChildMap<V>,
}

pub(crate) enum ChildMap<V> {
    Node4(SortedKeyedMapping<Box<ArtNode<V>>, 4>),
    Node16(SortedKeyedMapping<Box<ArtNode<V>>, 16>),
    Node48(IndexedMapping<Box<ArtNode<V>>, 48>),
    Node256(DirectMapping<Box<ArtNode<V>>>),
}

impl<V> ArtNode<V> {
    #[inline]
    pub(crate) fn new_leaf(prefix: Prefix, value: V) -> Self {
        Self {
            prefix,
            value: Some(value),
            children: ChildMap::Node4(SortedKeyedMapping::new()),
        }
    }

    #[inline]
    pub(crate) fn new_inner(prefix: Prefix) -> Self {
        Self {
            prefix,
            value: None,
            children: ChildMap::Node4(SortedKeyedMapping::new()),
        }
    }

    pub(crate) fn num_children(&self) -> usize {
        match &self.children {
            ChildMap::Node4(m) => m.num_children(),
            ChildMap::Node16(m) => m.num_children(),
            ChildMap::Node48(m) => m.num_children(),
            ChildMap::Node256(m) => m.num_children(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match &self.children {
            ChildMap::Node4(_) => 4,
            ChildMap::Node16(_) => 16,
            ChildMap::Node48(_) => 48,
            ChildMap::Node256(_) => 256,
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.num_children() == self.capacity()
    }

    /// True once the child count has dropped to the capacity of the
    /// next-smaller layout. The narrowest layout is never underfull; its
    /// one-child case is handled by collapsing into the child instead.
    fn is_underfull(&self) -> bool {
        match &self.children {
            ChildMap::Node4(_) => false,
            ChildMap::Node16(m) => m.num_children() <= 4,
            ChildMap::Node48(m) => m.num_children() <= 16,
            ChildMap::Node256(m) => m.num_children() <= 48,
        }
    }

    pub(crate) fn seek_child(&self, key: u8) -> Option<&ArtNode<V>> {
        match &self.children {
            ChildMap::Node4(m) => m.seek_child(key).map(|n| &**n),
            ChildMap::Node16(m) => m.seek_child(key).map(|n| &**n),
            ChildMap::Node48(m) => m.seek_child(key).map(|n| &**n),
            ChildMap::Node256(m) => m.seek_child(key).map(|n| &**n),
        }
    }

    pub(crate) fn seek_child_mut(&mut self, key: u8) -> Option<&mut ArtNode<V>> {
        match &mut self.children {
            ChildMap::Node4(m) => m.seek_child_mut(key).map(|n| &mut **n),
            ChildMap::Node16(m) => m.seek_child_mut(key).map(|n| &mut **n),
            ChildMap::Node48(m) => m.seek_child_mut(key).map(|n| &mut **n),
            ChildMap::Node256(m) => m.seek_child_mut(key).map(|n| &mut **n),
        }
    }

    /// Adds a child under `key`, growing to the next layout first when full.
    pub(crate) fn add_child(&mut self, key: u8, node: ArtNode<V>) {
        if self.is_full() {
            self.grow();
        }
        let node = Box::new(node);
        match &mut self.children {
            ChildMap::Node4(m) => m.add_child(key, node),
            ChildMap::Node16(m) => m.add_child(key, node),
            ChildMap::Node48(m) => m.add_child(key, node),
            ChildMap::Node256(m) => m.add_child(key, node),
        }
    }

    /// Removes the child under `key`, shrinking to the previous layout when
    /// the count falls to its capacity.
    pub(crate) fn delete_child(&mut self, key: u8) -> Option<Box<ArtNode<V>>> {
        let node = match &mut self.children {
            ChildMap::Node4(m) => m.delete_child(key),
            ChildMap::Node16(m) => m.delete_child(key),
            ChildMap::Node48(m) => m.delete_child(key),
            ChildMap::Node256(m) => m.delete_child(key),
        }?;
        if self.is_underfull() {
            self.shrink();
        }
        Some(node)
    }

    /// The smallest child key byte >= `lower_bound`.
    pub(crate) fn next_child_key(&self, lower_bound: u8) -> Option<u8> {
        match &self.children {
            ChildMap::Node4(m) => m.next_key(lower_bound),
            ChildMap::Node16(m) => m.next_key(lower_bound),
            ChildMap::Node48(m) => m.next_key(lower_bound),
            ChildMap::Node256(m) => m.next_key(lower_bound),
        }
    }

    /// The child with the smallest key byte >= `lower_bound`, with its key.
    pub(crate) fn next_child(&self, lower_bound: u8) -> Option<(u8, &ArtNode<V>)> {
        let key = self.next_child_key(lower_bound)?;
        let child = self
            .seek_child(key)
            .expect("corruption: next_child_key returned an unmapped byte");
        Some((key, child))
    }

    /// Detaches and returns the smallest-keyed child, without any layout
    /// shrinking. Used by the tree's iterative teardown.
    pub(crate) fn pop_child(&mut self) -> Option<Box<ArtNode<V>>> {
        let key = self.next_child_key(0)?;
        match &mut self.children {
            ChildMap::Node4(m) => m.delete_child(key),
            ChildMap::Node16(m) => m.delete_child(key),
            ChildMap::Node48(m) => m.delete_child(key),
            ChildMap::Node256(m) => m.delete_child(key),
        }
    }

    /// Merges this node with its only child: the child's contents replace
    /// this node's, and the prefixes are joined around the edge byte. Only
    /// legal on a valueless node with exactly one child.
    pub(crate) fn collapse_into_only_child(&mut self) {
        debug_assert!(self.value.is_none());
        debug_assert_eq!(self.num_children(), 1);
        let (edge, child) = match &mut self.children {
            ChildMap::Node4(m) => m.take_only_child(),
            // Wider layouts shrink to Node4 before they can reach one child.
            _ => unreachable!("one-child node in a wide layout"),
        };
        let child = *child;
        self.prefix = Prefix::join(&self.prefix, edge, &child.prefix);
        self.value = child.value;
        self.children = child.children;
    }

    /// Replaces the child map with the next-larger layout. Growing the
    /// widest layout is a programmer error.
    fn grow(&mut self) {
        match &mut self.children {
            ChildMap::Node4(m) => {
                self.children = ChildMap::Node16(SortedKeyedMapping::from_resized_grow(m));
            }
            ChildMap::Node16(m) => {
                self.children = ChildMap::Node48(IndexedMapping::from_sorted(m));
            }
            ChildMap::Node48(m) => {
                self.children = ChildMap::Node256(DirectMapping::from_indexed(m));
            }
            ChildMap::Node256(_) => unreachable!("grow on the widest layout"),
        }
    }

    /// Replaces the child map with the next-smaller layout. Shrinking the
    /// narrowest layout is a programmer error.
    fn shrink(&mut self) {
        match &mut self.children {
            ChildMap::Node4(_) => unreachable!("shrink on the narrowest layout"),
            ChildMap::Node16(m) => {
                self.children = ChildMap::Node4(SortedKeyedMapping::from_resized_shrink(m));
            }
            ChildMap::Node48(m) => {
                self.children = ChildMap::Node16(SortedKeyedMapping::from_indexed(m));
            }
            ChildMap::Node256(m) => {
                self.children = ChildMap::Node48(IndexedMapping::from_direct(m));
            }
        }
    }
}
