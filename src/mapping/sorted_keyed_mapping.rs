use crate::mapping::NodeMapping;
use crate::mapping::indexed_mapping::IndexedMapping;
use crate::utils::u8_keys::{
    find_insert_position_sorted, find_key_position_sorted, find_lower_bound_sorted,
};

/// Maps a key to a node using a pair of parallel arrays: keys kept in sorted
/// order and the corresponding children at the same positions. Insertion and
/// deletion shift the tail entries to preserve the order, which in turn makes
/// ordered enumeration and lower-bound seeks a matter of walking the array.
///
/// This is the layout of the two narrow node flavors (widths 4 and 16).
pub struct SortedKeyedMapping<N, const WIDTH: usize> {
    pub(crate) keys: [u8; WIDTH],
    pub(crate) children: [Option<N>; WIDTH],
    pub(crate) num_children: u8,
}

impl<N, const WIDTH: usize> Default for SortedKeyedMapping<N, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, const WIDTH: usize> SortedKeyedMapping<N, WIDTH> {
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: [255; WIDTH],
            children: [const { None }; WIDTH],
            num_children: 0,
        }
    }

    /// Copies the contents of a narrower mapping into a fresh wider one,
    /// consuming the old contents. The arrays stay sorted because they are
    /// copied in order.
    pub(crate) fn from_resized_grow<const OLD_WIDTH: usize>(
        km: &mut SortedKeyedMapping<N, OLD_WIDTH>,
    ) -> Self {
        debug_assert!(WIDTH > OLD_WIDTH);
        let mut new = Self::new();
        for i in 0..km.num_children as usize {
            new.keys[i] = km.keys[i];
            new.children[i] = km.children[i].take();
        }
        new.num_children = km.num_children;
        km.num_children = 0;
        new
    }

    /// Inverse of [`Self::from_resized_grow`]; the caller guarantees the
    /// remaining children fit the narrower width.
    pub(crate) fn from_resized_shrink<const OLD_WIDTH: usize>(
        km: &mut SortedKeyedMapping<N, OLD_WIDTH>,
    ) -> Self {
        debug_assert!(WIDTH < OLD_WIDTH);
        debug_assert!(km.num_children as usize <= WIDTH);
        let mut new = Self::new();
        for i in 0..km.num_children as usize {
            new.keys[i] = km.keys[i];
            new.children[i] = km.children[i].take();
        }
        new.num_children = km.num_children;
        km.num_children = 0;
        new
    }

    /// Builds a sorted mapping by draining an indexed mapping in ascending
    /// key order.
    pub(crate) fn from_indexed<const IDX_WIDTH: usize>(
        im: &mut IndexedMapping<N, IDX_WIDTH>,
    ) -> Self {
        debug_assert!(im.num_children() <= WIDTH);
        let mut new = Self::new();
        im.move_into(&mut new);
        new
    }

    /// Removes and returns the single remaining child and its key. Used when
    /// a node is collapsed into its only child.
    pub(crate) fn take_only_child(&mut self) -> (u8, N) {
        debug_assert_eq!(self.num_children, 1);
        self.num_children = 0;
        let child = self.children[0]
            .take()
            .expect("corruption: child count does not match occupancy");
        (self.keys[0], child)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.keys
            .iter()
            .zip(self.children.iter())
            .take(self.num_children as usize)
            .filter_map(|(k, c)| c.as_ref().map(|n| (*k, n)))
    }
}

impl<N, const WIDTH: usize> NodeMapping<N, WIDTH> for SortedKeyedMapping<N, WIDTH> {
    fn add_child(&mut self, key: u8, node: N) {
        let n = self.num_children as usize;
        debug_assert!(n < WIDTH);
        let idx = find_insert_position_sorted(key, &self.keys, n);
        for i in (idx..n).rev() {
            self.keys[i + 1] = self.keys[i];
            self.children[i + 1] = self.children[i].take();
        }
        self.keys[idx] = key;
        self.children[idx] = Some(node);
        self.num_children += 1;
    }

    fn seek_child(&self, key: u8) -> Option<&N> {
        let idx = find_key_position_sorted::<WIDTH>(key, &self.keys, self.num_children as usize)?;
        self.children[idx].as_ref()
    }

    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        let idx = find_key_position_sorted::<WIDTH>(key, &self.keys, self.num_children as usize)?;
        self.children[idx].as_mut()
    }

    fn delete_child(&mut self, key: u8) -> Option<N> {
        let n = self.num_children as usize;
        let idx = find_key_position_sorted::<WIDTH>(key, &self.keys, n)?;
        let node = self.children[idx].take();

        // Shift the tail left to close the gap.
        for i in idx..n - 1 {
            self.keys[i] = self.keys[i + 1];
            self.children[i] = self.children[i + 1].take();
        }
        self.keys[n - 1] = 255;
        self.num_children -= 1;

        node
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.num_children as usize
    }

    fn next_key(&self, lower_bound: u8) -> Option<u8> {
        find_lower_bound_sorted(lower_bound, &self.keys, self.num_children as usize)
            .map(|idx| self.keys[idx])
    }
}
