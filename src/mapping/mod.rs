pub mod direct_mapping;
pub mod indexed_mapping;
pub mod sorted_keyed_mapping;

/// The common capability set of the four child-map layouts: keyed insertion
/// and removal, point lookup, and ordered enumeration via `next_key`.
pub trait NodeMapping<N, const NUM_CHILDREN: usize> {
    const NUM_CHILDREN: usize = NUM_CHILDREN;

    /// Adds a child under `key`. The mapping must not be full and `key` must
    /// not already be mapped.
    fn add_child(&mut self, key: u8, node: N);
    fn seek_child(&self, key: u8) -> Option<&N>;
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N>;
    fn delete_child(&mut self, key: u8) -> Option<N>;
    fn num_children(&self) -> usize;
    /// The smallest mapped key byte >= `lower_bound`.
    fn next_key(&self, lower_bound: u8) -> Option<u8>;
    fn width(&self) -> usize {
        Self::NUM_CHILDREN
    }
}
