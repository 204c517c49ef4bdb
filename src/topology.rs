/// Corner-offset and edge-pair table describing one unit cell of a grid.
///
/// The table is supplied by the consumer (e.g. a surface-extraction module):
/// 4 corners / 4 edges for 2D, 8 corners / 12 edges for 3D. Offsets are
/// relative to the cell's low corner and each edge names two indices into
/// the corner table. The grid only reads the table; it does not define or
/// own the data.
#[derive(Clone, Debug)]
pub struct VoxelTopology<const D: usize> {
    pub corner_offsets: Vec<[i32; D]>,
    pub edges: Vec<[usize; 2]>,
}

impl<const D: usize> VoxelTopology<D> {
    /// # Panics
    ///
    /// Panics when an edge references a corner index outside the table.
    pub fn new(corner_offsets: Vec<[i32; D]>, edges: Vec<[usize; 2]>) -> Self {
        for (i, &[a, b]) in edges.iter().enumerate() {
            assert!(
                a < corner_offsets.len() && b < corner_offsets.len(),
                "edge {} references a corner outside the table ({} corners)",
                i,
                corner_offsets.len()
            );
        }
        Self {
            corner_offsets,
            edges,
        }
    }

    pub fn corner_count(&self) -> usize {
        self.corner_offsets.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_table() {
        let topo = VoxelTopology::new(
            vec![[0, 0], [1, 0], [1, 1], [0, 1]],
            vec![[0, 1], [1, 2], [3, 2], [0, 3]],
        );
        assert_eq!(topo.corner_count(), 4);
        assert_eq!(topo.edge_count(), 4);
    }

    #[test]
    #[should_panic(expected = "outside the table")]
    fn test_edge_referencing_missing_corner_panics() {
        VoxelTopology::new(vec![[0, 0], [1, 0]], vec![[0, 2]]);
    }
}
