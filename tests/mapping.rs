use voxgrid::{BoundingBox, Grid2, Grid3, GridBox};

#[test]
fn test_unit_grid_scenario() {
    // 2x2 grid, unit cells, origin at the world origin.
    let grid: Grid2<i32> = Grid2::new([2, 2], [1.0, 1.0], [0.0, 0.0]);
    assert_eq!(grid.grid_box(), GridBox::new([0, 0], [2, 2]));
    assert_eq!(grid.voxel_box(), GridBox::new([0, 0], [1, 1]));
    assert_eq!(grid.grid_to_world([1, 1]), [1.0, 1.0]);
}

#[test]
fn test_round_trip_over_the_whole_grid_box() {
    let grid: Grid3<u8> = Grid3::with_border([4, 5, 6], [0.25, 0.5, 1.5], [-2.0, 3.0, 0.5], 1);
    let mut visited = 0;
    grid.loop_coords(None, |coord| {
        let world = grid.grid_to_world(coord);
        assert_eq!(
            grid.world_to_grid(world),
            coord,
            "round trip failed at {:?}",
            coord
        );
        visited += 1;
    });
    assert_eq!(visited, 6 * 7 * 8);
}

#[test]
fn test_uniform_constructor() {
    let grid: Grid3<u8> = Grid3::uniform(8, 0.5, [1.0, 2.0, 3.0]);
    assert_eq!(grid.shape(), [8, 8, 8]);
    assert_eq!(grid.cell_size(), [0.5, 0.5, 0.5]);
    assert_eq!(grid.grid_to_world([8, 8, 8]), [5.0, 6.0, 7.0]);
}

#[test]
fn test_region_conversion_covers_and_round_trips() {
    let grid: Grid3<u8> = Grid3::new([10, 10, 10], [0.5, 1.0, 2.0], [0.0, 0.0, 0.0]);

    let world = BoundingBox::new([0.3, 0.7, 1.1], [1.6, 2.4, 5.9]);
    let gbox = grid.world_to_grid_box(world);
    let cover = grid.grid_to_world_box(gbox);
    for i in 0..3 {
        assert!(cover.v0[i] <= world.v0[i], "axis {} min not covered", i);
        assert!(cover.v1[i] >= world.v1[i], "axis {} max not covered", i);
    }

    // A box already on cell corners survives the round trip exactly.
    let aligned = GridBox::new([1, 2, 3], [4, 5, 5]);
    assert_eq!(grid.world_to_grid_box(grid.grid_to_world_box(aligned)), aligned);
}

#[test]
fn test_checked_mapping_guards_grid_boundaries() {
    let grid: Grid2<u8> = Grid2::with_border([2, 2], [1.0, 1.0], [0.0, 0.0], 1);
    // Border ring coordinates are valid...
    assert_eq!(grid.grid_to_world_checked([3, 3]), Some([3.0, 3.0]));
    // ...anything past them is not.
    assert_eq!(grid.grid_to_world_checked([4, 0]), None);
    assert_eq!(grid.grid_to_world_checked([0, -1]), None);
}

#[test]
fn test_position_lookup_and_clamping() {
    let mut grid: Grid2<i32> = Grid2::new([4, 4], [2.0, 2.0], [10.0, 10.0]);
    grid.set_cell([3, 1], 77);
    assert_eq!(*grid.cell_at([16.3, 11.8]), 77);

    // Clamping pulls an outside coordinate back onto the grid box.
    let outside = grid.world_to_grid([100.0, -100.0]);
    assert_eq!(grid.clamp_coord(outside), [4, 0]);
}

#[test]
fn test_voxel_membership_at_shared_corners() {
    let grid: Grid3<u8> = Grid3::new([2, 2, 2], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
    let corner = [1.0, 1.0, 1.0];
    // The shared corner belongs to all eight adjacent voxels.
    for x in 0..2 {
        for y in 0..2 {
            for z in 0..2 {
                assert!(grid.voxel_contains([x, y, z], corner));
            }
        }
    }
    // Inside the grid but not inside this particular voxel.
    assert!(!grid.voxel_contains([0, 0, 0], [1.5, 0.5, 0.5]));
}
