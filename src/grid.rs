use crate::bounds::{BoundingBox, GridBox};
use crate::topology::VoxelTopology;
use rayon::prelude::*;

/// Callback invoked with the coordinate of a mutated cell.
pub type ChangeHook<const D: usize> = Box<dyn Fn([i32; D]) + Send + Sync>;

/// A dense axis-aligned grid of cells, addressable by integer grid
/// coordinate and by continuous world position.
///
/// The grid owns a flat cell buffer sized `shape[i] + border + 1` per axis,
/// fixed at construction. `border` adds one extra ring of cells beyond the
/// logical extent, used for dual-grid/corner sampling. World positions map
/// to coordinates through a per-axis affine transform (`origin`,
/// `cell_size`), which supports non-uniform cell sizes.
///
/// Cells are stored first-axis-fastest, matching the canonical iteration
/// order of [`Grid::loop_coords`].
pub struct Grid<C, const D: usize> {
    shape: [i32; D],
    cell_size: [f64; D],
    origin: [f64; D],
    border: i32,
    dims: [usize; D],
    cells: Vec<C>,
    on_changed: Option<ChangeHook<D>>,
}

/// A two-axis [`Grid`].
pub type Grid2<C> = Grid<C, 2>;
/// A three-axis [`Grid`].
pub type Grid3<C> = Grid<C, 3>;

impl<C: Default, const D: usize> Grid<C, D> {
    /// Creates a grid with no border ring; all cells start at `C::default()`.
    pub fn new(shape: [i32; D], cell_size: [f64; D], origin: [f64; D]) -> Self {
        Self::with_border(shape, cell_size, origin, 0)
    }

    /// Creates a grid with an extra `border` ring of cells past the logical
    /// extent on every axis.
    ///
    /// # Panics
    ///
    /// Panics on a negative extent or border. A non-positive cell size is
    /// rejected in debug builds; in release it produces a degenerate
    /// mapping rather than an error.
    pub fn with_border(
        shape: [i32; D],
        cell_size: [f64; D],
        origin: [f64; D],
        border: i32,
    ) -> Self {
        for i in 0..D {
            assert!(shape[i] >= 0, "grid extent must be non-negative on axis {}", i);
            debug_assert!(
                cell_size[i] > 0.0,
                "cell size must be positive on axis {}",
                i
            );
        }
        assert!(border >= 0, "border width must be non-negative");

        let dims: [usize; D] = std::array::from_fn(|i| (shape[i] + border + 1) as usize);
        let len = dims.iter().product();
        let cells = std::iter::repeat_with(C::default).take(len).collect();

        Self {
            shape,
            cell_size,
            origin,
            border,
            dims,
            cells,
            on_changed: None,
        }
    }

    /// Convenience constructor with the same extent and cell size on every
    /// axis.
    pub fn uniform(extent: i32, cell_size: f64, origin: [f64; D]) -> Self {
        Self::with_border([extent; D], [cell_size; D], origin, 0)
    }

    /// Creates a grid and runs `init` over every coordinate in
    /// `[0, shape[i]]` per axis, storing the returned cell values.
    ///
    /// The initializer pass deliberately does not cover the extra border
    /// ring; border cells keep `C::default()`.
    pub fn init_with(
        shape: [i32; D],
        cell_size: [f64; D],
        origin: [f64; D],
        border: i32,
        mut init: impl FnMut(&Self, [i32; D]) -> C,
    ) -> Self {
        let mut grid = Self::with_border(shape, cell_size, origin, border);
        let inner = GridBox::new([0; D], shape);
        for_each_coord(&inner, |coord| {
            let value = init(&grid, coord);
            let idx = grid.index(coord);
            grid.cells[idx] = value;
        });
        grid
    }
}

impl<C, const D: usize> Grid<C, D> {
    /// Per-axis logical extent, excluding the border ring.
    pub fn shape(&self) -> [i32; D] {
        self.shape
    }

    /// Per-axis world-space cell size.
    pub fn cell_size(&self) -> [f64; D] {
        self.cell_size
    }

    /// World-space position of grid coordinate `[0; D]`.
    pub fn origin(&self) -> [f64; D] {
        self.origin
    }

    /// Width of the extra cell ring past the logical extent.
    pub fn border(&self) -> i32 {
        self.border
    }

    /// The full cell buffer, in first-axis-fastest order.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Largest per-axis cell size.
    pub fn max_cell_side(&self) -> f64 {
        self.cell_size
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    // --- Coordinate mapping -------------------------------------------

    /// Nearest grid coordinate for a world position, per axis
    /// `round((pos - origin) / cell_size)`.
    pub fn world_to_grid(&self, pos: [f64; D]) -> [i32; D] {
        std::array::from_fn(|i| ((pos[i] - self.origin[i]) / self.cell_size[i]).round() as i32)
    }

    /// Conservative grid coordinate for a region boundary: floor when
    /// mapping a minimum corner (`round_up = false`), ceil for a maximum
    /// corner, so the resulting integer range fully covers the source
    /// world-space range.
    pub fn world_to_grid_outer(&self, pos: [f64; D], round_up: bool) -> [i32; D] {
        std::array::from_fn(|i| {
            let t = (pos[i] - self.origin[i]) / self.cell_size[i];
            if round_up {
                t.ceil() as i32
            } else {
                t.floor() as i32
            }
        })
    }

    /// World position of a grid coordinate, per axis
    /// `origin + coord * cell_size`.
    pub fn grid_to_world(&self, coord: [i32; D]) -> [f64; D] {
        std::array::from_fn(|i| self.origin[i] + coord[i] as f64 * self.cell_size[i])
    }

    /// World position of a coordinate, or `None` when the coordinate lies
    /// outside [`Grid::grid_box`]. Guards downstream geometry from
    /// producing spurious positions at grid boundaries.
    pub fn grid_to_world_checked(&self, coord: [i32; D]) -> Option<[f64; D]> {
        if self.grid_box().contains(coord, true) {
            Some(self.grid_to_world(coord))
        } else {
            None
        }
    }

    /// Maps a grid-space box to world space by mapping both corners.
    pub fn grid_to_world_box(&self, gbox: GridBox<D>) -> BoundingBox<D> {
        BoundingBox::new(self.grid_to_world(gbox.v0), self.grid_to_world(gbox.v1))
    }

    /// Maps a world-space box to the smallest covering grid-space box:
    /// floor the minimum corner, ceil the maximum corner.
    pub fn world_to_grid_box(&self, bbox: BoundingBox<D>) -> GridBox<D> {
        GridBox::new(
            self.world_to_grid_outer(bbox.v0, false),
            self.world_to_grid_outer(bbox.v1, true),
        )
    }

    /// Clamps a coordinate into the addressable range
    /// `[0, shape + border]` per axis.
    pub fn clamp_coord(&self, coord: [i32; D]) -> [i32; D] {
        std::array::from_fn(|i| coord[i].clamp(0, self.shape[i] + self.border))
    }

    // --- Derived regions ----------------------------------------------

    /// The full addressable coordinate range, `[0, shape + border]` per
    /// axis, border ring included.
    pub fn grid_box(&self) -> GridBox<D> {
        GridBox::new([0; D], std::array::from_fn(|i| self.shape[i] + self.border))
    }

    /// One less than [`Grid::grid_box`] on the maximum corner: the range of
    /// coordinates usable as the low corner of a unit cell of grid corners.
    /// The last ring of coordinates has no `+1` neighbour.
    pub fn voxel_box(&self) -> GridBox<D> {
        GridBox::new(
            [0; D],
            std::array::from_fn(|i| self.shape[i] + self.border - 1),
        )
    }

    // --- Cell access --------------------------------------------------

    fn index(&self, coord: [i32; D]) -> usize {
        let mut idx = 0;
        let mut stride = 1;
        for i in 0..D {
            debug_assert!(
                coord[i] >= 0 && (coord[i] as usize) < self.dims[i],
                "coordinate {:?} outside allocated cells on axis {}",
                coord,
                i
            );
            idx += coord[i] as usize * stride;
            stride *= self.dims[i];
        }
        idx
    }

    /// Direct cell lookup.
    ///
    /// # Panics
    ///
    /// Aborts on a coordinate outside the allocated buffer; per-axis checks
    /// run in debug builds, release builds keep the flat buffer check.
    pub fn cell(&self, coord: [i32; D]) -> &C {
        &self.cells[self.index(coord)]
    }

    /// Cell lookup by world position via the nearest grid coordinate.
    ///
    /// Positions outside the grid map to out-of-range coordinates and
    /// panic; callers must guard (e.g. clip against
    /// `grid_to_world_box(grid_box())` first) or clamp.
    pub fn cell_at(&self, pos: [f64; D]) -> &C {
        self.cell(self.world_to_grid(pos))
    }

    /// Writes a cell, then synchronously invokes the registered change
    /// hook with the coordinate (notify-after-write).
    pub fn set_cell(&mut self, coord: [i32; D], value: C) {
        let idx = self.index(coord);
        self.cells[idx] = value;
        self.notify_changed(coord);
    }

    /// Writes the cell nearest to a world position; same guarding caveat
    /// as [`Grid::cell_at`].
    pub fn set_cell_at(&mut self, pos: [f64; D], value: C) {
        self.set_cell(self.world_to_grid(pos), value);
    }

    /// Re-fires the change hook for a coordinate without writing, e.g.
    /// after mutating a cell's interior through shared payload state.
    pub fn notify_changed(&self, coord: [i32; D]) {
        if let Some(hook) = &self.on_changed {
            hook(coord);
        }
    }

    /// Registers the change callback. A single callback is kept; the hook
    /// fires synchronously from [`Grid::set_cell`] and
    /// [`Grid::notify_changed`] on the calling thread. Hooks fired from
    /// inside [`Grid::par_loop_coords`] callbacks run unsynchronized and
    /// must be reentrant-safe.
    pub fn on_cell_changed(&mut self, hook: impl Fn([i32; D]) + Send + Sync + 'static) {
        self.on_changed = Some(Box::new(hook));
    }

    // --- Iteration ----------------------------------------------------

    fn clipped_span(&self, region: Option<GridBox<D>>) -> Option<GridBox<D>> {
        match region {
            None => Some(self.grid_box()),
            Some(r) => GridBox::intersection(r, self.grid_box()),
        }
    }

    /// The coordinates an iteration over `region` would visit, in
    /// canonical order. A provided region is intersected with
    /// [`Grid::grid_box`] first; an empty intersection yields an empty
    /// list.
    pub fn coords_in(&self, region: Option<GridBox<D>>) -> Vec<[i32; D]> {
        let Some(span) = self.clipped_span(region) else {
            return Vec::new();
        };
        let mut coords = Vec::with_capacity(span_len(&span));
        for_each_coord(&span, |coord| coords.push(coord));
        coords
    }

    /// Visits every coordinate in the (possibly clipped) range, last axis
    /// slowest and first axis fastest, on the calling thread. A region
    /// entirely outside the grid is a no-op, not an error. Capture the
    /// grid in the closure when the callback needs it.
    pub fn loop_coords(&self, region: Option<GridBox<D>>, mut f: impl FnMut([i32; D])) {
        let Some(span) = self.clipped_span(region) else {
            return;
        };
        for_each_coord(&span, &mut f);
    }

    /// Parallel counterpart of [`Grid::loop_coords`]: the same coordinate
    /// range is materialized and the callback fanned out over the rayon
    /// pool, in no defined order and with no synchronization between
    /// invocations.
    ///
    /// The grid performs no locking. Each invocation must touch only the
    /// coordinate it was given (or otherwise externally synchronize);
    /// writing cells from workers requires an interior-mutability payload
    /// such as an atomic. Blocks until every invocation completes.
    pub fn par_loop_coords(&self, region: Option<GridBox<D>>, f: impl Fn([i32; D]) + Send + Sync) {
        let coords = self.coords_in(region);
        coords.into_par_iter().for_each(f);
    }

    // --- Voxel queries ------------------------------------------------

    /// Whether `point` lies inside the specific unit cell whose low corner
    /// is `coord`. Builds the world-space box from `coord` and `coord + 1`;
    /// `false` when either corner maps outside the grid. This
    /// distinguishes "in this cell" from merely "within grid bounds".
    pub fn voxel_contains(&self, coord: [i32; D], point: [f64; D]) -> bool {
        let far = std::array::from_fn(|i| coord[i] + 1);
        match (
            self.grid_to_world_checked(coord),
            self.grid_to_world_checked(far),
        ) {
            (Some(v0), Some(v1)) => BoundingBox::new(v0, v1).contains(point, true),
            _ => false,
        }
    }

    /// The corner coordinates of the unit cell at `coord`, in table order.
    pub fn voxel_corners(&self, coord: [i32; D], topology: &VoxelTopology<D>) -> Vec<[i32; D]> {
        topology
            .corner_offsets
            .iter()
            .map(|offset| std::array::from_fn(|i| coord[i] + offset[i]))
            .collect()
    }

    /// World-space endpoints for each edge of the unit cell at `coord`, in
    /// table order. Edges with an endpoint outside the grid yield `None`,
    /// so downstream geometry produces no spurious boundary edges.
    pub fn voxel_edge_endpoints(
        &self,
        coord: [i32; D],
        topology: &VoxelTopology<D>,
    ) -> Vec<Option<([f64; D], [f64; D])>> {
        let corners = self.voxel_corners(coord, topology);
        topology
            .edges
            .iter()
            .map(|&[a, b]| {
                match (
                    self.grid_to_world_checked(corners[a]),
                    self.grid_to_world_checked(corners[b]),
                ) {
                    (Some(start), Some(end)) => Some((start, end)),
                    _ => None,
                }
            })
            .collect()
    }
}

/// Number of coordinates in an ordered span, inclusive on both corners.
fn span_len<const D: usize>(span: &GridBox<D>) -> usize {
    (0..D)
        .map(|i| (span.v1[i] - span.v0[i] + 1).max(0) as usize)
        .product()
}

/// Walks a span in canonical order: last axis slowest, first axis fastest.
fn for_each_coord<const D: usize>(span: &GridBox<D>, mut f: impl FnMut([i32; D])) {
    if (0..D).any(|i| span.v0[i] > span.v1[i]) {
        return;
    }
    let mut coord = span.v0;
    loop {
        f(coord);
        let mut axis = 0;
        loop {
            coord[axis] += 1;
            if coord[axis] <= span.v1[axis] {
                break;
            }
            coord[axis] = span.v0[axis];
            axis += 1;
            if axis == D {
                return;
            }
        }
    }
}
