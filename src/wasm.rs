use crate::bounds::BoundingBox;
use crate::grid::Grid;
use js_sys::Function;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

// --- Bounding boxes ---

/// Axis-aligned bounding box in 2D world space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox2D {
        BoundingBox2D {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl From<BoundingBox2D> for BoundingBox<2> {
    fn from(b: BoundingBox2D) -> Self {
        Self {
            v0: [b.min_x, b.min_y],
            v1: [b.max_x, b.max_y],
        }
    }
}

/// Axis-aligned bounding box in 3D world space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> BoundingBox3D {
        BoundingBox3D {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }
}

impl From<BoundingBox3D> for BoundingBox<3> {
    fn from(b: BoundingBox3D) -> Self {
        Self {
            v0: [b.min_x, b.min_y, b.min_z],
            v1: [b.max_x, b.max_y, b.max_z],
        }
    }
}

// --- Change hook relay ---

// JS callbacks are not Send/Sync; the hook slot requires both. Same escape
// hatch as storing JS geometry callbacks in the tessellation crates.
struct JsChangeHook {
    func: Function,
}

unsafe impl Send for JsChangeHook {}
unsafe impl Sync for JsChangeHook {}

// --- Grids ---

/// WASM wrapper for a dense 2D grid of `f64` cells.
#[wasm_bindgen]
pub struct GridF2 {
    inner: Grid<f64, 2>,
}

#[wasm_bindgen]
impl GridF2 {
    /// Creates a `width` x `height` grid with the given per-axis cell
    /// sizes, world origin, and extra border ring width.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: i32,
        height: i32,
        cell_width: f64,
        cell_height: f64,
        origin_x: f64,
        origin_y: f64,
        border: i32,
    ) -> GridF2 {
        GridF2 {
            inner: Grid::with_border(
                [width, height],
                [cell_width, cell_height],
                [origin_x, origin_y],
                border,
            ),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn count_cells(&self) -> usize {
        self.inner.cells().len()
    }

    pub fn get(&self, x: i32, y: i32) -> f64 {
        *self.inner.cell([x, y])
    }

    pub fn set(&mut self, x: i32, y: i32, value: f64) {
        self.inner.set_cell([x, y], value);
    }

    /// Reads the cell nearest to a world position.
    pub fn get_at(&self, x: f64, y: f64) -> f64 {
        *self.inner.cell_at([x, y])
    }

    /// Writes the cell nearest to a world position.
    pub fn set_at(&mut self, x: f64, y: f64, value: f64) {
        self.inner.set_cell_at([x, y], value);
    }

    pub fn world_to_grid(&self, x: f64, y: f64) -> Vec<i32> {
        self.inner.world_to_grid([x, y]).to_vec()
    }

    pub fn grid_to_world(&self, x: i32, y: i32) -> Vec<f64> {
        self.inner.grid_to_world([x, y]).to_vec()
    }

    /// Whether a world position falls within the grid's world bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.inner
            .grid_to_world_box(self.inner.grid_box())
            .contains([x, y], true)
    }

    /// Sets every cell covered by `bbox` (the whole grid when omitted).
    pub fn fill(&mut self, value: f64, bbox: Option<BoundingBox2D>) {
        let region = bbox.map(|b| self.inner.world_to_grid_box(b.into()));
        for coord in self.inner.coords_in(region) {
            self.inner.set_cell(coord, value);
        }
    }

    /// Registers a JS callback invoked with `(x, y)` after each cell write.
    pub fn set_on_changed(&mut self, callback: Function) {
        let hook = JsChangeHook { func: callback };
        self.inner.on_cell_changed(move |coord| {
            let _ = hook
                .func
                .call2(&JsValue::NULL, &coord[0].into(), &coord[1].into());
        });
    }
}

/// WASM wrapper for a dense 3D grid of `f64` cells.
#[wasm_bindgen]
pub struct GridF3 {
    inner: Grid<f64, 3>,
}

#[wasm_bindgen]
impl GridF3 {
    /// Creates a `width` x `height` x `depth` grid with the given per-axis
    /// cell sizes, world origin, and extra border ring width.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: i32,
        height: i32,
        depth: i32,
        cell_width: f64,
        cell_height: f64,
        cell_depth: f64,
        origin_x: f64,
        origin_y: f64,
        origin_z: f64,
        border: i32,
    ) -> GridF3 {
        GridF3 {
            inner: Grid::with_border(
                [width, height, depth],
                [cell_width, cell_height, cell_depth],
                [origin_x, origin_y, origin_z],
                border,
            ),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn count_cells(&self) -> usize {
        self.inner.cells().len()
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> f64 {
        *self.inner.cell([x, y, z])
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, value: f64) {
        self.inner.set_cell([x, y, z], value);
    }

    /// Reads the cell nearest to a world position.
    pub fn get_at(&self, x: f64, y: f64, z: f64) -> f64 {
        *self.inner.cell_at([x, y, z])
    }

    /// Writes the cell nearest to a world position.
    pub fn set_at(&mut self, x: f64, y: f64, z: f64, value: f64) {
        self.inner.set_cell_at([x, y, z], value);
    }

    pub fn world_to_grid(&self, x: f64, y: f64, z: f64) -> Vec<i32> {
        self.inner.world_to_grid([x, y, z]).to_vec()
    }

    pub fn grid_to_world(&self, x: i32, y: i32, z: i32) -> Vec<f64> {
        self.inner.grid_to_world([x, y, z]).to_vec()
    }

    /// Whether a world position falls within the grid's world bounds.
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        self.inner
            .grid_to_world_box(self.inner.grid_box())
            .contains([x, y, z], true)
    }

    /// Sets every cell covered by `bbox` (the whole grid when omitted).
    pub fn fill(&mut self, value: f64, bbox: Option<BoundingBox3D>) {
        let region = bbox.map(|b| self.inner.world_to_grid_box(b.into()));
        for coord in self.inner.coords_in(region) {
            self.inner.set_cell(coord, value);
        }
    }

    /// Registers a JS callback invoked with `(x, y, z)` after each cell
    /// write.
    pub fn set_on_changed(&mut self, callback: Function) {
        let hook = JsChangeHook { func: callback };
        self.inner.on_cell_changed(move |coord| {
            let _ = hook.func.call3(
                &JsValue::NULL,
                &coord[0].into(),
                &coord[1].into(),
                &coord[2].into(),
            );
        });
    }
}
