//! # voxgrid
//!
//! `voxgrid` is a Rust library for dense 2D and 3D spatial grids, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). It pairs a cell array addressable by integer
//! grid coordinate and by continuous world position with an interval/bounding-box algebra
//! for region queries, clipping, and iteration bounds.
//!
//! ## Features
//!
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with JavaScript and TypeScript.
//! - **Coordinate Mapping**: Per-axis affine world-to-grid transform with nearest, floor, and ceil policies.
//! - **Region Algebra**: Closed intervals and axis-aligned boxes with containment, union, and intersection.
//! - **Parallel Iteration**: Bounded sequential sweeps and a rayon-backed parallel fan-out over cell coordinates.
//! - **Change Notification**: A synchronous callback fired with the coordinate of every cell write.
//!
//! ## Example
//!
//! ```
//! use voxgrid::{BoundingBox, Grid3};
//!
//! let grid: Grid3<f32> = Grid3::new([16, 16, 16], [0.5, 0.5, 0.5], [0.0, 0.0, 0.0]);
//! assert_eq!(grid.world_to_grid([1.0, 1.0, 1.0]), [2, 2, 2]);
//!
//! // All cells touching a world-space box, clipped to the grid.
//! let query = BoundingBox::new([0.2, 0.2, 0.2], [0.9, 0.9, 0.9]);
//! let mut touched = 0;
//! grid.loop_coords(Some(grid.world_to_grid_box(query)), |_coord| touched += 1);
//! assert_eq!(touched, 27);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Grid`] struct (aliases [`Grid2`] and [`Grid3`]), which
//! owns the cell array and the affine transform; [`BoundingBox`] and [`GridBox`] carry the
//! region algebra it queries against.

mod bounds;
mod grid;
mod interval;
mod topology;
mod wasm;

pub use bounds::BoundingBox;
pub use bounds::Extents;
pub use bounds::GridBox;
pub use grid::ChangeHook;
pub use grid::Grid;
pub use grid::Grid2;
pub use grid::Grid3;
pub use interval::Interval;
pub use topology::VoxelTopology;
pub use wasm::BoundingBox2D;
pub use wasm::BoundingBox3D;
pub use wasm::GridF2;
pub use wasm::GridF3;
