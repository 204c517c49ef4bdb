use plotters::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use voxgrid::{BoundingBox, Grid2, GridBox};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("grid_query_inner.svg", BoundingBox::new([12.0, 22.0], [58.0, 71.0]))?;
    run_example("grid_query_overhang.svg", BoundingBox::new([65.0, -20.0], [130.0, 35.0]))?;
    Ok(())
}

fn run_example(filename: &str, query: BoundingBox<2>) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(-20.0..130.0, -20.0..130.0)?;

    let grid: Grid2<f64> = Grid2::new([10, 10], [10.0, 10.0], [0.0, 0.0]);

    // Shade every voxel the query box touches, clipped to the grid.
    let covered = grid.world_to_grid_box(query);
    if let Some(voxels) = GridBox::intersection(covered, grid.voxel_box()) {
        for coord in grid.coords_in(Some(voxels)) {
            let v0 = grid.grid_to_world(coord);
            let v1 = grid.grid_to_world([coord[0] + 1, coord[1] + 1]);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(v0[0], v0[1]), (v1[0], v1[1])],
                GREEN.mix(0.25).filled(),
            )))?;
        }
    }

    // Grid lines.
    let world = grid.grid_to_world_box(grid.grid_box());
    for coord in 0..=grid.shape()[0] {
        let x = grid.grid_to_world([coord, 0])[0];
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, world.v0[1]), (x, world.v1[1])],
            BLACK.mix(0.4),
        )))?;
    }
    for coord in 0..=grid.shape()[1] {
        let y = grid.grid_to_world([0, coord])[1];
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(world.v0[0], y), (world.v1[0], y)],
            BLACK.mix(0.4),
        )))?;
    }

    // The query box itself.
    chart.draw_series(std::iter::once(Rectangle::new(
        [(query.v0[0], query.v0[1]), (query.v1[0], query.v1[1])],
        RED.stroke_width(3),
    )))?;

    // Random sample points, colored by query membership.
    let mut rng = StdRng::seed_from_u64(123456789);
    for _ in 0..400 {
        let point = [rng.gen_range(-20.0..130.0), rng.gen_range(-20.0..130.0)];
        let color = if query.contains(point, true) {
            RED.mix(0.8).filled()
        } else {
            BLUE.mix(0.4).filled()
        };
        chart.draw_series(std::iter::once(Circle::new((point[0], point[1]), 3, color)))?;
    }

    root.present()?;
    println!("Plot saved to {}", filename);

    Ok(())
}
