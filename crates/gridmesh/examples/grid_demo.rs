//! Demo building a sectioned grid mesh and painting nodes.
//!
//! Demonstrates:
//! - Building a grid with a lowered vertex ceiling to force multiple sections
//! - Painting a checkerboard pattern per node
//! - Marking nodes occupied and reading the map back

use gridmesh::{GridConfig, GridMeshBuilder, Orientation, Rgba};

fn main() {
    env_logger::init();

    let config = GridConfig::new(64, 48)
        .with_node_size(1.0, 1.0)
        .with_spacing(0.1)
        .with_orientation(Orientation::Horizontal);

    // A low ceiling so the partitioning is visible at this grid size.
    let mut model = GridMeshBuilder::new().with_max_vertices(4096).build(config);

    println!(
        "built {}x{} grid: {} sections, {} vertices, {} triangles",
        config.width,
        config.height,
        model.num_sections(),
        model.num_vertices(),
        model.num_triangles()
    );
    for (i, section) in model.sections().iter().enumerate() {
        println!(
            "  section {i}: rows {:?}, {} vertices, {} triangles",
            section.row_range(),
            section.num_vertices(),
            section.num_triangles()
        );
    }

    // Checkerboard paint
    let dark = Rgba::rgb(0.2, 0.2, 0.25);
    for y in 0..config.height {
        for x in 0..config.width {
            if (x + y) % 2 == 0 {
                model.set_node_color(x, y, dark);
            }
        }
    }

    // Occupy a diagonal
    for i in 0..config.height.min(config.width) {
        model.set_occupied(i, i, true);
    }
    println!("occupied {} nodes", model.occupancy().num_occupied());

    // Each section's buffers are now ready for a mesh-upload API:
    // section.vertices(), section.indices(), section.color_bytes().
}
