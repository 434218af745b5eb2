use coverage_cells::raster::{binary_from_gray, colorize_labels};
use coverage_cells::{build_adjacency, decompose, depth_first_order};
use image::ImageReader;

#[cfg(feature = "tracing")]
use coverage_cells::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: decompose_map <map_image>");
        return Ok(());
    };

    let img = ImageReader::open(path)?.decode()?.to_luma8();
    let grid = binary_from_gray(&img, 127)?;

    let result = decompose(&grid);
    println!(
        "{} cells, {} non-neighbor groups",
        result.cell_count,
        result.non_neighbor_groups.len()
    );

    let build = build_adjacency(
        &result.cell_ids,
        &result.boundaries,
        &result.non_neighbor_groups,
    );
    for cell in build.graph.cells() {
        let neighbors: Vec<_> = build.graph.neighbors(cell).unwrap().iter().collect();
        println!("cell {cell}: neighbors {neighbors:?}");
    }

    if result.cell_count > 0 {
        let order = depth_first_order(&build.graph, 1);
        println!("visit order: {order:?}");
    }

    colorize_labels(&result.labels).save("cells.png")?;
    println!("label map written to cells.png");

    Ok(())
}
