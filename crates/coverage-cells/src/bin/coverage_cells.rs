//! Command-line driver: threshold a grayscale map, decompose it, and
//! print the coverage order. Optionally writes a colorized label map and
//! a JSON report.

use std::path::PathBuf;

use clap::Parser;
use image::ImageReader;
use log::LevelFilter;

use coverage_cells::core::init_with_level;
use coverage_cells::io::CoverageReport;
use coverage_cells::raster::{binary_from_gray, colorize_labels};
use coverage_cells::{plan, CellId};

#[derive(Parser, Debug)]
#[command(name = "coverage-cells", about = "Boustrophedon coverage planning over a map image")]
struct Args {
    /// Grayscale map image (free space bright, obstacles dark).
    map: PathBuf,

    /// Free-space threshold: pixels strictly brighter count as free.
    #[arg(long, default_value_t = 127)]
    threshold: u8,

    /// Cell id to start the coverage traversal from.
    #[arg(long, default_value_t = 1)]
    start: CellId,

    /// Write the colorized label map here (PNG).
    #[arg(long)]
    labels_out: Option<PathBuf>,

    /// Write the JSON coverage report here.
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    init_with_level(level)?;

    let img = ImageReader::open(&args.map)?.decode()?.to_luma8();
    let grid = binary_from_gray(&img, args.threshold)?;
    let plan = plan(&grid, args.start)?;

    println!(
        "{}x{} map: {} cells, {} non-neighbor groups, {} warnings",
        grid.width(),
        grid.height(),
        plan.decomposition.cell_count,
        plan.decomposition.non_neighbor_groups.len(),
        plan.warnings.len()
    );
    println!(
        "visit order from cell {}: {:?}",
        args.start, plan.visit_order
    );
    if plan.visit_order.len() < plan.decomposition.cell_count {
        println!(
            "note: {} cells are unreachable from cell {} and need their own traversal",
            plan.decomposition.cell_count - plan.visit_order.len(),
            args.start
        );
    }

    if let Some(path) = &args.labels_out {
        colorize_labels(&plan.decomposition.labels).save(path)?;
        println!("label map written to {}", path.display());
    }
    if let Some(path) = &args.report_out {
        CoverageReport::from_plan(&grid, &plan).write_json(path)?;
        println!("report written to {}", path.display());
    }

    Ok(())
}
