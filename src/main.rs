use clap::Parser;

use mep_reroute::{compute_reroute, project_obstacle, Cell, Grid, GridConfig, ProjectionConfig};

/// Demo driver: reroute one MEP line around a detected structural deviation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 20)]
    cols: i32,

    #[arg(long, default_value_t = 10)]
    rows: i32,

    /// Start cell as "col,row" (defaults to left-center)
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// End cell as "col,row" (defaults to right-center)
    #[arg(long, value_parser = parse_cell)]
    end: Option<Cell>,

    /// Detected pixel x of the shifted element
    #[arg(long, requires = "detected_y")]
    detected_x: Option<i32>,

    /// Detected pixel y of the shifted element
    #[arg(long, requires = "detected_x")]
    detected_y: Option<i32>,

    #[arg(long, default_value_t = 640)]
    img_width: i32,

    #[arg(long, default_value_t = 640)]
    img_height: i32,

    /// Extra blocked cell as "col,row" (repeatable)
    #[arg(long = "block", value_parser = parse_cell)]
    blocks: Vec<Cell>,

    /// Print the raw result record as JSON instead of the grid view
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (col, row) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"col,row\", got \"{s}\""))?;
    let col = col.trim().parse().map_err(|_| format!("bad column in \"{s}\""))?;
    let row = row.trim().parse().map_err(|_| format!("bad row in \"{s}\""))?;
    Ok(Cell::new(col, row))
}

fn run(args: &Args) -> Result<(), String> {
    let grid_config = GridConfig {
        cols: args.cols,
        rows: args.rows,
    };

    let mut obstacles = args.blocks.clone();
    if let (Some(x), Some(y)) = (args.detected_x, args.detected_y) {
        let projection = ProjectionConfig {
            img_width: args.img_width,
            img_height: args.img_height,
        };
        obstacles.extend(project_obstacle(x, y, &projection, &grid_config));
    }

    let result = compute_reroute(&obstacles, args.start, args.end, &grid_config)
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    // Rebuild the grid for the operator view; the search owns its own copy.
    let mut grid = Grid::new(&grid_config).map_err(|e| e.to_string())?;
    for &cell in &obstacles {
        grid.mark_blocked(cell);
    }
    let start = args.start.unwrap_or_else(|| Cell::new(0, grid_config.rows / 2));
    let end = args
        .end
        .unwrap_or_else(|| Cell::new(grid_config.cols - 1, grid_config.rows / 2));

    println!("{}", grid.render_route(&result.path, start, end));
    println!("{}", result.message);
    println!(
        "Explored {} nodes in {}ms",
        result.nodes_explored, result.compute_ms
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("reroute failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_accepts_signed_coordinates() {
        assert_eq!(parse_cell("3,7").unwrap(), Cell::new(3, 7));
        assert_eq!(parse_cell("-1, 2").unwrap(), Cell::new(-1, 2));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,b").is_err());
    }
}
