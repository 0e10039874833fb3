use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use worldmap_common::{GeoPoint, ProjectedPoint, WorldCoordinate};
use worldmap_input::SimpleCrs;
use worldmap_kernel::{WorldGeometry, distance, local_coordinate, region_from_id, region_of};
use worldmap_stream::TileSource;

#[derive(Parser)]
#[command(name = "worldmap-cli", about = "CLI tool for worldmap coordinate operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Geometry description (YAML or JSON) to use instead of the built-in world
    #[arg(short, long, global = true)]
    geometry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the active geometry bounds
    Info,
    /// Dump the active geometry as JSON
    Geometry,
    /// World coordinate to projected pixels at maximum zoom
    #[command(allow_negative_numbers = true)]
    ToProjected {
        x: f64,
        y: f64,
        /// Project the tile centre instead of its corner
        #[arg(short, long)]
        centered: bool,
    },
    /// Projected pixels at maximum zoom to a world position
    #[command(allow_negative_numbers = true)]
    ToWorld {
        px: f64,
        py: f64,
        #[arg(short = 'z', long, default_value = "0")]
        plane: i32,
    },
    /// World coordinate to a flat-surface geo point
    #[command(allow_negative_numbers = true)]
    ToGeo {
        x: f64,
        y: f64,
        #[arg(short, long)]
        centered: bool,
    },
    /// Flat-surface geo point to a world position
    #[command(allow_negative_numbers = true)]
    FromGeo {
        lat: f64,
        lng: f64,
        #[arg(short = 'z', long, default_value = "0")]
        plane: i32,
    },
    /// Region id, base and local offset of a coordinate
    #[command(allow_negative_numbers = true)]
    Region { x: i32, y: i32 },
    /// Base coordinates of a packed region id
    #[command(allow_negative_numbers = true)]
    RegionId { id: i32 },
    /// Check a coordinate against the world bounds
    #[command(allow_negative_numbers = true)]
    Validate { x: i32, y: i32 },
    /// Clamp a coordinate into the world bounds
    #[command(allow_negative_numbers = true)]
    Clamp { x: i32, y: i32 },
    /// Euclidean distance between two coordinates
    #[command(allow_negative_numbers = true)]
    Distance { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// URL of one tile image
    #[command(allow_negative_numbers = true)]
    Tile {
        plane: i32,
        zoom: u8,
        x: i64,
        y: i64,
        /// URL template with {plane}, {z}, {x} and {y} placeholders
        #[arg(short, long)]
        template: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let geometry = match &cli.geometry {
        Some(path) => WorldGeometry::load(path)
            .with_context(|| format!("loading geometry from {}", path.display()))?,
        None => WorldGeometry::OSRS,
    };

    println!("{}", run(&geometry, cli.command)?);
    Ok(())
}

fn run(geometry: &WorldGeometry, command: Commands) -> anyhow::Result<String> {
    let out = match command {
        Commands::Info => format!(
            "worldmap-cli v{}\n{}\n{}\nbounds: x {}..={}, y {}..={}\nzoom: {}..={} (default {})",
            env!("CARGO_PKG_VERSION"),
            worldmap_common::crate_info(),
            worldmap_stream::crate_info(),
            geometry.min_x,
            geometry.max_x,
            geometry.min_y,
            geometry.max_y,
            geometry.min_zoom,
            geometry.max_zoom,
            geometry.default_zoom,
        ),
        Commands::Geometry => serde_json::to_string_pretty(geometry)?,
        Commands::ToProjected { x, y, centered } => {
            let p = if centered {
                geometry.world_to_projected_centered(x, y)
            } else {
                geometry.world_to_projected(x, y)
            };
            format_projected(p)
        }
        Commands::ToWorld { px, py, plane } => geometry
            .projected_to_world(ProjectedPoint::new(px, py), plane)
            .to_string(),
        Commands::ToGeo { x, y, centered } => {
            let crs = SimpleCrs::for_geometry(geometry);
            let geo = if centered {
                geometry.world_to_geo_centered(&crs, x, y)
            } else {
                geometry.world_to_geo(&crs, x, y)
            };
            format!("lat: {}, lng: {}", geo.lat, geo.lng)
        }
        Commands::FromGeo { lat, lng, plane } => {
            let crs = SimpleCrs::for_geometry(geometry);
            geometry
                .geo_to_world(&crs, GeoPoint::new(lat, lng), plane)
                .to_string()
        }
        Commands::Region { x, y } => {
            let region = region_of(x, y);
            let local = local_coordinate(x, y);
            format!(
                "region: {}\nbase: ({}, {})\nlocal: ({}, {})",
                region.id, region.x, region.y, local.x, local.y
            )
        }
        Commands::RegionId { id } => {
            let base = region_from_id(id);
            format!("base: ({}, {})", base.x, base.y)
        }
        Commands::Validate { x, y } => {
            if geometry.is_valid(x, y) {
                format!("({x}, {y}) is inside the world")
            } else {
                let c = geometry.clamp(x, y);
                tracing::debug!(x, y, "coordinate outside world bounds");
                format!("({x}, {y}) is outside the world, nearest valid ({}, {})", c.x, c.y)
            }
        }
        Commands::Clamp { x, y } => {
            let c = geometry.clamp(x, y);
            format!("({}, {})", c.x, c.y)
        }
        Commands::Distance { x1, y1, x2, y2 } => {
            let d = distance(WorldCoordinate::new(x1, y1), WorldCoordinate::new(x2, y2));
            format!("{d:.3}")
        }
        Commands::Tile {
            plane,
            zoom,
            x,
            y,
            template,
        } => {
            let source = match template {
                Some(t) => TileSource::new(t, geometry)?,
                None => TileSource::default(),
            };
            source.for_plane(plane).url(zoom, x, y)?
        }
    };
    Ok(out)
}

fn format_projected(p: ProjectedPoint) -> String {
    format!("px: {}, py: {}", p.x, p.y)
}
