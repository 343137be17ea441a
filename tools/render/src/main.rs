//! Noise driver — runs every (variant, distribution) combination over a
//! fresh zero grid and writes colormapped PNGs to data/noise/.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cumulus_core::{Grid, OffsetDistribution, RandomOffsets, Variant};

#[derive(Parser, Debug)]
#[command(name = "render", about = "Recursive-division cloud noise renderer")]
struct Args {
    /// Grid edge length in cells.
    #[arg(short, long, default_value_t = 128)]
    size: usize,

    /// Seed for the offset sources (one fresh source per combination).
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output directory.
    #[arg(long, default_value = "data/noise")]
    out_dir: String,

    /// Also write each grid as JSON next to its PNG.
    #[arg(long)]
    dump_json: bool,
}

/// The combinations worth looking at; naive with a centered offset adds
/// nothing the uniform run does not already show.
const COMBOS: [(&str, Variant, OffsetDistribution); 5] = [
    ("naive-uniform", Variant::Naive, OffsetDistribution::Uniform01),
    ("guarded-uniform", Variant::Guarded, OffsetDistribution::Uniform01),
    ("guarded-centered", Variant::Guarded, OffsetDistribution::Centered),
    ("edges-uniform", Variant::EdgeMidpoints, OffsetDistribution::Uniform01),
    ("edges-centered", Variant::EdgeMidpoints, OffsetDistribution::Centered),
];

/// Jet-style colormap over t in [0, 1]: dark blue → cyan → yellow → red.
fn jet(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

fn main() -> Result<()> {
    let args = Args::parse();

    let out_dir = Path::new(&args.out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    for (name, variant, distribution) in COMBOS {
        println!("{name}");

        let mut grid = Grid::zeros(args.size, args.size);
        let mut source = RandomOffsets::new(args.seed, distribution);
        {
            let mut view = grid.view_mut();
            variant.subdivide(&mut view, &mut source)?;
        }

        let min = grid.min_value();
        let max = grid.max_value();
        println!("min={min:.6}, max={max:.6}");

        // Normalize to [0, 1] for the colormap; a flat field maps to 0.
        let range = if max > min { max - min } else { 1.0 };
        let mut img = image::RgbImage::new(grid.width as u32, grid.height as u32);
        for r in 0..grid.height {
            for c in 0..grid.width {
                let t = (grid.get(r, c) - min) / range;
                img.put_pixel(c as u32, r as u32, image::Rgb(jet(t)));
            }
        }
        let path = out_dir.join(format!("{name}.png"));
        img.save(&path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("Wrote {}", path.display());

        if args.dump_json {
            let json_path = out_dir.join(format!("{name}.json"));
            fs::write(&json_path, serde_json::to_string(&grid)?)
                .with_context(|| format!("failed to write {}", json_path.display()))?;
            println!("Wrote {}", json_path.display());
        }
    }

    Ok(())
}
