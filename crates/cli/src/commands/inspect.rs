use anyhow::{Context, Result};
use pyxelator_raster::io;
use pyxelator_sim::Palette;

use crate::args::InspectArgs;
use crate::printing::print_palette;

pub fn inspect_image(args: &InspectArgs) -> Result<()> {
    let raster = io::load_any(&args.image)
        .with_context(|| format!("Failed to load {}", args.image.display()))?;
    let palette = Palette::from_raster(&raster).context("Failed to extract palette")?;

    println!("\n📊 Image Information");
    println!("{}", "=".repeat(50));
    println!("File: {}", args.image.display());
    println!("Size: {}", raster.canvas());

    print_palette(&palette, args.top);
    Ok(())
}
