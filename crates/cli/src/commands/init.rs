use anyhow::{Context, Result};

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_configuration(args: &InitArgs) -> Result<()> {
    println!("🎨 Pyxelator - New Configuration");
    println!("============================================");

    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = args.to_configuration();
    config.validate().context("Invalid configuration")?;

    print_parameters(&config);

    config
        .to_json_file(&args.output)
        .context("Failed to write configuration")?;

    println!("\n✓ Configuration written to {}", args.output.display());
    println!("  Run it with: pyxelator run <IMAGE> --config {}", args.output.display());
    Ok(())
}
