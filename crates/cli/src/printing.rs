use pyxelator_sim::simulation::{Configuration, Simulation};
use pyxelator_sim::Palette;

pub fn print_simulation_parameters(sim: &Simulation) {
    print_parameters(sim.config());
    println!("\n🎨 Target");
    println!("  • Distinct Colors: {}", sim.palette().len());
    println!("  • Background: {}", sim.background());
    println!(
        "  • Dot Grid: {} × {} = {} dots",
        sim.grid().columns(),
        sim.grid().rows(),
        sim.grid().len()
    );
    println!("  • Seed: {}", sim.seed());
}

pub fn print_parameters(config: &Configuration) {
    let execution = &config.execution;
    let canvas = &config.canvas;

    println!("\n📋 Run Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        execution.population_size
    );
    println!(
        "  • Generations: {} [-g, --generations]",
        execution.total_generations
    );
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!(
        "  • Snapshot Every: {} generations [--persist-every]",
        execution.persist_every
    );
    println!("  • Renderer: {} [--renderer]", execution.renderer);

    println!("\n⚡ Mutation");
    println!(
        "  • Mutation Factor: {} (p = {:.2e} per dot) [--mutation-factor]",
        config.evolution.mutation_factor,
        1.0 / config.evolution.mutation_factor.max(1) as f64
    );
    println!("  • Sampling: {} [--sampling]", config.evolution.sampling);

    println!("\n🖼  Canvas");
    println!(
        "  • Size: {}x{} [--width, --height]",
        canvas.width, canvas.height
    );
    println!("  • Dot Size: {} px [--dot-size]", canvas.dot_size);
    println!("  • Inset: {} px [--inset]", canvas.inset);
}

pub fn print_palette(palette: &Palette, top: usize) {
    let total = palette.total_count().max(1) as f64;

    println!("\n🎨 Palette");
    println!("  • Distinct Colors: {}", palette.len());
    println!("  • Background: {}", palette.background());

    if top > 0 {
        println!("\n  Most frequent colors:");
        for entry in palette.entries().iter().take(top) {
            println!(
                "    {}  {:>8} px  {:>6.2}%",
                entry.color,
                entry.count,
                entry.count as f64 / total * 100.0
            );
        }
    }
}
