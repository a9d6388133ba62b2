use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use orbital_forge::{Atom, EngineConfig, World};

use crate::cli::ConfigArgs;
use crate::display::{
    Context as DisplayContext, Progress, print_atom_summary, print_orbital_table,
};
use crate::io::read_engine_config;

const TOTAL_STEPS: u8 = 2;

pub fn run_config(
    args: ConfigArgs,
    config_path: Option<&Path>,
    ctx: DisplayContext,
) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading engine configuration");
    let config = read_engine_config(config_path)?;
    progress.complete_step(
        "Loading engine configuration",
        &describe_config(&config, config_path),
    );

    progress.step("Configuring atom");
    let protons = args.atom.protons;
    let neutrons = args.neutrons.unwrap_or_else(|| args.atom.default_neutrons());
    let electrons = args.electrons.unwrap_or_else(|| args.atom.electron_count());
    let atom = Atom::with_config(protons, neutrons, electrons, config)
        .with_context(|| format!("Failed to configure {} with {electrons} electrons", args.atom))?;

    let mut world = World::new();
    world.add(atom)?;
    let atom = &world.atoms()[0];
    progress.complete_step(
        "Configuring atom",
        &[
            format!("{protons} protons, {neutrons} neutrons, {electrons} electrons"),
            format!("{} active orbitals", atom.orbitals().len()),
        ],
    );
    progress.finish();

    let mut out = io::stdout().lock();
    print_atom_summary(&mut out, &args.atom.to_string(), atom)?;
    print_orbital_table(&mut out, atom)?;
    out.flush()?;

    Ok(())
}

pub(super) fn describe_config(config: &EngineConfig, path: Option<&Path>) -> Vec<String> {
    let source = path
        .map(|p| format!("Read {}", p.display()))
        .unwrap_or_else(|| "Embedded defaults".to_string());
    vec![
        source,
        format!(
            "max_shell = {} (capacity {})",
            config.max_shell,
            config.fill_order().capacity()
        ),
        format!("unassigned_policy = {:?}", config.unassigned_policy),
    ]
}
