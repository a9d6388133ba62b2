use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use orbital_forge::{Atom, EngineConfig, World};

use super::config::describe_config;
use crate::cli::{BondArgs, BondKind};
use crate::display::{Context as DisplayContext, Progress, print_atom_summary, print_bond_records};
use crate::io::read_engine_config;
use crate::util::spec::AtomSpec;

const TOTAL_STEPS: u8 = 3;

pub fn run_bond(args: BondArgs, config_path: Option<&Path>, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading engine configuration");
    let config = read_engine_config(config_path)?;
    progress.complete_step(
        "Loading engine configuration",
        &describe_config(&config, config_path),
    );

    progress.step("Building atoms");
    let mut world = World::new();
    let mut slots = Vec::with_capacity(2);
    for spec in [&args.first, &args.second] {
        world.add(build_atom(spec, config)?)?;
        slots.push(world.atoms().len() - 1);
    }
    let (a, b) = (slots[0], slots[1]);
    progress.complete_step(
        "Building atoms",
        &[
            describe_atom(&args.first, &world.atoms()[a]),
            describe_atom(&args.second, &world.atoms()[b]),
        ],
    );

    progress.step("Forming bond");
    let formed = match args.kind {
        BondKind::Covalent => world.covalent_bond(a, b)?,
        BondKind::Ionic => {
            let formed = world.ionic_bond(a, b)?;
            if formed {
                for slot in [a, b] {
                    if let Some(atom) = world.atom_mut(slot) {
                        atom.configure().context(
                            "Failed to reconfigure atoms after the electron transfer",
                        )?;
                    }
                }
            }
            formed
        }
    };
    let outcome = if formed { "formed" } else { "refused" };
    progress.complete_step(
        "Forming bond",
        &[format!("{} bond {outcome}", args.kind.label())],
    );
    progress.finish();

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} bond between {} and {}: {outcome}",
        args.kind.label(),
        args.first,
        args.second
    )?;
    for (spec, slot) in [(&args.first, a), (&args.second, b)] {
        let atom = &world.atoms()[slot];
        let title = format!("{spec} (index {})", atom.index);
        print_atom_summary(&mut out, &title, atom)?;
        print_bond_records(&mut out, &format!("{spec} bonds"), atom)?;
    }
    out.flush()?;

    Ok(())
}

fn build_atom(spec: &AtomSpec, config: EngineConfig) -> Result<Atom> {
    let electrons = spec.electron_count();
    Atom::with_config(spec.protons, spec.default_neutrons(), electrons, config)
        .with_context(|| format!("Failed to configure {spec} with {electrons} electrons"))
}

fn describe_atom(spec: &AtomSpec, atom: &Atom) -> String {
    format!(
        "{spec}: {} (valence {}/{})",
        atom.electron_configuration(),
        atom.valence_count(),
        atom.max_valence()
    )
}
