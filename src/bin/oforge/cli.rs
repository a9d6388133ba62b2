use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::util::spec::AtomSpec;

#[derive(Parser)]
#[command(
    name = "oforge",
    about = "Electron configurations and bonding for simple atoms",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the electron configuration of one atom
    #[command(visible_alias = "c")]
    Config(ConfigArgs),

    /// Form a covalent or ionic bond between two atoms
    #[command(visible_alias = "b")]
    Bond(BondArgs),
}

/// Options shared by all commands.
#[derive(Args)]
pub struct GlobalOptions {
    /// Engine configuration file (TOML); embedded defaults if omitted
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log engine events to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Atomic number or element symbol, optionally with an electron count (Z[:E])
    #[arg(value_name = "ATOM")]
    pub atom: AtomSpec,

    /// Neutron count (defaults to the most common isotope)
    #[arg(short, long, value_name = "N")]
    pub neutrons: Option<usize>,

    /// Electron count (defaults to the atomic number)
    #[arg(short, long, value_name = "E")]
    pub electrons: Option<usize>,
}

#[derive(Args)]
pub struct BondArgs {
    /// Bonding protocol
    #[arg(value_name = "KIND")]
    pub kind: BondKind,

    /// First atom (donor for ionic bonds): symbol or Z[:E]
    #[arg(value_name = "ATOM_A")]
    pub first: AtomSpec,

    /// Second atom (acceptor for ionic bonds): symbol or Z[:E]
    #[arg(value_name = "ATOM_B")]
    pub second: AtomSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BondKind {
    /// Share one spin-up valence electron each way
    Covalent,
    /// Transfer one spin-up valence electron from the first atom to the second
    Ionic,
}

impl BondKind {
    pub fn label(self) -> &'static str {
        match self {
            BondKind::Covalent => "covalent",
            BondKind::Ionic => "ionic",
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
