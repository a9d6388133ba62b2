use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    let mut collector = HintCollector::default();
    collector.collect_engine_hints(err);
    if !collector.has_typed_hints {
        collector.collect_fallback_hints(err);
    }
    collector.hints
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_engine_hints(&mut self, err: &Error) {
        use orbital_forge::{Error as EngineError, MAX_SUPPORTED_SHELL};

        let Some(engine_err) = err.chain().find_map(|c| c.downcast_ref::<EngineError>()) else {
            return;
        };
        self.has_typed_hints = true;

        match engine_err {
            EngineError::UnassignedElectrons {
                total, capacity, ..
            } => {
                if total > capacity {
                    self.add(format!(
                        "The fill order holds at most {capacity} electrons; request fewer with --electrons or Z:E"
                    ));
                    self.add(format!(
                        "Raise max_shell in the configuration file (up to {MAX_SUPPORTED_SHELL})"
                    ));
                } else {
                    self.add("The spin sequence left electrons without a compatible orbital");
                }
                self.add("Set unassigned_policy = \"stash\" to keep leftovers instead of failing");
            }

            EngineError::InvalidQuantumNumbers(_) => {
                self.add("Quantum numbers must satisfy n >= 1, l < n and |m| <= l");
            }

            EngineError::InvalidConfig(_) => {
                self.add(format!("max_shell must be between 1 and {MAX_SUPPORTED_SHELL}"));
            }

            EngineError::ConfigParse(_) => {
                self.add("Supported keys: max_shell (integer), unassigned_policy (\"strict\" or \"stash\")");
                self.add("Check the TOML syntax of the configuration file");
            }

            EngineError::UnknownAtom { slot } => {
                self.add(format!("No atom was registered at slot {slot}"));
            }

            EngineError::SameAtom { .. } => {
                self.add("Bonding needs two distinct atoms");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the configuration file path is correct");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
