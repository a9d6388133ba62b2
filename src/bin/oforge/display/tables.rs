use std::io::{self, Write};

use orbital_forge::Atom;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_atom_summary(out: &mut impl Write, title: &str, atom: &Atom) -> io::Result<()> {
    let element = atom
        .element()
        .map(|e| format!("{e} (Z={})", atom.atomic_number()))
        .unwrap_or_else(|| format!("Z={}", atom.atomic_number()));
    let valence_shell = atom
        .valence_shell()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut rows = vec![
        ("Element", element),
        (
            "Nucleons",
            format!("{}p + {}n", atom.protons().len(), atom.neutrons().len()),
        ),
        ("Electrons", atom.electron_count().to_string()),
        ("Configuration", atom.electron_configuration()),
        ("Valence Shell", valence_shell),
        (
            "Valence",
            format!("{} / {}", atom.valence_count(), atom.max_valence()),
        ),
        ("Stable", yes_no(atom.is_stable()).to_string()),
        ("Charge", format!("{:+.3}", atom.charge())),
        ("Mass", format!("{:.3}", atom.mass())),
    ];
    if !atom.unassigned().is_empty() {
        rows.push(("Unassigned", atom.unassigned().len().to_string()));
    }

    print_kv_table(out, title, &rows)
}

pub fn print_orbital_table(out: &mut impl Write, atom: &Atom) -> io::Result<()> {
    let orbital_w = 12usize;
    let subshell_w = 8usize;
    let spins_w = 5usize;
    let sep_overhead = 13;
    let electrons_w =
        SAFE_TABLE_WIDTH.saturating_sub(orbital_w + subshell_w + spins_w + sep_overhead);

    let line = |left: char, mid: char, right: char| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(orbital_w + 2),
            "─".repeat(subshell_w + 2),
            "─".repeat(spins_w + 2),
            "─".repeat(electrons_w + 2),
        )
    };

    writeln!(out, "{INDENT}┌─ Orbitals ─┐")?;
    writeln!(out, "{}", line('┌', '┬', '┐'))?;
    writeln!(
        out,
        "{INDENT}│ {:<orbital_w$} │ {:<subshell_w$} │ {:<spins_w$} │ {:<electrons_w$} │",
        "(n, l, m)", "Subshell", "Spins", "Electrons"
    )?;
    writeln!(out, "{}", line('├', '┼', '┤'))?;

    for orbital in atom.orbitals() {
        let spins: String = orbital.spins().iter().map(|s| s.to_string()).collect();
        let electrons = orbital
            .electrons()
            .iter()
            .map(|e| e.index().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "{INDENT}│ {:<orbital_w$} │ {:<subshell_w$} │ {:<spins_w$} │ {:<electrons_w$} │",
            orbital.quantum.to_string(),
            orbital.quantum.subshell_label(),
            spins,
            truncate(&electrons, electrons_w)
        )?;
    }

    if atom.orbitals().is_empty() {
        writeln!(
            out,
            "{INDENT}│ {:<orbital_w$} │ {:<subshell_w$} │ {:<spins_w$} │ {:<electrons_w$} │",
            "(none)", "", "", ""
        )?;
    }

    writeln!(out, "{}", line('└', '┴', '┘'))
}

pub fn print_bond_records(out: &mut impl Write, title: &str, atom: &Atom) -> io::Result<()> {
    let kind_w = 10usize;
    let sep_overhead = 10;
    let col_w = SAFE_TABLE_WIDTH.saturating_sub(kind_w + sep_overhead) / 3;

    let line = |left: char, mid: char, right: char| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(kind_w + 2),
            "─".repeat(col_w + 2),
            "─".repeat(col_w + 2),
            "─".repeat(col_w + 2),
        )
    };

    writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(out, "{}", line('┌', '┬', '┐'))?;
    writeln!(
        out,
        "{INDENT}│ {:<kind_w$} │ {:>col_w$} │ {:>col_w$} │ {:>col_w$} │",
        "Kind", "Partner", "Own e⁻", "Partner e⁻"
    )?;
    writeln!(out, "{}", line('├', '┼', '┤'))?;

    for bond in atom.covalent_bonds() {
        writeln!(
            out,
            "{INDENT}│ {:<kind_w$} │ {:>col_w$} │ {:>col_w$} │ {:>col_w$} │",
            "covalent", bond.partner, bond.own_electron, bond.partner_electron
        )?;
    }
    for bond in atom.ionic_bonds() {
        writeln!(
            out,
            "{INDENT}│ {:<kind_w$} │ {:>col_w$} │ {:>col_w$} │ {:>col_w$} │",
            "ionic", bond.partner, bond.electron, "-"
        )?;
    }
    if atom.covalent_bonds().is_empty() && atom.ionic_bonds().is_empty() {
        writeln!(
            out,
            "{INDENT}│ {:<kind_w$} │ {:>col_w$} │ {:>col_w$} │ {:>col_w$} │",
            "(none)", "", "", ""
        )?;
    }

    writeln!(out, "{}", line('└', '┴', '┘'))
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let key_w = 16usize;
    let sep_overhead = 7;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(
        out,
        "{INDENT}┌{}┬{}┐",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    )?;
    for (key, val) in rows {
        writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        )?;
    }
    writeln!(
        out,
        "{INDENT}└{}┴{}┘",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_forge::{Element, World};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_shows_configuration_and_stability() {
        let atom = Atom::neutral(Element::Ne).unwrap();
        let text = render(|out| print_atom_summary(out, "Neon", &atom));

        assert!(text.contains("Neon"));
        assert!(text.contains("1s2 2s2 2p6"));
        assert!(text.contains("8 / 8"));
        assert!(text.contains("yes"));
        assert!(!text.contains("Unassigned"));
    }

    #[test]
    fn orbital_table_lists_every_active_orbital() {
        let mut world = World::new();
        world.add(Atom::neutral(Element::Li).unwrap()).unwrap();
        let text = render(|out| print_orbital_table(out, &world.atoms()[0]));

        assert!(text.contains("(1, 0, 0)"));
        assert!(text.contains("(2, 0, 0)"));
        assert!(text.contains("↑↓"));
        // Atom 0, protons 1-3, neutrons 4-7, electrons 8-10.
        assert!(text.contains("8, 9"));
        assert!(!text.contains("(none)"));
    }

    #[test]
    fn empty_tables_say_so() {
        let atom = Atom::new(1, 0, 0).unwrap();
        assert!(render(|out| print_orbital_table(out, &atom)).contains("(none)"));
        assert!(render(|out| print_bond_records(out, "Bonds", &atom)).contains("(none)"));
    }

    #[test]
    fn bond_records_show_both_kinds() {
        let mut world = World::new();
        for element in [Element::H, Element::H] {
            world.add(Atom::neutral(element).unwrap()).unwrap();
        }
        assert!(world.covalent_bond(0, 1).unwrap());
        let text = render(|out| print_bond_records(out, "H bonds", &world.atoms()[0]));

        assert!(text.contains("covalent"));
        assert!(!text.contains("ionic"));
    }
}
