use std::io::{self, Write};

use serum_forge::{Analysis, MolecularData, MolecularStructure, Synthesis};

use crate::util::text::{id_summary, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();
const MAX_BOND_ROWS: usize = 15;
const MAX_STRUCTURE_ROWS: usize = 15;

pub fn print_dataset_info(label: &str, data: &MolecularData, structures: &[MolecularStructure<'_>]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = dataset_rows(data, structures);
    print_kv_table(&mut out, &format!("Dataset: {}", label), &rows);
}

pub fn print_analysis_summary(analysis: &Analysis<'_>, vitales_label: &str, precision: usize) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Unique to", vitales_label.to_string()),
        ("Anomalies", format!("{}", analysis.anomalies.len())),
        (
            "Representatives",
            format!("{}", analysis.synthesis.representatives().count()),
        ),
    ];
    print_kv_table(&mut out, "Anomaly Detection", &rows);

    print_serum_table(&mut out, &analysis.synthesis, precision);
}

fn dataset_rows(data: &MolecularData, structures: &[MolecularStructure<'_>]) -> Vec<(&'static str, String)> {
    let largest = structures.iter().map(MolecularStructure::len).max().unwrap_or(0);
    let singletons = structures.iter().filter(|s| s.len() == 1).count();

    vec![
        ("Molecules", format!("{}", data.len())),
        ("Stored Bonds", format!("{}", data.bond_count())),
        ("Structures", format!("{}", structures.len())),
        ("Largest", format!("{}", largest)),
        ("Singletons", format!("{}", singletons)),
    ]
}

fn print_serum_table(out: &mut impl Write, synthesis: &Synthesis<'_>, precision: usize) {
    let weight_w = 10usize;
    let sep_overhead = 6;
    let pair_w = SAFE_TABLE_WIDTH.saturating_sub(weight_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Serum Bonds ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{p_line}┬{w_line}┐",
        INDENT,
        p_line = "─".repeat(pair_w + 2),
        w_line = "─".repeat(weight_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<pair_w$} │ {:>weight_w$} │",
        INDENT,
        "Bond",
        "Strength",
        pair_w = pair_w,
        weight_w = weight_w
    );
    let _ = writeln!(
        out,
        "{}├{p_line}┼{w_line}┤",
        INDENT,
        p_line = "─".repeat(pair_w + 2),
        w_line = "─".repeat(weight_w + 2)
    );

    for bond in synthesis.serum.iter().take(MAX_BOND_ROWS) {
        let pair = format!("{} - {}", bond.from().id, bond.to().id);
        let _ = writeln!(
            out,
            "{}│ {:<pair_w$} │ {:>weight_w$.prec$} │",
            INDENT,
            truncate(&pair, pair_w),
            bond.weight(),
            pair_w = pair_w,
            weight_w = weight_w,
            prec = precision
        );
    }

    if synthesis.serum.len() > MAX_BOND_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<pair_w$} │ {:>weight_w$} │",
            INDENT,
            format!("({} more bonds)", synthesis.serum.len() - MAX_BOND_ROWS),
            "...",
            pair_w = pair_w,
            weight_w = weight_w
        );
    }

    let _ = writeln!(
        out,
        "{}├{p_line}┼{w_line}┤",
        INDENT,
        p_line = "─".repeat(pair_w + 2),
        w_line = "─".repeat(weight_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<pair_w$} │ {:>weight_w$.prec$} │",
        INDENT,
        format!("Total ({} admitted, {} rejected)", synthesis.serum.len(), synthesis.rejected.len()),
        synthesis.total_weight(),
        pair_w = pair_w,
        weight_w = weight_w,
        prec = precision
    );
    let _ = writeln!(
        out,
        "{}└{p_line}┴{w_line}┘",
        INDENT,
        p_line = "─".repeat(pair_w + 2),
        w_line = "─".repeat(weight_w + 2)
    );
}

pub fn print_structure_listing(structures: &[MolecularStructure<'_>]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let key_w = 16usize;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + 6);

    let mut rows: Vec<(String, String)> = structures
        .iter()
        .enumerate()
        .take(MAX_STRUCTURE_ROWS)
        .map(|(i, s)| {
            (
                format!("#{} ({})", i + 1, s.len()),
                id_summary(s.sorted_ids(), val_w),
            )
        })
        .collect();
    if structures.len() > MAX_STRUCTURE_ROWS {
        rows.push((
            "...".to_string(),
            format!("({} more structures)", structures.len() - MAX_STRUCTURE_ROWS),
        ));
    }

    print_kv_table(&mut out, "Molecular Structures", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(impl AsRef<str>, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key.as_ref(), key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
