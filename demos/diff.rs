//! Example: line diff of two small documents.
//!
//! Run with:
//! `cargo run --example diff`

use lcs_diff::{align, render::numbered, DiffSummary, Hirschberg};

fn main() {
    let old = ["fn main() {", "    let x = 1;", "    println!(\"{x}\");", "}"];
    let new = [
        "fn main() {",
        "    let x = 2;",
        "    println!(\"{x}\");",
        "    println!(\"done\");",
        "}",
    ];

    let solver = Hirschberg::new();
    let (pairs, stats) = solver.run(&old, &new);
    let lcs: Vec<&&str> = pairs.iter().map(|&(i, _)| &old[i]).collect();

    println!("LCS length: {}", lcs.len());
    println!(
        "Splits: {}, max depth: {}, row cells: {}",
        stats.splits, stats.max_depth, stats.row_cells
    );

    let ops: Vec<_> = align(&old, &new, &lcs).collect();
    for line in numbered(ops.iter().copied()) {
        println!("{line}");
    }
    println!("{}", DiffSummary::from_ops(&ops));
}
