//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p draughts_core -- [depth] [snapshot]
//!
//! Examples:
//!   # Default: depth 6 over the built-in positions
//!   cargo flamegraph --example perft_bench -p draughts_core
//!
//!   # Custom depth and position (white to move)
//!   cargo flamegraph --example perft_bench -p draughts_core -- 5 "000000000000000-0000000000000020000000000000000000"

use draughts_core::{perft, Board, Color};
use std::env;
use std::time::Instant;

/// Test positions as snapshot tokens, white to move.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "--------------------000000000011111111111111111111",
    ),
    (
        "Open centre",
        "------0---0-----0---00-000-0010001000111011-111111",
    ),
    (
        "Kings endgame",
        "=0000000000000-00000000-00000000002000000000010002",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);

    // If a snapshot is provided, use single position mode
    if let Some(snapshot) = args.get(2) {
        run_single_position(snapshot, depth);
    } else {
        run_all_positions(depth);
    }
}

fn load(snapshot: &str) -> Board {
    match Board::from_snapshot(snapshot) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("bad snapshot {snapshot:?}: {e}");
            std::process::exit(2);
        }
    }
}

fn count(board: &Board, depth: u8) -> u64 {
    match perft(board, Color::White, depth) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("perft failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run_single_position(snapshot: &str, depth: u8) {
    let board = load(snapshot);

    println!("Position:\n{board}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = count(&board, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = count(&board, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, snapshot) in TEST_POSITIONS {
        let board = load(snapshot);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = count(&board, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("Total: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
