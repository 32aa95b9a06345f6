//! Example: trace a K-digit selection through the checkpointed layered table.
//!
//! Run with:
//! `cargo run --example table_path`

use subseq_max::strategies::table::KSubsequenceTable;
use subseq_max::{DigitSequence, LayeredEngineBuilder};

fn main() {
    let seq: DigitSequence = match "907050301020304".parse() {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let k = 12;

    for block_size in [1, 3, 11] {
        let engine = LayeredEngineBuilder::new(KSubsequenceTable::new(&seq, k))
            .with_block_size(block_size)
            .build();
        let (value, path) = engine.run();
        println!(
            "block size {block_size:>2}: {} checkpoints, value {value}",
            engine.num_checkpoints()
        );
        println!("  indices {path:?}");
    }

    // Positions are kept by slot, so the zeros after the 9 stay in place.
    let engine = LayeredEngineBuilder::new(KSubsequenceTable::new(&seq, k)).build();
    let (value, path) = engine.run();
    assert_eq!(value, seq.value_at(&path));
    println!("default block size {}: {value}", engine.block_size());
}
