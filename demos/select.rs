//! Example: pick the largest ordered 2-digit and K-digit values of a few banks.
//!
//! Run with:
//! `cargo run --example select`

use subseq_max::{maximize_k, select_k, select_pair, DigitSequence};

fn main() {
    let banks = [
        "987654321111111",
        "811111111111119",
        "234234234234278",
        "818181911112111",
        "9005",
    ];

    for text in banks {
        let seq: DigitSequence = match text.parse() {
            Ok(seq) => seq,
            Err(err) => {
                eprintln!("{text}: {err}");
                continue;
            }
        };

        let pair = select_pair(&seq);
        println!("{seq}");
        println!("  k=2  -> {} at {:?}", pair.value, pair.indices);

        let k = seq.len().min(12);
        let memo = maximize_k(&seq, k);
        let sel = select_k(&seq, k);
        assert_eq!(memo, sel.value);
        let picked: String = sel.digits(&seq).map(|d| char::from(b'0' + d)).collect();
        println!("  k={k:<2} -> {} (digits {picked})", sel.value);
    }
}
