// Quick demo: build a DAWG from a word list and query it.
//
// Pass a path to a sorted word list (one word per line) to use your own
// dictionary; without arguments a small embedded list is used.

use dawg::Dawg;

const EMBEDDED: [&str; 9] = [
    "abaca",
    "abacas",
    "abacost",
    "abacosts",
    "abacule",
    "abacules",
    "abaissa",
    "abaissable",
    "balader",
];

fn main() {
    let words: Vec<String> = match std::env::args().nth(1) {
        Some(path) => {
            let contents = std::fs::read_to_string(&path).expect("failed to read word list");
            contents
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| line.to_string())
                .collect()
        }
        None => EMBEDDED.iter().map(|w| w.to_string()).collect(),
    };

    let dawg = Dawg::from_words(&words).expect("word list must be sorted ascending");
    println!(
        "{} words -> {} states ({:?})",
        dawg.word_count(),
        dawg.state_count(),
        dawg
    );

    for probe in ["abaca", "abacost", "balade", "balader", "zebra"] {
        let mark = if dawg.contains(probe) { "yes" } else { "no " };
        println!("  {mark}  {probe}");
    }
}
