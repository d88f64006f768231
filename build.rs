use std::io::prelude::*;

const DICTIONARY: &str = include_str!("dictionary.txt");

fn main() {
    println!("cargo:rerun-if-changed=dictionary.txt");
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("dictionary.rs"))
        .expect("could not create file in OUT_DIR");

    // Same acceptance rule as `Index::load`: five ASCII letters, file order.
    let words: Vec<String> = DICTIONARY
        .lines()
        .map(str::trim)
        .filter(|line| line.len() == 5 && line.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect();

    writeln!(f, "pub const DICTIONARY: [&str; {}] = [", words.len()).unwrap();
    for word in &words {
        writeln!(f, "\"{}\",", word).unwrap();
    }
    writeln!(f, "];").unwrap();

    let mut shipped = phf_codegen::Set::new();
    let mut seen = std::collections::HashSet::new();
    for word in &words {
        if seen.insert(word.as_str()) {
            shipped.entry(word.as_str());
        }
    }
    writeln!(
        f,
        "static SHIPPED: phf::Set<&'static str> = {};",
        shipped.build()
    )
    .unwrap();
}
