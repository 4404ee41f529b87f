use rstest::rstest;
use std::fs::File;
use std::io::{Cursor, Write};
use tempfile::tempdir;
use typepass::api::build_cost_table;
use typepass::cost::BigramCostTable;
use typepass::error::{CompositionError, TypePassError, VocabularyError};
use typepass::layouts::Topology;
use typepass::vocabulary::{LoadOptions, Vocabulary};

fn grid() -> BigramCostTable {
    build_cost_table(Topology::Grid, 20).unwrap()
}

fn words_of(v: &Vocabulary) -> Vec<&str> {
    v.iter().map(|w| w.word()).collect()
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "bike the").unwrap();
    writeln!(f, "  Of").unwrap();
    writeln!(f).unwrap();
    writeln!(f, "a").unwrap();

    let v = Vocabulary::load_from_file(&path, &grid(), &LoadOptions::default()).unwrap();
    assert_eq!(words_of(&v), vec!["a", "of", "the", "bike"]);
    let costs: Vec<u32> = v.iter().map(|w| w.cost()).collect();
    assert_eq!(costs, vec![0, 6, 6, 12]);
    assert_eq!(v.max_word_len(), 4);
}

#[test]
fn test_unsorted_load_keeps_file_order() {
    let opts = LoadOptions {
        sort_by_length: false,
        ..Default::default()
    };
    let v = Vocabulary::from_reader(Cursor::new("the a bike of"), &grid(), &opts).unwrap();
    assert_eq!(words_of(&v), vec!["the", "a", "bike", "of"]);
    assert!(!v.is_sorted_by_length());
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let err = Vocabulary::load_from_file(&path, &grid(), &LoadOptions::default()).unwrap_err();
    match err {
        TypePassError::Vocabulary(VocabularyError::FileUnreadable { path: p, .. }) => {
            assert_eq!(p, path)
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_non_utf8_input_is_a_scan_failure() {
    let bytes: &[u8] = &[b'o', b'f', b' ', 0xff, 0xfe, b'\n'];
    let err = Vocabulary::from_reader(Cursor::new(bytes), &grid(), &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        TypePassError::Vocabulary(VocabularyError::ScanFailure(_))
    ));
}

#[rstest]
#[case("b4", '4')]
#[case("well-known", '-')]
#[case("café", 'é')]
#[case("it's", '\'')]
fn test_invalid_words_rejected_at_load(#[case] word: &str, #[case] symbol: char) {
    let err = Vocabulary::from_words(["of", word], &grid(), &LoadOptions::default()).unwrap_err();
    match err {
        TypePassError::Composition(CompositionError::InvalidWord { word: w, symbol: s }) => {
            assert_eq!(w, word);
            assert_eq!(s, symbol);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_sampling_caps_size() {
    let words: Vec<String> = ["at", "to", "be", "go", "we", "up", "on", "in", "tree", "fish"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let opts = LoadOptions {
        sample: Some(4),
        seed: Some(7),
        ..Default::default()
    };
    let v = Vocabulary::from_words(&words, &grid(), &opts).unwrap();
    assert_eq!(v.len(), 4);
    assert!(v.is_sorted_by_length());
    assert!(v.iter().all(|w| words.iter().any(|x| x == w.word())));

    // Sampling above the vocabulary size keeps everything.
    let opts = LoadOptions {
        sample: Some(100),
        ..Default::default()
    };
    assert_eq!(Vocabulary::from_words(&words, &grid(), &opts).unwrap().len(), 10);
}
