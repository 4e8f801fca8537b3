// Copyright (c) 2025 Spellbook Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the spell checker service.
//! Loads a word list from disk and queries it from several threads.

use std::sync::{Arc, Barrier};
use std::thread;

use spellbook_lib::config::search::SearchConfig;
use spellbook_lib::config::{ConfigLoader, ENV_PREFIX};
use spellbook_lib::dictionary::{SharedSpellChecker, SpellChecker};
use spellbook_lib::error::SpellbookError;

const WORD_LIST: &str = "bicycle 4.2\nbike 7.5\nshoe 1.0\nshoes 2.0\ncat 12.0\ncatalog 3.1\ncatch 8.8\n";

#[test]
fn test_spell_checker_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, WORD_LIST).unwrap();

    let config_path = dir.path().join("spellbook.toml");
    std::fs::write(
        &config_path,
        format!(
            "[dictionary]\nword_list = {:?}\n\n[search]\nmax_suggestions = 2\n",
            path.display().to_string()
        ),
    )
    .unwrap();

    let config = ConfigLoader::new(Some(&config_path), ENV_PREFIX).load().unwrap();
    let checker = SpellChecker::from_config(&config).unwrap();

    assert_eq!(checker.check("bike").unwrap(), 7.5);
    assert_eq!(
        checker.suggest("cat").unwrap(),
        vec![("cat".to_string(), 12.0), ("catch".to_string(), 8.8)]
    );

    let err: SpellbookError = checker.check("boot").unwrap_err().into();
    assert!(err.is_miss());
    let err: SpellbookError = checker.suggest("ca").unwrap_err().into();
    assert!(!err.is_miss());
}

#[test]
fn test_shared_checker_across_threads() {
    let shared = SharedSpellChecker::new(SpellChecker::new(SearchConfig::default()));
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..25 {
                    shared.insert(format!("word{t}x{i}"), i as f64).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.read().len(), threads * 25);
    assert_eq!(shared.check("word2x7").unwrap(), 7.0);
    assert_eq!(shared.suggest("word3x").unwrap().len(), 10);
}
