//! Tests for concurrent use
//!
//! Formulas share immutable subtrees through `Arc` and checkers carry no state
//! besides their configuration, so checks on different threads need no
//! synchronisation.

use propositions::{Checker, Formula};
use std::sync::Arc;
use std::thread;

#[test]
fn test_formula_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Formula>();
    assert_send_sync::<Checker>();
}

#[test]
fn test_concurrent_checks() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let p = Formula::variable(&format!("p{}", i));
                let q = Formula::variable(&format!("q{}", i));
                let f = p.or(&q).or(&p.not().and(&q.not()));
                Checker::new().is_valid(&f).expect("check failed")
            })
        })
        .collect();

    let results: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    assert_eq!(results, vec![true; 4]);
}

#[test]
fn test_shared_formula_across_threads() {
    // Every thread normalises the same tree; none may observe a change to it
    let shared = Arc::new(Formula::parse("~((p -> q) * (q -> r)) + (p -> r)").unwrap());
    let checker = Arc::new(Checker::new());
    let original = shared.to_string();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                let cnf = checker.normalize(&shared).expect("normalise failed");
                let valid = checker.is_valid(&shared).expect("check failed");
                (cnf.to_string(), valid)
            })
        })
        .collect();

    let results: Vec<(String, bool)> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    // Same answer everywhere, and the input is untouched
    assert!(results.iter().all(|r| r == &results[0]));
    assert!(results[0].1);
    assert_eq!(shared.to_string(), original);
}
