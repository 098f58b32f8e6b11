// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chirp repository tests: contiguous ids, renumbering, author queries.

use chirpy::error::AppError;
use chirpy::models::Chirp;

mod common;

fn ids(chirps: &[Chirp]) -> Vec<u64> {
    let mut ids: Vec<u64> = chirps.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_create_assigns_sequential_ids() {
    let repos = common::test_repos();

    for n in 1..=10u64 {
        let chirp = repos.chirps.create(&format!("chirp {}", n), 1).unwrap();
        assert_eq!(chirp.id, n);
    }

    assert_eq!(
        ids(&repos.chirps.list_all().unwrap()),
        (1..=10).collect::<Vec<_>>()
    );
}

#[test]
fn test_delete_renumbers_higher_ids() {
    let repos = common::test_repos();
    for n in 1..=5 {
        repos.chirps.create(&format!("chirp {}", n), 1).unwrap();
    }

    repos.chirps.delete_by_id(2).unwrap();

    let all = repos.chirps.list_all().unwrap();
    assert_eq!(ids(&all), vec![1, 2, 3, 4]);
    assert_eq!(repos.chirps.get_by_id(1).unwrap().body, "chirp 1");
    assert_eq!(repos.chirps.get_by_id(2).unwrap().body, "chirp 3");
    assert_eq!(repos.chirps.get_by_id(4).unwrap().body, "chirp 5");
    assert!(all.iter().all(|c| c.body != "chirp 2"));

    // Creation continues from the compacted count
    assert_eq!(repos.chirps.create("chirp 6", 1).unwrap().id, 5);
}

#[test]
fn test_delete_missing_leaves_store_unchanged() {
    let repos = common::test_repos();
    repos.chirps.create("only", 1).unwrap();
    let before = repos.store.load().unwrap();

    let err = repos.chirps.delete_by_id(2).unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(repos.store.load().unwrap(), before);
}

#[test]
fn test_get_missing_chirp() {
    let repos = common::test_repos();
    assert!(matches!(
        repos.chirps.get_by_id(1),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_list_by_author() {
    let repos = common::test_repos();
    repos.chirps.create("a1", 1).unwrap();
    repos.chirps.create("b1", 2).unwrap();
    repos.chirps.create("a2", 1).unwrap();

    let by_one = repos.chirps.list_by_author(1).unwrap();
    assert_eq!(ids(&by_one), vec![1, 3]);
    assert!(by_one.iter().all(|c| c.author_id == 1));

    assert_eq!(ids(&repos.chirps.list_by_author(2).unwrap()), vec![2]);
    assert!(matches!(
        repos.chirps.list_by_author(3),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_delete_authored_by_checks_owner() {
    let repos = common::test_repos();
    repos.chirps.create("mine", 1).unwrap();

    let err = repos.chirps.delete_authored_by(1, 2).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
    assert_eq!(repos.chirps.list_all().unwrap().len(), 1);

    repos.chirps.delete_authored_by(1, 1).unwrap();
    assert!(repos.chirps.list_all().unwrap().is_empty());

    assert!(matches!(
        repos.chirps.delete_authored_by(1, 1),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_example_scenario() {
    let repos = common::test_repos();
    let alice = repos.users.create("alice@example.com", "hash").unwrap();

    let first = repos.chirps.create("hello world", alice.id).unwrap();
    let second = repos.chirps.create("second", alice.id).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    repos.chirps.delete_by_id(1).unwrap();

    let remaining = repos.chirps.list_all().unwrap();
    assert_eq!(
        remaining,
        vec![Chirp {
            id: 1,
            body: "second".to_string(),
            author_id: alice.id,
        }]
    );
}
