// tests/store.rs
//
// Reload semantics: snapshots stay valid, failures keep the old set.

use std::cell::Cell;
use std::sync::Arc;
use std::thread;

use qe_compare::config::options::SourceKind;
use qe_compare::progress::{NullProgress, Progress};
use qe_compare::source::DataSource;
use qe_compare::store::ResultStore;
use qe_compare::{Category, ClimberRecord, LoadError, Region, ResultSet};

fn set_of(n: usize) -> ResultSet {
    ResultSet::new(
        (0..n)
            .map(|i| ClimberRecord {
                region: Region(11),
                category: Category::FYC,
                first_name: format!("F{i}"),
                last_name: "L".into(),
                score: 1000 + i as i32,
                competition: "QE".into(),
            })
            .collect(),
    )
}

/// Serves `size` records, or fails when `size` is 0.
struct Fixed {
    size: usize,
    calls: Cell<usize>,
}

impl Fixed {
    fn new(size: usize) -> Self { Self { size, calls: Cell::new(0) } }
}

impl DataSource for Fixed {
    fn describe(&self) -> String { format!("fixed {}", self.size) }

    fn load(&self, mut progress: Option<&mut dyn Progress>) -> Result<ResultSet, LoadError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(p) = progress.as_deref_mut() {
            p.begin(self.size);
        }
        if self.size == 0 {
            return Err(LoadError::Empty);
        }
        Ok(set_of(self.size))
    }
}

#[test]
fn open_fails_without_a_store() {
    assert!(matches!(ResultStore::open(&Fixed::new(0), None), Err(LoadError::Empty)));
    let store = ResultStore::open(&Fixed::new(4), Some(&mut NullProgress)).unwrap();
    assert_eq!(store.snapshot().len(), 4);
}

#[test]
fn reload_swaps_but_old_snapshot_survives() {
    let store = ResultStore::open(&Fixed::new(2), None).unwrap();
    let before = store.snapshot();

    let after = store.reload(&Fixed::new(5), None).unwrap();
    assert_eq!(after.len(), 5);
    assert!(Arc::ptr_eq(&after, &store.snapshot()));
    assert_eq!(store.snapshot().len(), 5);
    // readers holding the old Arc still see a complete old set
    assert_eq!(before.len(), 2);
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn failed_reload_keeps_current_set() {
    let store = ResultStore::open(&Fixed::new(3), None).unwrap();
    let before = store.snapshot();

    let failing = Fixed::new(0);
    assert!(store.reload(&failing, None).is_err());
    assert_eq!(failing.calls.get(), 1);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn replace_returns_previous() {
    let store = ResultStore::new(set_of(1));
    let old = store.replace(set_of(7));
    assert_eq!(old.len(), 1);
    assert_eq!(store.snapshot().len(), 7);
}

#[test]
fn concurrent_readers_see_whole_sets() {
    let store = Arc::new(ResultStore::new(set_of(10)));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let n = store.snapshot().len();
                    assert!(n == 10 || n == 20, "partial set of {n}");
                }
            })
        })
        .collect();
    for _ in 0..50 {
        store.replace(set_of(20));
        store.replace(set_of(10));
    }
    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn reload_hands_back_its_own_set_when_raced() {
    let store = Arc::new(ResultStore::new(set_of(1)));
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..200 {
                store.replace(set_of(9));
            }
        })
    };
    for _ in 0..200 {
        let got = store.reload(&Fixed::new(3), None).unwrap();
        assert_eq!(got.len(), 3);
    }
    writer.join().unwrap();
}

#[test]
fn missing_startup_file_is_an_error() {
    let mut path = std::env::temp_dir();
    path.push("qe_store_missing/none.csv");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());

    let err = ResultStore::open_location(path.to_str().unwrap(), SourceKind::Auto, None).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err}");

    let csv = std::env::temp_dir().join("qe_store_ok.csv");
    std::fs::write(&csv, "Region,Category,FirstName,LastName,Score,Comp\n11,MJR,A,B,2000,QE\n").unwrap();
    let store = ResultStore::open_location(csv.to_str().unwrap(), SourceKind::Auto, None).unwrap();
    assert_eq!(store.snapshot().len(), 1);
}
