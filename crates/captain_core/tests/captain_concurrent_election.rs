use captain_core::{Acquisition, Captain};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 50;

// Sole test in this binary: no other test may elect the captain first.
#[test]
fn fifty_threads_racing_on_first_access_see_one_captain() {
    assert!(!Captain::is_elected());

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let (captain, outcome) = Captain::acquire();
                (captain as *const Captain as usize, captain.id(), outcome)
            })
        })
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread should not panic"))
        .collect::<Vec<_>>();

    let addresses = results
        .iter()
        .map(|(address, _, _)| *address)
        .collect::<HashSet<_>>();
    let ids = results.iter().map(|(_, id, _)| *id).collect::<HashSet<_>>();
    let elections = results
        .iter()
        .filter(|(_, _, outcome)| *outcome == Acquisition::Created)
        .count();

    assert_eq!(results.len(), THREADS);
    assert_eq!(addresses.len(), 1);
    assert_eq!(ids.len(), 1);
    assert_eq!(elections, 1);
    assert!(Captain::is_elected());
}
