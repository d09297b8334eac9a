use gentree::Set;

use std::collections::HashSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let set: Set<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set: Set<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut set: Set<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        set.remove(delete);
        if set.validate().is_err() {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !set.contains(x))
        && still_present.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn insert_then_remove_is_identity(xs: Vec<i32>, extra: i32) -> bool {
    let mut set: Set<i32> = xs.iter().copied().filter(|x| *x != extra).collect();
    let before: Vec<i32> = set.iter().copied().collect();

    set.add(extra) && set.remove(&extra) && set.iter().copied().eq(before) && set.validate().is_ok()
}

#[quickcheck]
fn equality_is_by_contents(xs: Vec<i8>) -> bool {
    let forwards: Set<i8> = xs.iter().copied().collect();
    let backwards: Set<i8> = xs.iter().rev().copied().collect();

    forwards == backwards
}
