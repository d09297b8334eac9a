use gentree::Map;

use std::collections::HashMap;

use crate::Op;

/// Applies a set of operations to a tree map and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut Map<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                assert_eq!(tree.set(k.clone(), v.clone()), map.insert(k.clone(), v.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(tree.remove(k), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Map::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.validate().is_ok()
        && tree.len() == map.len()
        && map.keys().all(|key| tree.get(key) == map.get(key))
}

#[quickcheck]
fn keys_come_out_sorted(ops: Vec<Op<i16, ()>>) -> bool {
    let mut tree = Map::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    let mut expected: Vec<_> = map.keys().copied().collect();
    expected.sort_unstable();
    tree.keys().copied().eq(expected)
}

#[quickcheck]
fn clone_is_independent(xs: Vec<(u8, u8)>, deletes: Vec<u8>) -> bool {
    let tree: Map<u8, u8> = xs.into_iter().collect();
    let snapshot: Vec<(u8, u8)> = tree.iter().map(|(k, v)| (*k, *v)).collect();

    let mut copy = tree.clone();
    for delete in &deletes {
        copy.remove(delete);
    }

    copy.validate().is_ok()
        && deletes.iter().all(|k| copy.get(k).is_none())
        && tree.iter().map(|(k, v)| (*k, *v)).eq(snapshot)
}
