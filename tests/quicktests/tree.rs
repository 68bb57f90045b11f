use bst_engine::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

#[quickcheck]
fn size_counts_every_insert(xs: Vec<i8>) -> bool {
    build(&xs).size() == xs.len()
}

#[quickcheck]
fn to_array_is_sorted_multiset(xs: Vec<i8>) -> bool {
    let mut sorted = xs.clone();
    sorted.sort_unstable();

    build(&xs).to_array() == sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x) && tree.get_node(x).map(|n| n.value) == Some(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.get_node(x).is_none())
}

#[quickcheck]
fn contains_is_stable(xs: Vec<i8>, probe: i8) -> bool {
    let tree = build(&xs);
    let first = tree.contains(&probe);

    (0..4).all(|_| tree.contains(&probe) == first)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove(delete);
        // Only one copy goes per call.
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !removed {
                    return false;
                }
            }
            None if removed => return false,
            None => {}
        }
    }

    still_present.sort_unstable();
    tree.size() == still_present.len() && tree.to_array() == still_present
}

#[quickcheck]
fn removing_everything_empties(xs: Vec<i8>, order: Vec<usize>) -> bool {
    let mut tree = build(&xs);
    let mut remaining = xs;
    // Remove in an arbitrary order driven by `order`.
    let mut picks = order.into_iter().cycle();
    while !remaining.is_empty() {
        let i = picks.next().unwrap_or(0) % remaining.len();
        let x = remaining.swap_remove(i);
        if !tree.remove(&x) {
            return false;
        }
    }

    tree.is_empty() && tree.size() == 0
}

#[quickcheck]
fn missing_removal_is_noop(xs: Vec<i8>, missing: i8) -> bool {
    if xs.contains(&missing) {
        return true;
    }
    let mut tree = build(&xs);
    let before = tree.clone();

    !tree.remove(&missing) && tree.root() == before.root()
}
