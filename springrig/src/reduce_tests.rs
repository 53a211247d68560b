use crate::{Scene, reduce_to_roots};

#[test]
fn nested_candidates_collapse_to_the_topmost_node() {
    let mut scene = Scene::new();
    let root = scene.add_root("Model");
    let a = scene.add_node(root, "A");
    let b = scene.add_node(a, "B");
    let c = scene.add_node(b, "C");

    assert_eq!(reduce_to_roots(&scene, &[c, b, a]), vec![a]);
}

#[test]
fn independent_branches_all_survive_in_input_order() {
    let mut scene = Scene::new();
    let root = scene.add_root("Model");
    let left = scene.add_node(root, "Left");
    let left_tip = scene.add_node(left, "LeftTip");
    let right = scene.add_node(root, "Right");
    let middle = scene.add_node(root, "Middle");

    let roots = reduce_to_roots(&scene, &[right, left, left_tip, middle]);
    assert_eq!(roots, vec![right, left, middle]);
}

#[test]
fn intermediate_non_candidates_do_not_shield_descendants() {
    let mut scene = Scene::new();
    let root = scene.add_root("Model");
    let a = scene.add_node(root, "A");
    let between = scene.add_node(a, "Between");
    let b = scene.add_node(between, "B");

    // `between` is not a candidate, but `a` still dominates `b`.
    assert_eq!(reduce_to_roots(&scene, &[a, b]), vec![a]);
}

#[test]
fn every_candidate_descends_from_exactly_one_root() {
    let mut scene = Scene::new();
    let root = scene.add_root("Model");
    let strand_a = scene.add_node(root, "StrandA");
    let a1 = scene.add_node(strand_a, "A1");
    let a2 = scene.add_node(a1, "A2");
    let strand_b = scene.add_node(root, "StrandB");
    let b1 = scene.add_node(strand_b, "B1");

    let candidates = [strand_a, a1, a2, strand_b, b1];
    let roots = reduce_to_roots(&scene, &candidates);

    for (i, &x) in roots.iter().enumerate() {
        for &y in &roots[i + 1..] {
            assert!(
                !scene.is_ancestor(x, y) && !scene.is_ancestor(y, x),
                "roots {x} and {y} are related"
            );
        }
    }
    for &candidate in &candidates {
        let owners = roots
            .iter()
            .filter(|&&r| r == candidate || scene.is_ancestor(r, candidate))
            .count();
        assert_eq!(owners, 1, "candidate {candidate} has {owners} owning roots");
    }
}
