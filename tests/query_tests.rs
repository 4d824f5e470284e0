mod util;

use quadtree_core::Tree;
use util::point_in_region;

#[test]
fn query_returns_subset_matching_predicate() {
    let tree = Tree::<(f64, f64)>::new(0.0, 0.0, 100.0, 100.0, point_in_region).unwrap();
    let points = [
        (10.0, 10.0),
        (90.0, 90.0),
        (50.0, 50.0),
        (0.0, 0.0),
        (100.0, 100.0),
    ];
    for pt in points {
        tree.insert(pt);
    }

    let found = tree.find_in_area(0.0, 0.0, 50.0, 50.0).unwrap();
    for pt in &found {
        assert!(pt.0 >= 0.0 && pt.0 <= 50.0 && pt.1 >= 0.0 && pt.1 <= 50.0);
    }
    assert!(found.contains(&(10.0, 10.0)));
    assert!(found.contains(&(0.0, 0.0)));
    assert!(found.contains(&(50.0, 50.0)));
}

#[test]
fn empty_tree_query_is_empty() {
    let tree = Tree::<(f64, f64)>::new(0.0, 0.0, 100.0, 100.0, point_in_region).unwrap();
    assert!(tree
        .find_in_area(0.0, 0.0, 100.0, 100.0)
        .unwrap()
        .is_empty());
}

#[test]
fn hundred_points_uniform_insert_and_full_query() {
    let tree = Tree::<(f64, f64)>::new(0.0, 0.0, 100.0, 100.0, point_in_region).unwrap();
    for i in 0..100 {
        let x = (i % 10) as f64 * 10.0 + 1.0;
        let y = (i / 10) as f64 * 10.0 + 1.0;
        tree.insert((x, y));
    }
    let all = tree.find_in_area(0.0, 0.0, 100.0, 100.0).unwrap();
    assert_eq!(all.len(), 100);

    tree.clear();
    assert!(tree
        .find_in_area(0.0, 0.0, 100.0, 100.0)
        .unwrap()
        .is_empty());
}

#[test]
fn query_region_touching_a_node_boundary_does_not_match_via_intersects() {
    // A region that only touches the root's edge (no overlap) should find
    // nothing, even if it would "contain" a boundary point.
    let tree = Tree::<(f64, f64)>::new(0.0, 0.0, 100.0, 100.0, point_in_region).unwrap();
    tree.insert((100.0, 50.0));
    let found = tree.find_in_area(100.0, 0.0, 50.0, 100.0).unwrap();
    // The query rectangle [100,150]x[0,100] touches the root's right edge
    // at x=100 but the root does not intersect it (strict inequality), so
    // the point stored at x=100 is unreachable through this region.
    assert!(found.is_empty());
}
