//! Tests for tree mutation methods: append_child, remove_child, detach,
//! remove_subtree.

use trellis_dom::{NodeId, Tree, TreeError};

/// Helper to build a parent with three labelled children.
fn parent_with_three(tree: &mut Tree<&'static str>) -> (NodeId, NodeId, NodeId, NodeId) {
    let parent = tree.alloc("div");
    let a = tree.alloc("a");
    let b = tree.alloc("b");
    let c = tree.alloc("c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);
    (parent, a, b, c)
}

// ========== append_child ==========

#[test]
fn test_append_child_sets_links() {
    let mut tree = Tree::new();
    let parent = tree.alloc("div");
    let child = tree.alloc("p");
    tree.append_child(parent, child);

    assert_eq!(tree.children(parent), &[child]);
    assert_eq!(tree.parent(child), Some(parent));
    assert_eq!(tree.parent(parent), None);
}

#[test]
fn test_append_child_moves_from_old_parent() {
    let mut tree = Tree::new();
    let (old_parent, a, b, c) = parent_with_three(&mut tree);
    let new_parent = tree.alloc("section");

    tree.append_child(new_parent, b);

    // The old parent's list shrank by one before the child was inserted.
    assert_eq!(tree.children(old_parent), &[a, c]);
    assert_eq!(tree.children(new_parent), &[b]);
    assert_eq!(tree.parent(b), Some(new_parent));
}

#[test]
fn test_append_child_to_same_parent_moves_to_end() {
    let mut tree = Tree::new();
    let (parent, a, b, c) = parent_with_three(&mut tree);

    tree.append_child(parent, a);

    assert_eq!(tree.children(parent), &[b, c, a]);
}

#[test]
fn test_try_append_child_rejects_self() {
    let mut tree = Tree::new();
    let node = tree.alloc("div");

    assert_eq!(
        tree.try_append_child(node, node),
        Err(TreeError::Cycle {
            parent: node,
            child: node
        })
    );
}

#[test]
fn test_try_append_child_rejects_ancestor() {
    let mut tree = Tree::new();
    let grandparent = tree.alloc("html");
    let parent = tree.alloc("body");
    let child = tree.alloc("div");
    tree.append_child(grandparent, parent);
    tree.append_child(parent, child);

    let err = tree.try_append_child(child, grandparent).unwrap_err();
    assert_eq!(
        err,
        TreeError::Cycle {
            parent: child,
            child: grandparent
        }
    );

    // Nothing moved.
    assert_eq!(tree.parent(grandparent), None);
    assert_eq!(tree.children(child).len(), 0);
}

#[test]
#[should_panic(expected = "invalid tree edit")]
fn test_append_child_panics_on_cycle() {
    let mut tree = Tree::new();
    let parent = tree.alloc("div");
    let child = tree.alloc("p");
    tree.append_child(parent, child);
    tree.append_child(child, parent);
}

// ========== remove_child ==========

#[test]
fn test_remove_child_first_of_three() {
    let mut tree = Tree::new();
    let (parent, a, b, c) = parent_with_three(&mut tree);

    assert!(tree.remove_child(parent, a));

    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.parent(a), None);
}

#[test]
fn test_remove_child_not_a_child_is_noop() {
    let mut tree = Tree::new();
    let (parent, a, _b, _c) = parent_with_three(&mut tree);
    let stranger = tree.alloc("x");

    assert!(!tree.remove_child(parent, stranger));
    assert!(!tree.remove_child(a, parent));
    assert_eq!(tree.children(parent).len(), 3);
}

#[test]
fn test_detach_returns_old_parent() {
    let mut tree = Tree::new();
    let (parent, _a, b, _c) = parent_with_three(&mut tree);

    assert_eq!(tree.detach(b), Some(parent));
    assert_eq!(tree.detach(b), None);
}

// ========== traversal ==========

#[test]
fn test_subtree_is_preorder() {
    let mut tree = Tree::new();
    let (parent, a, b, c) = parent_with_three(&mut tree);
    let a1 = tree.alloc("a1");
    tree.append_child(a, a1);

    let order: Vec<NodeId> = tree.subtree(parent).collect();
    assert_eq!(order, vec![parent, a, a1, b, c]);
}

#[test]
fn test_ancestors_and_root_of() {
    let mut tree = Tree::new();
    let (parent, a, _b, _c) = parent_with_three(&mut tree);
    let a1 = tree.alloc("a1");
    tree.append_child(a, a1);

    assert_eq!(tree.ancestors(a1).collect::<Vec<_>>(), vec![a, parent]);
    assert_eq!(tree.root_of(a1), parent);
    assert_eq!(tree.root_of(parent), parent);
    assert!(tree.is_descendant_of(a1, parent));
    assert!(!tree.is_descendant_of(parent, a1));
}

// ========== remove_subtree ==========

#[test]
fn test_remove_subtree_destroys_descendants() {
    let mut tree = Tree::new();
    let (parent, a, b, c) = parent_with_three(&mut tree);
    let a1 = tree.alloc("a1");
    tree.append_child(a, a1);
    assert_eq!(tree.len(), 5);

    assert_eq!(tree.remove_subtree(a), 2);

    assert_eq!(tree.len(), 3);
    assert!(!tree.contains(a));
    assert!(!tree.contains(a1));
    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(
        tree.try_append_child(parent, a),
        Err(TreeError::Stale(a))
    );
}

#[test]
#[should_panic(expected = "is not in the tree")]
fn test_index_stale_id_panics() {
    let mut tree = Tree::new();
    let node = tree.alloc("div");
    let _ = tree.remove_subtree(node);
    let _ = tree[node];
}
