use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use waterfall_core::{
    group_len, locate, strided_groups, GridError, StridedGroupView, StridedSource,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn eight_items_over_two_groups_alternate() {
    let source: Vec<u32> = (0..8).collect();

    assert_eq!(source.strided_group(0, 2).to_vec(), vec![0, 2, 4, 6]);
    assert_eq!(source.strided_group(1, 2).to_vec(), vec![1, 3, 5, 7]);
}

#[test]
fn seven_items_over_three_groups_front_load_remainder() {
    let source: Vec<u32> = (0..7).collect();

    let lengths: Vec<usize> = source.strided_groups(3).map(|view| view.len()).collect();
    assert_eq!(lengths, vec![3, 2, 2]);
    assert_eq!(source.strided_group(0, 3).to_vec(), vec![0, 3, 6]);
    assert_eq!(source.strided_group(1, 3).to_vec(), vec![1, 4]);
    assert_eq!(source.strided_group(2, 3).to_vec(), vec![2, 5]);
}

#[test]
fn empty_source_yields_empty_groups() {
    let source: Vec<u32> = Vec::new();

    for view in source.strided_groups(4) {
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
        assert_eq!(view.to_string(), "[]");
    }
}

#[test]
fn single_group_is_the_whole_source() {
    let source = vec!["a", "b", "c", "d", "e"];
    let view = source.strided_group(0, 1);

    assert_eq!(view.to_vec(), source);
    assert_eq!(view.to_string(), "[a, b, c, d, e]");
}

#[test]
fn access_past_end_is_index_out_of_bounds() {
    let source: Vec<u32> = (0..7).collect();

    for view in source.strided_groups(3) {
        let err = view.at(view.len()).unwrap_err();
        assert_eq!(
            err,
            GridError::IndexOutOfBounds {
                index: view.len(),
                len: view.len(),
            }
        );
        assert_eq!(view.get(view.len()), None);
    }
}

#[test]
fn at_translates_local_to_flat_index() {
    let source: Vec<u32> = (100..110).collect();
    let view = source.strided_group(2, 4);

    assert_eq!(view.at(0), Ok(&102));
    assert_eq!(view.at(1), Ok(&106));
    assert_eq!(view.flat_index(1), Some(6));
    assert_eq!(view.flat_index(2), None);
    assert_eq!(view[1], 106);
}

#[test]
fn partition_reconstructs_source_for_all_small_shapes() {
    for len in 0..40usize {
        let source: Vec<usize> = (0..len).collect();
        for total_groups in 1..12usize {
            let views: Vec<_> = source.strided_groups(total_groups).collect();

            let total: usize = views.iter().map(|view| view.len()).sum();
            assert_eq!(total, len, "len={len} groups={total_groups}");

            let mut rebuilt = Vec::with_capacity(len);
            let longest = views.iter().map(|view| view.len()).max().unwrap_or(0);
            for local in 0..longest {
                for view in &views {
                    if let Some(element) = view.get(local) {
                        rebuilt.push(*element);
                    }
                }
            }
            assert_eq!(rebuilt, source, "len={len} groups={total_groups}");

            for (group, view) in views.iter().enumerate() {
                assert_eq!(view.len(), group_len(len, group, total_groups));
                let expected = len / total_groups + usize::from(group < len % total_groups);
                assert_eq!(view.len(), expected);
            }
        }
    }
}

#[test]
fn flat_index_mapping_is_a_bijection() {
    let len = 23usize;
    let source: Vec<usize> = (0..len).collect();
    let total_groups = 5;

    let mut seen = vec![false; len];
    for view in source.strided_groups(total_groups) {
        for local in 0..view.len() {
            let flat = view.flat_index(local).expect("local index is in range");
            assert!(!seen[flat], "flat index {flat} reached twice");
            seen[flat] = true;
            assert_eq!(locate(flat, total_groups), Some((view.group(), local)));
        }
    }
    assert!(seen.into_iter().all(|hit| hit));
}

#[test]
fn reverse_iteration_mirrors_forward_iteration() {
    let source: Vec<u32> = (0..11).collect();
    let view = source.strided_group(1, 3);

    let forward: Vec<u32> = view.iter().copied().collect();
    let mut backward: Vec<u32> = view.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(view.last(), Some(&10));
    assert_eq!(view.first(), Some(&1));
}

#[test]
fn iteration_is_restartable() {
    let source = [3, 1, 4, 1, 5, 9];
    let view = StridedGroupView::new(&source, 0, 2);

    let first: Vec<_> = view.iter().collect();
    let second: Vec<_> = (&view).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(view.iter().len(), 3);
}

#[test]
fn equal_elements_mean_equal_views_and_hashes() {
    let left = vec![1, 9, 2, 9, 3, 9];
    let right = vec![1, 2, 3];

    let strided = left.strided_group(0, 2);
    let whole = right.strided_group(0, 1);

    assert_eq!(strided, whole);
    assert_eq!(hash_of(&strided), hash_of(&whole));
}

#[test]
fn changing_one_element_breaks_equality() {
    let left = vec![1, 9, 2, 9, 3, 9];
    let right = vec![1, 9, 2, 9, 4, 9];

    assert_ne!(left.strided_group(0, 2), right.strided_group(0, 2));
    assert_eq!(left.strided_group(1, 2), right.strided_group(1, 2));
}

#[test]
fn views_over_different_source_types_compare_by_elements() {
    let array = [0, 1, 2, 3];
    let vector = vec![0, 2];

    assert_eq!(
        StridedGroupView::new(&array, 0, 2),
        StridedGroupView::new(&vector, 0, 1)
    );
}

#[test]
fn try_new_rejects_invalid_group_parameters() {
    let source = vec![1, 2, 3];

    assert_eq!(
        StridedGroupView::try_new(&source, 0, 0).unwrap_err(),
        GridError::InvalidGroupCount { total_groups: 0 }
    );
    assert_eq!(
        StridedGroupView::try_new(&source, 3, 3).unwrap_err(),
        GridError::GroupOutOfRange {
            group: 3,
            total_groups: 3,
        }
    );
}

#[test]
#[should_panic(expected = "invalid strided group view")]
fn new_fails_fast_on_zero_groups() {
    let source = vec![1, 2, 3];
    let _view = StridedGroupView::new(&source, 0, 0);
}

#[test]
fn strided_groups_with_zero_groups_is_empty() {
    let source = vec![1, 2, 3];
    assert_eq!(strided_groups(&source, 0).count(), 0);
}

#[test]
fn views_work_over_unsized_slices() {
    let owned: Vec<char> = "waterfall".chars().collect();
    let slice: &[char] = &owned[2..];

    let view = slice.strided_group(0, 3);
    assert_eq!(view.to_vec(), vec!['t', 'f', 'l']);
}
