use super::*;

#[test]
fn test_from_square() {
    assert_eq!(SquareSet::from_square(1).0, 1);
    assert_eq!(SquareSet::from_square(50).0, 1 << 49);
}

#[test]
fn test_with_leaves_original_untouched() {
    let base = SquareSet::from_square(23);
    let extended = base.with(28);
    assert!(!base.contains(28));
    assert!(extended.contains(23));
    assert!(extended.contains(28));
    assert_eq!(extended.len(), 2);
}

#[test]
fn test_iterator_is_ascending() {
    let set: SquareSet = [32, 5, 17].into_iter().collect();
    let squares: Vec<Square> = set.collect();
    assert_eq!(squares, vec![5, 17, 32]);
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = SquareSet::EMPTY;
    set.insert(10);
    set.insert(10);
    set.insert(11);
    assert_eq!(set.len(), 2);
    assert!(set.contains(10));
    assert!(!set.is_empty());
}
