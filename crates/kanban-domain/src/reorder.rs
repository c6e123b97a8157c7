//! Index arithmetic shared by list and card moves.
//!
//! `move_within` removes the element at `from` and reinserts it at `to`,
//! where `to` indexes the sequence *after* the removal. `transfer` removes
//! from one sequence and inserts into another. Both validate every index
//! before touching either sequence, so a rejected move leaves everything
//! as it was.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for {len} items")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

fn check(index: usize, len: usize) -> Result<(), OutOfRange> {
    if index < len {
        Ok(())
    } else {
        Err(OutOfRange { index, len })
    }
}

pub fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), OutOfRange> {
    check(from, items.len())?;
    // After removal there are len - 1 items, so valid insert slots are 0..len.
    check(to, items.len())?;
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

pub fn transfer<T>(
    source: &mut Vec<T>,
    dest: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), OutOfRange> {
    check(from, source.len())?;
    check(to, dest.len() + 1)?;
    let item = source.remove(from);
    dest.insert(to, item);
    Ok(())
}

/// Mutable references to two distinct elements of a slice.
pub fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }
    if a < b {
        let (left, right) = items.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = items.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_within_forward_and_back() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_within(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        move_within(&mut items, 3, 0).unwrap();
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_move_within_to_last_slot() {
        let mut items = vec![1, 2, 3];
        move_within(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec![2, 3, 1]);
    }

    #[test]
    fn test_move_within_rejects_bad_indices() {
        let mut items = vec![1, 2, 3];
        assert_eq!(
            move_within(&mut items, 3, 0),
            Err(OutOfRange { index: 3, len: 3 })
        );
        assert!(move_within(&mut items, 0, 3).is_err());
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_transfer_into_empty_and_at_end() {
        let mut source = vec!['a', 'b'];
        let mut dest: Vec<char> = Vec::new();

        transfer(&mut source, &mut dest, 1, 0).unwrap();
        assert_eq!(source, vec!['a']);
        assert_eq!(dest, vec!['b']);

        transfer(&mut source, &mut dest, 0, 1).unwrap();
        assert!(source.is_empty());
        assert_eq!(dest, vec!['b', 'a']);
    }

    #[test]
    fn test_transfer_rejects_without_side_effects() {
        let mut source = vec![1];
        let mut dest = vec![2];
        assert!(transfer(&mut source, &mut dest, 0, 5).is_err());
        assert!(transfer(&mut source, &mut dest, 1, 0).is_err());
        assert_eq!(source, vec![1]);
        assert_eq!(dest, vec![2]);
    }

    #[test]
    fn test_pair_mut() {
        let mut items = vec![1, 2, 3];
        {
            let (a, b) = pair_mut(&mut items, 2, 0).unwrap();
            std::mem::swap(a, b);
        }
        assert_eq!(items, vec![3, 2, 1]);
        assert!(pair_mut(&mut items, 1, 1).is_none());
        assert!(pair_mut(&mut items, 0, 3).is_none());
    }
}
