// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Cyclic rotation shared by interval arrays and quality patterns.

/// Rotate a slice left by `n` positions, returning a new vector.
///
/// Negative `n` rotates right. Rotating by `n` then by `-n` restores the input.
pub fn rotate_left<T: Clone>(items: &[T], n: isize) -> Vec<T> {
    let mut rotated = items.to_vec();
    if !rotated.is_empty() {
        let shift = n.rem_euclid(rotated.len() as isize) as usize;
        rotated.rotate_left(shift);
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_left() {
        assert_eq!(rotate_left(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
        assert_eq!(rotate_left(&[1, 2, 3, 4], 5), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_rotate_right() {
        assert_eq!(rotate_left(&[1, 2, 3, 4], -1), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_rotation_inverse() {
        let items: Vec<u8> = (0..12).collect();
        for n in -20..20 {
            assert_eq!(rotate_left(&rotate_left(&items, n), -n), items);
        }
    }

    #[test]
    fn test_rotate_empty() {
        let empty: Vec<u8> = Vec::new();
        assert!(rotate_left(&empty, 3).is_empty());
    }
}
