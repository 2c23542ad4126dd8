//! Permutation math.
//!
//! Permutations are stored as slices where `perm[i]` is the image of `i`.

use itertools::Itertools;

/// Parity of a permutation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Parity {
    /// Even number of swaps.
    #[default]
    Even = 0,
    /// Odd number of swaps.
    Odd = 1,
}

/// Returns whether `perm` is a bijection on `0..perm.len()`.
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    perm.iter()
        .all(|&i| i < perm.len() && !std::mem::replace(&mut seen[i], true))
}

/// Returns whether `perm` is the identity.
pub fn is_identity(perm: &[usize]) -> bool {
    perm.iter().enumerate().all(|(i, &j)| i == j)
}

/// Returns the nontrivial cycles of a permutation, each starting from its
/// smallest element, sorted by first element.
pub fn cycles(perm: &[usize]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; perm.len()];
    let mut ret = vec![];
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let cycle = std::iter::successors(Some(start), |&i| Some(perm[i]))
            .take_while(|&i| !std::mem::replace(&mut visited[i], true))
            .collect_vec();
        if cycle.len() > 1 {
            ret.push(cycle);
        }
    }
    ret
}

/// Returns the parity of a permutation.
pub fn parity(perm: &[usize]) -> Parity {
    // A cycle of length `n` is `n - 1` swaps.
    let swaps: usize = cycles(perm).iter().map(|c| c.len() - 1).sum();
    match swaps % 2 {
        0 => Parity::Even,
        _ => Parity::Odd,
    }
}

/// Returns the order of a permutation: the smallest positive number of times
/// it must be applied to get the identity.
pub fn order(perm: &[usize]) -> usize {
    cycles(perm)
        .iter()
        .map(|c| c.len())
        .fold(1, |acc, n| acc / gcd(acc, n) * n)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cycles_and_parity() {
        let perm = [1, 2, 0, 4, 3, 5];
        assert_eq!(cycles(&perm), vec![vec![0, 1, 2], vec![3, 4]]);
        assert_eq!(parity(&perm), Parity::Odd);
        assert_eq!(order(&perm), 6);

        let four_cycle = [1, 2, 3, 0];
        assert_eq!(parity(&four_cycle), Parity::Odd);
        assert_eq!(order(&four_cycle), 4);

        assert_eq!(parity(&[0, 1, 2]), Parity::Even);
        assert_eq!(order(&[0, 1, 2]), 1);
        assert!(cycles(&[]).is_empty());
    }

    #[test]
    fn test_is_permutation() {
        let perm = [2, 0, 3, 1];
        assert!(is_permutation(&perm));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 3]));
        assert!(is_identity(&[0, 1, 2]));
        assert!(!is_identity(&perm));
    }
}
