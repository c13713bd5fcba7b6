//! Suffix array construction over cyclic rotations.
//!
//! The builder orders the cyclic rotations of a byte sequence, not its
//! plain suffixes: comparisons wrap around the end of the input. This is
//! the ordering the Burrows-Wheeler Transform is defined over, and the
//! wraparound is what makes the transform exactly invertible.
//!
//! The algorithm is prefix doubling with rank refinement: an initial
//! single-byte counting sort seeds the order, then each round doubles the
//! compared prefix length by stably re-sorting on the previous round's
//! equivalence classes. Runs in O(n log n).

/// Build the suffix array of `data` under cyclic rotation order.
///
/// The result is a permutation of `0..n`: entry `i` is the start index of
/// the `i`-th smallest cyclic rotation. Equal rotations (possible when the
/// input is periodic) keep a stable relative order, which is all the
/// transform needs to round-trip.
pub fn build(data: &[u8]) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    // Seed: counting sort of positions by their first byte.
    let mut count = [0usize; 256];
    for &byte in data {
        count[byte as usize] += 1;
    }
    let mut starts = [0usize; 256];
    for value in 1..256 {
        starts[value] = starts[value - 1] + count[value - 1];
    }
    let mut suffix_array = vec![0usize; n];
    for (i, &byte) in data.iter().enumerate() {
        suffix_array[starts[byte as usize]] = i;
        starts[byte as usize] += 1;
    }

    // Order-1 equivalence classes: positions share a class iff they share
    // a first byte.
    let mut classes = vec![0usize; n];
    for i in 1..n {
        classes[suffix_array[i]] = if data[suffix_array[i]] == data[suffix_array[i - 1]] {
            classes[suffix_array[i - 1]]
        } else {
            classes[suffix_array[i - 1]] + 1
        };
    }

    // Doubling rounds: after round k the array is sorted by length-2^(k+1)
    // cyclic prefixes.
    let mut k = 0;
    while (1usize << k) < n {
        let half = 1usize << k;

        // Shift each entry back by 2^k (mod n) so that a stable sort on
        // the current classes yields the order of the doubled prefixes.
        for entry in suffix_array.iter_mut() {
            *entry = (*entry + n - half) % n;
        }

        suffix_array = count_sort(&suffix_array, &classes);

        // Refine: adjacent entries share a class iff both halves of their
        // doubled prefixes do.
        let mut refined = vec![0usize; n];
        for j in 1..n {
            let previous = (
                classes[suffix_array[j - 1]],
                classes[(suffix_array[j - 1] + half) % n],
            );
            let current = (
                classes[suffix_array[j]],
                classes[(suffix_array[j] + half) % n],
            );
            refined[suffix_array[j]] = if previous == current {
                refined[suffix_array[j - 1]]
            } else {
                refined[suffix_array[j - 1]] + 1
            };
        }
        classes = refined;

        k += 1;
    }

    suffix_array
}

/// Stable counting sort of `suffix_array` keyed by each entry's
/// equivalence class. Classes are contiguous integers below `n`, so the
/// bucketing is linear.
fn count_sort(suffix_array: &[usize], classes: &[usize]) -> Vec<usize> {
    let n = suffix_array.len();

    let mut count = vec![0usize; n];
    for &class in classes {
        count[class] += 1;
    }

    let mut starts = vec![0usize; n];
    for i in 1..n {
        starts[i] = starts[i - 1] + count[i - 1];
    }

    let mut sorted = vec![0usize; n];
    for &entry in suffix_array {
        let class = classes[entry];
        sorted[starts[class]] = entry;
        starts[class] += 1;
    }

    sorted
}
