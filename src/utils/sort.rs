use core::mem;

/// Stable LSD radix sort of a struct-of-arrays keyed by `u32`.
/// - Sorts `inds` ascending
/// - Reorders `vals` along with them
/// - Equal keys keep their input order
///
/// Used to order the column ids of a term-frequency row.
/// Complexity: 4 passes, each O(n + 256)
#[inline]
pub fn radix_sort_u32_soa<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    assert_eq!(inds.len(), vals.len());
    let n = inds.len();
    if n <= 1 {
        return;
    }

    // Small rows: insertion sort beats allocating scratch.
    if n <= 32 {
        insertion_sort_u32_soa(inds, vals);
        return;
    }

    let mut src_inds = inds.to_vec();
    let mut src_vals = vals.to_vec();
    let mut dst_inds = vec![0u32; n];
    let mut dst_vals = vals.to_vec();

    for shift in [0u32, 8, 16, 24] {
        let mut count = [0usize; 256];
        for &k in &src_inds {
            count[((k >> shift) & 0xFF) as usize] += 1;
        }

        // prefix sum -> starting positions
        let mut sum = 0usize;
        for c in count.iter_mut() {
            let tmp = *c;
            *c = sum;
            sum += tmp;
        }

        for (&k, &v) in src_inds.iter().zip(src_vals.iter()) {
            let b = ((k >> shift) & 0xFF) as usize;
            let pos = count[b];
            count[b] = pos + 1;
            dst_inds[pos] = k;
            dst_vals[pos] = v;
        }

        mem::swap(&mut src_inds, &mut dst_inds);
        mem::swap(&mut src_vals, &mut dst_vals);
    }

    // even pass count: result sits in src_*
    inds.copy_from_slice(&src_inds);
    vals.copy_from_slice(&src_vals);
}

/// Tiny insertion sort for small n (SoA), stable.
#[inline]
fn insertion_sort_u32_soa<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    for i in 1..inds.len() {
        let mut j = i;
        while j > 0 && inds[j] < inds[j - 1] {
            inds.swap(j, j - 1);
            vals.swap(j, j - 1);
            j -= 1;
        }
    }
}
