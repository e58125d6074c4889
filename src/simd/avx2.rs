#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pub fn sum_f32_f64(values: &[f32]) -> f64 {
    // Deterministic order: load 8 lanes, accumulate each lane in order.
    let mut sum = 0f64;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        while i + 8 <= n {
            let v = _mm256_loadu_ps(values.as_ptr().add(i));
            let mut lanes = [0f32; 8];
            _mm256_storeu_ps(lanes.as_mut_ptr(), v);
            for lane in &lanes {
                sum += *lane as f64;
            }
            i += 8;
        }
    }
    while i < n {
        sum += values[i] as f64;
        i += 1;
    }
    sum
}

pub fn sum_sq_dev_f64(values: &[f32], mean: f64) -> f64 {
    let mut acc = 0f64;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        while i + 8 <= n {
            let v = _mm256_loadu_ps(values.as_ptr().add(i));
            let mut lanes = [0f32; 8];
            _mm256_storeu_ps(lanes.as_mut_ptr(), v);
            for lane in &lanes {
                let d = *lane as f64 - mean;
                acc += d * d;
            }
            i += 8;
        }
    }
    while i < n {
        let d = values[i] as f64 - mean;
        acc += d * d;
        i += 1;
    }
    acc
}

pub fn count_above_f32(values: &[f32], threshold: f32) -> usize {
    let mut count = 0usize;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        let thr = _mm256_set1_ps(threshold);
        while i + 8 <= n {
            let v = _mm256_loadu_ps(values.as_ptr().add(i));
            let gt = _mm256_cmp_ps::<_CMP_GT_OQ>(v, thr);
            count += (_mm256_movemask_ps(gt) as u32).count_ones() as usize;
            i += 8;
        }
    }
    while i < n {
        if values[i] > threshold {
            count += 1;
        }
        i += 1;
    }
    count
}

pub fn backend_name() -> &'static str {
    "avx2"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/avx2.rs"]
mod tests;
