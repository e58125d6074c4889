use crate::model::frame::ReferenceFrame;
use crate::model::profile::ScoringProfile;
use crate::model::scores::clip100;
use crate::simd::fraction_above_f32;

/// 3x3 "find edges" kernel, row-major.
pub const FIND_EDGES_KERNEL: [i32; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

/// Edge magnitude plane of a `side`×`side` luma plane.
///
/// Interior responses are clipped to `[0, 255]`. The outermost ring has no
/// full neighbourhood and keeps its luma value unchanged.
pub fn find_edges(luma: &[u8], side: usize) -> Vec<f32> {
    debug_assert_eq!(luma.len(), side * side);
    let mut out: Vec<f32> = luma.iter().map(|&v| f32::from(v)).collect();
    if side < 3 {
        return out;
    }
    for y in 1..side - 1 {
        for x in 1..side - 1 {
            let mut acc = 0i32;
            for ky in 0..3 {
                let row = (y + ky - 1) * side;
                for kx in 0..3 {
                    acc += FIND_EDGES_KERNEL[ky * 3 + kx] * luma[row + x + kx - 1] as i32;
                }
            }
            out[y * side + x] = acc.clamp(0, 255) as f32;
        }
    }
    out
}

pub fn edge_density_score(frame: &ReferenceFrame, profile: &ScoringProfile) -> f64 {
    let edges = find_edges(frame.luma(), frame.side() as usize);
    clip100(fraction_above_f32(&edges, profile.edge_threshold) * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/edges.rs"]
mod tests;
