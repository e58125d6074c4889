use super::*;

#[test]
fn test_backend_name() {
    let name = backend_name();
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    assert_eq!(name, "avx2");
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    assert_eq!(name, "neon");
    #[cfg(not(any(
        all(target_arch = "x86_64", target_feature = "avx2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    )))]
    assert_eq!(name, "scalar");
}

#[test]
fn test_mean_std_determinism() {
    let values = [0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6, 7.0, 9.5, 11.0];
    let (m1, s1) = mean_std_f32(&values);
    let (m2, s2) = mean_std_f32(&values);
    assert!(m1.to_bits() == m2.to_bits());
    assert!(s1.to_bits() == s2.to_bits());
}

#[test]
fn test_mean_std_population() {
    let values = [2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let (mean, std) = mean_std_f32(&values);
    assert_eq!(mean, 5.0);
    assert!((std - 2.0).abs() < 1e-12);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(mean_std_f32(&[]), (0.0, 0.0));
    assert_eq!(fraction_above_f32(&[], 1.0), 0.0);
}

#[test]
fn test_fraction_above_is_strict() {
    let values = [30.0f32, 31.0, 0.0, 255.0];
    assert_eq!(fraction_above_f32(&values, 30.0), 0.5);
}

#[test]
fn test_backend_equiv_scalar() {
    let values: Vec<f32> = (0..37).map(|i| (i * 7 % 13) as f32 * 1.5).collect();
    assert_eq!(sum_f32_f64(&values), scalar::sum_f32_f64(&values));
    assert_eq!(
        backend::sum_sq_dev_f64(&values, 4.25),
        scalar::sum_sq_dev_f64(&values, 4.25)
    );
    assert_eq!(
        count_above_f32(&values, 9.0),
        scalar::count_above_f32(&values, 9.0)
    );
}
