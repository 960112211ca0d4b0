//! Property tests for the Euclidean ambient space.
//!
//! The flat fallbacks used by embedded manifolds must be consistent with
//! each other: retraction and inverse retraction are inverse maps, and the
//! orthonormal coordinates preserve the metric.

use manifoldkit_core::prelude::*;
use nalgebra::Complex;
use proptest::prelude::*;

fn real_matrix(nrows: usize, ncols: usize) -> impl Strategy<Value = DMatrix<f64>> {
    prop::collection::vec(-100.0..100.0f64, nrows * ncols)
        .prop_map(move |data| DMatrix::from_vec(nrows, ncols, data))
}

fn complex_matrix(nrows: usize, ncols: usize) -> impl Strategy<Value = DMatrix<Complex<f64>>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), nrows * ncols).prop_map(
        move |data| {
            DMatrix::from_iterator(
                nrows,
                ncols,
                data.into_iter().map(|(re, im)| Complex::new(re, im)),
            )
        },
    )
}

proptest! {
    #[test]
    fn retract_then_inverse_retract_recovers_vector(
        p in real_matrix(3, 2),
        x in real_matrix(3, 2),
    ) {
        let space = Euclidean::<f64>::new(3, 2);
        let mut q = DMatrix::zeros(3, 2);
        space.retract(&p, &x, &mut q).unwrap();
        let mut log = DMatrix::zeros(3, 2);
        space.inverse_retract(&p, &q, &mut log).unwrap();
        prop_assert!((log - &x).norm() <= 1e-10 * (1.0 + x.norm()));
    }

    #[test]
    fn coordinates_preserve_inner_product(
        u in complex_matrix(2, 3),
        v in complex_matrix(2, 3),
    ) {
        let space = Euclidean::<Complex<f64>>::new(2, 3);
        let p = DMatrix::zeros(2, 3);
        let cu = space.get_coordinates(&p, &u);
        let cv = space.get_coordinates(&p, &v);
        let lhs = space.inner_product(&p, &u, &v);
        let rhs = cu.dot(&cv);
        prop_assert!((lhs - rhs).abs() <= 1e-9 * (1.0 + lhs.abs()));
        prop_assert_eq!(space.get_vector(&p, &cu), u);
    }

    #[test]
    fn finite_matrices_pass_checks(p in real_matrix(4, 4)) {
        let space = Euclidean::<f64>::new(4, 4);
        prop_assert!(space.is_point_on_manifold(&p, &Tolerance::exact()));
        prop_assert!(space.is_vector_in_tangent_space(&p, &p, &Tolerance::exact()));
    }
}

#[test]
fn test_zero_sized_space() {
    let space = Euclidean::<f64>::new(0, 0);
    assert_eq!(space.dimension(), 0);
    let p = space.random_point();
    assert!(space.check_point(&p, &Tolerance::default()).is_ok());
    assert!(space.default_orthonormal_basis(&p).is_empty());
}
