use nalgebra::Vector3;
use rotordyn::ParametricDynamicsModel;

/// Assert that a cached wrench contains only finite components
#[track_caller]
pub fn assert_wrench_finite(model: &ParametricDynamicsModel) {
    assert!(
        model.force().iter().all(|v| v.is_finite()),
        "Net force contains non-finite values: {:?}",
        model.force()
    );
    assert!(
        model.moment().iter().all(|v| v.is_finite()),
        "Net moment contains non-finite values: {:?}",
        model.moment()
    );
}

/// Assert that two body-frame vectors agree within an absolute tolerance
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert!(
        (actual - expected).norm() <= epsilon,
        "Vectors differ: actual {:?}, expected {:?}",
        actual,
        expected
    );
}
