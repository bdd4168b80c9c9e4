use vector2::{math_v, Vector2, Vector2Error};

#[test]
fn zero_is_identity_for_add_and_subtract() {
    let v = Vector2::new(-4.0, 9.5);
    assert!(math_v::equals(math_v::add(v, Vector2::ZERO), v));
    assert!(math_v::equals(math_v::subtract(v, Vector2::ZERO), v));
}

#[test]
fn double_negative_is_identity() {
    let v = Vector2::new(2.0, -8.0);
    assert!(math_v::equals(v.negative().negative(), v));
}

#[test]
fn three_four_five() {
    assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(
        math_v::distance(Vector2::new(3.0, 4.0), Vector2::ZERO),
        5.0
    );
}

#[test]
fn dot_and_cross_values() {
    assert_eq!(math_v::dot(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)), 0.0);
    assert_eq!(math_v::dot(Vector2::new(2.0, 3.0), Vector2::new(4.0, 5.0)), 23.0);
    assert_eq!(math_v::cross(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)), 10.0);
}

#[test]
fn nan_and_finite_predicates() {
    assert!(math_v::is_nan(Vector2::new(f64::NAN, 0.0)));
    assert!(!math_v::is_nan(Vector2::new(1.0, 2.0)));
    assert!(!math_v::is_finite(Vector2::new(f64::INFINITY, 0.0)));
    assert!(math_v::is_finite(Vector2::new(1.0, 2.0)));
}

#[test]
fn normal_of_zero_is_nan_not_infinite() {
    let n = Vector2::ZERO.normal();
    assert!(math_v::is_nan(n));
    assert!(n.x().is_nan() && n.y().is_nan());
}

#[test]
fn scalar_round_trip() {
    let v = Vector2::new(10.0, 20.0);
    assert_eq!(math_v::divide(v, 2.0), Vector2::new(5.0, 10.0));
    assert_eq!(math_v::multiply(Vector2::new(5.0, 10.0), 2.0), v);
    assert_eq!(v / 2.0 * 2.0, v);
}

#[test]
fn display_format() {
    assert_eq!(Vector2::new(1.0, 2.0).to_string(), "x: 1, y: 2");
    assert_eq!(format!("{}", Vector2::ZERO), "x: 0, y: 0");
}

#[test]
fn operators_compose() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 4.0);
    assert_eq!(-(a + b) * 2.0, Vector2::new(-8.0, -12.0));
    assert_eq!((b - a) % 1.5, Vector2::new(0.5, 0.5));
}

#[test]
fn conversions_through_public_api() {
    let v: Vector2 = "x: 0.25, y: -1".parse().unwrap();
    assert_eq!(v.to_array(), [0.25, -1.0]);

    let data: Vec<f64> = vec![1.0, 2.0, 3.0];
    assert_eq!(
        Vector2::try_from(data.as_slice()),
        Err(Vector2Error::InvalidLength {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn usable_across_threads() {
    let v = Vector2::new(6.0, 8.0);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || v.normal()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Vector2::new(0.6, 0.8));
    }
}
