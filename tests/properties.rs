//! Cross-module behaviour of the vector types and the clock.
#![allow(clippy::unwrap_used)]

use std::f64::consts::FRAC_PI_2;
use std::sync::Once;

use approx::assert_abs_diff_eq;
use tickvec::math::{precision_eq, TOLERANCE};
use tickvec::{
    Clock, Error, Interpolate, Rotation, Timer, Vector2, Vector3, VectorError, VectorN,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn samples_2d() -> Vec<Vector2> {
    vec![
        Vector2::new(3.0, 4.0),
        Vector2::new(-1.25, 0.5),
        Vector2::new(-7.0, -2.0),
        Vector2::new(0.001, -9.0),
    ]
}

fn samples_3d() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-0.5, 4.0, -2.0),
        Vector3::new(9.0, 0.0, 0.25),
    ]
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    for a in samples_2d() {
        assert_eq!(a, a);
        for b in samples_2d() {
            assert_eq!(a == b, b == a);
        }
    }
    let n = VectorN::new(vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(n, n.clone());
}

#[test]
fn normalized_vectors_have_unit_length() -> tickvec::Result<()> {
    for v in samples_3d() {
        assert_abs_diff_eq!(v.normalized()?.magnitude(), 1.0, epsilon = 1e-12);
    }
    let n = VectorN::new(vec![2.0, -3.0, 6.0, 1.0, 0.5]).normalized()?;
    assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn cross_product_properties() {
    for a in samples_3d() {
        for b in samples_3d() {
            let c = a.cross(&b);
            assert_eq!(c, -b.cross(&a));
            assert!(precision_eq(a.dot(&c), 0.0), "a·(a×b)={}", a.dot(&c));
        }
    }
}

#[test]
fn polar_round_trip_and_rotation() -> tickvec::Result<()> {
    init_tracing();
    for v in samples_2d() {
        assert_eq!(Vector2::from_polar(v.magnitude(), v.angle()), v);
    }
    assert_eq!(Vector2::new(1.0, 0.0).rotate(FRAC_PI_2)?, Vector2::new(0.0, 1.0));
    Ok(())
}

#[test]
fn lerp_hits_endpoints_for_every_vector_type() -> tickvec::Result<()> {
    for a in samples_2d() {
        for b in samples_2d() {
            assert_eq!(Vector2::lerp(&a, &b, 0.0)?, a);
            assert_eq!(Vector2::lerp(&a, &b, 1.0)?, b);
        }
    }
    let a = VectorN::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = VectorN::zero(5);
    assert_eq!(VectorN::lerp(&a, &b, 0.0)?, a);
    assert_eq!(VectorN::lerp(&a, &b, 1.0)?, b);
    Ok(())
}

#[test]
fn direction_reaches_target() {
    for a in samples_3d() {
        for b in samples_3d() {
            assert_eq!(Vector3::direction(&a, &b) + a, b);
        }
    }
}

#[test]
fn errors_convert_into_crate_error() {
    fn rotate_3d() -> tickvec::Result<Vector3> {
        Ok(Vector3::up().rotate(1.0)?)
    }

    fn missing_timer() -> tickvec::Result<u64> {
        let mut clock = Clock::new();
        let id = clock.add_timer(Timer::default());
        clock.remove_timer(id)?;
        Ok(clock.reset_timer(id)?)
    }

    init_tracing();
    assert!(matches!(
        rotate_3d(),
        Err(Error::Vector(VectorError::Unsupported { .. }))
    ));
    let err = missing_timer().unwrap_err();
    assert_eq!(err.to_string(), "timer not found");
}

#[test]
fn fixed_step_loop_keeps_timers_in_lockstep() -> tickvec::Result<()> {
    init_tracing();
    let mut clock = Clock::with_millis_per_tick(1000);
    let sim = clock.add_timer(Timer::new(0, 1000).with_label("simulation"));
    let late = clock.add_timer(Timer::new(100, 10));

    for _ in 0..3725 {
        clock.tick_all();
    }

    assert_eq!(clock.ticks(), 3725);
    assert_eq!(clock.timer(sim)?.ticks(), 3725);
    assert_eq!(clock.timer(late)?.ticks(), 3825);
    assert_eq!(clock.to_string(), "0:01:02:05:00");
    assert_eq!(clock.timer(sim)?.to_string(), "0:01:02:05:00");

    assert_eq!(clock.reset_timer(sim)?, 3725);
    assert_eq!(clock.reset(), 3725);
    Ok(())
}

#[test]
fn tolerance_is_absolute() {
    assert!(precision_eq(1.0, 1.0 + 5e-14));
    assert!(!precision_eq(1.0, 1.0 + 2.0 * TOLERANCE));
    assert!(!precision_eq(0.0, TOLERANCE));
    let big = Vector2::new(1e6, 0.0);
    assert_ne!(big, Vector2::new(1e6 + 1e-9, 0.0));
}
