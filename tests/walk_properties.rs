// tests/walk_properties.rs
use base12_walk::{
    Command, DEFAULT_MAX_POINTS, Mapping, TurnFrame, TurtleWalk, WalkConfig, WalkRecord,
    compute_walk, subsample, walk,
};
use glam::{DMat3, DVec3};

const TOL: f64 = 1e-9;

/// A deterministic pseudo-random digit stream covering all twelve commands.
fn mixed_digits(n: usize) -> Vec<i64> {
    let mut x: u64 = 0x2545_f491_4f6c_dd1d;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x % 12) as i64
        })
        .collect()
}

fn assert_close(a: DVec3, b: DVec3) {
    assert!(a.distance(b) < 1e-12, "{a:?} != {b:?}");
}

#[test]
fn test_translate_then_turn_scenario() {
    // Digits [0, 6] under Identity:
    // 1. +X translate. Turtle moves to (1, 0, 0).
    // 2. +15° about local X. Position is unchanged but still recorded.
    let mut turtle = TurtleWalk::new();
    let path = turtle.run([0i64, 6], &Mapping::IDENTITY).to_vec();

    assert_eq!(
        path,
        vec![DVec3::ZERO, DVec3::X, DVec3::X],
        "rotation step should repeat the last point"
    );

    // Local frame equalled world frame, so the turn is about world X.
    let expected = glam::DQuat::from_rotation_x(15f64.to_radians());
    assert!(turtle.rotation().angle_between(expected) < TOL);
}

#[test]
fn test_empty_stream_is_origin_only() {
    let mut turtle = TurtleWalk::new();
    let path = turtle.run(Vec::<i64>::new(), &Mapping::OPTIMAL);
    assert_eq!(path, &[DVec3::ZERO]);
    assert!(turtle.consumed().is_empty());

    let record = compute_walk(&[], &Mapping::IDENTITY, DEFAULT_MAX_POINTS);
    assert_eq!(record.points, vec![DVec3::ZERO]);
    assert_eq!(record.steps(), 0);
    assert_eq!(record.bounds(), Some((DVec3::ZERO, DVec3::ZERO)));

    assert_eq!(WalkRecord::default().bounds(), None);
}

#[test]
fn test_fresh_walks_are_identical() {
    let digits = mixed_digits(2000);
    for (_, mapping) in Mapping::BUILTIN {
        let a = walk(digits.iter().copied(), &mapping);
        let b = walk(digits.iter().copied(), &mapping);
        assert_eq!(a, b);
    }
}

#[test]
fn test_path_length_and_origin() {
    for n in [0, 1, 7, 500] {
        let digits = mixed_digits(n);
        let mut turtle = TurtleWalk::new();
        turtle.run(digits.iter().copied(), &Mapping::SPIRAL);
        assert_eq!(turtle.path().len(), n + 1);
        assert_eq!(turtle.consumed().len(), n);
        assert_eq!(turtle.path()[0], DVec3::ZERO);
    }
}

#[test]
fn test_step_geometry_by_command_kind() {
    let digits = mixed_digits(3000);
    let mapping = Mapping::OPTIMAL;
    let path = walk(digits.iter().copied(), &mapping);

    for (i, &d) in digits.iter().enumerate() {
        let delta = path[i + 1] - path[i];
        let command = mapping.command(d);
        assert_eq!(command.is_rotation(), command.index() >= 6);
        match command {
            Command::Translate(_) => {
                assert!((delta.length() - 1.0).abs() < TOL, "step {i}: {delta:?}")
            }
            Command::Rotate(_) => assert_eq!(path[i + 1], path[i], "step {i}"),
        }
    }
}

#[test]
fn test_orientation_stays_orthonormal() {
    let mut turtle = TurtleWalk::new();
    // Long run of turns only, to stress accumulation.
    let turns: Vec<i64> = mixed_digits(20_000).into_iter().map(|d| 6 + d % 6).collect();
    turtle.run(turns, &Mapping::IDENTITY);

    let q = turtle.rotation();
    assert!((q.length() - 1.0).abs() < TOL);

    let m = DMat3::from_quat(q);
    assert!((m.determinant() - 1.0).abs() < TOL);
    assert!((m.x_axis.length() - 1.0).abs() < TOL);
    assert!((m.y_axis.length() - 1.0).abs() < TOL);
    assert!((m.z_axis.length() - 1.0).abs() < TOL);
    assert!(m.x_axis.dot(m.y_axis).abs() < TOL);
    assert!(m.y_axis.dot(m.z_axis).abs() < TOL);
    assert!(m.z_axis.dot(m.x_axis).abs() < TOL);
}

#[test]
fn test_digits_wrap_modulo_twelve() {
    let base = mixed_digits(300);
    let plus: Vec<i64> = base.iter().map(|d| d + 12).collect();
    let minus: Vec<i64> = base.iter().map(|d| d - 12).collect();
    let far: Vec<i64> = base.iter().map(|d| d + 12 * 1_000_003).collect();

    let expected = walk(base.iter().copied(), &Mapping::OPTIMAL);
    assert_eq!(walk(plus, &Mapping::OPTIMAL), expected);
    assert_eq!(walk(minus, &Mapping::OPTIMAL), expected);
    assert_eq!(walk(far, &Mapping::OPTIMAL), expected);

    let mut turtle = TurtleWalk::new();
    turtle.step(-1, &Mapping::IDENTITY);
    assert_eq!(turtle.consumed(), &[11]);
}

#[test]
fn test_different_mappings_diverge() {
    // Identity and Spiral only agree on digits 0 and 11, so a mixed stream
    // separates them within a few steps.
    let digits = mixed_digits(200);
    let identity = walk(digits.iter().copied(), &Mapping::IDENTITY);
    let spiral = walk(digits.iter().copied(), &Mapping::SPIRAL);
    assert_eq!(identity.len(), spiral.len());
    assert_ne!(identity, spiral);
}

#[test]
fn test_turns_compose_in_local_frame() {
    // +Y turn, +X turn, then +Z translate.
    let digits = [8i64, 6, 4];
    let (s, c) = 15f64.to_radians().sin_cos();

    // Local: the X turn happens about the already-yawed X axis.
    let local = walk(digits, &Mapping::IDENTITY);
    assert_close(local[3], DVec3::new(c * s, -s, c * c));

    // World: the X turn happens about the fixed world X axis.
    let mut turtle = TurtleWalk::with_config(WalkConfig {
        frame: TurnFrame::World,
        ..Default::default()
    });
    turtle.run(digits, &Mapping::IDENTITY);
    assert_close(turtle.position(), DVec3::new(s, -s * c, c * c));
}

#[test]
fn test_full_circle_of_turns() {
    // 24 turns of 15° about local Z bring the frame back to the start.
    let mut digits = vec![10i64; 24];
    digits.push(0);
    let path = walk(digits, &Mapping::IDENTITY);
    assert_close(path[25], DVec3::X);
}

#[test]
fn test_negative_turn_undoes_positive() {
    let path = walk([8i64, 9, 0], &Mapping::IDENTITY);
    assert_close(path[3], DVec3::X);
}

#[test]
fn test_subsample_stride() {
    let seq: Vec<u32> = (0..10).collect();
    assert_eq!(subsample(&seq, 3), vec![0, 3, 6, 9]);
    assert_eq!(subsample(&seq, 100), seq);
    assert_eq!(subsample(&seq, 0), vec![0]);
    assert!(subsample::<u32>(&[], 10).is_empty());
}

#[test]
fn test_compute_walk_keeps_full_stream() {
    let digits: Vec<u8> = (0..10_000).map(|i| (i % 12) as u8).collect();
    let record = compute_walk(&digits, &Mapping::OPTIMAL, 1000);

    assert_eq!(record.stride, 10);
    assert_eq!(record.base12.len(), 10_000);
    assert_eq!(record.points.len(), 1000 + 1);

    // Stride 10 over a period-12 stream visits digits 0, 10, 8, 6, 4, 2.
    let sampled: Vec<u8> = digits.iter().step_by(10).copied().collect();
    assert_eq!(record.points, walk(sampled, &Mapping::OPTIMAL));

    let (lo, hi) = record.bounds().unwrap();
    assert!(lo.cmple(hi).all());
    assert!(record.points.iter().all(|p| p.cmpge(lo).all() && p.cmple(hi).all()));
}

#[test]
fn test_local_axes_follow_turns() {
    // Six 15° turns about local Z: a quarter turn counter-clockwise.
    let mut turtle = TurtleWalk::new();
    turtle.run([10i64; 6], &Mapping::IDENTITY);

    let state = turtle.state();
    assert_close(state.right(), DVec3::Y);
    assert_close(state.up(), DVec3::NEG_X);
    assert_close(state.forward(), DVec3::Z);
    assert_eq!(state.position, DVec3::ZERO);
}

#[test]
fn test_walk_keeps_its_config() {
    let config = WalkConfig {
        turn_degrees: 90.0,
        frame: TurnFrame::World,
    };
    let mut turtle = TurtleWalk::with_config(config.clone());
    assert_eq!(turtle.config(), &config);

    // A single 90° turn about Z, then +X: the step lands on +Y.
    turtle.run([10i64, 0], &Mapping::IDENTITY);
    assert_close(turtle.position(), DVec3::Y);
    assert_eq!(TurtleWalk::new().config(), &WalkConfig::default());
}
