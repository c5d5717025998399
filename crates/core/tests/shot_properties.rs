//! Property checks for the kinematic solvers over seeded random inputs
use approx::assert_relative_eq;
use kinematic_core::kinematics::position_at;
use kinematic_core::{
    calculate_shoot, calculate_shoots, predict_collision_time, KinematicError, ShotRequest,
    TrajectorySampler, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const CASES: usize = 500;

fn random_request(rng: &mut StdRng) -> ShotRequest {
    // source.y >= 0 and delta_h > 0 keep the apex above both ends
    ShotRequest {
        source: Vec3::new(
            rng.random_range(-50.0..50.0),
            rng.random_range(0.0..5.0),
            rng.random_range(-50.0..50.0),
        ),
        target: Vec3::new(
            rng.random_range(-50.0..50.0),
            rng.random_range(0.0..5.0),
            rng.random_range(-50.0..50.0),
        ),
        gravity: rng.random_range(-20.0..-1.0),
        delta_h: rng.random_range(0.5..10.0),
    }
}

#[test]
fn test_collision_time_substitutes_back() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut solved = 0;

    for _ in 0..CASES {
        let x_a: f32 = rng.random_range(0.0..20.0);
        let x_b: f32 = rng.random_range(-20.0..0.0);
        let a_a: f32 = rng.random_range(-3.0..3.0);
        let mut a_b: f32 = rng.random_range(-3.0..3.0);
        if (a_b - a_a).abs() < 0.5 {
            a_b = a_a + 0.5;
        }
        let u_a: f32 = rng.random_range(-5.0..5.0);
        let u_b: f32 = rng.random_range(-5.0..5.0);

        match predict_collision_time(x_a, x_b, a_a, a_b, u_a, u_b) {
            Ok(t) => {
                let pos_a = position_at(x_a, u_a, a_a, t);
                let pos_b = position_at(x_b, u_b, a_b, t);
                assert!(
                    (pos_a - pos_b).abs() <= 1e-2 * (1.0 + pos_a.abs()),
                    "t={t}: A at {pos_a}, B at {pos_b}"
                );
                solved += 1;
            }
            Err(KinematicError::NoRealCollision { discriminant }) => {
                assert!(discriminant < 0.0);
            }
            Err(other) => panic!("Unexpected error: {other}"),
        }
    }

    assert!(solved > 0, "No case produced a collision");
}

#[test]
fn test_linear_chase_exact() {
    assert_eq!(predict_collision_time(10.0, 0.0, 0.0, 0.0, 0.0, 5.0), Ok(2.0));
}

#[test]
fn test_shot_reaches_target() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..CASES {
        let req = random_request(&mut rng);
        let shot = req.solve().unwrap();

        assert!(shot.time_to_target() > 0.0 && shot.time_to_target().is_finite());

        let displacement = shot.displacement_at(req.gravity, shot.time_to_target());
        let expected = req.target - req.source;
        let tolerance = 1e-3 * (1.0 + expected.norm());
        assert!(
            (displacement - expected).norm() <= tolerance,
            "{req:?}: landed {displacement:?}, expected {expected:?}"
        );
        assert!(shot.initial_velocity().y > 0.0);
    }
}

#[test]
fn test_sampler_ends_on_target() {
    let mut rng = StdRng::seed_from_u64(7);

    for resolution in [1, 2, 30, 100] {
        let req = random_request(&mut rng);
        let sampler =
            TrajectorySampler::solve(req.source, req.target, req.gravity, req.delta_h, resolution)
                .unwrap();

        let segments: Vec<_> = sampler.segments().collect();
        assert_eq!(segments.len(), resolution as usize);

        let last = segments[segments.len() - 1].end;
        assert_relative_eq!(last.x, req.target.x, epsilon = 1e-2);
        assert_relative_eq!(last.y, req.target.y, epsilon = 1e-2);
        assert_relative_eq!(last.z, req.target.z, epsilon = 1e-2);
    }
}

#[test]
fn test_batch_matches_single_and_threads() {
    let mut rng = StdRng::seed_from_u64(99);
    let requests: Vec<ShotRequest> = (0..64).map(|_| random_request(&mut rng)).collect();

    let batch = calculate_shoots(&requests);
    for (req, result) in requests.iter().zip(&batch) {
        assert_eq!(*result, calculate_shoot(req.source, req.target, req.gravity, req.delta_h));
    }

    // No shared state: concurrent callers see identical results
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (req, result) in requests.iter().zip(&batch) {
                    assert_eq!(req.solve(), *result);
                }
            });
        }
    });
}
