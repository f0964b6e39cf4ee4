use glam::{DQuat, DVec3};

/// Default tolerance for [`quaternions_are_equal`].
pub const QUAT_EQ_EPSILON: f64 = 1e-12;

/// Whether two quaternions describe the same rotation.
///
/// A rotation has two quaternion representations (`q` and `-q`); comparing
/// the absolute dot product handles both.
pub fn quaternions_are_equal(a: DQuat, b: DQuat, epsilon: f64) -> bool {
    a.dot(b).abs() > 1.0 - epsilon
}

/// Checks whether a number is a usable angle.
///
/// `limit_to_circle` restricts the magnitude to one full turn;
/// `allow_negative` decides whether the lower bound is mirrored or zero.
pub fn is_angle(angle: f64, in_degrees: bool, allow_negative: bool, limit_to_circle: bool) -> bool {
    let (lower, upper) = if limit_to_circle {
        let turn = if in_degrees {
            360.0
        } else {
            2.0 * std::f64::consts::PI
        };
        (if allow_negative { -turn } else { 0.0 }, turn)
    } else {
        (
            if allow_negative {
                f64::NEG_INFINITY
            } else {
                0.0
            },
            f64::INFINITY,
        )
    };
    lower <= angle && angle <= upper
}

/// Converts YZX-order euler angles in degrees to a quaternion.
///
/// Components are x = bank, y = heading, z = attitude: the heading rotation
/// (about Y) applies first, then attitude (about Z), then bank (about X).
pub fn euler_to_quaternion(eulers: DVec3) -> DQuat {
    let bank_half = eulers.x.to_radians() / 2.0;
    let heading_half = eulers.y.to_radians() / 2.0;
    let attitude_half = eulers.z.to_radians() / 2.0;

    let c1 = heading_half.cos();
    let s1 = heading_half.sin();
    let c2 = attitude_half.cos();
    let s2 = attitude_half.sin();
    let c3 = bank_half.cos();
    let s3 = bank_half.sin();
    let c1c2 = c1 * c2;
    let s1s2 = s1 * s2;

    DQuat::from_xyzw(
        c1c2 * s3 + s1s2 * c3,
        s1 * c2 * c3 + c1 * s2 * s3,
        c1 * s2 * c3 - s1 * c2 * s3,
        c1c2 * c3 - s1s2 * s3,
    )
}

/// Converts a quaternion to YZX-order euler angles in degrees.
///
/// Near the poles (attitude approaching ±90°) heading and bank describe the
/// same axis, so the extraction collapses to attitude = ±90°, bank = 0, with
/// the remaining rotation folded into heading.
pub fn quaternion_to_euler(quaternion: DQuat) -> DVec3 {
    let (x, y, z, w) = (quaternion.x, quaternion.y, quaternion.z, quaternion.w);
    let sqx = x * x;
    let sqy = y * y;
    let sqz = z * z;
    let sqw = w * w;
    // One for a unit quaternion, otherwise the correction factor.
    let unit = sqx + sqy + sqz + sqw;
    let test = x * y + z * w;

    let (bank, heading, attitude) = if test > 0.499 * unit {
        // north pole
        (0.0, 2.0 * x.atan2(w), std::f64::consts::FRAC_PI_2)
    } else if test < -0.499 * unit {
        // south pole
        (0.0, -2.0 * x.atan2(w), -std::f64::consts::FRAC_PI_2)
    } else {
        (
            (2.0 * x * w - 2.0 * y * z).atan2(-sqx + sqy - sqz + sqw),
            (2.0 * y * w - 2.0 * x * z).atan2(sqx - sqy - sqz + sqw),
            (2.0 * test / unit).asin(),
        )
    };

    DVec3::new(
        bank.to_degrees(),
        heading.to_degrees(),
        attitude.to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quaternion_equals_itself() {
        let q = DQuat::from_rotation_y(0.5);
        assert!(quaternions_are_equal(q, q, QUAT_EQ_EPSILON));
    }

    #[test]
    fn quaternion_equals_its_negation() {
        let q = DQuat::from_rotation_y(0.5);
        let negated = DQuat::from_xyzw(-q.x, -q.y, -q.z, -q.w);
        assert!(quaternions_are_equal(q, negated, QUAT_EQ_EPSILON));
    }

    #[test]
    fn rotated_quaternion_differs() {
        let q = DQuat::from_rotation_y(0.5);
        let rotated = q * DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2);
        assert!(!quaternions_are_equal(q, rotated, QUAT_EQ_EPSILON));
    }

    #[test]
    fn euler_round_trip_away_from_pole() {
        let eulers = DVec3::new(30.0, 45.0, 60.0);
        let recovered = quaternion_to_euler(euler_to_quaternion(eulers));

        assert!(approx_eq(recovered.x, eulers.x), "bank {recovered:?}");
        assert!(approx_eq(recovered.y, eulers.y), "heading {recovered:?}");
        assert!(approx_eq(recovered.z, eulers.z), "attitude {recovered:?}");
    }

    #[test]
    fn euler_negative_angles_round_trip() {
        let eulers = DVec3::new(-20.0, 10.0, -75.0);
        let recovered = quaternion_to_euler(euler_to_quaternion(eulers));
        assert!(recovered.abs_diff_eq(eulers, 1e-9), "{recovered:?}");
    }

    #[test]
    fn north_pole_collapses_bank() {
        let q = euler_to_quaternion(DVec3::new(25.0, 40.0, 90.0));
        let recovered = quaternion_to_euler(q);

        assert!(approx_eq(recovered.x, 0.0), "bank must collapse: {recovered:?}");
        assert!(approx_eq(recovered.z, 90.0), "attitude {recovered:?}");
        // Bank folds into heading at the pole; the rotation itself survives.
        let round_tripped = euler_to_quaternion(recovered);
        assert!(quaternions_are_equal(q, round_tripped, 1e-9));
    }

    #[test]
    fn south_pole_collapses_bank() {
        let q = euler_to_quaternion(DVec3::new(0.0, 30.0, -90.0));
        let recovered = quaternion_to_euler(q);

        assert!(approx_eq(recovered.x, 0.0), "{recovered:?}");
        assert!(approx_eq(recovered.y, 30.0), "{recovered:?}");
        assert!(approx_eq(recovered.z, -90.0), "{recovered:?}");
    }

    #[test]
    fn identity_quaternion_is_zero_euler() {
        let recovered = quaternion_to_euler(DQuat::IDENTITY);
        assert!(recovered.abs_diff_eq(DVec3::ZERO, 1e-12));
    }

    #[test]
    fn angle_limits() {
        assert!(is_angle(340.0, true, false, true));
        assert!(!is_angle(361.0, true, false, true));
        assert!(!is_angle(-10.0, true, false, true));
        assert!(is_angle(-10.0, true, true, true));
        assert!(is_angle(4.0 * std::f64::consts::PI, false, false, false));
        assert!(!is_angle(7.0, false, false, true));
    }
}
