//! Fixture-driven validation of the math and color primitives.
//!
//! The expected values live in `fixtures/math-fixtures.json` so the same
//! numbers can be replayed against other runtimes when needed.

use once_cell::sync::Lazy;
use serde::Deserialize;

use keel_core::color::Color;
use keel_core::math::{Mat4, Quat, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    vec3: Vec3Fixtures,
    mat4: Mat4Fixtures,
    quat: QuatFixtures,
    color: ColorFixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "fixture set '{name}' must not be empty");
        }

        ensure("vec3.add", &self.vec3.add);
        ensure("vec3.dot", &self.vec3.dot);
        ensure("vec3.cross", &self.vec3.cross);
        ensure("vec3.length", &self.vec3.length);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("mat4.multiply", &self.mat4.multiply);
        ensure("mat4.transform_point", &self.mat4.transform_point);
        ensure("quat.from_axis_angle", &self.quat.from_axis_angle);
        ensure("quat.multiply", &self.quat.multiply);
        ensure("quat.normalize", &self.quat.normalize);
        ensure("color.from_hex", &self.color.from_hex);
        ensure("color.to_hex", &self.color.to_hex);
    }
}

#[derive(Debug, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-6
    }

    const fn default_relative() -> f32 {
        1e-6
    }

    fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    add: Vec<Vec3BinaryFixture>,
    dot: Vec<Vec3DotFixture>,
    cross: Vec<Vec3BinaryFixture>,
    length: Vec<Vec3LengthFixture>,
    normalize: Vec<Vec3NormalizeFixture>,
}

#[derive(Debug, Deserialize)]
struct Vec3BinaryFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Vec3DotFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3LengthFixture {
    value: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3NormalizeFixture {
    value: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Mat4Fixtures {
    multiply: Vec<Mat4BinaryFixture>,
    transform_point: Vec<Mat4Vec3Fixture>,
}

#[derive(Debug, Deserialize)]
struct Mat4BinaryFixture {
    a: [f32; 16],
    b: [f32; 16],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct Mat4Vec3Fixture {
    matrix: [f32; 16],
    vector: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct QuatFixtures {
    from_axis_angle: Vec<QuatAxisAngleFixture>,
    multiply: Vec<QuatBinaryFixture>,
    normalize: Vec<QuatUnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct QuatAxisAngleFixture {
    axis: [f32; 3],
    angle: f32,
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct QuatBinaryFixture {
    a: [f32; 4],
    b: [f32; 4],
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct QuatUnaryFixture {
    value: [f32; 4],
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct ColorFixtures {
    from_hex: Vec<ColorFromHexFixture>,
    to_hex: Vec<ColorToHexFixture>,
}

#[derive(Debug, Deserialize)]
struct ColorFromHexFixture {
    input: String,
    expected: [f32; 4],
}

#[derive(Debug, Deserialize)]
struct ColorToHexFixture {
    value: [f32; 4],
    expected: String,
}

fn assert_scalar(actual: f32, expected: f32, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_components(actual: &[f32], expected: &[f32], tol: &Tolerance, ctx: &str) {
    assert_eq!(actual.len(), expected.len(), "{ctx}: arity mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        let allowed = tol.allowed_error(*e);
        assert!(
            diff <= allowed,
            "{ctx}[{i}]: expected {e}, got {a} (diff {diff} > {allowed})"
        );
    }
}

#[test]
fn vec3_fixtures_cover_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.vec3.add {
        let actual = Vec3::from(fix.a).add(&Vec3::from(fix.b));
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("vec3.add a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.vec3.dot {
        let actual = Vec3::from(fix.a).dot(&Vec3::from(fix.b));
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("vec3.dot a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.vec3.cross {
        let actual = Vec3::from(fix.a).cross(&Vec3::from(fix.b));
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("vec3.cross a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.vec3.length {
        let actual = Vec3::from(fix.value).length();
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("vec3.length value={:?}", fix.value),
        );
    }

    for fix in &FIXTURES.vec3.normalize {
        let actual = Vec3::from(fix.value).normalize();
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("vec3.normalize value={:?}", fix.value),
        );
    }
}

#[test]
fn mat4_fixtures_validate_transformations() {
    let tol = &FIXTURES.tolerance;
    for (i, fix) in FIXTURES.mat4.multiply.iter().enumerate() {
        let actual = Mat4::from(fix.a).multiply(&Mat4::from(fix.b));
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("mat4.multiply[{i}]"),
        );
    }

    for fix in &FIXTURES.mat4.transform_point {
        let actual = Mat4::from(fix.matrix).transform_point(&Vec3::from(fix.vector));
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("mat4.transform_point vector={:?}", fix.vector),
        );
    }
}

#[test]
fn quat_fixtures_validate_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.quat.from_axis_angle {
        let actual = Quat::from_axis_angle(Vec3::from(fix.axis), fix.angle);
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!(
                "quat.from_axis_angle axis={:?} angle={}",
                fix.axis, fix.angle
            ),
        );
    }

    for fix in &FIXTURES.quat.multiply {
        let actual = Quat::from(fix.a).multiply(&Quat::from(fix.b));
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("quat.multiply a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.quat.normalize {
        let actual = Quat::from(fix.value).normalize();
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("quat.normalize value={:?}", fix.value),
        );
    }
}

#[test]
fn color_fixtures_round_trip() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.color.from_hex {
        let actual = Color::from_hex(&fix.input).expect("fixture hex must parse");
        assert_components(
            &[actual.r, actual.g, actual.b, actual.a],
            &fix.expected,
            tol,
            &format!("color.from_hex input={}", fix.input),
        );
    }

    for fix in &FIXTURES.color.to_hex {
        let [r, g, b, a] = fix.value;
        let actual = Color::new(r, g, b, a).to_hex();
        assert_eq!(
            actual, fix.expected,
            "color.to_hex value={:?}",
            fix.value
        );
    }
}
