use std::fs;
use std::path::PathBuf;

use rotordyn::{AeroParameterSet, RotorParameters};
use tempfile::TempDir;

/// A symmetric four-rotor lifting arrangement with identical rotors.
pub fn symmetric_quad_params() -> AeroParameterSet {
    AeroParameterSet::symmetric_quad(RotorParameters::default(), 0.35, 0.35)
}

/// Full quad-plane YAML, including the fuselage bias section.
pub const QUAD_YAML: &str = r#"
name: test_quad
rotors:
  - name: front_right
    position: [0.35, 0.35, 0.0]
    axis: [0.0, 0.0, -1.0]
    spin: ccw
    diameter: 0.28
    max_rotor_speed: 150.0
    thrust_coefficient: 0.1
    advance_ratio_gain: 1.5
    torque_coefficient: 0.012
  - name: front_left
    position: [0.35, -0.35, 0.0]
    axis: [0.0, 0.0, -1.0]
    spin: cw
    diameter: 0.28
    max_rotor_speed: 150.0
    thrust_coefficient: 0.1
    advance_ratio_gain: 1.5
    torque_coefficient: 0.012
  - name: rear_left
    position: [-0.35, -0.35, 0.0]
    axis: [0.0, 0.0, -1.0]
    spin: ccw
    diameter: 0.28
    max_rotor_speed: 150.0
    thrust_coefficient: 0.1
    advance_ratio_gain: 1.5
    torque_coefficient: 0.012
  - name: rear_right
    position: [-0.35, 0.35, 0.0]
    axis: [0.0, 0.0, -1.0]
    spin: cw
    diameter: 0.28
    max_rotor_speed: 150.0
    thrust_coefficient: 0.1
    advance_ratio_gain: 1.5
    torque_coefficient: 0.012
"#;

/// Same airframe with a constant fuselage bias configured.
pub const BIASED_QUAD_YAML_TAIL: &str = r#"
fuselage:
  force_bias: [0.0, 0.0, -1.2]
  moment_bias: [0.0, 0.05, 0.0]
  drag_coefficient: 0.9
  reference_area: 0.45
"#;

/// Writes `contents` as a YAML file inside `dir` and returns its path.
pub fn write_yaml(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("Failed to write test YAML");
    path
}
