use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config;

/// Share of the remaining distance covered per animation frame.
pub const EASING_SPEED: f64 = 0.05;
/// Extra Y rotation per scrolled pixel.
pub const SCROLL_SPIN: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: f64,
    pub visible: bool,
}

impl Pose {
    pub fn new(position: [f64; 3], rotation: [f64; 3], scale: f64) -> Self {
        Self {
            position,
            rotation,
            scale,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// One easing step towards `target`, spinning with the scroll offset.
    /// Visibility switches immediately.
    pub fn approach(&self, target: &Pose, speed: f64, scroll_offset: f64) -> Pose {
        let step = |from: f64, to: f64| from + (to - from) * speed;
        let mut rotation_target = target.rotation;
        rotation_target[1] += scroll_offset * SCROLL_SPIN;

        Pose {
            position: [0, 1, 2].map(|i| step(self.position[i], target.position[i])),
            rotation: [0, 1, 2].map(|i| step(self.rotation[i], rotation_target[i])),
            scale: step(self.scale, target.scale),
            visible: target.visible,
        }
    }

    /// CSS transform approximating the pose on a flat can image.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.1}vw, {:.1}vh, 0) rotateX({:.3}rad) rotateY({:.3}rad) rotateZ({:.3}rad) scale({:.3})",
            self.position[0] * 10.0,
            -self.position[1] * 10.0,
            self.rotation[0],
            self.rotation[1],
            self.rotation[2],
            self.scale * 2.0,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::new([0.0, 0.0, 10.0], [0.0, 0.0, 0.0], 0.42)
    }
}

pub type PoseConfigs = BTreeMap<String, Pose>;

pub fn default_configs() -> PoseConfigs {
    config::default_poses()
        .into_iter()
        .map(|(id, pose)| (id.to_string(), pose))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_converges_on_target() {
        let target = Pose::new([2.0, 0.0, 10.0], [0.0, 1.0, 0.0], 0.8);
        let mut pose = Pose::default();
        for _ in 0..400 {
            pose = pose.approach(&target, EASING_SPEED, 0.0);
        }
        assert!((pose.position[0] - 2.0).abs() < 1e-3);
        assert!((pose.rotation[1] - 1.0).abs() < 1e-3);
        assert!((pose.scale - 0.8).abs() < 1e-3);
    }

    #[test]
    fn single_step_moves_a_fraction_of_the_distance() {
        let target = Pose::new([1.0, 0.0, 10.0], [0.0, 0.0, 0.0], 0.42).hidden();
        let pose = Pose::default().approach(&target, 0.5, 0.0);
        assert_eq!(pose.position[0], 0.5);
        assert!(!pose.visible);
    }

    #[test]
    fn scroll_offset_adds_spin() {
        let target = Pose::default();
        let pose = Pose::default().approach(&target, 1.0, 1000.0);
        assert!((pose.rotation[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_section_has_a_default_pose() {
        let configs = default_configs();
        for (id, _) in config::SECTIONS {
            assert!(configs.contains_key(*id), "{}", id);
        }
    }
}
