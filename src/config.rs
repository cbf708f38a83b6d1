use log::Level;

use crate::sections::pose::Pose;

pub const CART_STORAGE_KEY: &str = "steezCart";
pub const AGE_VERIFIED_KEY: &str = "steez-age-verified";

/// Navigation order of the home page sections, with their menu labels.
pub const SECTIONS: &[(&str, &str)] = &[
    ("inicio", "INÍCIO"),
    ("beneficios", "BENEFÍCIOS"),
    ("pink", "PINK"),
    ("sobre", "SOBRE"),
    ("contato", "CONTACTO"),
];

pub const NOTIFICATION_DURATION_MS: u32 = 3000;
pub const CHECKOUT_THANKS_DELAY_MS: u32 = 1000;
pub const CHECKOUT_THANKS_DURATION_MS: u32 = 5000;
pub const CONTACT_SEND_DELAY_MS: u32 = 1000;
pub const CONTACT_SUCCESS_MS: u32 = 5000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Thresholds used by the section tracker and its gesture gate.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// A section whose top is this close to the viewport top wins outright.
    pub exact_match_px: f64,
    /// Score added to the last section while any part of it is visible.
    pub last_section_bonus: f64,
    /// Scroll must stay still this long before a transition counts as settled.
    pub settle_ms: i64,
    /// Gesture input is ignored for this long after a step.
    pub cooldown_ms: i64,
    pub wheel_threshold: f64,
    pub swipe_threshold_px: f64,
    pub frame_interval_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            exact_match_px: 50.0,
            last_section_bonus: 200.0,
            settle_ms: 150,
            cooldown_ms: 800,
            wheel_threshold: 30.0,
            swipe_threshold_px: 50.0,
            frame_interval_ms: 16,
        }
    }
}

/// Resting pose of the can for each section.
pub fn default_poses() -> Vec<(&'static str, Pose)> {
    use std::f64::consts::PI;
    vec![
        ("inicio", Pose::new([0.0, 0.0, 10.0], [0.0, 0.0, 0.0], 0.42)),
        ("beneficios", Pose::new([-2.0, 0.0, 10.0], [0.0, PI * 0.5, 0.0], 0.7)),
        ("pink", Pose::new([0.0, 0.0, 10.0], [0.0, PI, 0.15], 0.55)),
        ("sobre", Pose::new([2.0, 0.0, 10.0], [0.0, PI, 0.0], 0.4)),
        ("contato", Pose::new([0.0, 2.0, 10.0], [0.0, PI * 1.5, 0.0], 0.6).hidden()),
    ]
}
