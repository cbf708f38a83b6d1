//! Maps scroll geometry to the active home page section.
//!
//! The tracker is plain state: the page feeds it viewport snapshots and
//! gesture input, and it notifies subscribers when the active section moves.

use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::{self, TrackerConfig};
use crate::sections::gesture::{GestureGate, GestureInput, StepDirection};
use crate::sections::pose::PoseConfigs;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SectionError {
    #[error("a page needs at least one section")]
    Empty,
    #[error("section {0:?} is listed twice")]
    Duplicate(String),
    #[error("no section named {0:?}")]
    Unknown(String),
}

/// Ordered, non-empty list of section ids. Fixed for the page session.
#[derive(Clone, Debug, PartialEq)]
pub struct Sections {
    ids: Vec<String>,
}

impl Sections {
    pub fn new<I, T>(ids: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if list.contains(&id) {
                return Err(SectionError::Duplicate(id));
            }
            list.push(id);
        }
        if list.is_empty() {
            return Err(SectionError::Empty);
        }
        Ok(Self { ids: list })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn first(&self) -> &str {
        &self.ids[0]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Adjacent section in `direction`. The ends map to themselves and an
    /// unknown id maps to the first section.
    pub fn next(&self, current: &str, direction: StepDirection) -> &str {
        let Some(index) = self.position(current) else {
            return self.first();
        };
        let target = match direction {
            StepDirection::Up => index.saturating_sub(1),
            StepDirection::Down => (index + 1).min(self.ids.len() - 1),
        };
        &self.ids[target]
    }
}

impl Default for Sections {
    /// The home page sections from [`config::SECTIONS`].
    fn default() -> Self {
        Sections::new(config::SECTIONS.iter().map(|(id, _)| *id))
            .expect("config::SECTIONS is non-empty and unique")
    }
}

/// On-screen box of one section, relative to the viewport top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub height: f64,
    pub sections: Vec<SectionRect>,
}

fn section_score(rect: &SectionRect, viewport_height: f64) -> f64 {
    if rect.top >= 0.0 && rect.top < viewport_height {
        viewport_height - rect.top
    } else if rect.top < 0.0 && rect.bottom() > 0.0 {
        let visible = rect.bottom().min(viewport_height);
        let score = visible * 1.5;
        if visible > viewport_height / 2.0 {
            score * 1.5
        } else {
            score
        }
    } else {
        0.0
    }
}

/// Picks the active section for one viewport snapshot. Without a viewport the
/// first section is returned; when nothing scores, or the best score is
/// shared, `current` is kept.
pub fn detect_active_section<'a>(
    sections: &'a Sections,
    viewport: Option<&Viewport>,
    current: &str,
    config: &TrackerConfig,
) -> &'a str {
    let Some(viewport) = viewport else {
        return sections.first();
    };
    let fallback = sections
        .position(current)
        .map_or(sections.first(), |i| sections.ids[i].as_str());

    let known = viewport
        .sections
        .iter()
        .filter_map(|rect| sections.position(&rect.id).map(|i| (i, rect)));

    let mut best: Option<(usize, f64)> = None;
    let mut tied = false;
    for (index, rect) in known {
        if rect.top.abs() <= config.exact_match_px {
            return &sections.ids[index];
        }
        let mut score = section_score(rect, viewport.height);
        let partially_visible = rect.top < viewport.height && rect.bottom() > 0.0;
        if index == sections.ids.len() - 1 && partially_visible {
            score += config.last_section_bonus;
        }
        if score <= 0.0 {
            continue;
        }
        match best {
            Some((_, top)) if score == top => tied = true,
            Some((_, top)) if score < top => {}
            _ => {
                best = Some((index, score));
                tied = false;
            }
        }
    }

    match best {
        Some((index, _)) if !tied => &sections.ids[index],
        _ => fallback,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    None,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub active: String,
    pub last_scroll_offset: f64,
    pub direction: ScrollDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalKind {
    /// Repeated while the page is moving towards the new section.
    Transition,
    /// Sent once, when scrolling has come to rest.
    Settled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSignal {
    pub kind: SignalKind,
    pub section: String,
    pub configs: Rc<PoseConfigs>,
    pub scroll_offset: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moving,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    last_motion_ms: i64,
    /// Set for programmatic navigation; detection waits until it settles.
    locked: bool,
}

type Subscriber = Box<dyn Fn(&SectionSignal)>;

pub struct SectionTracker {
    sections: Sections,
    config: TrackerConfig,
    poses: Rc<PoseConfigs>,
    state: NavigationState,
    transition: Option<Transition>,
    gate: GestureGate,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
}

impl SectionTracker {
    pub fn new(sections: Sections, config: TrackerConfig, poses: PoseConfigs) -> Self {
        let state = NavigationState {
            active: sections.first().to_string(),
            last_scroll_offset: 0.0,
            direction: ScrollDirection::None,
        };
        Self {
            gate: GestureGate::new(&config),
            sections,
            config,
            poses: Rc::new(poses),
            state,
            transition: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn active(&self) -> &str {
        &self.state.active
    }

    pub fn direction(&self) -> ScrollDirection {
        self.state.direction
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub fn subscribe(&mut self, callback: impl Fn(&SectionSignal) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    fn emit(&self, kind: SignalKind, scroll_offset: Option<f64>) {
        let signal = SectionSignal {
            kind,
            section: self.state.active.clone(),
            configs: Rc::clone(&self.poses),
            scroll_offset,
        };
        for (_, subscriber) in &self.subscribers {
            subscriber(&signal);
        }
    }

    fn begin_transition(&mut self, section: String, now_ms: i64, locked: bool, offset: Option<f64>) {
        info!("Active section: {} -> {}", self.state.active, section);
        self.state.active = section;
        self.transition = Some(Transition {
            last_motion_ms: now_ms,
            locked,
        });
        self.emit(SignalKind::Transition, offset);
    }

    /// Handles a scroll or resize. Returns true when the active section
    /// changed.
    pub fn observe(&mut self, viewport: Option<&Viewport>, now_ms: i64) -> bool {
        let offset = viewport.map(|v| v.scroll_offset);
        if let Some(offset) = offset {
            self.state.direction = if offset > self.state.last_scroll_offset {
                ScrollDirection::Down
            } else if offset < self.state.last_scroll_offset {
                ScrollDirection::Up
            } else {
                self.state.direction
            };
            if offset != self.state.last_scroll_offset {
                if let Some(transition) = self.transition.as_mut() {
                    transition.last_motion_ms = now_ms;
                }
            }
            self.state.last_scroll_offset = offset;
        }

        let locked = self.transition.map_or(false, |t| t.locked);
        if !locked {
            let detected =
                detect_active_section(&self.sections, viewport, &self.state.active, &self.config);
            if detected != self.state.active {
                let detected = detected.to_string();
                self.begin_transition(detected, now_ms, false, offset);
                return true;
            }
        }

        if self.transition.is_some() {
            self.emit(SignalKind::Transition, offset);
        }
        false
    }

    /// One monitoring frame. Once the scroll offset has been still for the
    /// settle delay the pending transition completes.
    pub fn tick(&mut self, viewport: Option<&Viewport>, now_ms: i64) -> TickOutcome {
        let offset = viewport.map(|v| v.scroll_offset);
        self.observe(viewport, now_ms);
        let Some(transition) = self.transition else {
            return TickOutcome::Idle;
        };
        if now_ms - transition.last_motion_ms < self.config.settle_ms {
            return TickOutcome::Moving;
        }

        self.transition = None;
        if transition.locked {
            let detected =
                detect_active_section(&self.sections, viewport, &self.state.active, &self.config);
            if detected != self.state.active {
                let detected = detected.to_string();
                debug!("Settled on {} instead of {}", detected, self.state.active);
                info!("Active section: {} -> {}", self.state.active, detected);
                self.state.active = detected;
                self.emit(SignalKind::Transition, offset);
            }
        }
        self.emit(SignalKind::Settled, offset);
        TickOutcome::Settled
    }

    /// Programmatic navigation, e.g. from the header menu.
    pub fn navigate_to(&mut self, id: &str, now_ms: i64) -> Result<bool, SectionError> {
        if !self.sections.contains(id) {
            warn!("Ignoring navigation to unknown section {}", id);
            return Err(SectionError::Unknown(id.to_string()));
        }
        if self.state.active == id {
            return Ok(false);
        }
        self.begin_transition(id.to_string(), now_ms, true, None);
        Ok(true)
    }

    /// Turns one gesture into at most one section step. Returns the section
    /// to scroll to.
    pub fn step(&mut self, input: GestureInput, now_ms: i64) -> Option<String> {
        let direction = self.gate.direction(input, now_ms)?;
        let target = self.sections.next(&self.state.active, direction).to_string();
        if target == self.state.active {
            return None;
        }
        self.gate.mark_step(now_ms);
        self.begin_transition(target.clone(), now_ms, true, None);
        Some(target)
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(
            Sections::default(),
            TrackerConfig::default(),
            crate::sections::pose::default_configs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    const VH: f64 = 800.0;

    fn sections() -> Sections {
        Sections::new(["inicio", "beneficios", "pink", "sobre", "contato"]).unwrap()
    }

    /// Five stacked full-height sections scrolled to `offset`.
    fn stacked(offset: f64) -> Viewport {
        Viewport {
            scroll_offset: offset,
            height: VH,
            sections: sections()
                .ids()
                .iter()
                .enumerate()
                .map(|(i, id)| SectionRect::new(id.as_str(), i as f64 * VH - offset, VH))
                .collect(),
        }
    }

    fn detect(viewport: &Viewport, current: &str) -> String {
        detect_active_section(&sections(), Some(viewport), current, &TrackerConfig::default())
            .to_string()
    }

    fn recording(tracker: &mut SectionTracker) -> Rc<RefCell<Vec<(SignalKind, String)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        tracker.subscribe(move |signal| {
            sink.borrow_mut().push((signal.kind, signal.section.clone()));
        });
        log
    }

    #[test]
    fn section_list_must_be_unique_and_non_empty() {
        assert_eq!(Sections::new(Vec::<String>::new()), Err(SectionError::Empty));
        assert_eq!(
            Sections::new(["a", "b", "a"]),
            Err(SectionError::Duplicate("a".to_string()))
        );
    }

    #[test]
    fn configured_sections_build_in_order() {
        assert_eq!(Sections::default(), sections());
    }

    #[test]
    fn next_section_does_not_wrap() {
        let sections = sections();
        assert_eq!(sections.next("inicio", StepDirection::Up), "inicio");
        assert_eq!(sections.next("contato", StepDirection::Down), "contato");
        assert_eq!(sections.next("pink", StepDirection::Up), "beneficios");
        assert_eq!(sections.next("pink", StepDirection::Down), "sobre");
        assert_eq!(sections.next("nowhere", StepDirection::Down), "inicio");
    }

    #[test]
    fn top_aligned_section_wins_outright() {
        assert_eq!(detect(&stacked(2.0 * VH + 30.0), "inicio"), "pink");
        assert_eq!(detect(&stacked(2.0 * VH - 40.0), "inicio"), "pink");

        // beneficios would score far higher, but pink sits at the top.
        let viewport = Viewport {
            scroll_offset: 0.0,
            height: VH,
            sections: vec![
                SectionRect::new("beneficios", -100.0, 3.0 * VH),
                SectionRect::new("pink", 40.0, VH),
            ],
        };
        assert_eq!(detect(&viewport, "inicio"), "pink");
    }

    #[test]
    fn mostly_visible_section_from_above_beats_entering_section() {
        // beneficios top at -300 (500 visible), pink enters at 500 (300 score).
        assert_eq!(detect(&stacked(VH + 300.0), "inicio"), "beneficios");
    }

    #[test]
    fn entering_section_wins_once_it_dominates() {
        // beneficios shows 100px from above, pink is 100px below the top.
        assert_eq!(detect(&stacked(VH + 700.0), "inicio"), "pink");
    }

    #[test]
    fn last_section_gets_reachable_bonus() {
        let viewport = Viewport {
            scroll_offset: 3000.0,
            height: VH,
            sections: vec![
                SectionRect::new("sobre", -450.0, VH),
                SectionRect::new("contato", 400.0, 400.0),
            ],
        };
        assert_eq!(detect(&viewport, "sobre"), "contato");
    }

    #[test]
    fn ties_and_empty_scores_keep_current() {
        let tie = Viewport {
            scroll_offset: 0.0,
            height: VH,
            sections: vec![
                SectionRect::new("beneficios", 200.0, VH),
                SectionRect::new("pink", 200.0, VH),
            ],
        };
        assert_eq!(detect(&tie, "sobre"), "sobre");

        let nothing = Viewport {
            scroll_offset: 0.0,
            height: VH,
            sections: vec![SectionRect::new("pink", 2.0 * VH, VH)],
        };
        assert_eq!(detect(&nothing, "beneficios"), "beneficios");
    }

    #[test]
    fn unknown_rects_are_ignored() {
        let viewport = Viewport {
            scroll_offset: 0.0,
            height: VH,
            sections: vec![
                SectionRect::new("footer", 0.0, VH),
                SectionRect::new("pink", 300.0, VH),
            ],
        };
        assert_eq!(detect(&viewport, "inicio"), "pink");
    }

    #[test]
    fn missing_viewport_defaults_to_first_section() {
        let sections = sections();
        let found = detect_active_section(&sections, None, "sobre", &TrackerConfig::default());
        assert_eq!(found, "inicio");
    }

    #[test]
    fn observe_tracks_direction_and_notifies_on_change() {
        let mut tracker = SectionTracker::default();
        let log = recording(&mut tracker);

        assert!(tracker.observe(Some(&stacked(VH)), 0));
        assert_eq!(tracker.active(), "beneficios");
        assert_eq!(tracker.direction(), ScrollDirection::Down);

        assert!(!tracker.observe(Some(&stacked(VH - 20.0)), 10));
        assert_eq!(tracker.direction(), ScrollDirection::Up);
        assert_eq!(tracker.state().last_scroll_offset, VH - 20.0);

        let log = log.borrow();
        assert_eq!(log[0], (SignalKind::Transition, "beneficios".to_string()));
        assert!(log.iter().all(|(kind, _)| *kind == SignalKind::Transition));
    }

    #[test]
    fn transition_settles_once_scroll_stops() {
        let mut tracker = SectionTracker::default();
        let log = recording(&mut tracker);

        tracker.observe(Some(&stacked(VH)), 0);
        assert_eq!(tracker.tick(Some(&stacked(VH)), 100), TickOutcome::Moving);
        assert_eq!(tracker.tick(Some(&stacked(VH)), 200), TickOutcome::Settled);
        assert_eq!(tracker.tick(Some(&stacked(VH)), 300), TickOutcome::Idle);

        let settled: Vec<_> = log
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == SignalKind::Settled)
            .cloned()
            .collect();
        assert_eq!(settled, vec![(SignalKind::Settled, "beneficios".to_string())]);
    }

    #[test]
    fn navigation_locks_detection_until_settled() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.navigate_to("sobre", 0), Ok(true));

        // Intermediate frames of the scroll animation must not flip the section.
        tracker.observe(Some(&stacked(VH + 400.0)), 16);
        assert_eq!(tracker.active(), "sobre");

        tracker.tick(Some(&stacked(3.0 * VH)), 32);
        assert_eq!(tracker.tick(Some(&stacked(3.0 * VH)), 400), TickOutcome::Settled);
        assert_eq!(tracker.active(), "sobre");
    }

    #[test]
    fn settling_elsewhere_announces_the_new_section() {
        let mut tracker = SectionTracker::default();
        let log = recording(&mut tracker);

        tracker.navigate_to("sobre", 0).unwrap();
        tracker.tick(Some(&stacked(2.0 * VH)), 16);
        assert_eq!(tracker.tick(Some(&stacked(2.0 * VH)), 400), TickOutcome::Settled);
        assert_eq!(tracker.active(), "pink");

        let log = log.borrow();
        let tail = &log[log.len() - 2..];
        assert_eq!(
            tail,
            &[
                (SignalKind::Transition, "pink".to_string()),
                (SignalKind::Settled, "pink".to_string()),
            ]
        );
    }

    #[test]
    fn navigation_rejects_unknown_ids() {
        let mut tracker = SectionTracker::default();
        assert_eq!(
            tracker.navigate_to("loja", 0),
            Err(SectionError::Unknown("loja".to_string()))
        );
        assert_eq!(tracker.navigate_to("inicio", 0), Ok(false));
    }

    #[test]
    fn one_step_per_gesture_with_cooldown() {
        let mut tracker = SectionTracker::default();
        let log = recording(&mut tracker);

        assert_eq!(tracker.step(GestureInput::Wheel { delta_y: 120.0 }, 0), Some("beneficios".to_string()));
        assert_eq!(tracker.step(GestureInput::Wheel { delta_y: 120.0 }, 100), None);
        assert_eq!(tracker.step(GestureInput::Wheel { delta_y: 5.0 }, 1_000), None);
        assert_eq!(tracker.step(GestureInput::ArrowDown, 1_000), Some("pink".to_string()));
        assert_eq!(tracker.active(), "pink");
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn step_at_boundary_is_ignored() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.step(GestureInput::ArrowUp, 0), None);
        // No transition happened, so no cooldown either.
        assert_eq!(tracker.step(GestureInput::ArrowDown, 10), Some("beneficios".to_string()));
    }

    #[test]
    fn unsubscribed_callbacks_stop_receiving() {
        let mut tracker = SectionTracker::default();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = tracker.subscribe(move |_| *sink.borrow_mut() += 1);

        tracker.navigate_to("pink", 0).unwrap();
        tracker.unsubscribe(id);
        tracker.navigate_to("sobre", 10).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn signals_carry_pose_configs() {
        let mut tracker = SectionTracker::default();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        tracker.subscribe(move |signal| {
            *sink.borrow_mut() = signal.configs.get(&signal.section).copied();
        });
        tracker.navigate_to("sobre", 0).unwrap();
        assert!(seen.borrow().is_some());
    }
}
