//! Scripted stages of the fire scene and the fixed transition table.
//!
//! The scene walks forward through [`SimulationStage`] exactly once. Which
//! stage follows which, and under what guard, is described by
//! [`TRANSITIONS`]; [`crate::systems::stage::stage_transition_system`]
//! evaluates only the row whose `from` matches the current stage.

use std::cmp::Ordering;
use std::fmt;

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::resources::soundboard::SoundCue;

/// One step of the scripted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SimulationStage {
    #[default]
    Normal,
    FireStart,
    Alarm,
    HumansArrive,
    FirefightersArrive,
    Extinguishing,
    AllClear,
    TrucksLeaving,
}

impl SimulationStage {
    /// Position in the scripted sequence, starting at 0 for `Normal`.
    pub fn rank(self) -> u8 {
        match self {
            SimulationStage::Normal => 0,
            SimulationStage::FireStart => 1,
            SimulationStage::Alarm => 2,
            SimulationStage::HumansArrive => 3,
            SimulationStage::FirefightersArrive => 4,
            SimulationStage::Extinguishing => 5,
            SimulationStage::AllClear => 6,
            SimulationStage::TrucksLeaving => 7,
        }
    }

    /// Whether the building is burning (flames drawn, particles emitted).
    pub fn fire_active(self) -> bool {
        matches!(
            self,
            SimulationStage::FireStart
                | SimulationStage::Alarm
                | SimulationStage::HumansArrive
                | SimulationStage::FirefightersArrive
                | SimulationStage::Extinguishing
        )
    }

    /// Whether the alarm light blinks.
    pub fn alarm_active(self) -> bool {
        matches!(
            self,
            SimulationStage::Alarm
                | SimulationStage::HumansArrive
                | SimulationStage::FirefightersArrive
                | SimulationStage::Extinguishing
        )
    }

    /// Whether the crew of humans is on screen.
    pub fn humans_visible(self) -> bool {
        matches!(
            self,
            SimulationStage::HumansArrive
                | SimulationStage::FirefightersArrive
                | SimulationStage::Extinguishing
                | SimulationStage::AllClear
                | SimulationStage::TrucksLeaving
        )
    }

    /// Whether the crew is still walking toward the building.
    pub fn humans_walking(self) -> bool {
        matches!(self, SimulationStage::HumansArrive)
    }

    /// Status line shown in the HUD.
    pub fn status_text(self) -> &'static str {
        match self {
            SimulationStage::Normal => "Status: Normal",
            SimulationStage::FireStart => "ALERT: Fire detected!",
            SimulationStage::Alarm => "ALERT: Alarm activated!",
            SimulationStage::HumansArrive => "Emergency crew arriving",
            SimulationStage::FirefightersArrive => "Firefighters arriving",
            SimulationStage::Extinguishing => "Extinguishing fire",
            SimulationStage::AllClear => "ALL CLEAR - Fire out",
            SimulationStage::TrucksLeaving => "Firefighters leaving",
        }
    }

    /// HUD colour of the status line as RGB.
    pub fn status_rgb(self) -> (u8, u8, u8) {
        match self {
            SimulationStage::Normal => (255, 255, 255),
            SimulationStage::FireStart | SimulationStage::Alarm => (255, 0, 0),
            SimulationStage::Extinguishing => (0, 128, 255),
            SimulationStage::HumansArrive
            | SimulationStage::FirefightersArrive
            | SimulationStage::AllClear
            | SimulationStage::TrucksLeaving => (0, 255, 0),
        }
    }

    /// The transition leaving this stage, if any.
    pub fn outgoing(self) -> Option<&'static StageTransition> {
        TRANSITIONS.iter().find(|t| t.from == self)
    }

    /// The transition that enters this stage, if any.
    pub fn incoming(self) -> Option<&'static StageTransition> {
        TRANSITIONS.iter().find(|t| t.to == self)
    }
}

impl PartialOrd for SimulationStage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimulationStage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for SimulationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Extra condition a transition needs besides the time threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    None,
    /// The human group has reached its stopping point.
    HumansInPlace,
    /// Every fire truck has reached its parking spot.
    TrucksArrived,
}

/// Side effect on a sound cue when a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueAction {
    Start(SoundCue),
    Stop(SoundCue),
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTransition {
    pub from: SimulationStage,
    pub to: SimulationStage,
    /// `WorldTime::elapsed` must be strictly greater than this.
    pub after: f32,
    pub requires: Prerequisite,
    /// Entry appended to the event log.
    pub announcement: &'static str,
    pub cues: &'static [CueAction],
}

pub const TRANSITIONS: [StageTransition; 7] = [
    StageTransition {
        from: SimulationStage::Normal,
        to: SimulationStage::FireStart,
        after: 3.0,
        requires: Prerequisite::None,
        announcement: "ALERT: Fire detected in building!",
        cues: &[],
    },
    StageTransition {
        from: SimulationStage::FireStart,
        to: SimulationStage::Alarm,
        after: 6.0,
        requires: Prerequisite::None,
        announcement: "ALERT: Alarm activated!",
        cues: &[CueAction::Start(SoundCue::Alarm)],
    },
    StageTransition {
        from: SimulationStage::Alarm,
        to: SimulationStage::HumansArrive,
        after: 9.0,
        requires: Prerequisite::None,
        announcement: "UPDATE: Emergency crew arriving",
        cues: &[],
    },
    StageTransition {
        from: SimulationStage::HumansArrive,
        to: SimulationStage::FirefightersArrive,
        after: 12.0,
        requires: Prerequisite::HumansInPlace,
        announcement: "UPDATE: Firefighters dispatched",
        cues: &[CueAction::Start(SoundCue::Truck)],
    },
    StageTransition {
        from: SimulationStage::FirefightersArrive,
        to: SimulationStage::Extinguishing,
        after: 15.0,
        requires: Prerequisite::TrucksArrived,
        announcement: "UPDATE: Firefighters extinguishing fire",
        cues: &[CueAction::Start(SoundCue::Water)],
    },
    StageTransition {
        from: SimulationStage::Extinguishing,
        to: SimulationStage::AllClear,
        after: 25.0,
        requires: Prerequisite::None,
        announcement: "UPDATE: Fire extinguished!",
        cues: &[
            CueAction::Stop(SoundCue::Alarm),
            CueAction::Stop(SoundCue::Water),
        ],
    },
    StageTransition {
        from: SimulationStage::AllClear,
        to: SimulationStage::TrucksLeaving,
        after: 28.0,
        requires: Prerequisite::None,
        announcement: "UPDATE: Firefighters leaving scene",
        cues: &[CueAction::Stop(SoundCue::Truck)],
    },
];

/// Current stage of the scene plus the window chosen to burn.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneStage {
    current: SimulationStage,
    burning_window: Option<usize>,
}

impl SceneStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SimulationStage {
        self.current
    }

    /// Index of the burning window of the main building, once the fire started.
    pub fn burning_window(&self) -> Option<usize> {
        self.burning_window
    }

    /// Fire is drawn and emits particles only with a burning window chosen.
    pub fn fire_burning(&self) -> bool {
        self.current.fire_active() && self.burning_window.is_some()
    }

    /// Move to `to`. Returns the stage that was left.
    ///
    /// Only forward moves are accepted; a backwards or same-stage request is
    /// ignored and returns `None`.
    pub fn advance_to(&mut self, to: SimulationStage) -> Option<SimulationStage> {
        if to <= self.current {
            return None;
        }
        Some(std::mem::replace(&mut self.current, to))
    }

    /// Record the burning window. Only the first call has an effect.
    pub fn ignite(&mut self, window: usize) -> bool {
        if self.burning_window.is_some() {
            return false;
        }
        self.burning_window = Some(window);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [SimulationStage; 8] = [
        SimulationStage::Normal,
        SimulationStage::FireStart,
        SimulationStage::Alarm,
        SimulationStage::HumansArrive,
        SimulationStage::FirefightersArrive,
        SimulationStage::Extinguishing,
        SimulationStage::AllClear,
        SimulationStage::TrucksLeaving,
    ];

    #[test]
    fn transitions_chain_every_stage_once() {
        for pair in ORDER.windows(2) {
            let t = pair[0].outgoing().expect("missing outgoing transition");
            assert_eq!(t.to, pair[1]);
            assert_eq!(pair[1].incoming().map(|t| t.from), Some(pair[0]));
        }
        assert!(SimulationStage::TrucksLeaving.outgoing().is_none());
        assert!(SimulationStage::Normal.incoming().is_none());
    }

    #[test]
    fn thresholds_increase_along_the_table() {
        for pair in TRANSITIONS.windows(2) {
            assert!(pair[0].after < pair[1].after);
        }
    }

    #[test]
    fn order_follows_rank() {
        for pair in ORDER.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn fire_is_active_from_fire_start_until_all_clear() {
        let active: Vec<_> = ORDER.iter().filter(|s| s.fire_active()).copied().collect();
        assert_eq!(
            active,
            vec![
                SimulationStage::FireStart,
                SimulationStage::Alarm,
                SimulationStage::HumansArrive,
                SimulationStage::FirefightersArrive,
                SimulationStage::Extinguishing,
            ]
        );
    }

    #[test]
    fn humans_only_walk_while_arriving() {
        let walking: Vec<_> = ORDER.iter().filter(|s| s.humans_walking()).collect();
        assert_eq!(walking, vec![&SimulationStage::HumansArrive]);
        assert!(!SimulationStage::Alarm.humans_visible());
        assert!(SimulationStage::TrucksLeaving.humans_visible());
    }

    #[test]
    fn advance_refuses_to_go_back() {
        let mut stage = SceneStage::new();
        assert_eq!(
            stage.advance_to(SimulationStage::Alarm),
            Some(SimulationStage::Normal)
        );
        assert_eq!(stage.advance_to(SimulationStage::FireStart), None);
        assert_eq!(stage.advance_to(SimulationStage::Alarm), None);
        assert_eq!(stage.current(), SimulationStage::Alarm);
    }

    #[test]
    fn ignite_only_once() {
        let mut stage = SceneStage::new();
        assert!(stage.ignite(7));
        assert!(!stage.ignite(3));
        assert_eq!(stage.burning_window(), Some(7));
    }
}
