/// Depth zone of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    /// Outer zone beyond the door; look input is restricted.
    #[default]
    Terrace,
    /// Inside the door.
    Interior,
}

/// Classify a depth: terrace strictly above the door threshold, interior at
/// or below it.
#[inline]
#[must_use]
pub fn classify(depth: f32, door_threshold: f32) -> Zone {
    if depth > door_threshold {
        Zone::Terrace
    } else {
        Zone::Interior
    }
}

/// Edge detected when the camera changes zone between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTransition {
    /// Terrace → interior.
    EnteredInterior,
    /// Interior → terrace.
    EnteredTerrace,
}

/// Current zone plus the session-long first-turn flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneState {
    /// Zone observed on the last frame.
    pub current: Zone,
    /// Set once the player has reversed direction deep inside the interior.
    /// Never cleared for the lifetime of a session.
    pub has_performed_first_turn: bool,
}

impl ZoneState {
    /// State for a camera starting at `depth`.
    #[must_use]
    pub fn at_depth(depth: f32, door_threshold: f32) -> Self {
        Self {
            current: classify(depth, door_threshold),
            has_performed_first_turn: false,
        }
    }

    /// Record this frame's zone and report an edge if it changed.
    pub fn observe(&mut self, zone: Zone) -> Option<ZoneTransition> {
        if zone == self.current {
            return None;
        }
        self.current = zone;
        Some(match zone {
            Zone::Interior => ZoneTransition::EnteredInterior,
            Zone::Terrace => ZoneTransition::EnteredTerrace,
        })
    }

    /// Whether rotation and lateral-offset input is honoured.
    #[must_use]
    pub fn allows_look(&self) -> bool {
        self.current == Zone::Interior || self.has_performed_first_turn
    }

    /// Whether a direction reversal is allowed at the current zone.
    #[must_use]
    pub fn allows_reversal(&self) -> bool {
        self.allows_look()
    }

    /// Note a direction reversal at `depth`. It counts as the first turn when
    /// made inside the interior within `margin` of the interior end.
    /// Returns `true` if this call set the flag.
    pub fn record_reversal(&mut self, depth: f32, min_z: f32, margin: f32) -> bool {
        if self.has_performed_first_turn
            || self.current != Zone::Interior
            || depth - min_z > margin
        {
            return false;
        }
        self.has_performed_first_turn = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_strict_above_threshold() {
        assert_eq!(classify(0.1, 0.0), Zone::Terrace);
        assert_eq!(classify(0.0, 0.0), Zone::Interior);
        assert_eq!(classify(-250.0, 0.0), Zone::Interior);
        for z in (-500..=500).step_by(25) {
            let z = z as f32;
            assert_eq!(classify(z, 0.0) == Zone::Terrace, z > 0.0);
        }
    }

    #[test]
    fn observe_reports_edges_only() {
        let mut state = ZoneState::at_depth(300.0, 0.0);
        assert_eq!(state.observe(Zone::Terrace), None);
        assert_eq!(
            state.observe(Zone::Interior),
            Some(ZoneTransition::EnteredInterior)
        );
        assert_eq!(state.observe(Zone::Interior), None);
        assert_eq!(
            state.observe(Zone::Terrace),
            Some(ZoneTransition::EnteredTerrace)
        );
    }

    #[test]
    fn terrace_blocks_look_until_first_turn() {
        let mut state = ZoneState::at_depth(300.0, 0.0);
        assert!(!state.allows_look());
        let _ = state.observe(Zone::Interior);
        assert!(state.allows_look());
        // Reversal far from the interior end does not count
        assert!(!state.record_reversal(-100.0, -500.0, 40.0));
        assert!(state.record_reversal(-480.0, -500.0, 40.0));
        let _ = state.observe(Zone::Terrace);
        assert!(state.allows_look());
        // The flag sticks
        assert!(!state.record_reversal(-500.0, -500.0, 40.0));
        assert!(state.has_performed_first_turn);
    }
}
