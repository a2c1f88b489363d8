use super::transform::Direction;
use super::zone::ZoneState;
use crate::options::MotionOptions;

/// Outcome of advancing along the rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailStep {
    /// Candidate depth after clamping to the rail.
    pub depth: f32,
    /// Whether the candidate hit a rail end.
    pub clamped: bool,
    /// Whether the direction should reverse.
    pub flipped: bool,
}

/// The depth rail the camera travels on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRail {
    /// Interior end.
    pub min_z: f32,
    /// Terrace end.
    pub max_z: f32,
}

impl DepthRail {
    /// Rail spanning the configured bounds.
    #[must_use]
    pub fn from_options(options: &MotionOptions) -> Self {
        Self {
            min_z: options.min_z,
            max_z: options.max_z,
        }
    }

    /// Clamp a depth onto the rail.
    #[must_use]
    pub fn clamp(&self, depth: f32) -> f32 {
        depth.clamp(self.min_z, self.max_z)
    }

    /// Advance `distance` along `direction` starting from `from`.
    ///
    /// Positive distance walks the way the camera faces (forward travel
    /// lowers depth). A candidate beyond either end is clamped; the direction
    /// reverses only when the motion was heading along the direction of
    /// travel into the end ahead, and never on the terrace before the first
    /// turn.
    #[must_use]
    pub fn advance(
        &self,
        from: f32,
        distance: f32,
        direction: Direction,
        zone: &ZoneState,
    ) -> RailStep {
        let candidate = from - distance * direction.sign();
        let depth = self.clamp(candidate);
        let clamped = !(self.min_z..=self.max_z).contains(&candidate);
        let flipped = clamped && distance > 0.0 && zone.allows_reversal();
        RailStep {
            depth,
            clamped,
            flipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::zone::Zone;

    fn rail() -> DepthRail {
        DepthRail::from_options(&MotionOptions::default())
    }

    fn interior() -> ZoneState {
        ZoneState {
            current: Zone::Interior,
            has_performed_first_turn: false,
        }
    }

    #[test]
    fn forward_motion_lowers_depth() {
        let step = rail().advance(100.0, 30.0, Direction::Forward, &interior());
        assert_eq!(step.depth, 70.0);
        assert!(!step.clamped && !step.flipped);
        let back = rail().advance(100.0, 30.0, Direction::Backward, &interior());
        assert_eq!(back.depth, 130.0);
    }

    #[test]
    fn forward_past_min_clamps_and_flips() {
        let step = rail().advance(-490.0, 50.0, Direction::Forward, &interior());
        assert_eq!(step.depth, -500.0);
        assert!(step.clamped);
        assert!(step.flipped);
    }

    #[test]
    fn retreating_into_the_end_behind_only_clamps() {
        // Facing backward, scrolling the other way toward the interior end
        let step =
            rail().advance(-490.0, -50.0, Direction::Backward, &interior());
        assert_eq!(step.depth, -500.0);
        assert!(step.clamped);
        assert!(!step.flipped);
    }

    #[test]
    fn terrace_end_flip_requires_first_turn() {
        let mut terrace = ZoneState {
            current: Zone::Terrace,
            has_performed_first_turn: false,
        };
        let step = rail().advance(490.0, 50.0, Direction::Backward, &terrace);
        assert_eq!(step.depth, 500.0);
        assert!(!step.flipped);

        terrace.has_performed_first_turn = true;
        let step = rail().advance(490.0, 50.0, Direction::Backward, &terrace);
        assert_eq!(step.depth, 500.0);
        assert!(step.flipped);
    }
}
