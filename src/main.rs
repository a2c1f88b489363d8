//! Headless walkthrough session.
//!
//! Drives a [`WalkController`] against an in-memory scene with a scripted
//! sequence of wheel, touch and keyboard input, logging what happens. Pass a
//! TOML options preset as the first argument to try different tunables:
//!
//! ```text
//! RUST_LOG=debug vestibule presets/slow.toml
//! ```

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use vestibule::input::{
    InputCapabilities, RawInput, TouchEvent, TouchPoint, WheelEvent,
};
use vestibule::runtime::MemoryScene;
use vestibule::scheduler::ManualScheduler;
use vestibule::{ControlError, Options, WalkController};
use web_time::Instant;

/// Nominal 60 Hz frame interval for the simulated display.
const FRAME: Duration = Duration::from_millis(16);

struct Session {
    controller: WalkController,
    scene: MemoryScene,
    now: Instant,
}

impl Session {
    fn new(options: Options) -> Result<Self, ControlError> {
        let door = options
            .doors
            .ids
            .first()
            .cloned()
            .unwrap_or_else(|| "front_door".to_owned());
        let mut scene = MemoryScene::new()
            .with_object(&door, Vec3::ZERO)
            .with_object("welcome_sign", Vec3::new(2.0, 1.0, -200.0));
        let mut controller = WalkController::new(
            options,
            InputCapabilities::touch(),
            (1280.0, 720.0),
            Box::new(ManualScheduler::new()),
        )?;
        controller.initialize(&mut scene)?;
        Ok(Self {
            controller,
            scene,
            now: Instant::now(),
        })
    }

    fn run_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.now += FRAME;
            let Some(handle) = self.controller.pending_frame() else {
                return;
            };
            if let Err(e) = self.controller.on_frame(handle, self.now, &mut self.scene)
            {
                log::warn!("frame failed: {e}");
            }
        }
    }

    fn report(&self, label: &str) {
        let t = self.controller.transform();
        log::info!(
            "{label}: depth {:.1}, yaw {:.1}°, {:?}, {:?}, first turn {}",
            t.depth(),
            t.rotation.y.to_degrees(),
            self.controller.current_zone(),
            self.controller.direction(),
            self.controller.has_performed_first_turn(),
        );
    }

    fn touch(&self, x: f32, y: f32, offset_ms: u64) -> TouchEvent {
        TouchEvent {
            touches: vec![TouchPoint { id: 0, x, y }],
            timestamp: self.now + Duration::from_millis(offset_ms),
        }
    }

    fn run(&mut self) -> Result<(), ControlError> {
        self.report("start");

        // Walk in with the wheel; the door opens on the way
        for _ in 0..30 {
            let wheel = RawInput::Wheel(WheelEvent {
                delta_y: 40.0,
                timestamp: self.now,
            });
            self.controller.handle_input(&wheel)?;
            self.run_frames(1);
        }
        self.run_frames(120);
        self.report("after walk-in");

        // Swipe to look around, then let inertia coast
        self.controller.handle_input(&RawInput::TouchStart(self.touch(400.0, 360.0, 0)))?;
        for step in 1..=4_u16 {
            let x = 400.0 + 60.0 * f32::from(step);
            let ev = self.touch(x, 360.0, 15 * u64::from(step));
            self.controller.handle_input(&RawInput::TouchMove(ev))?;
        }
        let end = TouchEvent {
            touches: Vec::new(),
            timestamp: self.now + Duration::from_millis(70),
        };
        let coasting = self.controller.on_touch_end(&end)?;
        log::info!("swipe released, inertia {coasting}");
        self.run_frames(60);
        self.report("after swipe");

        // Showcase viewpoint and back
        self.controller.showcase(
            Vec3::new(0.0, 4.0, -350.0),
            Vec3::new(-20.0, 180.0, 0.0),
            Duration::from_millis(600),
            self.now,
        )?;
        self.run_frames(45);
        self.report("showcase");
        let _ = self.controller.handle_key_press("Escape", self.now)?;
        self.run_frames(75);
        self.report("restored");

        // Walk to the far end until the camera turns around
        for _ in 0..400 {
            if self.controller.move_by(30.0)?.flipped {
                break;
            }
            self.run_frames(1);
        }
        self.run_frames(120);
        self.report("far end");

        self.controller.teardown();
        log::info!(
            "{} events emitted: {:?}",
            self.scene.emitted().len(),
            self.scene.emitted()
        );
        Ok(())
    }
}

fn load_options() -> Result<Options, ControlError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {path}");
            let options = Options::load(Path::new(&path))?;
            options.validate()?;
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Session::new(options).and_then(|mut session| session.run()) {
        log::error!("session failed: {e}");
        std::process::exit(1);
    }
}
