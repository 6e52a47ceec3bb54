//! putt-engine: a headless mini-golf physics and course-rules engine.
//!
//! The crate owns everything below the renderer: deterministic fixed-substep
//! ball physics over hand-authored holes (walls, water, sand, ice, boost
//! pads, bridges, trees), a ghost-mode trajectory predictor, and the full
//! shot/turn/hole session state machine with hot-seat multiplayer and a
//! challenge mode. The host feeds it input events and a frame delta; it
//! hands back state to draw and domain events to announce.
//!
//! ```no_run
//! use putt_engine::{Course, GameMode, GolfSession, InputQueue, PlayerDef, SessionConfig};
//!
//! let course = Course::from_json(include_str!("../demos/courses/classic.json")).unwrap();
//! let mut session = GolfSession::new(
//!     course,
//!     vec![PlayerDef::named("Player 1")],
//!     GameMode::Standard,
//!     SessionConfig::default(),
//! );
//! let mut input = InputQueue::new();
//! loop {
//!     // host: collect input, then once per animation frame:
//!     session.update(1.0 / 60.0, &input);
//!     input.drain();
//!     for event in session.drain_events() {
//!         // announce / play audio
//!         let _ = event;
//!     }
//!     // draw session.players(), session.hole(), session.predict_path(), ...
//! }
//! ```

pub mod core;
pub mod course;
pub mod input;
pub mod physics;
pub mod session;

pub use self::core::geom;
pub use self::core::time::{FrameClock, MAX_FRAME_DT, NOMINAL_FRAME_DT, SUBSTEPS_PER_FRAME};
pub use course::derived::{build_derived_walls, BRIDGE_EDGE_THICKNESS};
pub use course::model::{
    Boost, Bridge, CircleSpec, Course, HazardShape, Hole, Point, Tree, Wall,
};
pub use input::queue::{InputEvent, InputQueue};
pub use physics::ball::{Ball, BushState};
pub use physics::step::{step_ball, step_balls, Field, PhysicsTuning, SubstepOutcome};
pub use physics::trajectory::{predict, Prediction, STEPS_PER_POWER_UNIT};
pub use session::alligator::{Alligator, AlligatorState};
pub use session::config::{AlligatorConfig, SessionConfig, TimingConfig};
pub use session::events::SessionEvent;
pub use session::phase::{PendingTransition, Phase, TransitionAction};
pub use session::player::{BallColor, Player, PlayerDef};
pub use session::{GameMode, GolfSession};
