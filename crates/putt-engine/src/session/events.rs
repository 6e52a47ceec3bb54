//! Outbound session events.
//!
//! Fire-and-forget notifications for the rendering/audio/TTS collaborators.
//! The session queues them; the host drains them each frame and the core
//! never awaits their consumption.

/// Something the outside world may want to announce or render.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new hole's intro banner is showing.
    HoleStarted { hole: usize },
    /// A shot was released at the given power.
    ShotTaken { player: usize, power: f32 },
    /// A ball bounced off a wall (authored or bridge edge).
    WallBounce { player: usize },
    /// A ball was trapped by a tree/bush.
    BushStuck { player: usize },
    /// The unlock shot freed a trapped ball (stroke consumed, no movement).
    BushFreed { player: usize },
    /// A ball landed in water: penalty stroke, reset to the hole start.
    WaterSplash { player: usize },
    /// An alligator surfaced near an idle ball.
    AlligatorEmerged { player: usize },
    /// The alligator's bite landed: treated exactly like a water hazard.
    AlligatorBite { player: usize },
    /// A ball dropped in the cup.
    HoleIn { player: usize, strokes: u32 },
    /// Every active player finished the hole; the outro is showing.
    HoleCompleted { hole: usize },
    /// Challenge mode: strokes reached par without holing out.
    CourseFailed { hole: usize },
    /// The course is over. `standings` holds player indices, best first.
    GameOver { standings: Vec<usize> },
}
