//! The shot/turn/hole state machine.
//!
//! `GolfSession` owns the course, the players, and every transient state the
//! renderer reads. One `update` call per animation frame: clamp the delta,
//! apply input, advance the charge, run the fixed substeps, apply penalties,
//! rotate turns, and fire due transitions. Single-threaded by design; all
//! mutation happens inside `update`.

use glam::Vec2;
use log::{debug, info, warn};

pub mod alligator;
pub mod config;
pub mod events;
pub mod phase;
pub mod player;

use crate::core::time::{FrameClock, SUBSTEPS_PER_FRAME};
use crate::course::derived::build_derived_walls;
use crate::course::model::{Course, Hole, Wall};
use crate::input::queue::{InputEvent, InputQueue};
use crate::physics::ball::BushState;
use crate::physics::step::{step_ball, Field};
use crate::physics::trajectory::{predict, Prediction};

use alligator::{spawn_point_near, Alligator, AlligatorTick};
use config::SessionConfig;
use events::SessionEvent;
use phase::{PendingTransition, Phase, TransitionAction};
use player::{Player, PlayerDef};

/// How the session scores and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Hot-seat stroke play: every player finishes every hole.
    Standard,
    /// Solo: reaching par on any hole without holing out fails the course
    /// and restarts it from hole 1.
    Challenge,
}

/// A full game of mini-golf over one course.
pub struct GolfSession {
    course: Course,
    config: SessionConfig,
    mode: GameMode,
    hole_index: usize,
    /// Synthetic bridge edge walls, rebuilt at each hole load. The authored
    /// wall lists are never modified.
    derived_walls: Vec<Wall>,
    players: Vec<Player>,
    current: usize,
    phase: Phase,
    charge_power: f32,
    pending: Option<PendingTransition>,
    alligator: Option<Alligator>,
    /// When the current player's ball last came to rest, for the alligator.
    idle_since: Option<f64>,
    finish_order: Vec<usize>,
    events: Vec<SessionEvent>,
    clock: FrameClock,
    paused: bool,
}

impl GolfSession {
    pub fn new(
        course: Course,
        player_defs: Vec<PlayerDef>,
        mode: GameMode,
        config: SessionConfig,
    ) -> Self {
        let defs = if player_defs.is_empty() {
            warn!("no players supplied, adding a default player");
            vec![PlayerDef::named("Player 1")]
        } else {
            player_defs
        };

        let start = course
            .holes
            .first()
            .map(|h| h.start_pos())
            .unwrap_or(Vec2::ZERO);
        let players = defs
            .into_iter()
            .enumerate()
            .map(|(i, def)| Player::new(i, def, start, config.tuning.ball_radius))
            .collect();

        let mut session = Self {
            course,
            config,
            mode,
            hole_index: 0,
            derived_walls: Vec::new(),
            players,
            current: 0,
            phase: Phase::GameOver,
            charge_power: 0.0,
            pending: None,
            alligator: None,
            idle_since: None,
            finish_order: Vec::new(),
            events: Vec::new(),
            clock: FrameClock::new(),
            paused: false,
        };

        if session.course.holes.is_empty() {
            warn!("course has no holes; session starts game-over");
        } else {
            session.load_hole(0);
        }
        session
    }

    // -- Read-only accessors for the renderer and host --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn hole_index(&self) -> usize {
        self.hole_index
    }

    pub fn hole(&self) -> Option<&Hole> {
        self.course.holes.get(self.hole_index)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player currently receiving input. Explicit accessor; there is
    /// no hidden "current ball" alias anywhere.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn charge_power(&self) -> f32 {
        self.charge_power
    }

    pub fn alligator(&self) -> Option<&Alligator> {
        self.alligator.as_ref()
    }

    pub fn derived_walls(&self) -> &[Wall] {
        &self.derived_walls
    }

    pub fn finish_order(&self) -> &[usize] {
        &self.finish_order
    }

    pub fn pending_transition(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Elapsed session time in seconds.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Whether a shot can begin right now. Only true once every live ball
    /// has come to rest, never mid-animation.
    pub fn can_shoot(&self) -> bool {
        self.phase == Phase::Aiming && self.all_balls_stopped()
    }

    /// Drain queued outbound events for the audio/TTS/render collaborators.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Predicted path of a full-power shot along the current aim.
    /// Ghost simulation only; real state is untouched.
    pub fn predict_path(&self) -> Prediction {
        match self.course.holes.get(self.hole_index) {
            Some(hole) => {
                let field = Field::new(hole, &self.derived_walls);
                let player = self.current_player();
                predict(player.ball.pos, player.aim_angle, &field, &self.config.tuning)
            }
            None => Prediction {
                points: Vec::new(),
                holed: false,
            },
        }
    }

    // -- The frame tick --

    /// Advance the session by one frame.
    pub fn update(&mut self, frame_dt: f32, input: &InputQueue) {
        if self.phase == Phase::GameOver {
            return;
        }

        for event in input.iter() {
            self.handle_input(*event);
        }
        if self.paused {
            return;
        }

        let dt = FrameClock::clamp_dt(frame_dt);
        self.clock.advance(dt);

        if self.phase == Phase::Charging {
            self.charge_power = (self.charge_power + self.config.timing.charge_rate * dt)
                .min(self.config.tuning.max_power);
        }

        if let Some(pending) = self.pending {
            if pending.due(self.clock.now()) {
                self.pending = None;
                self.apply_transition(pending.action);
            }
        }

        if self.phase == Phase::BallsMoving {
            self.run_physics_frame(dt);
            if self.phase == Phase::BallsMoving && self.all_balls_stopped() {
                self.end_of_shot();
            }
        }

        self.update_alligator();
    }

    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pause => {
                self.paused = !self.paused;
                info!("pause toggled: {}", self.paused);
            }
            _ if self.paused => {}
            InputEvent::AimDelta { radians } => {
                if matches!(self.phase, Phase::Aiming | Phase::Charging) {
                    self.players[self.current].aim_angle += radians;
                }
            }
            InputEvent::ChargeStart => {
                // A charge attempt while shooting is not allowed is
                // silently ignored.
                if self.can_shoot() {
                    self.phase = Phase::Charging;
                    self.charge_power = 0.0;
                }
            }
            InputEvent::ChargeEnd => {
                if self.phase == Phase::Charging {
                    self.release_shot();
                }
            }
            InputEvent::SkipTransition => {
                // Firing takes the value, so a timer cannot fire it again.
                if let Some(pending) = self.pending.take() {
                    self.apply_transition(pending.action);
                }
            }
        }
    }

    fn release_shot(&mut self) {
        let index = self.current;
        let power = self.charge_power;
        self.charge_power = 0.0;
        self.idle_since = None;

        let player = &mut self.players[index];
        player.strokes_this_hole += 1;
        player.total_strokes += 1;

        if player.ball.bush_state == BushState::Stuck {
            // The stroke is spent struggling free; the ball does not move,
            // and every ball is already at rest, so the shot ends here and
            // the turn passes like any other completed attempt.
            player.ball.bush_state = BushState::Unlocked;
            self.events.push(SessionEvent::BushFreed { player: index });
            info!("{} breaks free of the bush (stroke {})", self.players[index].name, self.players[index].strokes_this_hole);
            self.end_of_shot();
            return;
        }

        player.ball.vel = Vec2::from_angle(player.aim_angle) * power;
        self.phase = Phase::BallsMoving;
        self.events.push(SessionEvent::ShotTaken { player: index, power });
        debug!("{} shoots at power {:.2}", self.players[index].name, power);
    }

    fn run_physics_frame(&mut self, dt: f32) {
        let scale = FrameClock::substep_scale(dt);
        for _ in 0..SUBSTEPS_PER_FRAME {
            let mut water_hits: Vec<usize> = Vec::new();
            let mut bush_hits: Vec<usize> = Vec::new();
            let mut wall_hits: Vec<usize> = Vec::new();
            {
                let hole = &self.course.holes[self.hole_index];
                let field = Field::new(hole, &self.derived_walls);
                for (i, player) in self.players.iter_mut().enumerate() {
                    if player.finished_hole || !player.has_started_hole {
                        continue;
                    }
                    let outcome = step_ball(&mut player.ball, &field, &self.config.tuning, scale);
                    if outcome.in_water {
                        water_hits.push(i);
                    }
                    if outcome.entered_bush {
                        bush_hits.push(i);
                    }
                    if outcome.hit_wall {
                        wall_hits.push(i);
                    }
                }
            }
            for i in wall_hits {
                self.events.push(SessionEvent::WallBounce { player: i });
            }
            for i in bush_hits {
                self.events.push(SessionEvent::BushStuck { player: i });
                info!("{} is stuck in a bush", self.players[i].name);
            }
            for i in water_hits {
                self.events.push(SessionEvent::WaterSplash { player: i });
                self.apply_ball_penalty(i);
            }
            self.check_hole_outs();
        }
    }

    /// Penalty stroke plus reset to the hole start. Shared by the water
    /// hazard and the alligator bite.
    fn apply_ball_penalty(&mut self, index: usize) {
        let start = self.course.holes[self.hole_index].start_pos();
        let player = &mut self.players[index];
        player.strokes_this_hole += 1;
        player.total_strokes += 1;
        player.ball.place(start);
        player.ball.bush_state = BushState::None;
        info!(
            "{} takes a penalty, back to the start (stroke {})",
            player.name, player.strokes_this_hole
        );
    }

    fn check_hole_outs(&mut self) {
        let hole = &self.course.holes[self.hole_index];
        let cup = hole.cup_pos();
        let cup_radius = hole.cup_radius();

        let mut holed: Vec<(usize, u32)> = Vec::new();
        for (i, player) in self.players.iter_mut().enumerate() {
            if player.finished_hole || !player.has_started_hole {
                continue;
            }
            if player.ball.pos.distance(cup) < cup_radius {
                // Marked exactly once; the flag takes the ball out of play
                // so later substeps cannot re-trigger scoring.
                player.finished_hole = true;
                player.ball.place(cup);
                holed.push((i, player.strokes_this_hole));
            }
        }
        for (i, strokes) in holed {
            self.finish_order.push(i);
            self.events.push(SessionEvent::HoleIn { player: i, strokes });
            info!("{} holes out in {} strokes", self.players[i].name, strokes);
        }
    }

    fn all_balls_stopped(&self) -> bool {
        let epsilon = self.config.tuning.stop_epsilon;
        self.players
            .iter()
            .filter(|p| p.has_started_hole && !p.finished_hole)
            .all(|p| p.ball.is_stopped(epsilon))
    }

    /// Every live ball has come to rest after a shot: score, fail, or
    /// rotate the turn.
    fn end_of_shot(&mut self) {
        let now = self.clock.now();

        if self.mode == GameMode::Challenge {
            let player = &self.players[self.current];
            let par = self.course.holes[self.hole_index].par;
            if !player.finished_hole && player.strokes_this_hole >= par {
                info!("challenge failed on hole {}", self.hole_index + 1);
                self.events.push(SessionEvent::CourseFailed { hole: self.hole_index });
                self.phase = Phase::HoleTransition;
                self.pending = Some(PendingTransition::new(
                    now + self.config.timing.hole_outro_secs,
                    TransitionAction::RestartCourse,
                ));
                return;
            }
        }

        if self.players.iter().all(|p| p.finished_hole) {
            self.events.push(SessionEvent::HoleCompleted { hole: self.hole_index });
            let action = if self.hole_index + 1 >= self.course.holes.len() {
                TransitionAction::FinishCourse
            } else {
                TransitionAction::AdvanceHole
            };
            self.phase = Phase::HoleTransition;
            self.pending = Some(PendingTransition::new(
                now + self.config.timing.hole_outro_secs,
                action,
            ));
            return;
        }

        self.advance_turn();
    }

    /// Next player who has not finished the hole, skipping finished ones.
    /// Wraps around to the same player in solo play.
    fn advance_turn(&mut self) {
        let count = self.players.len();
        let mut next = self.current;
        for offset in 1..=count {
            let candidate = (self.current + offset) % count;
            if !self.players[candidate].finished_hole {
                next = candidate;
                break;
            }
        }
        self.current = next;

        let start = self.course.holes[self.hole_index].start_pos();
        let player = &mut self.players[next];
        if !player.has_started_hole {
            // Staggered start: the ball appears on the hole on the
            // player's first turn.
            player.has_started_hole = true;
            player.ball.place(start);
        }
        self.phase = Phase::Aiming;
        self.charge_power = 0.0;
        self.idle_since = Some(self.clock.now());
        debug!("turn passes to {}", player.name);
    }

    fn apply_transition(&mut self, action: TransitionAction) {
        match action {
            TransitionAction::StartHole => {
                self.phase = Phase::Aiming;
                self.idle_since = Some(self.clock.now());
            }
            TransitionAction::AdvanceHole => {
                let next = self.hole_index + 1;
                self.load_hole(next);
            }
            TransitionAction::FinishCourse => {
                let standings = self.standings();
                self.phase = Phase::GameOver;
                info!("course complete");
                self.events.push(SessionEvent::GameOver { standings });
            }
            TransitionAction::RestartCourse => {
                for player in &mut self.players {
                    player.total_strokes = 0;
                }
                self.load_hole(0);
            }
        }
    }

    /// Player indices ranked by cumulative strokes, best first.
    fn standings(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_by_key(|&i| self.players[i].total_strokes);
        order
    }

    fn load_hole(&mut self, index: usize) {
        self.hole_index = index;
        let hole = &self.course.holes[index];
        let start = hole.start_pos();
        self.derived_walls = build_derived_walls(hole);

        for player in &mut self.players {
            player.reset_for_hole(start);
        }
        self.current = 0;
        self.players[0].has_started_hole = true;
        self.finish_order.clear();
        self.alligator = None;
        self.idle_since = None;
        self.charge_power = 0.0;

        self.phase = Phase::HoleTransition;
        self.pending = Some(PendingTransition::new(
            self.clock.now() + self.config.timing.hole_intro_secs,
            TransitionAction::StartHole,
        ));
        self.events.push(SessionEvent::HoleStarted { hole: index });
        info!("hole {} loaded (par {})", index + 1, hole.par);
    }

    fn update_alligator(&mut self) {
        let now = self.clock.now();

        let mut bite_target: Option<usize> = None;
        let mut submerged = false;
        if let Some(gator) = self.alligator.as_mut() {
            match gator.tick(now, &self.config.alligator) {
                AlligatorTick::BiteLanded => bite_target = Some(gator.target),
                AlligatorTick::Finished => submerged = true,
                AlligatorTick::InProgress => {}
            }
        }
        if submerged {
            self.alligator = None;
        }
        if let Some(target) = bite_target {
            // The bite only lands if the ball is still sitting there.
            let epsilon = self.config.tuning.stop_epsilon;
            let still_idle = {
                let player = &self.players[target];
                !player.finished_hole && player.ball.is_stopped(epsilon)
            };
            if still_idle {
                self.events.push(SessionEvent::AlligatorBite { player: target });
                self.apply_ball_penalty(target);
            }
        }
        if self.alligator.is_some() {
            // At most one alligator active globally.
            return;
        }

        // Spawn check: only while the current player's ball sits idle.
        if !matches!(self.phase, Phase::Aiming | Phase::Charging) {
            return;
        }
        let Some(since) = self.idle_since else {
            self.idle_since = Some(now);
            return;
        };
        if now - since < self.config.alligator.idle_secs {
            return;
        }
        // The timer has elapsed; either spawn or re-arm.
        self.idle_since = Some(now);

        let hole = &self.course.holes[self.hole_index];
        let ball_pos = self.players[self.current].ball.pos;
        if let Some(pos) = spawn_point_near(hole, ball_pos, self.config.alligator.proximity) {
            self.alligator = Some(Alligator::spawn(pos, self.current, now, &self.config.alligator));
            self.events.push(SessionEvent::AlligatorEmerged { player: self.current });
            info!("an alligator emerges near {}", self.players[self.current].name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::model::{CircleSpec, HazardShape, Tree};

    fn open_hole(par: u32, start: Vec2, cup: Vec2) -> Hole {
        Hole {
            par,
            start: CircleSpec { x: start.x, y: start.y, radius: 15.0 },
            end: CircleSpec { x: cup.x, y: cup.y, radius: 12.0 },
            walls: Vec::new(),
            waters: Vec::new(),
            sands: Vec::new(),
            ice: Vec::new(),
            boosts: Vec::new(),
            bridges: Vec::new(),
            trees: Vec::new(),
        }
    }

    fn one_hole_course(hole: Hole) -> Course {
        Course {
            name: "test".to_string(),
            holes: vec![hole],
        }
    }

    fn solo_session(hole: Hole) -> GolfSession {
        GolfSession::new(
            one_hole_course(hole),
            vec![PlayerDef::named("Solo")],
            GameMode::Standard,
            SessionConfig::default(),
        )
    }

    fn pump(session: &mut GolfSession, frames: usize) {
        let empty = InputQueue::new();
        for _ in 0..frames {
            session.update(1.0 / 60.0, &empty);
        }
    }

    fn send(session: &mut GolfSession, event: InputEvent) {
        let mut queue = InputQueue::new();
        queue.push(event);
        session.update(1.0 / 60.0, &queue);
    }

    /// Aim at an absolute angle, charge for `charge_frames`, release, and
    /// wait until the shot settles.
    fn shoot(session: &mut GolfSession, aim: f32, charge_frames: usize) {
        let delta = aim - session.current_player().aim_angle;
        send(session, InputEvent::AimDelta { radians: delta });
        send(session, InputEvent::ChargeStart);
        pump(session, charge_frames);
        send(session, InputEvent::ChargeEnd);
        for _ in 0..5000 {
            if session.phase() != Phase::BallsMoving {
                break;
            }
            pump(session, 1);
        }
        assert_ne!(session.phase(), Phase::BallsMoving, "shot never settled");
    }

    fn shoot_full(session: &mut GolfSession, aim: f32) {
        // 2.5 s of charging saturates the power cap.
        shoot(session, aim, 150);
    }

    fn aim_at(from: Vec2, to: Vec2) -> f32 {
        let d = to - from;
        d.y.atan2(d.x)
    }

    #[test]
    fn intro_banner_then_aiming_via_skip() {
        let mut session = solo_session(open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0)));
        assert_eq!(session.phase(), Phase::HoleTransition);
        assert!(session.pending_transition().is_some());

        send(&mut session, InputEvent::SkipTransition);
        assert_eq!(session.phase(), Phase::Aiming);
        assert!(session.pending_transition().is_none());

        // The original timer must not fire again later.
        pump(&mut session, 300);
        assert_eq!(session.phase(), Phase::Aiming);
    }

    #[test]
    fn intro_banner_elapses_on_its_own() {
        let mut session = solo_session(open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0)));
        // Default intro is 2.5 s; 200 frames is beyond it.
        pump(&mut session, 200);
        assert_eq!(session.phase(), Phase::Aiming);
    }

    #[test]
    fn straight_shot_holes_out_and_scores_once() {
        let mut session = solo_session(open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0)));
        send(&mut session, InputEvent::SkipTransition);

        shoot_full(&mut session, 0.0);

        let player = &session.players()[0];
        assert!(player.finished_hole);
        assert_eq!(player.strokes_this_hole, 1);
        assert_eq!(session.finish_order(), &[0]);

        // Idempotence: further frames must not re-trigger scoring.
        pump(&mut session, 30);
        let hole_ins = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, SessionEvent::HoleIn { .. }))
            .count();
        assert_eq!(hole_ins, 1, "hole-in must fire exactly once");
        assert_eq!(session.finish_order().len(), 1);
    }

    #[test]
    fn water_penalty_then_hole_out_totals_three_strokes() {
        let mut hole = open_hole(4, Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0));
        // A pond off the direct line, so only a deliberate shot finds it.
        hole.waters.push(HazardShape::Circle { x: 200.0, y: 80.0, radius: 30.0 });
        let mut session = solo_session(hole);
        send(&mut session, InputEvent::SkipTransition);

        // Stroke 1: shoot into the pond. Penalty makes it 2 and resets.
        let into_water = aim_at(Vec2::new(100.0, 200.0), Vec2::new(200.0, 80.0));
        shoot_full(&mut session, into_water);
        {
            let player = &session.players()[0];
            assert_eq!(player.strokes_this_hole, 2, "shot + water penalty");
            assert!((player.ball.pos - Vec2::new(100.0, 200.0)).length() < 1e-3, "ball reset to start");
            assert!(!player.finished_hole);
        }
        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, SessionEvent::WaterSplash { player: 0 })));

        // Stroke 3: hole out.
        shoot_full(&mut session, 0.0);
        let player = &session.players()[0];
        assert!(player.finished_hole);
        assert_eq!(player.strokes_this_hole, 3);
        let events = session.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::HoleIn { player: 0, strokes: 3 })));
    }

    #[test]
    fn bush_unlock_shot_is_a_stationary_stroke() {
        let mut hole = open_hole(5, Vec2::new(100.0, 200.0), Vec2::new(500.0, 200.0));
        hole.trees.push(Tree { x: 200.0, y: 200.0, radius: 14.0 });
        let mut session = solo_session(hole);
        send(&mut session, InputEvent::SkipTransition);

        // Stroke 1 rolls straight into the tree and gets trapped.
        shoot_full(&mut session, 0.0);
        {
            let player = &session.players()[0];
            assert_eq!(player.ball.bush_state, BushState::Stuck);
            assert_eq!(player.strokes_this_hole, 1);
        }
        assert_eq!(session.phase(), Phase::Aiming);
        let stuck_pos = session.players()[0].ball.pos;

        // Stroke 2 is consumed struggling free: no movement, no velocity.
        send(&mut session, InputEvent::ChargeStart);
        pump(&mut session, 60);
        send(&mut session, InputEvent::ChargeEnd);

        let player = &session.players()[0];
        assert_eq!(player.ball.bush_state, BushState::Unlocked);
        assert_eq!(player.strokes_this_hole, 2);
        assert_eq!(player.ball.pos, stuck_pos, "unlock shot must not move the ball");
        assert_eq!(player.ball.vel, Vec2::ZERO);
        assert_eq!(session.phase(), Phase::Aiming);

        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, SessionEvent::BushStuck { player: 0 })));
        assert!(events.iter().any(|e| matches!(e, SessionEvent::BushFreed { player: 0 })));
    }

    #[test]
    fn bush_unlock_stroke_passes_the_turn() {
        let mut hole = open_hole(6, Vec2::new(100.0, 200.0), Vec2::new(500.0, 200.0));
        hole.trees.push(Tree { x: 200.0, y: 200.0, radius: 14.0 });
        let mut session = GolfSession::new(
            one_hole_course(hole),
            vec![PlayerDef::named("A"), PlayerDef::named("B")],
            GameMode::Standard,
            SessionConfig::default(),
        );
        send(&mut session, InputEvent::SkipTransition);

        // A rolls into the tree and gets trapped; the turn passes to B.
        shoot_full(&mut session, 0.0);
        assert_eq!(session.players()[0].ball.bush_state, BushState::Stuck);
        assert_eq!(session.current_index(), 1);

        // B plays a short shot away from the tree; back to A.
        shoot(&mut session, std::f32::consts::FRAC_PI_2, 10);
        assert_eq!(session.current_index(), 0);

        // A's unlock stroke is consumed in place. It is a completed shot
        // attempt with every ball at rest, so the turn must pass to B.
        send(&mut session, InputEvent::ChargeStart);
        pump(&mut session, 30);
        send(&mut session, InputEvent::ChargeEnd);

        let a = &session.players()[0];
        assert_eq!(a.ball.bush_state, BushState::Unlocked);
        assert_eq!(a.strokes_this_hole, 2);
        assert_eq!(
            session.current_index(),
            1,
            "turn must pass after the unlock stroke"
        );
        assert_eq!(session.phase(), Phase::Aiming);
    }

    #[test]
    fn wall_contact_emits_a_bounce_event() {
        let mut hole = open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(900.0, 900.0));
        hole.walls.push(Wall { x: 300.0, y: 100.0, width: 20.0, height: 200.0, angle: 0.0 });
        let mut session = solo_session(hole);
        send(&mut session, InputEvent::SkipTransition);

        shoot_full(&mut session, 0.0);

        let events = session.drain_events();
        assert!(
            events.iter().any(|e| matches!(e, SessionEvent::WallBounce { player: 0 })),
            "a shot into a wall must announce the bounce"
        );
    }

    #[test]
    fn turn_rotation_skips_finished_players() {
        let hole = open_hole(6, Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0));
        let mut session = GolfSession::new(
            one_hole_course(hole),
            vec![
                PlayerDef::named("A"),
                PlayerDef::named("B"),
                PlayerDef::named("C"),
            ],
            GameMode::Standard,
            SessionConfig::default(),
        );
        send(&mut session, InputEvent::SkipTransition);

        // Staggered start: only A is on the hole before their turn.
        assert!(session.players()[0].has_started_hole);
        assert!(!session.players()[1].has_started_hole);

        // A holes out immediately.
        assert_eq!(session.current_index(), 0);
        shoot_full(&mut session, 0.0);
        assert!(session.players()[0].finished_hole);

        // B's first turn: placed at the start. A short waste shot.
        assert_eq!(session.current_index(), 1);
        assert!(session.players()[1].has_started_hole);
        assert!(!session.players()[2].has_started_hole);
        shoot(&mut session, std::f32::consts::FRAC_PI_2, 10);

        // C's first turn, another waste shot.
        assert_eq!(session.current_index(), 2);
        shoot(&mut session, std::f32::consts::FRAC_PI_2, 10);

        // Rotation must skip the finished A and return to B.
        assert_eq!(session.current_index(), 1);

        // B holes out from wherever their ball rests.
        let b_pos = session.players()[1].ball.pos;
        shoot_full(&mut session, aim_at(b_pos, Vec2::new(300.0, 200.0)));
        assert!(session.players()[1].finished_hole);

        // Only C remains.
        assert_eq!(session.current_index(), 2);
        let c_pos = session.players()[2].ball.pos;
        shoot_full(&mut session, aim_at(c_pos, Vec2::new(300.0, 200.0)));
        assert!(session.players()[2].finished_hole);

        // Everyone done: hole outro, then the game-over summary.
        assert_eq!(session.phase(), Phase::HoleTransition);
        assert_eq!(session.finish_order(), &[0, 1, 2]);
        send(&mut session, InputEvent::SkipTransition);
        assert_eq!(session.phase(), Phase::GameOver);

        let events = session.drain_events();
        let standings = events.iter().find_map(|e| match e {
            SessionEvent::GameOver { standings } => Some(standings.clone()),
            _ => None,
        });
        let standings = standings.expect("game over event with standings");
        assert_eq!(standings[0], 0, "A had the fewest strokes");
    }

    #[test]
    fn challenge_mode_fails_at_par_and_restarts() {
        let hole = open_hole(1, Vec2::new(100.0, 200.0), Vec2::new(300.0, 100.0));
        let mut session = GolfSession::new(
            one_hole_course(hole),
            vec![PlayerDef::named("Solo")],
            GameMode::Challenge,
            SessionConfig::default(),
        );
        send(&mut session, InputEvent::SkipTransition);

        // Par 1: any missed shot fails the course on the spot.
        shoot_full(&mut session, std::f32::consts::PI);
        assert_eq!(session.phase(), Phase::HoleTransition);
        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, SessionEvent::CourseFailed { hole: 0 })));

        // The restart rewinds to hole 1 with zeroed totals.
        send(&mut session, InputEvent::SkipTransition);
        assert_eq!(session.hole_index(), 0);
        assert_eq!(session.players()[0].total_strokes, 0);
        assert_eq!(session.players()[0].strokes_this_hole, 0);
        assert!((session.players()[0].ball.pos - Vec2::new(100.0, 200.0)).length() < 1e-3);
    }

    #[test]
    fn shoot_input_is_ignored_while_balls_move() {
        let mut session = solo_session(open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(900.0, 900.0)));
        send(&mut session, InputEvent::SkipTransition);

        send(&mut session, InputEvent::ChargeStart);
        pump(&mut session, 150);
        send(&mut session, InputEvent::ChargeEnd);
        assert_eq!(session.phase(), Phase::BallsMoving);
        assert!(!session.can_shoot());

        // Mid-flight charge attempts must be silently ignored.
        let strokes_before = session.players()[0].strokes_this_hole;
        send(&mut session, InputEvent::ChargeStart);
        send(&mut session, InputEvent::ChargeEnd);
        assert_eq!(session.players()[0].strokes_this_hole, strokes_before);
    }

    #[test]
    fn pause_freezes_charge_and_clock() {
        let mut session = solo_session(open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(300.0, 200.0)));
        send(&mut session, InputEvent::SkipTransition);
        send(&mut session, InputEvent::ChargeStart);
        pump(&mut session, 30);
        let power = session.charge_power();
        assert!(power > 0.0);

        send(&mut session, InputEvent::Pause);
        let frozen_now = session.now();
        pump(&mut session, 120);
        assert_eq!(session.charge_power(), power, "charge must not accrue while paused");
        assert_eq!(session.now(), frozen_now, "session clock must freeze while paused");

        send(&mut session, InputEvent::Pause);
        pump(&mut session, 30);
        assert!(session.charge_power() > power, "charge resumes after unpause");
    }

    #[test]
    fn alligator_bites_an_idle_ball_near_water() {
        let mut hole = open_hole(3, Vec2::new(100.0, 200.0), Vec2::new(500.0, 200.0));
        // Pond edge 30 units from the resting ball.
        hole.waters.push(HazardShape::Circle { x: 160.0, y: 200.0, radius: 30.0 });

        let mut config = SessionConfig::default();
        config.alligator.idle_secs = 0.5;
        config.alligator.emerge_secs = 0.1;
        config.alligator.bite_secs = 0.1;
        config.alligator.submerge_secs = 0.1;

        let mut session = GolfSession::new(
            one_hole_course(hole),
            vec![PlayerDef::named("Solo")],
            GameMode::Standard,
            config,
        );
        send(&mut session, InputEvent::SkipTransition);

        // Idle out the timer plus the full animation, but stop short of a
        // second idle period.
        pump(&mut session, 52);

        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, SessionEvent::AlligatorEmerged { player: 0 })));
        assert!(events.iter().any(|e| matches!(e, SessionEvent::AlligatorBite { player: 0 })));

        let player = &session.players()[0];
        assert_eq!(player.strokes_this_hole, 1, "bite costs one penalty stroke");
        assert!((player.ball.pos - Vec2::new(100.0, 200.0)).length() < 1e-3);
        assert!(session.alligator().is_none(), "alligator submerged and despawned");
    }

    #[test]
    fn empty_course_degrades_to_game_over() {
        let course = Course { name: String::new(), holes: Vec::new() };
        let mut session = GolfSession::new(
            course,
            vec![PlayerDef::named("Solo")],
            GameMode::Standard,
            SessionConfig::default(),
        );
        assert_eq!(session.phase(), Phase::GameOver);
        // Updates and predictions are harmless no-ops.
        pump(&mut session, 10);
        assert!(session.predict_path().points.is_empty());
    }
}
