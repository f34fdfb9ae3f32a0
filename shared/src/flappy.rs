//! Flappy Bird simulation, advanced one fixed tick at a time.
//!
//! The board uses screen coordinates: y grows downwards, the top edge is 0.

pub const GAME_WIDTH: f64 = 640.0;
pub const GAME_HEIGHT: f64 = 640.0;
pub const BIRD_SIZE: f64 = 40.0;
pub const BIRD_X: f64 = 300.0;
pub const BIRD_START_Y: f64 = 200.0;

pub const GRAVITY: f64 = 0.5;
pub const FLAP_VELOCITY: f64 = -8.0;
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_MS: u32 = 1000 / TICKS_PER_SECOND;

pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 160.0;
pub const PIPE_SPEED: f64 = 2.0;
pub const PIPE_SPAWN_TICKS: u64 = 2 * TICKS_PER_SECOND as u64;
const PIPE_MIN_TOP: f64 = 100.0;
const PIPE_TOP_RANGE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub id: u64,
    pub x: f64,
    /// Height of the upper pipe; the gap starts here.
    pub top_height: f64,
    passed: bool,
}

impl Pipe {
    pub fn gap_bottom(&self) -> f64 {
        self.top_height + PIPE_GAP
    }

    pub fn bottom_height(&self) -> f64 {
        GAME_HEIGHT - self.gap_bottom()
    }

    fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap.
    Ready,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Running,
    GameOver { score: u32 },
}

/// Whether the bird at `bird_y` touches a pipe, the ceiling or the floor.
pub fn collides(bird_y: f64, pipes: &[Pipe]) -> bool {
    let top = bird_y;
    let bottom = bird_y + BIRD_SIZE;
    let left = BIRD_X;
    let right = BIRD_X + BIRD_SIZE;

    let hits_pipe = pipes.iter().any(|pipe| {
        let overlaps_x = right > pipe.x && left < pipe.right();
        overlaps_x && (top < pipe.top_height || bottom > pipe.gap_bottom())
    });

    hits_pipe || top <= 0.0 || bottom >= GAME_HEIGHT
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlappyGame {
    phase: Phase,
    bird_y: f64,
    velocity: f64,
    pipes: Vec<Pipe>,
    ticks: u64,
    next_pipe_id: u64,
    score: u32,
    best: u32,
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl FlappyGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::Ready,
            bird_y: BIRD_START_Y,
            velocity: 0.0,
            pipes: Vec::new(),
            ticks: 0,
            next_pipe_id: 0,
            score: 0,
            best: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bird_y(&self) -> f64 {
        self.bird_y
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// The first flap starts the game.
    pub fn flap(&mut self) {
        self.phase = Phase::Running;
        self.velocity = FLAP_VELOCITY;
    }

    /// Advance one tick. `random` yields values in `[0, 1)` and decides the
    /// height of newly spawned pipes.
    pub fn tick(&mut self, random: &mut impl FnMut() -> f64) -> TickOutcome {
        if self.phase == Phase::Ready {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        self.velocity += GRAVITY;
        self.bird_y = (self.bird_y + self.velocity).clamp(0.0, GAME_HEIGHT - BIRD_SIZE);

        if self.ticks % PIPE_SPAWN_TICKS == 0 {
            self.spawn_pipe(random());
        }

        for pipe in &mut self.pipes {
            pipe.x -= PIPE_SPEED;
        }
        self.pipes.retain(|pipe| pipe.right() > 0.0);

        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.right() < BIRD_X {
                pipe.passed = true;
                self.score += 1;
            }
        }

        if collides(self.bird_y, &self.pipes) {
            let score = self.score;
            self.best = self.best.max(score);
            tracing::debug!(score, best = self.best, "game over");
            self.reset();
            return TickOutcome::GameOver { score };
        }
        TickOutcome::Running
    }

    fn spawn_pipe(&mut self, roll: f64) {
        let roll = roll.clamp(0.0, 1.0);
        self.pipes.push(Pipe {
            id: self.next_pipe_id,
            x: GAME_WIDTH,
            top_height: roll * PIPE_TOP_RANGE + PIPE_MIN_TOP,
            passed: false,
        });
        self.next_pipe_id += 1;
    }

    /// Back to the start position; the best score survives.
    pub fn reset(&mut self) {
        *self = Self {
            best: self.best,
            next_pipe_id: self.next_pipe_id,
            ..Self::new()
        };
    }
}
