//! The authoritative game state machine.
//!
//! `GameEngine` owns the deck, flipped/matched sets, scores, turn owner,
//! phase, and the opponent subsystem. It exposes three intents — `setup`,
//! `select_card`, `tick` — and read-only observable state. All mutation
//! happens on the caller's thread; delayed steps run when `tick` reaches
//! their due time.
//!
//! ## Guards
//!
//! Excess input is dropped, never queued:
//! - mistimed or out-of-range player selections are silent no-ops;
//! - a resolving flag rejects selections while a pair's display delay runs;
//! - the in-flight choreography record blocks a second computer turn;
//! - every scheduled event carries the game generation, so a `setup` during
//!   an in-flight delay orphans the old timers instead of corrupting the
//!   new game.

use im::HashSet as ImHashSet;

use crate::core::{Deck, GameRng, Outcome, Phase, Scores, Tier, TurnOwner};
use crate::opponent::{policy, OpponentMemory};

use super::choreography::{ChoreoStep, Choreography};
use super::listener::{FlipListener, NullListener};
use super::scheduler::{EngineEvent, TimerQueue};
use super::view::GameView;

/// Display delay before a resolved player pair clears.
pub const PLAYER_RESOLVE_DELAY_MS: u64 = 800;
/// Further delay between the hand-off and the computer starting its turn.
pub const COMPUTER_HANDOFF_DELAY_MS: u64 = 800;

/// The game engine. See the module docs for the intent surface.
pub struct GameEngine {
    rng: GameRng,
    tier: Tier,
    deck: Deck,
    flipped: ImHashSet<usize>,
    matched: ImHashSet<usize>,
    scores: Scores,
    turn: TurnOwner,
    phase: Phase,
    memory: OpponentMemory,
    timers: TimerQueue,
    choreography: Option<Choreography>,
    resolving: bool,
    generation: u64,
    now_ms: u64,
    game_start_ms: u64,
    elapsed_secs: u64,
    listener: Box<dyn FlipListener>,
}

impl GameEngine {
    /// Create an engine and start a first game at the given tier.
    #[must_use]
    pub fn new(tier: Tier, seed: u64) -> Self {
        let mut engine = Self {
            rng: GameRng::new(seed),
            tier,
            deck: Deck::default(),
            flipped: ImHashSet::new(),
            matched: ImHashSet::new(),
            scores: Scores::default(),
            turn: TurnOwner::Player,
            phase: Phase::Setup,
            memory: OpponentMemory::new(),
            timers: TimerQueue::new(),
            choreography: None,
            resolving: false,
            generation: 0,
            now_ms: 0,
            game_start_ms: 0,
            elapsed_secs: 0,
            listener: Box::new(NullListener),
        };
        engine.setup(tier);
        engine
    }

    /// Install the flip listener (for the presentation layer's sound hook).
    pub fn set_listener(&mut self, listener: Box<dyn FlipListener>) {
        self.listener = listener;
    }

    // === Intents ===

    /// Reset and start a new game. Callable at any phase.
    ///
    /// Bumps the game generation: timers still in flight from the previous
    /// game fire into the void instead of writing into the new game's state.
    pub fn setup(&mut self, tier: Tier) {
        self.generation += 1;
        self.tier = tier;
        self.deck = Deck::build(tier, &mut self.rng);
        self.flipped = ImHashSet::new();
        self.matched = ImHashSet::new();
        self.scores = Scores::default();
        self.memory.clear();
        self.turn = TurnOwner::Player;
        self.phase = Phase::InProgress;
        self.choreography = None;
        self.resolving = false;
        self.game_start_ms = self.now_ms;
        self.elapsed_secs = 0;
    }

    /// Player intent: flip the card at `position`.
    ///
    /// Silently ignored unless the game is in progress, it is the player's
    /// turn, no pending pair is resolving, the position is in range and in
    /// neither set, and fewer than two cards are face-up. Mistimed UI input
    /// must never corrupt state.
    pub fn select_card(&mut self, position: usize) {
        if self.phase != Phase::InProgress || self.turn != TurnOwner::Player || self.resolving {
            return;
        }
        if position >= self.deck.len() {
            return;
        }
        if self.flipped.contains(&position) || self.matched.contains(&position) {
            return;
        }
        if self.flipped.len() >= 2 {
            return;
        }

        self.flipped.insert(position);
        self.listener.on_card_flipped(position);

        if self.flipped.len() < 2 {
            return;
        }

        let pair: Vec<usize> = self.flipped.iter().copied().collect();
        let matched = self.deck.is_match(pair[0], pair[1]);
        if matched {
            self.matched.insert(pair[0]);
            self.matched.insert(pair[1]);
            self.scores.player += 1;
            self.check_game_over();
        }

        // Both outcomes hold the pair face-up for the display delay; the
        // resolving flag rejects selections until it clears.
        self.resolving = true;
        self.timers.schedule(
            self.now_ms + PLAYER_RESOLVE_DELAY_MS,
            self.generation,
            EngineEvent::ClearPlayerPair { matched },
        );
    }

    /// Advance time to `now_ms` (monotonic, caller-supplied milliseconds),
    /// firing every due delayed step at its recorded due time.
    ///
    /// Also advances the elapsed-seconds counter while the game is in
    /// progress; the counter freezes at game over and resets on `setup`.
    /// A timestamp earlier than the last one is ignored.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            return;
        }

        while let Some((due_ms, generation, event)) = self.timers.pop_due(now_ms) {
            // Follow-up steps are scheduled relative to the due time, not
            // the tick time, so the sequence is drift-free.
            self.now_ms = due_ms;
            if generation != self.generation {
                continue;
            }
            self.dispatch(event);
        }

        self.now_ms = now_ms;
        if self.phase == Phase::InProgress {
            self.elapsed_secs = (now_ms - self.game_start_ms) / 1000;
        }
    }

    // === Observable state ===

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The current difficulty tier.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Positions currently face-up but not yet confirmed matched.
    #[must_use]
    pub fn flipped(&self) -> &ImHashSet<usize> {
        &self.flipped
    }

    /// Positions permanently resolved as matched pairs.
    #[must_use]
    pub fn matched(&self) -> &ImHashSet<usize> {
        &self.matched
    }

    /// Both sides' match counters.
    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn_owner(&self) -> TurnOwner {
        self.turn
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds since `setup`, frozen once the game is over.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Whether a pending player pair is still resolving (input is rejected).
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// The game result, once the phase is `GameOver`.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        (self.phase == Phase::GameOver).then(|| self.scores.outcome())
    }

    /// Snapshot of all observable state.
    #[must_use]
    pub fn view(&self) -> GameView {
        let mut flipped: Vec<usize> = self.flipped.iter().copied().collect();
        flipped.sort_unstable();
        let mut matched: Vec<usize> = self.matched.iter().copied().collect();
        matched.sort_unstable();

        GameView {
            tier: self.tier,
            cards: self.deck.cards().to_vec(),
            flipped,
            matched,
            player_score: self.scores.player,
            computer_score: self.scores.computer,
            turn: self.turn,
            phase: self.phase,
            elapsed_secs: self.elapsed_secs,
        }
    }

    // === Delayed steps ===

    fn dispatch(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ClearPlayerPair { matched } => {
                self.flipped = ImHashSet::new();
                self.resolving = false;
                if self.phase != Phase::InProgress {
                    return;
                }
                if !matched {
                    self.turn = TurnOwner::Computer;
                    self.timers.schedule(
                        self.now_ms + COMPUTER_HANDOFF_DELAY_MS,
                        self.generation,
                        EngineEvent::StartComputerTurn,
                    );
                }
            }
            EngineEvent::StartComputerTurn => self.start_computer_turn(),
            EngineEvent::Choreography(step) => self.advance_choreography(step),
        }
    }

    /// Refresh memory, choose a pair, and begin the reveal choreography.
    ///
    /// Ends the turn immediately, handing control back to the player, when
    /// fewer than two positions remain or the policy yields no pair.
    fn start_computer_turn(&mut self) {
        if self.phase != Phase::InProgress
            || self.turn != TurnOwner::Computer
            || self.choreography.is_some()
        {
            return;
        }

        let available: Vec<usize> = (0..self.deck.len())
            .filter(|position| !self.matched.contains(position))
            .collect();
        if available.len() < 2 {
            self.turn = TurnOwner::Player;
            return;
        }

        self.memory.refresh(&self.deck, &self.matched);

        let Some((first, second)) = policy::choose(&available, &self.memory, &mut self.rng) else {
            self.turn = TurnOwner::Player;
            return;
        };

        self.flipped = ImHashSet::new();
        self.choreography = Some(Choreography::new(first, second));
        self.schedule_step(ChoreoStep::FlipFirst);
    }

    fn schedule_step(&mut self, step: ChoreoStep) {
        self.timers.schedule(
            self.now_ms + step.delay_ms(),
            self.generation,
            EngineEvent::Choreography(step),
        );
    }

    fn advance_choreography(&mut self, step: ChoreoStep) {
        let Some(mut choreo) = self.choreography else {
            return;
        };

        match step {
            ChoreoStep::FlipFirst => {
                self.flipped.insert(choreo.first);
                self.listener.on_card_flipped(choreo.first);
                self.schedule_step(ChoreoStep::FlipSecond);
            }
            ChoreoStep::FlipSecond => {
                self.flipped.insert(choreo.second);
                self.listener.on_card_flipped(choreo.second);
                self.schedule_step(ChoreoStep::Evaluate);
            }
            ChoreoStep::Evaluate => {
                choreo.matched = self.deck.is_match(choreo.first, choreo.second);
                self.choreography = Some(choreo);
                if choreo.matched {
                    self.matched.insert(choreo.first);
                    self.matched.insert(choreo.second);
                    self.scores.computer += 1;
                    self.memory.forget(self.deck.identity_at(choreo.first));
                }
                self.schedule_step(ChoreoStep::Clear);
            }
            ChoreoStep::Clear => {
                self.flipped = ImHashSet::new();
                if choreo.matched {
                    self.check_game_over();
                    if self.phase == Phase::GameOver {
                        self.choreography = None;
                    } else {
                        // Consecutive-turn reward: another cycle after a pause.
                        self.schedule_step(ChoreoStep::NextCycle);
                    }
                } else {
                    self.turn = TurnOwner::Player;
                    self.choreography = None;
                }
            }
            ChoreoStep::NextCycle => {
                self.choreography = None;
                self.start_computer_turn();
            }
        }
    }

    fn check_game_over(&mut self) {
        if self.matched.len() == self.deck.len() {
            self.phase = Phase::GameOver;
            self.turn = TurnOwner::Player;
        }
    }
}
