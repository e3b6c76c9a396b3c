//! Session controller: the menu, play and round-over state machine.

use rand::rngs::StdRng;
use tracing::{debug, error, info, instrument};

use crate::GameMode;
use crate::controller::command::{Command, Phase, Transition};
use crate::controller::effects::{Cue, EffectStatus, Effects, NoEffects};
use crate::games::tictactoe::{Position, choose_move, winning_line};
use crate::ledger::{LedgerStore, ScoreKeeper, ScoreLedger};
use crate::session::Session;

/// Owns the current round, the scores, the CPU's random source and the
/// cosmetic effects, and moves between [`Phase`]s in response to commands.
///
/// The ledger is touched exactly once per round, on the move that ends it.
#[derive(Debug)]
pub struct SessionController<S: LedgerStore, E: Effects = NoEffects> {
    phase: Phase,
    mode: GameMode,
    session: Option<Session>,
    scores: ScoreKeeper<S>,
    rng: StdRng,
    effects: E,
}

impl<S: LedgerStore> SessionController<S, NoEffects> {
    /// Creates a controller at the menu with no cosmetic output.
    #[instrument(skip(scores, rng))]
    pub fn new(scores: ScoreKeeper<S>, rng: StdRng) -> Self {
        info!("Creating SessionController");
        Self {
            phase: Phase::MenuSelect,
            mode: GameMode::default(),
            session: None,
            scores,
            rng,
            effects: NoEffects,
        }
    }
}

impl<S: LedgerStore, E: Effects> SessionController<S, E> {
    /// Replaces the effects sink.
    pub fn with_effects<E2: Effects>(self, effects: E2) -> SessionController<S, E2> {
        SessionController {
            phase: self.phase,
            mode: self.mode,
            session: self.session,
            scores: self.scores,
            rng: self.rng,
            effects,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mode of the current (or most recent) round.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The round in play, or the finished round while in [`Phase::RoundOver`].
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current scores.
    pub fn ledger(&self) -> &ScoreLedger {
        self.scores.ledger()
    }

    /// Score keeper, for persistence status and the store.
    pub fn scores(&self) -> &ScoreKeeper<S> {
        &self.scores
    }

    /// The effects sink.
    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// The effects sink, mutably (for animation ticks).
    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// True when the CPU is due to move.
    pub fn machine_turn_pending(&self) -> bool {
        self.phase == Phase::InPlay && self.session.as_ref().is_some_and(Session::is_machine_turn)
    }

    /// Handles one command from the front end.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle(&mut self, command: Command) -> Transition {
        let transition = match (self.phase, command) {
            (Phase::MenuSelect, Command::ChooseMode(mode)) => self.start_round(mode),
            (Phase::RoundOver, Command::Reset) => self.start_round(self.mode),
            (Phase::InPlay | Phase::RoundOver, Command::ReturnToMenu) => {
                info!("Returning to menu");
                self.phase = Phase::MenuSelect;
                self.session = None;
                Transition::Menu
            }
            (Phase::InPlay, Command::MarkCell(index)) => self.human_move(index),
            _ => Transition::Stay,
        };
        debug!(?transition, "Command handled");
        transition
    }

    /// Lets the CPU take its turn, if it has one.
    #[instrument(skip(self))]
    pub fn play_machine_turn(&mut self) -> Transition {
        if !self.machine_turn_pending() {
            return Transition::Stay;
        }
        let Some(session) = self.session.as_ref() else {
            return Transition::Stay;
        };

        let my_mark = session.to_move();
        match choose_move(session.board(), my_mark, my_mark.opponent(), &mut self.rng) {
            Ok(pos) => {
                info!(position = %pos, mark = %my_mark, "CPU move");
                self.apply_move(pos)
            }
            Err(e) => {
                error!(error = %e, "CPU asked to move with no moves available");
                Transition::Rejected(e)
            }
        }
    }

    fn start_round(&mut self, mode: GameMode) -> Transition {
        info!(mode = %mode, "Starting round");
        self.mode = mode;
        self.session = Some(Session::new(mode));
        self.phase = Phase::InPlay;
        Transition::Started(mode)
    }

    fn human_move(&mut self, index: usize) -> Transition {
        if self.machine_turn_pending() {
            debug!(index, "Ignoring input during CPU turn");
            return Transition::Stay;
        }
        match Position::try_from_index(index) {
            Ok(pos) => self.apply_move(pos),
            Err(e) => {
                debug!(error = %e, "Rejected cell index");
                Transition::Rejected(e)
            }
        }
    }

    fn apply_move(&mut self, pos: Position) -> Transition {
        let Some(session) = self.session.as_mut() else {
            return Transition::Stay;
        };

        let (last_move, outcome) = match session.place(pos) {
            Ok(placed) => placed,
            Err(e) => {
                debug!(error = %e, "Rejected move");
                return Transition::Rejected(e);
            }
        };
        let board = *session.board();
        self.cue(Cue::Click);

        if !outcome.is_over() {
            return Transition::Placed(last_move);
        }

        info!(%outcome, "Round over");
        self.phase = Phase::RoundOver;
        self.scores.record(outcome);
        if let Some(mark) = outcome.winner() {
            self.cue(Cue::Win);
            if let Some(line) = winning_line(&board) {
                self.effects.celebrate(mark, line);
            }
        }
        Transition::RoundOver { last_move, outcome }
    }

    fn cue(&mut self, cue: Cue) {
        if self.effects.play(cue) == EffectStatus::Unavailable {
            debug!(?cue, "Sound unavailable");
        }
    }
}
