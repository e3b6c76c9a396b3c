//! Tests for the session controller state machine.

use neon_tictactoe::{
    Command, Cue, EffectStatus, Effects, GameMode, GameOutcome, Mark, MemoryStore, MoveError,
    Phase, Position, ScoreKeeper, ScoreLedger, SessionController, Transition, WinLine,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn controller() -> SessionController<MemoryStore> {
    SessionController::new(
        ScoreKeeper::open(MemoryStore::new()),
        StdRng::seed_from_u64(11),
    )
}

/// Records every effect the controller asks for.
#[derive(Debug, Default)]
struct Recorder {
    cues: Vec<Cue>,
    wins: Vec<(Mark, WinLine)>,
}

impl Effects for Recorder {
    fn play(&mut self, cue: Cue) -> EffectStatus {
        self.cues.push(cue);
        EffectStatus::Played
    }

    fn celebrate(&mut self, mark: Mark, line: WinLine) -> EffectStatus {
        self.wins.push((mark, line));
        EffectStatus::Played
    }
}

#[test]
fn test_ledger_untouched_until_round_ends() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
    for cell in [0, 3, 1, 4] {
        c.handle(Command::MarkCell(cell));
        assert_eq!(*c.ledger(), ScoreLedger::default());
        assert_eq!(c.scores().store().saves(), 0);
    }
    c.handle(Command::MarkCell(2));
    assert_eq!(*c.ledger(), ScoreLedger::new(1, 0, 0));
    assert_eq!(c.scores().store().saves(), 1);
}

#[test]
fn test_draw_counts_once() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
    // X O X / X O O / O X X
    for cell in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert!(matches!(c.handle(Command::MarkCell(cell)), Transition::Placed(_)));
    }
    let t = c.handle(Command::MarkCell(8));
    assert!(matches!(
        t,
        Transition::RoundOver {
            outcome: GameOutcome::Draw,
            ..
        }
    ));
    assert_eq!(*c.ledger(), ScoreLedger::new(0, 0, 1));

    // Further clicks are no-ops and do not count again.
    assert_eq!(c.handle(Command::MarkCell(0)), Transition::Stay);
    assert_eq!(*c.ledger(), ScoreLedger::new(0, 0, 1));
}

#[test]
fn test_reset_starts_fresh_round_in_same_mode() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
    for cell in [0, 3, 1, 4, 2] {
        c.handle(Command::MarkCell(cell));
    }
    assert_eq!(c.phase(), Phase::RoundOver);

    assert_eq!(
        c.handle(Command::Reset),
        Transition::Started(GameMode::PlayerVsPlayer)
    );
    let session = c.session().unwrap();
    assert_eq!(c.phase(), Phase::InPlay);
    assert_eq!(session.to_move(), Mark::X);
    assert_eq!(session.board().empty_positions().len(), 9);
    assert_eq!(*c.ledger(), ScoreLedger::new(1, 0, 0));
}

#[test]
fn test_rejected_input_changes_nothing() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
    c.handle(Command::MarkCell(4));
    let before = c.session().cloned();

    assert_eq!(
        c.handle(Command::MarkCell(4)),
        Transition::Rejected(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(
        c.handle(Command::MarkCell(9)),
        Transition::Rejected(MoveError::InvalidCellIndex(9))
    );
    assert_eq!(
        c.handle(Command::MarkCell(100)).rejection(),
        Some(MoveError::InvalidCellIndex(100))
    );
    assert_eq!(c.session().cloned(), before);
    assert_eq!(c.phase(), Phase::InPlay);
}

#[test]
fn test_cpu_answers_human_move() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsCpu));
    assert!(!c.machine_turn_pending());
    c.handle(Command::MarkCell(0));
    assert!(c.machine_turn_pending());

    // Human input while the CPU is due is ignored.
    assert_eq!(c.handle(Command::MarkCell(1)), Transition::Stay);

    let t = c.play_machine_turn();
    let mv = t.placed_move().unwrap();
    assert_eq!(mv.mark, Mark::O);
    assert_ne!(mv.position, Position::TopLeft);
    assert_eq!(c.session().unwrap().to_move(), Mark::X);
    assert!(!c.machine_turn_pending());
}

#[test]
fn test_cpu_round_counts_once() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsCpu));
    while c.phase() == Phase::InPlay {
        if c.machine_turn_pending() {
            assert!(c.play_machine_turn().changed_state());
            continue;
        }
        let cell = c.session().unwrap().board().empty_positions()[0];
        assert!(c.handle(Command::MarkCell(cell.to_index())).changed_state());
    }
    assert_eq!(c.phase(), Phase::RoundOver);
    assert_eq!(c.ledger().total_games(), 1);
    assert_eq!(c.scores().store().saves(), 1);
    assert_eq!(c.play_machine_turn(), Transition::Stay);
}

#[test]
fn test_menu_from_play_and_round_over() {
    let mut c = controller();
    c.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
    c.handle(Command::MarkCell(4));
    assert_eq!(c.handle(Command::ReturnToMenu), Transition::Menu);
    assert_eq!(c.phase(), Phase::MenuSelect);
    assert!(c.session().is_none());
    assert_eq!(c.handle(Command::ReturnToMenu), Transition::Stay);
}

#[test]
fn test_effects_fire_on_moves_and_wins() {
    let mut c = controller().with_effects(Recorder::default());
    c.handle(Command::ChooseMode(GameMode::PlayerVsPlayer));
    for cell in [0, 3, 1, 4, 2] {
        c.handle(Command::MarkCell(cell));
    }
    let effects = c.effects();
    assert_eq!(effects.cues.iter().filter(|&&cue| cue == Cue::Click).count(), 5);
    assert_eq!(effects.cues.last(), Some(&Cue::Win));
    assert_eq!(effects.wins.len(), 1);
    assert_eq!(effects.wins[0].0, Mark::X);
    assert!(effects.wins[0].1.contains(Position::TopRight));
}
