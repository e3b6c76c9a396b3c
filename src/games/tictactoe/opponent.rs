//! Greedy CPU opponent.
//!
//! One ply of look-ahead: take a win if one is on the board, otherwise block
//! the opponent's immediate win, otherwise pick any empty square at random.
//! Forks go unnoticed, so a careful human can beat it.

use rand::Rng;
use tracing::{debug, instrument};

use super::{Board, GameOutcome, Mark, MoveError, Position, evaluate};

/// Picks the square for `my_mark` to play.
///
/// Within each pass the lowest index wins, so only the random fallback is
/// nondeterministic. Returns [`MoveError::NoMovesAvailable`] on a full board.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    my_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Result<Position, MoveError> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return Err(MoveError::NoMovesAvailable);
    }

    if let Some(pos) = find_winning_move(board, my_mark, &empty) {
        debug!(position = %pos, "Taking winning square");
        return Ok(pos);
    }

    if let Some(pos) = find_winning_move(board, opponent_mark, &empty) {
        debug!(position = %pos, "Blocking opponent");
        return Ok(pos);
    }

    let pos = empty[rng.random_range(0..empty.len())];
    debug!(position = %pos, "No forced move, picking at random");
    Ok(pos)
}

/// First empty square where `mark` would complete a line.
fn find_winning_move(board: &Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    moves
        .iter()
        .copied()
        .find(|&pos| evaluate(&board.with_mark(pos, mark)) == GameOutcome::Win(mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_of(marks: [Option<Mark>; 9]) -> Board {
        Board::from_squares(marks.map(|m| m.map_or(Square::Empty, Square::Occupied)))
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = board_of([x, o, x, o, x, o, o, x, o]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose_move(&board, Mark::O, Mark::X, &mut rng),
            Err(MoveError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_single_empty_square_is_chosen() {
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = board_of([x, o, x, o, x, o, o, x, None]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, Mark::O, Mark::X, &mut rng),
            Ok(Position::BottomRight)
        );
    }

    #[test]
    fn test_lowest_index_block_wins_tie() {
        // X threatens both square 2 (top row) and square 6 (left column).
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = board_of([x, x, None, x, o, None, None, None, o]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            choose_move(&board, Mark::O, Mark::X, &mut rng),
            Ok(Position::TopRight)
        );
    }
}
