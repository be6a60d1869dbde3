use crate::game_state::{draughts_types::*, game_state::GameState};

const FORWARD_COLUMNS: [i8; 2] = [-1, 1];

/// Captures available to the man on `from`: over an adjacent enemy piece on
/// a forward diagonal onto the empty square right behind it.
pub fn generate_man_jumps(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };
    let d_row = game_state.direction_of(piece.color).row_delta();
    let enemy = piece.color.opposite();

    for d_col in FORWARD_COLUMNS {
        let (Some(over), Some(landing)) = (from.offset(d_row, d_col, 1), from.offset(d_row, d_col, 2))
        else {
            continue;
        };
        if game_state.square(over).is_color(enemy) && game_state.is_empty_at(landing) {
            out.push(Move::new(from, landing));
        }
    }
}

/// Single forward diagonal steps of the man on `from` onto empty squares.
pub fn generate_man_steps(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };
    let d_row = game_state.direction_of(piece.color).row_delta();

    for d_col in FORWARD_COLUMNS {
        if let Some(to) = from.offset(d_row, d_col, 1) {
            if game_state.is_empty_at(to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_man_jumps, generate_man_steps};
    use crate::game_state::{draughts_types::*, game_state::GameState};

    #[test]
    fn centre_man_has_two_steps_edge_man_has_one() {
        let centre = GameState::new_empty(Color::Dark, Direction::Down)
            .with_piece(Position::new(3, 3), Piece::man(Color::Dark));
        let mut moves = Vec::new();
        generate_man_steps(&centre, Position::new(3, 3), &mut moves);
        assert_eq!(
            moves,
            vec![
                Move::new(Position::new(3, 3), Position::new(4, 2)),
                Move::new(Position::new(3, 3), Position::new(4, 4)),
            ]
        );

        let edge = GameState::new_empty(Color::Dark, Direction::Down)
            .with_piece(Position::new(3, 0), Piece::man(Color::Dark));
        moves.clear();
        generate_man_steps(&edge, Position::new(3, 0), &mut moves);
        assert_eq!(moves, vec![Move::new(Position::new(3, 0), Position::new(4, 1))]);
    }

    #[test]
    fn man_jumps_over_adjacent_enemy() {
        let game = GameState::new_empty(Color::Light, Direction::Up)
            .with_piece(Position::new(3, 3), Piece::man(Color::Dark))
            .with_piece(Position::new(4, 4), Piece::man(Color::Light));

        let mut jumps = Vec::new();
        generate_man_jumps(&game, Position::new(4, 4), &mut jumps);
        assert_eq!(jumps, vec![Move::new(Position::new(4, 4), Position::new(2, 2))]);
    }

    #[test]
    fn man_cannot_jump_off_the_board() {
        let up = GameState::new_empty(Color::Light, Direction::Up)
            .with_piece(Position::new(0, 0), Piece::man(Color::Dark))
            .with_piece(Position::new(1, 1), Piece::man(Color::Light));
        let mut jumps = Vec::new();
        generate_man_jumps(&up, Position::new(1, 1), &mut jumps);
        assert!(jumps.is_empty());

        let down = GameState::new_empty(Color::Dark, Direction::Down)
            .with_piece(Position::new(6, 6), Piece::man(Color::Dark))
            .with_piece(Position::new(7, 7), Piece::man(Color::Light));
        generate_man_jumps(&down, Position::new(6, 6), &mut jumps);
        assert!(jumps.is_empty());
    }

    #[test]
    fn man_never_jumps_backwards_or_over_friends() {
        let game = GameState::new_empty(Color::Light, Direction::Up)
            .with_piece(Position::new(4, 4), Piece::man(Color::Light))
            .with_piece(Position::new(5, 5), Piece::man(Color::Dark))
            .with_piece(Position::new(3, 3), Piece::man(Color::Light));
        let mut jumps = Vec::new();
        generate_man_jumps(&game, Position::new(4, 4), &mut jumps);
        assert!(jumps.is_empty());
    }

    #[test]
    fn empty_square_yields_nothing() {
        let game = GameState::new_empty(Color::Light, Direction::Up);
        let mut moves = Vec::new();
        generate_man_jumps(&game, Position::new(4, 4), &mut moves);
        generate_man_steps(&game, Position::new(4, 4), &mut moves);
        assert!(moves.is_empty());
    }
}
