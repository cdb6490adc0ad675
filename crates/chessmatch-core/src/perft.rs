//! Perft (performance test) for move generation correctness verification.

use crate::chess_match::ChessMatch;
use crate::error::MatchError;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk-counting optimization: no recursive perform_move).
/// A checkmated position has no children.
///
/// # Errors
///
/// Only an internal grid fault can fail a walk over legal moves.
pub fn perft(chess_match: &ChessMatch, depth: usize) -> Result<u64, MatchError> {
    if depth == 0 {
        return Ok(1);
    }
    if chess_match.checkmate() {
        return Ok(0);
    }

    let moves = chess_match.legal_moves()?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = chess_match.clone();
        child.perform_move(mv.source(), mv.target())?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted alphabetically, moves written
/// as `e2e4`.
///
/// # Errors
///
/// [`MatchError::MatchOver`] if the match has already ended.
pub fn divide(chess_match: &ChessMatch, depth: usize) -> Result<Vec<(String, u64)>, MatchError> {
    let mut results = Vec::new();
    for mv in chess_match.legal_moves()? {
        let mut child = chess_match.clone();
        child.perform_move(mv.source(), mv.target())?;
        let count = if depth <= 1 { 1 } else { perft(&child, depth - 1)? };
        results.push((mv.to_string(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position::ChessPosition;
    use crate::color::Color;
    use crate::file::File;
    use crate::piece_kind::PieceKind;
    use crate::rank::Rank;
    use crate::setup::MatchBuilder;

    /// Build a match from a piece-placement diagram: eight rows from rank 8
    /// down, digits for runs of empty squares, uppercase for White.
    fn diagram(rows: &str, to_move: Color) -> ChessMatch {
        let mut builder = MatchBuilder::new().to_move(to_move);
        for (row, text) in rows.split('/').enumerate() {
            let rank = Rank::from_row(row as i8).unwrap();
            let mut column = 0i8;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    column += skip as i8;
                    continue;
                }
                let kind = match c.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    other => panic!("unknown piece letter {other}"),
                };
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                let file = File::from_column(column).unwrap();
                builder = builder.piece(ChessPosition::from_parts(file, rank), kind, color);
                column += 1;
            }
        }
        builder.build().unwrap()
    }

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_depth_0() {
        assert_eq!(perft(&ChessMatch::new(), 0), Ok(1));
    }

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&ChessMatch::new(), 1), Ok(20));
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&ChessMatch::new(), 2), Ok(400));
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&ChessMatch::new(), 3), Ok(8_902));
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&ChessMatch::new(), 4), Ok(197_281));
    }

    #[test]
    fn diagram_matches_the_standard_layout() {
        let parsed = diagram(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            Color::White,
        );
        assert_eq!(parsed.pieces(), ChessMatch::new().pieces());
    }

    // --- Position 2: Kiwipete (castling, en passant, pins) ---
    // r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1

    fn kiwipete() -> ChessMatch {
        diagram(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            Color::White,
        )
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&kiwipete(), 1), Ok(48));
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&kiwipete(), 2), Ok(2_039));
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&kiwipete(), 3), Ok(97_862));
    }

    // --- Position 3 (en passant discovered checks, rook endgame) ---
    // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1

    fn position3() -> ChessMatch {
        diagram("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White)
    }

    #[test]
    fn perft_position3_depth_1() {
        assert_eq!(perft(&position3(), 1), Ok(14));
    }

    #[test]
    fn perft_position3_depth_2() {
        assert_eq!(perft(&position3(), 2), Ok(191));
    }

    #[test]
    fn perft_position3_depth_3() {
        assert_eq!(perft(&position3(), 3), Ok(2_812));
    }

    #[test]
    #[ignore] // slow
    fn perft_position3_depth_4() {
        assert_eq!(perft(&position3(), 4), Ok(43_238));
    }

    // --- Divide ---

    #[test]
    fn divide_startpos_depth_1() {
        let results = divide(&ChessMatch::new(), 1).unwrap();
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 1));
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn divide_sums_to_perft() {
        let chess_match = ChessMatch::new();
        let results = divide(&chess_match, 2).unwrap();
        let total: u64 = results.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 400);
    }

    #[test]
    fn checkmated_position_has_no_children() {
        let mut chess_match = ChessMatch::new();
        for (file, rank, to_file, to_rank) in
            [('f', 2, 'f', 3), ('e', 7, 'e', 5), ('g', 2, 'g', 4), ('d', 8, 'h', 4)]
        {
            let from = ChessPosition::new(file, rank).unwrap();
            let to = ChessPosition::new(to_file, to_rank).unwrap();
            chess_match.perform_move(from, to).unwrap();
        }
        assert_eq!(perft(&chess_match, 1), Ok(0));
        assert_eq!(perft(&chess_match, 0), Ok(1));
        assert_eq!(divide(&chess_match, 1), Err(MatchError::MatchOver));
    }
}
