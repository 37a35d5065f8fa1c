use crate::{board::Board, error::RulesResult, movegen::legal_moves_into, types::Color, types::Move};

/// Pure perft node count.
/// Counts all legal positions reachable from `board` with `color` to move,
/// down to `depth` plies.
pub fn perft(board: &Board, color: Color, depth: u8) -> RulesResult<u64> {
    fn inner(board: &Board, color: Color, depth: u8, layers: &mut [Vec<Move>]) -> RulesResult<u64> {
        if depth == 0 {
            return Ok(1);
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return Ok(1);
        };

        legal_moves_into(board, color, buf)?;
        if depth == 1 {
            return Ok(buf.len() as u64);
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let next = board.play(mv)?;
            nodes += inner(&next, color.other(), depth - 1, rest)?;
        }
        Ok(nodes)
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, color, depth, &mut layers[..])
}
