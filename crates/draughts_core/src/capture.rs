//! Capture-tree construction and the mandatory-longest-capture rule.
//!
//! For one piece the builder grows an arena of [`CaptureNode`]s, one per
//! landing square reached, and records every maximal root-to-leaf path as a
//! [`Branch`]. [`CaptureObligation::analyze`] does this for every piece of a
//! color and keeps only the branches of globally maximal length.
//!
//! Captured pieces stay on the board while a sequence is analysed: they can
//! neither be taken twice nor jumped over. The moving piece's own origin square
//! is treated as empty, so a king may pass back through it.

use tracing::debug;

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::geometry::{walk, Direction};
use crate::squareset::SquareSet;
use crate::types::{check_square, Color, Move, Piece, Square};

/// One landing square in a capture tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureNode {
    pub square: Square,
    /// Arena index of the parent node, `None` for the root.
    pub parent: Option<usize>,
    /// Square of the parent node, 0 for the root.
    pub link: Square,
    /// Number of captures made to reach this node.
    pub level: u8,
    /// Opponent square jumped to reach this node, 0 for the root.
    pub taken: Square,
    /// Every opponent square captured on the root-to-node path.
    pub captured: SquareSet,
}

/// A complete maximal capture sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    pub landings: Vec<Square>,
    pub captured: Vec<Square>,
}

impl Branch {
    pub fn len(&self) -> usize {
        self.landings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landings.is_empty()
    }

    pub fn final_square(&self) -> Option<Square> {
        self.landings.last().copied()
    }

    pub fn to_move(&self, from: Square) -> Move {
        Move::capture(from, self.landings.clone(), self.captured.clone())
    }
}

#[derive(Clone, Debug)]
pub struct CaptureTree {
    pub origin: Square,
    pub piece: Piece,
    pub nodes: Vec<CaptureNode>,
    pub branches: Vec<Branch>,
    pub longest: usize,
}

impl CaptureTree {
    /// Builds the tree for the piece on `origin`. `Ok(None)` means the piece
    /// has no capture.
    pub fn build(board: &Board, origin: Square) -> RulesResult<Option<CaptureTree>> {
        let origin = check_square(origin)?;
        let piece = board.occupant_at(origin).ok_or_else(|| {
            RulesError::InvariantViolation(format!("capture analysis from empty square {origin}"))
        })?;

        let mut tree = CaptureTree {
            origin,
            piece,
            nodes: vec![CaptureNode {
                square: origin,
                parent: None,
                link: 0,
                level: 0,
                taken: 0,
                captured: SquareSet::EMPTY,
            }],
            branches: Vec::new(),
            longest: 0,
        };
        tree.grow(board, 0);

        if tree.branches.is_empty() {
            Ok(None)
        } else {
            tree.longest = tree.branches.iter().map(Branch::len).max().unwrap_or(0);
            Ok(Some(tree))
        }
    }

    fn grow(&mut self, board: &Board, at: usize) {
        let node = self.nodes[at].clone();
        let steps = capture_steps(board, self.origin, self.piece, node.square, node.captured);

        if steps.is_empty() {
            if node.level > 0 {
                let branch = self.branch_to(at);
                self.branches.push(branch);
            }
            return;
        }

        for (taken, landing) in steps {
            let child = self.nodes.len();
            self.nodes.push(CaptureNode {
                square: landing,
                parent: Some(at),
                link: node.square,
                level: node.level + 1,
                taken,
                captured: node.captured.with(taken),
            });
            self.grow(board, child);
        }
    }

    fn branch_to(&self, leaf: usize) -> Branch {
        let mut landings = Vec::new();
        let mut captured = Vec::new();
        let mut cursor = Some(leaf);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            if node.parent.is_some() {
                landings.push(node.square);
                captured.push(node.taken);
            }
            cursor = node.parent;
        }
        landings.reverse();
        captured.reverse();
        Branch { landings, captured }
    }

    /// Drops every branch shorter than `len`.
    pub fn retain_longest(&mut self, len: usize) {
        self.branches.retain(|b| b.len() == len);
        self.longest = len;
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.branches.iter().map(|b| b.to_move(self.origin))
    }
}

/// Single capture steps available to `piece` standing on `from`, as
/// `(captured square, landing square)` pairs. `origin` is where the piece
/// started this turn and counts as empty.
pub fn capture_steps(
    board: &Board,
    origin: Square,
    piece: Piece,
    from: Square,
    captured: SquareSet,
) -> Vec<(Square, Square)> {
    let vacant = |sq: Square| sq == origin || board.is_empty(sq);
    let capturable = |sq: Square| {
        !captured.contains(sq)
            && board
                .occupant_at(sq)
                .is_some_and(|p| p.color != piece.color)
    };

    let mut steps = Vec::new();
    for dir in Direction::ALL {
        let mut ray = walk(from, dir);
        if piece.is_king() {
            let Some(target) = ray.by_ref().find(|&sq| !vacant(sq)) else {
                continue;
            };
            if !capturable(target) {
                continue;
            }
            for landing in ray.take_while(|&sq| vacant(sq)) {
                steps.push((target, landing));
            }
        } else {
            let (Some(target), Some(landing)) = (ray.next(), ray.next()) else {
                continue;
            };
            if capturable(target) && vacant(landing) {
                steps.push((target, landing));
            }
        }
    }
    steps
}

/// The capture obligation of one color on one board.
#[derive(Clone, Debug)]
pub struct CaptureObligation {
    pub color: Color,
    /// Trees of the pieces that own a branch of the global maximum length,
    /// already pruned to those branches, in collection order.
    pub trees: Vec<CaptureTree>,
    pub longest: usize,
}

impl CaptureObligation {
    pub fn analyze(board: &Board, color: Color) -> RulesResult<Self> {
        let mut trees = Vec::new();
        for &sq in board.squares_of(color) {
            if let Some(tree) = CaptureTree::build(board, sq)? {
                trees.push(tree);
            }
        }

        let longest = trees.iter().map(|t| t.longest).max().unwrap_or(0);
        trees.retain(|t| t.longest == longest);
        for tree in &mut trees {
            tree.retain_longest(longest);
        }

        if longest > 0 {
            debug!(
                %color,
                longest,
                pieces = trees.len(),
                branches = trees.iter().map(|t| t.branches.len()).sum::<usize>(),
                "capture is mandatory"
            );
        }

        Ok(CaptureObligation {
            color,
            trees,
            longest,
        })
    }

    pub fn is_mandatory(&self) -> bool {
        self.longest > 0
    }

    pub fn tree_for(&self, sq: Square) -> Option<&CaptureTree> {
        self.trees.iter().find(|t| t.origin == sq)
    }

    pub fn moves(&self) -> Vec<Move> {
        self.trees.iter().flat_map(CaptureTree::moves).collect()
    }
}

/// Every legal capture for `color`, empty when no capture is available.
pub fn mandatory_captures(board: &Board, color: Color) -> RulesResult<Vec<Move>> {
    Ok(CaptureObligation::analyze(board, color)?.moves())
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod capture_tests;
