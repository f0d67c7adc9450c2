//! Search nodes for the A* frontier.
//!
//! A node pairs a board with the number of moves taken to reach it and a
//! shared reference to its predecessor. Predecessor chains form acyclic
//! singly linked lists (moves strictly increase along a chain and nodes are
//! never mutated), so `Rc` sharing cannot create cycles.

use std::rc::Rc;

use crate::board::Board;

/// One entry in the A* search tree.
pub struct SearchNode {
    board: Board,
    moves: u32,
    previous: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// The starting node: zero moves, no predecessor.
    pub fn root(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            previous: None,
        }
    }

    /// A node one slide past `parent`.
    pub fn child(parent: &Rc<SearchNode>, board: Board) -> Self {
        Self {
            board,
            moves: parent.moves + 1,
            previous: Some(Rc::clone(parent)),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves taken from the start to reach this node.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Total estimated cost `g + h`: moves so far plus the board's Manhattan
    /// distance. This is the only ordering key the frontier uses.
    pub fn priority(&self) -> u32 {
        self.moves + self.board.manhattan()
    }

    /// The boards one slide away. The solver decides which of them become
    /// child nodes.
    pub fn neighbors(&self) -> Vec<Board> {
        self.board.neighbors()
    }

    /// The boards from the start to this node, in move order, recovered by
    /// walking the predecessor chain.
    pub fn path(&self) -> Vec<Board> {
        let mut boards = vec![self.board.clone()];
        let mut current = self.previous.as_deref();
        while let Some(node) = current {
            boards.push(node.board.clone());
            current = node.previous.as_deref();
        }
        boards.reverse();
        boards
    }
}
