//! A* search over board configurations.
//!
//! The frontier is a binary min-heap ordered by `moves + manhattan`, with
//! FIFO order among equal priorities so results are reproducible. A visited
//! map from board to the best settled move count keeps boards reached again
//! via a worse path from being re-expanded.
//!
//! Solvability is decided up front by the inversion-parity test, so the
//! search loop only ever runs on boards it can solve.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::node::SearchNode;

/// Whether `board` can reach the goal at all.
///
/// Classic parity argument, no search involved: a slide never changes the
/// solvability class. For odd n the board is solvable iff the inversion
/// count of the non-blank tiles is even; for even n, iff the inversion count
/// plus the blank's row (0-based from the top) is odd. Verified against
/// brute-force reachability in the tests. Runs in O(n^4).
pub fn is_solvable(board: &Board) -> bool {
    let inversions = inversions(board.tiles());
    if board.dimension() % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + board.blank_row()) % 2 == 1
    }
}

/// Pairs `(i, j)` with `i < j` whose tiles are in reversed goal order,
/// ignoring the blank.
fn inversions(tiles: &[u8]) -> usize {
    let mut count = 0;
    for (i, &a) in tiles.iter().enumerate() {
        if a == 0 {
            continue;
        }
        for &b in &tiles[i + 1..] {
            if b != 0 && a > b {
                count += 1;
            }
        }
    }
    count
}

/// Frontier entry: a search node with its priority computed once at push
/// time and a sequence number for FIFO tie-breaking.
struct Entry {
    priority: u32,
    seq: u64,
    node: Rc<SearchNode>,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum, so compare reversed: lowest priority
        // first, earliest-pushed first among equals.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Solves one puzzle instance with A*.
///
/// Construction answers everything: the parity test classifies the board,
/// and only a solvable board is searched. Queries afterwards are O(1).
pub struct Solver {
    initial: Board,
    solution: Option<Vec<Board>>,
}

impl Solver {
    /// Classifies `initial` and, when solvable, searches for a shortest
    /// solution.
    pub fn new(initial: Board) -> Self {
        let solution = if is_solvable(&initial) {
            astar(&initial)
        } else {
            None
        };
        Self { initial, solution }
    }

    /// The board this solver was built for.
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves to reach the goal, or `None` if unsolvable.
    pub fn moves(&self) -> Option<u32> {
        self.solution.as_ref().map(|path| path.len() as u32 - 1)
    }

    /// The boards of a shortest solution, from the initial board to the goal
    /// inclusive, or `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }
}

/// Runs A* from `initial`; returns the solution path, or `None` if the
/// frontier empties first.
///
/// An empty frontier can only happen for an unsolvable board, which the
/// parity test already filters out, but it is still handled rather than
/// assumed away.
fn astar(initial: &Board) -> Option<Vec<Board>> {
    let mut frontier = BinaryHeap::new();
    let mut settled: FxHashMap<Board, u32> = FxHashMap::default();
    let mut seq = 0u64;

    let root = Rc::new(SearchNode::root(initial.clone()));
    frontier.push(Entry {
        priority: root.priority(),
        seq,
        node: root,
    });

    while let Some(Entry { node, .. }) = frontier.pop() {
        if node.board().is_goal() {
            return Some(node.path());
        }

        // A board can sit in the frontier several times; only the first
        // (cheapest) pop expands it.
        if settled
            .get(node.board())
            .is_some_and(|&best| best <= node.moves())
        {
            continue;
        }
        settled.insert(node.board().clone(), node.moves());

        for neighbor in node.neighbors() {
            let worth_pushing = match settled.get(&neighbor) {
                Some(&best) => node.moves() + 1 < best,
                None => true,
            };
            if worth_pushing {
                seq += 1;
                let child = Rc::new(SearchNode::child(&node, neighbor));
                frontier.push(Entry {
                    priority: child.priority(),
                    seq,
                    node: child,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rustc_hash::FxHashSet;

    use super::*;
    use crate::board::Direction;

    fn board(rows: &[&[u8]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn from_flat(n: usize, tiles: &[u8]) -> Board {
        Board::new(tiles.chunks(n).map(|c| c.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_solved_board_needs_zero_moves() {
        let goal = Board::goal(3).unwrap();
        let solver = Solver::new(goal.clone());
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(0));
        assert_eq!(solver.solution(), Some(&[goal][..]));
    }

    #[test]
    fn test_one_slide_from_goal() {
        let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]));
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(1));
        let path = solver.solution().unwrap();
        assert_eq!(path.len(), 2);
        assert!(path[1].is_goal());
    }

    #[test]
    fn test_four_move_instance() {
        let solver = Solver::new(board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]));
        assert_eq!(solver.moves(), Some(4));
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        // Exchanging two non-blank tiles of the goal flips parity.
        let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]));
        assert!(!solver.is_solvable());
        assert!(!is_solvable(solver.initial()));
        assert_eq!(solver.moves(), None);
        assert!(solver.solution().is_none());
    }

    #[test]
    fn test_twin_is_the_opposite_class() {
        let samples = [
            board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]),
            board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]),
            board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]),
            board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]),
            board(&[&[1, 2], &[0, 3]]),
        ];
        for b in &samples {
            assert_ne!(
                is_solvable(b),
                is_solvable(&b.twin()),
                "board and twin must fall in opposite classes"
            );
        }
    }

    #[test]
    fn test_solution_replays_to_goal() {
        let initial = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let solver = Solver::new(initial.clone());
        let path = solver.solution().unwrap();

        assert_eq!(solver.initial(), &initial);
        assert_eq!(path[0], initial);
        for step in path.windows(2) {
            assert!(
                step[0].neighbors().contains(&step[1]),
                "each solution step must be a single blank slide"
            );
        }
        assert!(path.last().unwrap().is_goal());
    }

    #[test]
    fn test_scramble_is_solved_within_scramble_length() {
        // Walking k slides away from the goal gives a board solvable in at
        // most k moves.
        let slides = [
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Right,
            Direction::Down,
        ];
        let mut b = Board::goal(3).unwrap();
        for dir in slides {
            b = b.slide(dir).expect("scramble walk stays in bounds");
        }

        let solver = Solver::new(b);
        let moves = solver.moves().expect("scrambled board is solvable");
        assert!(moves <= slides.len() as u32);
    }

    #[test]
    fn test_search_is_reproducible() {
        let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let first = Solver::new(initial.clone());
        let second = Solver::new(initial);
        assert_eq!(first.moves(), second.moves());
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn test_even_dimension_instances() {
        assert!(is_solvable(&Board::goal(2).unwrap()));
        assert!(is_solvable(&Board::goal(4).unwrap()));

        let solver = Solver::new(board(&[&[1, 2], &[0, 3]]));
        assert_eq!(solver.moves(), Some(1));

        assert!(!is_solvable(&board(&[&[2, 1], &[3, 0]])));
    }

    /// Feeds every permutation of `tiles` to `visit` (Heap's algorithm).
    fn for_each_permutation(tiles: &mut [u8], k: usize, visit: &mut impl FnMut(&[u8])) {
        if k <= 1 {
            visit(tiles);
            return;
        }
        for i in 0..k {
            for_each_permutation(tiles, k - 1, visit);
            if k % 2 == 0 {
                tiles.swap(i, k - 1);
            } else {
                tiles.swap(0, k - 1);
            }
        }
    }

    /// All boards reachable from the goal by blank slides.
    fn reachable_from_goal(n: usize) -> FxHashSet<Board> {
        let goal = Board::goal(n).unwrap();
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::new();
        seen.insert(goal.clone());
        queue.push_back(goal);

        while let Some(b) = queue.pop_front() {
            for neighbor in b.neighbors() {
                if seen.insert(neighbor.clone()) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen
    }

    #[test]
    fn test_parity_matches_reachability_2x2() {
        let reachable = reachable_from_goal(2);
        assert_eq!(reachable.len(), 12); // 4! / 2

        let mut tiles: Vec<u8> = (0..4).collect();
        let mut checked = 0;
        for_each_permutation(&mut tiles, 4, &mut |perm| {
            let b = from_flat(2, perm);
            assert_eq!(
                is_solvable(&b),
                reachable.contains(&b),
                "parity disagrees with reachability for {b:?}"
            );
            checked += 1;
        });
        assert_eq!(checked, 24);
    }

    #[test]
    fn test_parity_matches_reachability_3x3() {
        let reachable = reachable_from_goal(3);
        assert_eq!(reachable.len(), 181_440); // 9! / 2

        let mut tiles: Vec<u8> = (0..9).collect();
        let mut checked = 0u32;
        for_each_permutation(&mut tiles, 9, &mut |perm| {
            let b = from_flat(3, perm);
            assert_eq!(
                is_solvable(&b),
                reachable.contains(&b),
                "parity disagrees with reachability for {b:?}"
            );
            checked += 1;
        });
        assert_eq!(checked, 362_880);
    }
}
