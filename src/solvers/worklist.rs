use std::collections::VecDeque;

use crate::maze::CellId;

/// How the worklist hands back pending cells: FIFO gives breadth-first
/// order, LIFO depth-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Fifo,
    Lifo,
}

/// The pending-cell collection driving traversal order. One deque, two
/// disciplines: both remove from the front, FIFO adds at the back and LIFO
/// at the front.
pub(crate) struct Worklist {
    contents: VecDeque<CellId>,
    discipline: Discipline,
}

impl Worklist {
    pub fn new(discipline: Discipline) -> Self {
        Worklist {
            contents: VecDeque::new(),
            discipline,
        }
    }

    pub fn add(&mut self, cell: CellId) {
        match self.discipline {
            Discipline::Fifo => self.contents.push_back(cell),
            Discipline::Lifo => self.contents.push_front(cell),
        }
    }

    pub fn remove(&mut self) -> Option<CellId> {
        self.contents.pop_front()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}
