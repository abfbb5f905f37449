use gridroute_core::PassMap;
use log::{debug, trace};

use crate::config::LinkMode;
use crate::distance::manhattan_idx;
use crate::neighbors::Neighbors;
use crate::route::Route;

/// Marks an unset link.
const NO_LINK: usize = usize::MAX;

/// Lifecycle of a cell within one search. Transitions only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum CellState {
    #[default]
    Undiscovered,
    Open,
    Closed,
}

/// Per-cell bookkeeping. `cost` and `priority` are meaningful only once the
/// cell has been discovered.
#[derive(Clone, Debug)]
struct Node {
    /// Best known accumulated cost from the start.
    cost: usize,
    /// `cost` plus the heuristic distance to the target; the open-list key.
    priority: usize,
    link: usize,
    state: CellState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: 0,
            priority: 0,
            link: NO_LINK,
            state: CellState::Undiscovered,
        }
    }
}

/// Working state of a single best-first search.
///
/// Everything here is owned by one call and dropped with it, so searches
/// never share state.
pub(crate) struct Search<'m> {
    map: &'m PassMap<'m>,
    links: LinkMode,
    nodes: Vec<Node>,
    /// Open cells in discovery order.
    open: Vec<usize>,
    neighbors: Neighbors,
    /// Cells taken off the open list so far.
    expanded: usize,
}

impl<'m> Search<'m> {
    pub(crate) fn new(map: &'m PassMap<'m>, links: LinkMode) -> Self {
        Self {
            map,
            links,
            nodes: vec![Node::default(); map.len()],
            open: Vec::new(),
            neighbors: Neighbors::new(),
            expanded: 0,
        }
    }

    /// Search from `start` to `target` (distinct, in-bounds cell indices).
    ///
    /// Returns `None` once the frontier is exhausted without reaching the
    /// target.
    pub(crate) fn run(&mut self, start: usize, target: usize) -> Option<Route> {
        let width = self.map.width();
        trace!(
            "search: start={start} target={target} map={}x{} links={:?}",
            width,
            self.map.height(),
            self.links
        );

        {
            let node = &mut self.nodes[start];
            node.cost = 0;
            node.priority = manhattan_idx(width, start, target) as usize;
            node.state = CellState::Open;
        }
        self.open.push(start);

        let found = loop {
            let Some(current) = self.pop_best() else {
                break None;
            };
            self.nodes[current].state = CellState::Closed;
            self.expanded += 1;

            if current == target {
                break Some(current);
            }
            self.expand(current, target);
        };

        match found {
            Some(last) => {
                let route = self.route(start, last);
                debug!(
                    "search: found route of {} cells after {} expansions",
                    route.len(),
                    self.expanded
                );
                Some(route)
            }
            None => {
                debug!("search: no path after {} expansions", self.expanded);
                None
            }
        }
    }

    /// Remove and return the open cell with the lowest priority.
    ///
    /// Ties go to the cell discovered first.
    fn pop_best(&mut self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (pos, &cell) in self.open.iter().enumerate() {
            let priority = self.nodes[cell].priority;
            if best.is_none_or(|(_, p)| priority < p) {
                best = Some((pos, priority));
            }
        }
        let (pos, _) = best?;
        Some(self.open.remove(pos))
    }

    fn expand(&mut self, current: usize, target: usize) {
        let (width, height) = (self.map.width(), self.map.height());
        let current_cost = self.nodes[current].cost;

        let mut neighbors = std::mem::take(&mut self.neighbors);
        for &next in neighbors.orthogonal(current, width, height) {
            if !self.map.is_passable(next) {
                continue;
            }
            let candidate = current_cost + manhattan_idx(width, current, next) as usize;

            let node = &mut self.nodes[next];
            match node.state {
                CellState::Closed => continue,
                CellState::Open if candidate >= node.cost => continue,
                CellState::Open => {}
                CellState::Undiscovered => {
                    node.state = CellState::Open;
                    self.open.push(next);
                }
            }
            node.cost = candidate;
            node.priority = candidate + manhattan_idx(width, next, target) as usize;
            trace!(
                "search: {current} -> {next} cost={candidate} priority={}",
                node.priority
            );

            match self.links {
                LinkMode::Parent => node.link = current,
                LinkMode::Successor => self.nodes[current].link = next,
            }
        }
        self.neighbors = neighbors;
    }

    fn link(&self, cell: usize) -> Option<usize> {
        let link = self.nodes[cell].link;
        (link != NO_LINK).then_some(link)
    }

    /// Rebuild the route once `last` (the target) has been closed.
    fn route(&self, start: usize, last: usize) -> Route {
        let mut cells = Vec::new();
        match self.links {
            LinkMode::Parent => {
                let mut cell = last;
                cells.push(cell);
                while let Some(prev) = self.link(cell) {
                    cells.push(prev);
                    cell = prev;
                }
                cells.reverse();
            }
            LinkMode::Successor => {
                let mut cell = start;
                cells.push(cell);
                while let Some(next) = self.link(cell) {
                    cells.push(next);
                    cell = next;
                }
                if cell != last {
                    cells.push(last);
                }
            }
        }
        Route::new(cells)
    }
}
