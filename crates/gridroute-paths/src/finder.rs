use std::sync::{Mutex, PoisonError};

use gridroute_core::{MapError, PassMap, Point};
use log::debug;

use crate::config::{LockPolicy, SearchConfig};
use crate::error::{Endpoint, PathError, Result};
use crate::route::Route;
use crate::search::Search;

/// Length reported by [`find_path`] when the target cannot be reached.
pub const NO_PATH: i32 = -1;

/// Held for the duration of every search run under [`LockPolicy::Serialized`].
static SEARCH_LOCK: Mutex<()> = Mutex::new(());

/// Entry point for route searches on a [`PassMap`].
///
/// The pathfinder itself is just configuration; each query builds its own
/// working state, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPathfinder {
    config: SearchConfig,
}

impl GridPathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Find a route from `start` to `target`.
    ///
    /// Returns `Ok(None)` when no route exists and an empty route when
    /// `start == target`. Both points must lie inside `map`; their own
    /// passability is not checked, but a blocked target is never reached.
    pub fn find_route(
        &self,
        map: &PassMap<'_>,
        start: Point,
        target: Point,
    ) -> Result<Option<Route>> {
        let start_idx = endpoint_index(map, Endpoint::Start, start)?;
        let target_idx = endpoint_index(map, Endpoint::Target, target)?;

        if start_idx == target_idx {
            return Ok(Some(Route::default()));
        }

        let _guard = match self.config.lock {
            LockPolicy::Serialized => {
                Some(SEARCH_LOCK.lock().unwrap_or_else(PoisonError::into_inner))
            }
            LockPolicy::Independent => None,
        };

        Ok(Search::new(map, self.config.links).run(start_idx, target_idx))
    }

    /// Find a route and write its cells to the front of `out`.
    ///
    /// Returns the route length, or `Ok(None)` when no route exists. An
    /// undersized `out` is reported as [`PathError::BufferTooSmall`] and left
    /// untouched.
    pub fn find_path_into(
        &self,
        map: &PassMap<'_>,
        start: Point,
        target: Point,
        out: &mut [usize],
    ) -> Result<Option<usize>> {
        match self.find_route(map, start, target)? {
            Some(route) => route.write_into(out).map(Some),
            None => Ok(None),
        }
    }
}

fn endpoint_index(map: &PassMap<'_>, endpoint: Endpoint, p: Point) -> Result<usize> {
    map.index_of(p).ok_or_else(|| {
        debug!(
            "rejecting {endpoint} {p}: outside {}x{} map",
            map.width(),
            map.height()
        );
        PathError::OutOfBounds {
            endpoint,
            point: p,
            width: map.width(),
            height: map.height(),
        }
    })
}

/// Find a route on a raw row-major grid and write it into `out`.
///
/// `grid[i] == 1` marks a passable cell. On success `out[..n]` holds the
/// route's cell indices from start to target and `n` is returned; if the
/// target is unreachable, [`NO_PATH`] is returned and `out` is untouched. A
/// start equal to the target yields `0`.
///
/// Runs with the default [`SearchConfig`].
#[allow(clippy::too_many_arguments)]
pub fn find_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    grid: &[u8],
    width: i32,
    height: i32,
    out: &mut [i32],
) -> Result<i32> {
    let map = PassMap::new(grid, width, height)?;
    // Cell indices must be representable in the output buffer.
    if map.len() > i32::MAX as usize {
        return Err(MapError::TooLarge {
            width: map.width(),
            height: map.height(),
        }
        .into());
    }

    let route = GridPathfinder::default().find_route(
        &map,
        Point::new(start_x, start_y),
        Point::new(target_x, target_y),
    )?;
    let Some(route) = route else {
        return Ok(NO_PATH);
    };

    route.check_capacity(out.len())?;
    for (slot, &cell) in out.iter_mut().zip(route.cells()) {
        *slot = cell as i32;
    }
    Ok(route.len() as i32)
}
