use itertools::Itertools;
use log::{debug, info, trace};

use crate::data::{Direction, Policy, Schedule, SimulationInput, Track};
use crate::error::SchedResult;

/// Run a single simulation: validate the input, then walk the requests in
/// the order the chosen policy dictates. The caller's input is untouched;
/// every policy works on its own copy.
pub fn schedule(input: &SimulationInput) -> SchedResult<Schedule> {
    input.validate()?;
    info!("Scheduling {} requests under {} from head {}.",
          input.requests.len(), input.policy, input.head);

    let schedule = match input.policy {
        Policy::Fcfs => fcfs(&input.requests, input.head),
        Policy::Sstf => sstf(&input.requests, input.head),
        Policy::Scan(direction) => {
            let disk_size = input.require_disk_size()?;
            scan(&input.requests, input.head, direction, disk_size)
        }
        Policy::CScan => {
            let disk_size = input.require_disk_size()?;
            cscan(&input.requests, input.head, disk_size)
        }
    };

    debug!("Service order: {:?}.", schedule.order);
    info!("Total head movement: {} tracks.", schedule.total_movement);
    Ok(schedule)
}

/// Running accumulation of the head's walk. Movement is summed as each track
/// is visited, never recomputed afterwards.
struct Walk {
    position: Track,
    order: Vec<Track>,
    total_movement: u64,
}

impl Walk {
    fn new(head: Track) -> Self {
        Walk {
            position: head,
            order: Vec::new(),
            total_movement: 0,
        }
    }

    /// Seek to the given track and record the visit. A track equal to the
    /// current position needs no seek, so it is skipped entirely.
    fn seek(&mut self, track: Track) {
        if track == self.position {
            trace!("Already at track {}, no seek.", track);
            return;
        }
        let distance = self.position.abs_diff(track);
        trace!("Seek {} -> {} ({} tracks).", self.position, track, distance);
        self.total_movement += u64::from(distance);
        self.position = track;
        self.order.push(track);
    }

    /// Seek to the given track unconditionally: a zero-distance visit is
    /// still recorded in the order.
    fn seek_always(&mut self, track: Track) {
        let distance = self.position.abs_diff(track);
        trace!("Seek {} -> {} ({} tracks).", self.position, track, distance);
        self.total_movement += u64::from(distance);
        self.position = track;
        self.order.push(track);
    }

    fn into_schedule(self) -> Schedule {
        Schedule {
            order: self.order,
            total_movement: self.total_movement,
        }
    }
}

/// First-Come-First-Served: service requests strictly in arrival order.
/// There is no skip rule; a request for the current track is serviced in
/// place, so the order always mirrors the input exactly.
fn fcfs(requests: &[Track], head: Track) -> Schedule {
    let mut walk = Walk::new(head);
    for &request in requests {
        walk.seek_always(request);
    }
    walk.into_schedule()
}

/// Shortest-Seek-Time-First: repeatedly service the closest remaining
/// request. On a distance tie the earliest-arrived request wins. Duplicate
/// tracks are independent candidates and are consumed one per visit; once
/// the head sits on a track, any remaining duplicates of it are no-ops.
fn sstf(requests: &[Track], head: Track) -> Schedule {
    let mut walk = Walk::new(head);
    let mut remaining = requests.to_vec();
    while let Some(closest) = remaining.iter()
        .position_min_by_key(|&&track| walk.position.abs_diff(track))
    {
        let track = remaining.remove(closest);
        walk.seek(track);
    }
    walk.into_schedule()
}

/// Split the requests around the head: tracks strictly below it and tracks
/// at or above it, each sorted ascending. A request for the head's own track
/// is reachable without reversing, so it belongs to the upper partition.
fn partition(requests: &[Track], head: Track) -> (Vec<Track>, Vec<Track>) {
    let left = requests.iter().copied()
        .filter(|&track| track < head)
        .sorted()
        .collect_vec();
    let right = requests.iter().copied()
        .filter(|&track| track >= head)
        .sorted()
        .collect_vec();
    debug!("Partitioned into {} tracks below the head and {} at or above.",
           left.len(), right.len());
    (left, right)
}

/// SCAN: sweep to one end of the disk, reverse at the boundary, and sweep
/// back across the remaining requests. The boundary track is a real waypoint
/// of the walk, recorded and charged like any visit unless the head is
/// already on it. With no requests there is nothing to sweep towards, so the
/// boundary is not visited at all.
fn scan(requests: &[Track], head: Track, direction: Direction,
        disk_size: Track) -> Schedule {
    let mut walk = Walk::new(head);
    if requests.is_empty() {
        return walk.into_schedule();
    }
    let (left, right) = partition(requests, head);

    match direction {
        Direction::Right => {
            for &track in right.iter() {
                walk.seek(track);
            }
            walk.seek(disk_size - 1);
            for &track in left.iter().rev() {
                walk.seek(track);
            }
        }
        Direction::Left => {
            for &track in left.iter().rev() {
                walk.seek(track);
            }
            walk.seek(0);
            for &track in right.iter() {
                walk.seek(track);
            }
        }
    }
    walk.into_schedule()
}

/// C-SCAN: sweep right to the outer boundary, jump to track zero (paying the
/// full jump distance), then resume sweeping right through the tracks below
/// the starting head. Both boundaries are waypoints under the same skip rule
/// as SCAN, and both are suppressed when there are no requests.
fn cscan(requests: &[Track], head: Track, disk_size: Track) -> Schedule {
    let mut walk = Walk::new(head);
    if requests.is_empty() {
        return walk.into_schedule();
    }
    let (left, right) = partition(requests, head);

    for &track in right.iter() {
        walk.seek(track);
    }
    walk.seek(disk_size - 1);
    walk.seek(0);
    for &track in left.iter() {
        walk.seek(track);
    }
    walk.into_schedule()
}
