use std::fmt::{Display, Formatter};

use crate::error::{InvalidInput, SchedResult};

/// A track number: an addressable cylinder position on the disk.
pub type Track = u32;

/// Number of tracks assumed when the caller does not specify one. This is a
/// configuration default, not a limit baked into the algorithms.
pub const DEFAULT_DISK_SIZE: Track = 200;

/// Sweep direction for SCAN.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    Left,
    Right,
}

/// The supported scheduling policies. SCAN carries its sweep direction;
/// C-SCAN always sweeps right, wrapping back to track zero.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Policy {
    Fcfs,
    Sstf,
    Scan(Direction),
    CScan,
}

impl Policy {
    /// The conventional display name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan(_) => "SCAN",
            Policy::CScan => "C-SCAN",
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The complete input to one simulation run. Constructed once by the caller
/// and never mutated by the engine.
///
/// `disk_size` is required by SCAN and C-SCAN, which seek to the disk's
/// boundary tracks; FCFS and SSTF only use it for bounds checking when it is
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    pub requests: Vec<Track>,
    pub head: Track,
    pub policy: Policy,
    pub disk_size: Option<Track>,
}

impl SimulationInput {
    /// Reject out-of-range scalars before any scheduling happens. Tracks are
    /// unsigned, so only the upper bound needs checking.
    pub(crate) fn validate(&self) -> SchedResult<()> {
        if let Some(disk_size) = self.disk_size {
            validate_or_error!(disk_size > 0, "Disk size must be positive.");
            validate_or_error!(self.head < disk_size,
                format!("Head position {} is outside the disk (0-{}).",
                        self.head, disk_size - 1));
            for &request in self.requests.iter() {
                validate_or_error!(request < disk_size,
                    format!("Request {} is outside the disk (0-{}).",
                            request, disk_size - 1));
            }
        }
        Ok(())
    }

    /// The disk bound, for the policies that must seek to it.
    pub(crate) fn require_disk_size(&self) -> SchedResult<Track> {
        self.disk_size.ok_or_else(|| InvalidInput::new(
            format!("{} requires a disk size.", self.policy)))
    }
}

/// The outcome of a simulation run: the order in which tracks were visited,
/// and the head movement that cost. Both come from the same pass over the
/// walk, so they cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub order: Vec<Track>,
    pub total_movement: u64,
}
