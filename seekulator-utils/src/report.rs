use std::fmt::Write;

/// Everything needed to describe one simulation run. The policy arrives as a
/// display name so this crate stays free of engine types.
#[derive(Debug)]
pub struct ReportParams<'a> {
    pub policy: &'a str,
    pub head: u32,
    pub disk_size: Option<u32>,
    pub requests: &'a [u32],
    pub order: &'a [u32],
    pub total_movement: u64,
    pub seek_time_per_unit: Option<u64>,
}

/// Render a simulation run as a human-readable report. The service order is
/// printed as the full walk, starting from the head position.
pub fn format_report(params: &ReportParams) -> String {
    let mut str = String::new();
    writeln!(str, "Policy:          {}", params.policy).unwrap();
    writeln!(str, "Head position:   {}", params.head).unwrap();
    if let Some(disk_size) = params.disk_size {
        writeln!(str, "Disk size:       {}", disk_size).unwrap();
    }
    writeln!(str, "Requests:        {}", join(params.requests, ", ")).unwrap();
    let mut walk = Vec::with_capacity(params.order.len() + 1);
    walk.push(params.head);
    walk.extend_from_slice(params.order);
    writeln!(str, "Service order:   {}", join(&walk, " -> ")).unwrap();
    writeln!(str, "Total movement:  {} tracks", params.total_movement).unwrap();
    if let Some(per_unit) = params.seek_time_per_unit {
        writeln!(str, "Total seek time: {} time units",
                 params.total_movement * per_unit).unwrap();
    }
    str
}

/// Join the given tracks with a separator.
fn join(tracks: &[u32], separator: &str) -> String {
    let mut str = String::new();
    for (i, track) in tracks.iter().enumerate() {
        if i > 0 {
            str.push_str(separator);
        }
        write!(str, "{}", track).unwrap();
    }
    str
}
