mod error;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser, ValueEnum};
use log::{info, error, LevelFilter};
use seekulator_engine::{schedule, DEFAULT_DISK_SIZE, Direction, Policy,
                        SimulationInput, Track};
use seekulator_utils::chart::plot_walk;
use seekulator_utils::report::{format_report, ReportParams};
use std::fs;
use std::io::{self, Write};

use crate::error::CliError;

const POLICY: &str = "policy";
const HEAD: &str = "head";
const TRACKS: &str = "TRACKS";
const DIRECTION: &str = "direction";
const DISK_SIZE: &str = "disk-size";
const SEEK_TIME: &str = "seek-time";
const CHART: &str = "chart";
const OUTPUT_PATH: &str = "output-path";
const VERBOSITY: &str = "verbosity";

const CHART_WIDTH: usize = 60;

/// All supported scheduling policies.
#[derive(Debug, PartialEq, Eq, Copy, Clone, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Sstf,
    Scan,
    Cscan,
}

/// Sweep directions for SCAN.
#[derive(Debug, PartialEq, Eq, Copy, Clone, ValueEnum)]
enum DirectionArg {
    Left,
    Right,
}

fn cli() -> Command {
    // Hack to make the build dirty when the toml changes.
    include_str!("../../Cargo.toml");

    clap::command!()
        .arg(Arg::new(POLICY)
            .help("The scheduling policy to simulate.")
            .short('p')
            .long("policy")
            .action(ArgAction::Set)
            .required(true)
            .value_parser(value_parser!(PolicyArg))
            .ignore_case(true))
        .arg(Arg::new(HEAD)
            .help("The head's starting track.")
            .short('H')
            .long("head")
            .action(ArgAction::Set)
            .required(true)
            .value_parser(value_parser!(Track)))
        .arg(Arg::new(TRACKS)
            .help("The pending track requests, in arrival order.")
            .action(ArgAction::Append)
            .value_parser(value_parser!(Track)))
        .arg(Arg::new(DIRECTION)
            .help("The initial sweep direction. Only meaningful for SCAN.")
            .short('d')
            .long("direction")
            .action(ArgAction::Set)
            .default_value("right")
            .value_parser(value_parser!(DirectionArg))
            .ignore_case(true))
        .arg(Arg::new(DISK_SIZE)
            .help("The number of tracks on the disk. Defaults to 200 for \
                   SCAN and C-SCAN, which seek to the disk's boundaries.")
            .short('s')
            .long("disk-size")
            .action(ArgAction::Set)
            .value_parser(value_parser!(Track)))
        .arg(Arg::new(SEEK_TIME)
            .help("Seek time per track moved. If set, the report includes \
                   the total seek time of the run.")
            .short('t')
            .long("seek-time")
            .action(ArgAction::Set)
            .value_parser(value_parser!(u64)))
        .arg(Arg::new(CHART)
            .help("Include a position-vs-step chart of the head's walk.")
            .short('c')
            .long("chart")
            .action(ArgAction::SetTrue))
        .arg(Arg::new(OUTPUT_PATH)
            .help("Where to write the report. \
                   If omitted, it will be sent to stdout.")
            .short('o')
            .long("output")
            .action(ArgAction::Set))
        .arg(Arg::new(VERBOSITY)
            .help("Specify up to three times to increase the verbosity of output.")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .value_parser(value_parser!(u8).range(..=3)))
}

fn logging_format(formatter: &mut env_logger::fmt::Formatter,
                  record: &log::Record) -> io::Result<()> {
    let style = formatter.default_level_style(record.level());
    writeln!(formatter, "{:>7}  {}", style.value(record.level()), record.args())
}

/// Logging setup for normal build (not testing).
#[cfg(not(test))]
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(logging_format)
        .init();
}

/// Logging setup for testing build (properly captures stdout and ignores
/// multiple invocations).
#[cfg(test)]
fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(logging_format)
        .is_test(true)
        .try_init();
}

/// Main run function; returns an exit code.
fn run(args: ArgMatches) -> u8 {
    return match _run(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e.0);
            1
        }
    };

    fn _run(args: ArgMatches) -> Result<(), CliError> {
        // Set up logging.
        let log_level = match args.get_count(VERBOSITY) {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            3 => LevelFilter::Trace,
            _ => unreachable!(),
        };
        init_logging(log_level);

        // Assemble the engine input.
        let policy = match args.get_one::<PolicyArg>(POLICY).unwrap() {
            PolicyArg::Fcfs => Policy::Fcfs,
            PolicyArg::Sstf => Policy::Sstf,
            PolicyArg::Scan => {
                let direction = match args.get_one::<DirectionArg>(DIRECTION)
                    .unwrap()
                {
                    DirectionArg::Left => Direction::Left,
                    DirectionArg::Right => Direction::Right,
                };
                Policy::Scan(direction)
            }
            PolicyArg::Cscan => Policy::CScan,
        };
        let requests = args.get_many::<Track>(TRACKS)
            .map(|tracks| tracks.copied().collect())
            .unwrap_or_default();
        // The sweep policies need a disk bound; fall back to the
        // conventional 200-track disk if none was given.
        let mut disk_size = args.get_one::<Track>(DISK_SIZE).copied();
        if disk_size.is_none() {
            if let Policy::Scan(_) | Policy::CScan = policy {
                info!("No disk size given; assuming {} tracks.",
                      DEFAULT_DISK_SIZE);
                disk_size = Some(DEFAULT_DISK_SIZE);
            }
        }
        let input = SimulationInput {
            requests,
            head: *args.get_one::<Track>(HEAD).unwrap(),
            policy,
            disk_size,
        };

        // Run the simulation.
        let result = schedule(&input)?;
        info!("Simulation complete.");

        // Build the report.
        let mut report = format_report(&ReportParams {
            policy: input.policy.name(),
            head: input.head,
            disk_size: input.disk_size,
            requests: &input.requests,
            order: &result.order,
            total_movement: result.total_movement,
            seek_time_per_unit: args.get_one::<u64>(SEEK_TIME).copied(),
        });
        if args.get_flag(CHART) {
            report.push('\n');
            report.push_str(&plot_walk(input.head, &result.order, CHART_WIDTH));
        }

        // Write it out. The report is fully built before the output path is
        // touched, so a failed run never leaves a file behind.
        match args.get_one::<String>(OUTPUT_PATH) {
            None => {
                io::stdout().write_all(report.as_bytes())
                    .map_err(|e| {
                        CliError(format!("Failed to write report: {}", e))
                    })?;
            }
            Some(path) => {
                info!("Writing the report to '{}'.", path);
                fs::write(path, &report)
                    .map_err(|e| {
                        CliError(format!(
                            "Failed to write report to '{}': {}", path, e))
                    })?;
            }
        }

        Ok(())
    }
}

fn main() {
    let args = cli().get_matches();
    std::process::exit(run(args).into());
}
