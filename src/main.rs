/*!
 * CPU Scheduler - Batch Entry Point
 *
 * Runs one scheduling algorithm over the task set and prints the results:
 *   cpu_scheduler <fcfs|sjf|priority|rr <quantum>> [options]
 */

use std::process::ExitCode;
use tracing::{debug, info};

use cpu_scheduler_sim::cli::{parse_args, resolve_tasks, Command, OutputFormat, USAGE};
use cpu_scheduler_sim::config::read_file;
use cpu_scheduler_sim::render::{render_table, tasks_to_json};
use cpu_scheduler_sim::{
    build_tasks, init_tracing, simulate, Config, SchedulerRequest, SimResult, SimulationReport,
    Task,
};

fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    match run(&config, std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            // Exit status 1 marks a usage mistake
            if code == 1 {
                eprintln!("{}", USAGE);
            }
            ExitCode::from(code)
        }
    }
}

fn run(config: &Config, args: impl Iterator<Item = String>) -> SimResult<()> {
    let (tasks, report, format) = match parse_args(args)? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Run {
            algorithm,
            tasks_path,
            format,
        } => {
            let specs = resolve_tasks(tasks_path.as_deref(), config)?;
            let mut tasks = build_tasks(&specs)?;
            info!(algorithm = algorithm.kind().as_str(), tasks = tasks.len(), "Running");
            let report = simulate(&mut tasks, &algorithm);
            (tasks, report, format)
        }
        Command::Request {
            path,
            wait_accounting,
            format,
        } => {
            let mut request: SchedulerRequest = serde_json::from_str(&read_file(&path)?)?;
            if let Some(accounting) = wait_accounting {
                request.wait_accounting = accounting;
            }
            debug!(path = %path.display(), algorithm = %request.algorithm, "Loaded request");
            let (tasks, report) = request.execute()?;
            (tasks, report, format)
        }
    };

    print_results(&tasks, &report, format)
}

fn print_results(
    tasks: &[Task],
    report: &SimulationReport,
    format: OutputFormat,
) -> SimResult<()> {
    match format {
        OutputFormat::Json => println!("{}", tasks_to_json(tasks)?),
        OutputFormat::Table => print!(
            "{}",
            render_table(report.stats.algorithm, tasks, &report.stats)
        ),
    }
    Ok(())
}
