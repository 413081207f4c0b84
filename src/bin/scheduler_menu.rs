/*!
 * CPU Scheduler - Interactive Entry Point
 *
 * Numbered menu over the task set; repeats until Exit (0) or end of input.
 */

use std::io;
use std::process::ExitCode;
use tracing::info;

use cpu_scheduler_sim::cli::{resolve_tasks, Menu};
use cpu_scheduler_sim::{build_tasks, init_tracing, Config, SimError, SimResult};

fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    match run(&config) {
        Ok(runs) => {
            info!(runs, "Menu closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

fn run(config: &Config) -> SimResult<usize> {
    let specs = resolve_tasks(None, config)?;
    // Reject a bad task file up front rather than on every menu choice
    build_tasks(&specs)?;

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), specs);
    menu.run().map_err(|e| SimError::Io {
        path: "<terminal>".to_string(),
        message: e.to_string(),
    })
}
