/*!
 * Interactive Menu
 * Numbered algorithm menu that loops until the user exits
 */

use crate::render::render_table;
use crate::scheduler::{build_tasks, simulate, Algorithm, AlgorithmKind, TaskSpec, TimeQuantum};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(AlgorithmKind),
    Exit,
}

impl MenuChoice {
    /// Map a numbered menu entry; anything else is invalid
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(Self::Exit),
            "1" => Some(Self::Run(AlgorithmKind::Fcfs)),
            "2" => Some(Self::Run(AlgorithmKind::Sjf)),
            "3" => Some(Self::Run(AlgorithmKind::Priority)),
            "4" => Some(Self::Run(AlgorithmKind::RoundRobin)),
            _ => None,
        }
    }
}

/// Menu loop over arbitrary input and output streams
///
/// Every run starts from a fresh copy of `specs`, so one run's results never
/// leak into the next. End of input is treated like choosing Exit.
pub struct Menu<R, W> {
    input: R,
    output: W,
    specs: Vec<TaskSpec>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, specs: Vec<TaskSpec>) -> Self {
        Self {
            input,
            output,
            specs,
        }
    }

    /// Run until Exit or end of input; returns the number of completed simulations
    pub fn run(&mut self) -> io::Result<usize> {
        let mut runs = 0;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let kind = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Run(kind)) => kind,
                None => {
                    debug!(input = line.trim(), "Invalid menu choice");
                    self.error("Invalid choice. Please enter a valid option.")?;
                    continue;
                }
            };

            let quantum = if kind.needs_quantum() {
                let Some(raw) = self.prompt("Enter time quantum for Round Robin: ")? else {
                    break;
                };
                match raw.parse::<TimeQuantum>() {
                    Ok(quantum) => Some(quantum),
                    Err(e) => {
                        self.error(&e.to_string())?;
                        continue;
                    }
                }
            } else {
                None
            };

            // Round-robin always has a quantum here, so this cannot fail
            let algorithm = match Algorithm::from_kind(kind, quantum) {
                Ok(algorithm) => algorithm,
                Err(e) => {
                    self.error(&e.to_string())?;
                    continue;
                }
            };

            if self.run_once(&algorithm)? {
                runs += 1;
            }
        }

        writeln!(self.output, "{}", "Exiting program...".bold())?;
        self.output.flush()?;
        Ok(runs)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn run_once(&mut self, algorithm: &Algorithm) -> io::Result<bool> {
        let mut tasks = match build_tasks(&self.specs) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(error = %e, "Task set rejected");
                self.error(&e.to_string())?;
                return Ok(false);
            }
        };

        let report = simulate(&mut tasks, algorithm);
        write!(
            self.output,
            "{}",
            render_table(algorithm.kind(), &tasks, &report.stats)
        )?;
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "Select scheduling algorithm:".bold())?;
        for entry in [
            "1. First Come First Serve (FCFS)",
            "2. Shortest Job First (SJF)",
            "3. Priority Scheduling",
            "4. Round Robin (RR)",
            "0. Exit",
        ] {
            writeln!(self.output, "{}", entry.yellow())?;
        }
        Ok(())
    }

    /// Print `message` and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message.cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.red())
    }
}
