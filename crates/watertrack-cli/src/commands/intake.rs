use std::io::{BufRead, Write};

use serde::Serialize;
use watertrack_core::error::Result;
use watertrack_core::{parse_amount, Config, IntakeController, RecordStore, Snapshot};

const BAR_WIDTH: usize = 20;

/// Quick-add sizes.
#[derive(Debug, Clone, Copy)]
pub enum Serving {
    Glass,
    Bottle,
}

impl Serving {
    fn amount_ml(self, config: &Config) -> f64 {
        match self {
            Serving::Glass => config.quick_add.glass_ml,
            Serving::Bottle => config.quick_add.bottle_ml,
        }
    }
}

/// JSON shape printed with `--json`.
#[derive(Serialize)]
struct Output {
    date: String,
    /// False when an add was dropped or a reset was declined.
    recorded: bool,
    #[serde(flatten)]
    snapshot: Snapshot,
}

fn open() -> Result<(Config, IntakeController)> {
    let config = Config::load()?;
    let store = RecordStore::from_config(&config)?;
    let controller = IntakeController::open(store, config.goal.daily_ml)?;
    Ok((config, controller))
}

pub fn status(json: bool) -> Result<()> {
    let (_, controller) = open()?;
    render(&controller, controller.snapshot(), true, json)
}

pub fn add(text: &str, json: bool) -> Result<()> {
    // Validate before touching any state.
    let amount = parse_amount(text)?;
    let (_, mut controller) = open()?;
    record(&mut controller, amount, json)
}

pub fn quick_add(serving: Serving, json: bool) -> Result<()> {
    let (config, mut controller) = open()?;
    record(&mut controller, serving.amount_ml(&config), json)
}

pub fn reset(yes: bool, json: bool) -> Result<()> {
    let (_, mut controller) = open()?;
    if !yes && !confirm("Are you sure you want to reset your intake for the day?")? {
        eprintln!("reset cancelled");
        return render(&controller, controller.snapshot(), false, json);
    }
    let snapshot = controller.reset()?;
    render(&controller, snapshot, true, json)
}

fn record(controller: &mut IntakeController, amount_ml: f64, json: bool) -> Result<()> {
    let recorded = !controller.goal_met();
    let snapshot = controller.add(amount_ml)?;
    if !recorded {
        eprintln!("Daily goal already reached; {amount_ml} ml not recorded.");
    }
    render(controller, snapshot, recorded, json)?;
    if snapshot.goal_just_reached && !json {
        println!();
        println!("{}", snapshot.goal_reached_message());
    }
    Ok(())
}

fn render(
    controller: &IntakeController,
    snapshot: Snapshot,
    recorded: bool,
    json: bool,
) -> Result<()> {
    if json {
        let output = Output {
            date: controller.date().to_string(),
            recorded,
            snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Today's Water Intake ({})", controller.date());
    println!("{}", snapshot.summary_line());
    println!("{} {:.0}%", progress_bar(&snapshot), snapshot.progress_percent());
    println!("{}", snapshot.status_line());
    Ok(())
}

fn progress_bar(snapshot: &Snapshot) -> String {
    let filled = ((snapshot.progress_percent() / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Ask a yes/no question on stderr; anything but y/yes is a no.
fn confirm(question: &str) -> Result<bool> {
    eprint!("{question} [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
