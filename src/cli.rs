use crate::combat::dice::SeededDice;
use crate::combat::forecast::{forecast_action, ActionSetup};
use crate::combat::commit::commit_forecast;
use crate::data::loader::{load_powers, load_roster, load_squaddies};
use crate::data::validate::validate_roster;
use crate::replay::{load_script, run_script};

const DEFAULT_SEED: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forecast,
    Resolve,
    Replay,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("forecast") => Some(Command::Forecast),
        Some("resolve") => Some(Command::Resolve),
        Some("replay") => Some(Command::Replay),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Forecast) => handle_forecast(args),
        Some(Command::Resolve) => handle_resolve(args),
        Some(Command::Replay) => handle_replay(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: skirmish <forecast|resolve|replay|validate>");
            2
        }
    }
}

fn handle_forecast(args: &[String]) -> i32 {
    let [squaddie_path, power_path, user_id, power_id, targets @ ..] = &args[2..] else {
        eprintln!("usage: skirmish forecast <squaddies> <powers> <user> <power> <target>...");
        return 2;
    };
    if targets.is_empty() {
        eprintln!("usage: skirmish forecast <squaddies> <powers> <user> <power> <target>...");
        return 2;
    }

    let (squaddies, powers) = match load_roster(squaddie_path, power_path) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("failed to load roster: {err}");
            return 1;
        }
    };

    let target_ids: Vec<&str> = targets.iter().map(String::as_str).collect();
    let setup = ActionSetup::new(user_id, power_id, &target_ids);
    match forecast_action(&setup, &squaddies, &powers) {
        Ok(forecast) => emit_json(&forecast),
        Err(err) => {
            eprintln!("forecast failed: {err}");
            1
        }
    }
}

fn handle_resolve(args: &[String]) -> i32 {
    let [squaddie_path, power_path, user_id, power_id, target_id, rest @ ..] = &args[2..] else {
        eprintln!("usage: skirmish resolve <squaddies> <powers> <user> <power> <target> [seed]");
        return 2;
    };
    let seed = parse_u64_arg(rest.first(), "seed", DEFAULT_SEED);

    let (mut squaddies, powers) = match load_roster(squaddie_path, power_path) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("failed to load roster: {err}");
            return 1;
        }
    };

    let setup = ActionSetup::new(user_id, power_id, &[target_id.as_str()]);
    let forecast = match forecast_action(&setup, &squaddies, &powers) {
        Ok(forecast) => forecast,
        Err(err) => {
            eprintln!("forecast failed: {err}");
            return 1;
        }
    };

    let mut dice = SeededDice::new(seed);
    match commit_forecast(&forecast, &mut squaddies, &powers, &mut dice) {
        Ok(result) => emit_json(&result),
        Err(err) => {
            eprintln!("resolution failed: {err}");
            1
        }
    }
}

fn handle_replay(args: &[String]) -> i32 {
    let [squaddie_path, power_path, script_path] = &args[2..] else {
        eprintln!("usage: skirmish replay <squaddies> <powers> <script>");
        return 2;
    };

    let (mut squaddies, powers) = match load_roster(squaddie_path, power_path) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("failed to load roster: {err}");
            return 1;
        }
    };
    let script = match load_script(script_path) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("failed to load script: {err}");
            return 1;
        }
    };

    match run_script(&script, &mut squaddies, &powers) {
        Ok(results) => emit_json(&results),
        Err(err) => {
            eprintln!("replay failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let [squaddie_path, power_path] = &args[2..] else {
        eprintln!("usage: skirmish validate <squaddies> <powers>");
        return 2;
    };

    let squaddies = match load_squaddies(squaddie_path) {
        Ok(squaddies) => squaddies,
        Err(err) => {
            eprintln!("failed to load squaddies: {err}");
            return 1;
        }
    };
    let powers = match load_powers(power_path) {
        Ok(powers) => powers,
        Err(err) => {
            eprintln!("failed to load powers: {err}");
            return 1;
        }
    };

    let report = validate_roster(&squaddies, &powers);
    if report.diagnostics.is_empty() {
        println!("validation passed: {} squaddies, {} powers", squaddies.len(), powers.len());
        return 0;
    }
    for diagnostic in &report.diagnostics {
        eprintln!("- {diagnostic}");
    }
    if report.has_errors() {
        eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
        1
    } else {
        println!("validation passed with warnings");
        0
    }
}

fn emit_json(payload: &impl serde::Serialize) -> i32 {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize payload: {err}");
            1
        }
    }
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
