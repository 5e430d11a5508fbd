//! LDL Calculator (ldlcalc)
//!
//! Command-line consumer of the calculation engine: takes a lipid panel and
//! prints the estimated LDL for all four methods plus non-HDL cholesterol.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod build_info;
mod engine;
mod models;
mod units;

use engine::CalcError;
use units::Unit;

const USAGE: &str = "\
Usage: ldlcalc <total-cholesterol> <hdl-cholesterol> <triglycerides> [options]

Options:
  --total-unit <mg/dL|mmol/L>    Unit of the total cholesterol value
  --hdl-unit <mg/dL|mmol/L>      Unit of the HDL cholesterol value
  --tg-unit <mg/dL|mmol/L>       Unit of the triglycerides value
  --result-unit <mg/dL|mmol/L>   Unit for the displayed results
  --json                         Emit the result mapping as JSON
  --help                         Show this message

All units default to mg/dL.";

struct CliArgs {
    total: String,
    hdl: String,
    triglycerides: String,
    total_unit: Unit,
    hdl_unit: Unit,
    tg_unit: Unit,
    result_unit: Unit,
    json: bool,
}

fn parse_unit_arg(flag: &str, value: Option<String>) -> Result<Unit, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    Unit::from_str(&value).ok_or_else(|| format!("unknown unit '{}' for {}", value, flag))
}

fn parse_args() -> Result<Option<CliArgs>, String> {
    let mut positional = Vec::new();
    let mut total_unit = Unit::MgDl;
    let mut hdl_unit = Unit::MgDl;
    let mut tg_unit = Unit::MgDl;
    let mut result_unit = Unit::MgDl;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--json" => json = true,
            "--total-unit" => total_unit = parse_unit_arg("--total-unit", args.next())?,
            "--hdl-unit" => hdl_unit = parse_unit_arg("--hdl-unit", args.next())?,
            "--tg-unit" => tg_unit = parse_unit_arg("--tg-unit", args.next())?,
            "--result-unit" => result_unit = parse_unit_arg("--result-unit", args.next())?,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other));
            }
            _ => positional.push(arg),
        }
    }

    let [total, hdl, triglycerides]: [String; 3] = positional.try_into().map_err(|v: Vec<String>| {
        format!(
            "expected 3 values (total cholesterol, HDL, triglycerides), got {}",
            v.len()
        )
    })?;

    Ok(Some(CliArgs {
        total,
        hdl,
        triglycerides,
        total_unit,
        hdl_unit,
        tg_unit,
        result_unit,
        json,
    }))
}

fn main() -> ExitCode {
    // Initialize logging to stderr so stdout stays clean for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ldlcalc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    build_info::print_startup_banner();

    let result = engine::recalculate(
        &args.total,
        &args.hdl,
        &args.triglycerides,
        args.total_unit,
        args.hdl_unit,
        args.tg_unit,
        args.result_unit,
    );

    match result {
        Ok(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error: failed to serialize result: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("LDL Cholesterol Results ({}):", result.result_unit);
                for entry in &result.results {
                    println!("  {}: {} {}", entry.name, entry.value, result.result_unit);
                }
                println!(
                    "  Non-HDL Cholesterol: {} {}",
                    result.non_hdl_value, result.non_hdl_unit
                );
            }
            ExitCode::SUCCESS
        }
        Err(err @ CalcError::InvalidInput { .. }) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
        Err(CalcError::OutOfDomain(_)) => {
            // Out-of-domain input skips recalculation without a user-visible
            // error; the engine already logged the reason
            ExitCode::SUCCESS
        }
    }
}
