// Prints component values for every stage of an even-order Butterworth
// low-pass built from unity-gain Sallen-Key stages.
//
//   sallen-key 4 --fc 1000 --res 10e3
//   sallen-key 6 -c 1e-9 -p

use std::process::ExitCode;

use sallenkey::design::{FilterDesign, FilterSpec, UNIT_CUTOFF_HZ};
use sallenkey::schematic::SCHEMATIC;
use sallenkey::DesignError;

const USAGE: &str = "\
usage: sallen-key [-h] [-f FC] [-r R | -c C] [-p] N

Calculate component values for any even order Butterworth filter
using the Sallen-Key unity gain topology.

positional arguments:
  N                      the order of the filter (must be even)

options:
  -h, --help             show this help message and exit
  -f, --fc FC            the cutoff frequency in Hz (default 1/(2*pi))
  -r, --res R            the value of the resistors you wish to use
  -c, --cap C            the value of the smallest capacitor you wish to use;
                         larger capacitors are integer multiples of it
  -p, --print-schematic  print the generic schematic of one stage
                         (each stage adds 2 orders to the filter)

exactly one of -r or -c is required";

#[derive(Debug)]
struct Args {
    order: usize,
    fc: f64,
    res: Option<f64>,
    cap: Option<f64>,
    print_schematic: bool,
}

#[derive(Debug)]
enum CliError {
    Help,
    Usage(String),
    Design(DesignError),
}

impl From<DesignError> for CliError {
    fn from(e: DesignError) -> Self {
        CliError::Design(e)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, CliError> {
    let raw = raw.ok_or_else(|| CliError::Usage(format!("{flag} expects a value")))?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid value for {flag}: {raw:?}")))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut order = None;
    let mut fc = UNIT_CUTOFF_HZ;
    let mut res = None;
    let mut cap = None;
    let mut print_schematic = false;

    while let Some(arg) = argv.next() {
        // --flag=value form
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };
        match flag.as_str() {
            "-h" | "--help" => return Err(CliError::Help),
            "-p" | "--print-schematic" => print_schematic = true,
            "-f" | "--fc" => fc = parse_number(&flag, inline.or_else(|| argv.next()))?,
            "-r" | "--res" => res = Some(parse_number(&flag, inline.or_else(|| argv.next()))?),
            "-c" | "--cap" => cap = Some(parse_number(&flag, inline.or_else(|| argv.next()))?),
            s if s.starts_with('-') && s.parse::<f64>().is_err() => {
                return Err(CliError::Usage(format!("unrecognized argument: {s}")));
            }
            _ if order.is_none() => order = Some(parse_number::<usize>("N", Some(arg))?),
            _ => return Err(CliError::Usage(format!("unexpected argument: {arg}"))),
        }
    }

    let order = order.ok_or_else(|| CliError::Usage("the order N is required".into()))?;
    Ok(Args {
        order,
        fc,
        res,
        cap,
        print_schematic,
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let spec = FilterSpec::from_options(args.order, Some(args.fc), args.res, args.cap)?;
    let design = FilterDesign::solve(&spec)?;

    if args.print_schematic {
        println!("{SCHEMATIC}");
    }
    for stage in &design {
        println!("STAGE {}", stage.index());
        for line in stage.to_string().lines() {
            println!("    {line}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Err(CliError::Usage(msg)) => {
            eprintln!("{USAGE}\n\nerror: {msg}");
            ExitCode::from(2)
        }
        Err(CliError::Design(e)) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_to_unit_cutoff() {
        let args = parse(&["4", "-r", "1000"]).unwrap();
        assert_eq!(args.order, 4);
        assert_eq!(args.fc, UNIT_CUTOFF_HZ);
        assert_eq!(args.res, Some(1000.0));
        assert_eq!(args.cap, None);
        assert!(!args.print_schematic);
    }

    #[test]
    fn long_flags_and_inline_values() {
        let args = parse(&["--fc=1000", "--cap", "1e-9", "-p", "6"]).unwrap();
        assert_eq!(args.order, 6);
        assert_eq!(args.fc, 1000.0);
        assert_eq!(args.cap, Some(1e-9));
        assert!(args.print_schematic);
    }

    #[test]
    fn missing_order_is_usage_error() {
        assert!(matches!(parse(&["-r", "1"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn bad_number_is_usage_error() {
        assert!(matches!(parse(&["4", "-r", "ten"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["4", "-f"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn reference_rules_reach_design_errors() {
        let both = parse(&["4", "-r", "1", "-c", "1"]).unwrap();
        assert!(matches!(run(both), Err(CliError::Design(DesignError::ConflictingReference))));
        let neither = parse(&["4"]).unwrap();
        assert!(matches!(run(neither), Err(CliError::Design(DesignError::MissingReference))));
        let odd = parse(&["3", "-r", "1"]).unwrap();
        assert!(matches!(run(odd), Err(CliError::Design(DesignError::InvalidOrder))));
    }
}
