//! CLI entry point for the `ppc-cpulist` binary.

use std::env;
use std::ffi::OsString;

use cpulist::{render_info, render_list, render_sprs};
use ppc_catalog::catalog;

const USAGE_TEXT: &str = "\
Usage: ppc-cpulist <command> [arguments]

Commands:
  list          List every model and alias, sorted by PVR
  sprs <model>  Dump the registered SPRs of one model
  info <model>  Show one model's family descriptor

A model is selected by name, alias or eight-hex-digit PVR.

Examples:
  ppc-cpulist list
  ppc-cpulist sprs 7450_v2.0
  ppc-cpulist info 0x00080200
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Sprs(String),
    Info(String),
}

#[derive(Debug)]
enum ParseResult {
    Command(Command),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let command_str = first.to_string_lossy().to_string();

    let command = match command_str.as_str() {
        "list" => {
            if let Some(extra) = args.next() {
                return Err(format!(
                    "unexpected argument: {}",
                    extra.to_string_lossy()
                ));
            }
            Command::List
        }
        "sprs" => Command::Sprs(parse_model_arg(args)?),
        "info" => Command::Info(parse_model_arg(args)?),
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(ParseResult::Command(command))
}

fn parse_model_arg(mut args: impl Iterator<Item = OsString>) -> Result<String, String> {
    let token = args.next().ok_or_else(|| "missing model".to_string())?;

    if token == "--help" || token == "-h" {
        return Err(USAGE_TEXT.to_string());
    }

    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument: {}", extra.to_string_lossy()));
    }

    Ok(token.to_string_lossy().to_string())
}

fn run(command: Command) -> Result<(), i32> {
    match command {
        Command::List => {
            print!("{}", render_list());
            Ok(())
        }
        Command::Sprs(token) => {
            let model = resolve_or_report(&token)?;
            match render_sprs(model) {
                Ok(dump) => {
                    print!("{dump}");
                    Ok(())
                }
                Err(defect) => {
                    eprintln!("error: {defect}");
                    Err(1)
                }
            }
        }
        Command::Info(token) => {
            let model = resolve_or_report(&token)?;
            match render_info(model) {
                Ok(info) => {
                    print!("{info}");
                    Ok(())
                }
                Err(defect) => {
                    eprintln!("error: {defect}");
                    Err(1)
                }
            }
        }
    }
}

fn resolve_or_report(token: &str) -> Result<&'static ppc_catalog::Model, i32> {
    catalog::resolve(token).ok_or_else(|| {
        eprintln!("error: unknown model: {token}");
        1
    })
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(command)) => match run(command) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            if error.starts_with("Usage:") {
                println!("{error}");
                0
            } else {
                eprintln!("error: {error}");
                eprintln!("{USAGE_TEXT}");
                2
            }
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(tokens: &[&str]) -> Result<ParseResult, String> {
        parse_args(tokens.iter().map(OsString::from))
    }

    #[test]
    fn parses_the_three_commands() {
        assert!(matches!(
            parse(&["list"]),
            Ok(ParseResult::Command(Command::List))
        ));
        match parse(&["sprs", "604"]) {
            Ok(ParseResult::Command(Command::Sprs(token))) => assert_eq!(token, "604"),
            other => panic!("unexpected parse: {other:?}"),
        }
        match parse(&["info", "0x00080200"]) {
            Ok(ParseResult::Command(Command::Info(token))) => {
                assert_eq!(token, "0x00080200");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["sprs"]).is_err());
        assert!(parse(&["list", "604"]).is_err());
        assert!(parse(&["info", "604", "605"]).is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(matches!(parse(&["--help"]), Ok(ParseResult::Help)));
        assert!(matches!(parse(&["-h"]), Ok(ParseResult::Help)));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let err = parse(&["frobnicate"]).unwrap_err();
        assert!(err.contains("unknown command"));
    }
}
