use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use dromb_cli::commands;
use dromb_cli::demo;
use dromb_cli::util::load_or_default;
use dromb_containers::config::{DemoConfig, Section};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DROMB_LOG", "error"))
        .init();

    let matches = Command::new("dromb")
        .version(clap::crate_version!())
        .about("Console driver for the dromb vector, matrix and rhombus types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the operator walkthrough")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON demo configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("section")
                        .short('s')
                        .long("section")
                        .help(
                            "Run only this section; repeat to run several. \
                             Overrides the sections listed in the configuration file.",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("vector")
                .about("Read vector elements from stdin, one per line, and print the result")
                .arg(
                    Arg::new("len")
                        .short('n')
                        .long("len")
                        .help("Number of elements")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("fill")
                        .short('f')
                        .long("fill")
                        .help("Initial value of every element")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("rhombus")
                .about("Describe rhombuses given as 'd1,d2,color'")
                .arg(
                    Arg::new("rhombus")
                        .help("Rhombus in 'd1,d2,color' form")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("matrix")
                .about("Print a filled matrix")
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .short('c')
                        .long("cols")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("fill")
                        .short('f')
                        .long("fill")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("config").about("Print the default demo configuration as JSON"))
        .get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match matches.subcommand() {
        Some(("demo", sub_m)) => handle_demo(sub_m, &mut out),
        Some(("vector", sub_m)) => {
            let len = *sub_m.get_one::<usize>("len").unwrap_or(&1);
            let fill = *sub_m.get_one::<u64>("fill").unwrap_or(&0);
            let stdin = io::stdin();
            commands::read_vector(len, fill, &mut stdin.lock(), &mut out)
        }
        Some(("rhombus", sub_m)) => {
            let entries: Vec<String> = sub_m
                .get_many::<String>("rhombus")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            commands::describe_rhombuses(&entries, &mut out)
        }
        Some(("matrix", sub_m)) => {
            let rows = *sub_m.get_one::<usize>("rows").unwrap_or(&1);
            let cols = *sub_m.get_one::<usize>("cols").unwrap_or(&1);
            let fill = *sub_m.get_one::<u64>("fill").unwrap_or(&0);
            commands::print_matrix(rows, cols, fill, &mut out)
        }
        Some(("config", _)) => {
            let json = serde_json::to_string_pretty(&DemoConfig::default())?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    out.flush()?;
    if let Err(e) = result {
        log::error!("[dromb] Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn handle_demo<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    let mut config = load_or_default(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    if let Some(names) = matches.get_many::<String>("section") {
        config.sections = names
            .map(|name| name.parse::<Section>().map_err(anyhow::Error::msg))
            .collect::<Result<Vec<_>>>()?;
    }

    demo::run(&config, out)
}
