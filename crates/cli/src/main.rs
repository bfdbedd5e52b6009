// tearsheet CLI - headless schema validation and tear geometry

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tearsheet_cli::exit_codes::{EXIT_INVALID, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};
use tearsheet_cli::report::ValidationReport;
use tearsheet_engine::labels::{column_label, parse_cell_ref};
use tearsheet_engine::{validate, ErrorIndex};
use tearsheet_geom::{clip_path_polygon, TearProfile};

#[derive(Parser)]
#[command(name = "tearsheet")]
#[command(about = "Schema-driven validation for tabular files (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a tabular file against a column schema
    #[command(after_help = "\
Examples:
  tearsheet validate people.csv --schema schema.json
  tearsheet validate export.txt --schema schema.json --delimiter ';'
  tearsheet validate people.csv --schema schema.json --json
  tearsheet validate people.csv --schema schema.json --cell B3

Exit codes: 0 clean, 2 usage error, 3 validation errors found, 4 parse error.")]
    Validate {
        /// Input file (CSV/TSV; delimiter is sniffed unless given)
        input: PathBuf,

        /// Schema file (JSON array of column rules)
        #[arg(long, short = 's')]
        schema: PathBuf,

        /// Field delimiter (default: sniffed from the first lines)
        #[arg(long, short = 'd')]
        delimiter: Option<char>,

        /// Emit a JSON report instead of per-error lines
        #[arg(long)]
        json: bool,

        /// Show at most N errors (the count still reports all of them)
        #[arg(long, value_name = "N")]
        max_errors: Option<usize>,

        /// Report only the error at one cell, A1-style (e.g. B3)
        #[arg(long, value_name = "REF")]
        cell: Option<String>,
    },

    /// Print generated column header labels
    #[command(after_help = "\
Examples:
  tearsheet headers --count 5      # A B C D E
  tearsheet headers --count 30     # ...Z AA AB AC AD")]
    Headers {
        /// Number of labels to print
        #[arg(long, default_value = "26")]
        count: usize,
    },

    /// Generate a tear profile and its two interlocking edges
    #[command(after_help = "\
Examples:
  tearsheet tear --points 16 --seed 42
  tearsheet tear --points 24 --css")]
    Tear {
        /// Number of segments along the tear
        #[arg(long, default_value = "16")]
        points: usize,

        /// Seed for reproducible output (omit for a random instance)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the edges as CSS clip-path polygons
        #[arg(long)]
        css: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Validate {
            input,
            schema,
            delimiter,
            json,
            max_errors,
            cell,
        } => cmd_validate(&input, &schema, delimiter, json, max_errors, cell.as_deref()),
        Commands::Headers { count } => cmd_headers(count),
        Commands::Tear { points, seed, css } => cmd_tear(points, seed, css),
    };

    ExitCode::from(code)
}

fn cmd_validate(
    input: &PathBuf,
    schema_path: &PathBuf,
    delimiter: Option<char>,
    json: bool,
    max_errors: Option<usize>,
    cell: Option<&str>,
) -> u8 {
    let rows = match delimiter {
        Some(d) => {
            if !d.is_ascii() {
                eprintln!("error: delimiter must be a single ASCII character");
                return EXIT_USAGE;
            }
            tearsheet_io::csv::import_with_delimiter(input, d as u8)
        }
        None => tearsheet_io::csv::import(input),
    };
    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("error: {}: {}", input.display(), e);
            return EXIT_PARSE;
        }
    };

    let schema = match tearsheet_io::schema_file::load(schema_path) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("error: {}: {}", schema_path.display(), e);
            return EXIT_PARSE;
        }
    };

    let errors = validate(&rows, &schema);

    // Single-cell query: index the errors and look up one address.
    if let Some(cell_text) = cell {
        let Some((row, col)) = parse_cell_ref(cell_text) else {
            eprintln!("error: '{}' is not a cell reference", cell_text);
            return EXIT_USAGE;
        };
        let index = ErrorIndex::build(errors);
        return match index.error_at(row, col) {
            Some(err) => {
                println!("{}", err);
                EXIT_INVALID
            }
            None => {
                println!("No error at {}.", cell_text.trim().to_uppercase());
                EXIT_SUCCESS
            }
        };
    }

    let report = ValidationReport::build(&errors, max_errors);
    if json {
        // Serialization of a plain struct cannot fail
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        for line in report.human_lines() {
            println!("{}", line);
        }
    }

    if report.ok {
        EXIT_SUCCESS
    } else {
        EXIT_INVALID
    }
}

fn cmd_headers(count: usize) -> u8 {
    let labels: Vec<String> = (0..count).map(column_label).collect();
    println!("{}", labels.join(" "));
    EXIT_SUCCESS
}

fn cmd_tear(points: usize, seed: Option<u64>, css: bool) -> u8 {
    let profile = TearProfile::generate(points, seed);

    if css {
        println!("top:    clip-path: {};", clip_path_polygon(&profile.top_edge()));
        println!("bottom: clip-path: {};", clip_path_polygon(&profile.bottom_edge()));
    } else {
        let out = serde_json::json!({
            "offsets": profile.offsets(),
            "top_edge": profile.top_edge(),
            "bottom_edge": profile.bottom_edge(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    }

    EXIT_SUCCESS
}
