use cheatsheet::{SheetError, SheetGenerator, parser, validation};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a cheat sheet PDF from a YAML hotkey definition file.
#[derive(Parser, Debug)]
#[command(name = "cheatsheet", version, about)]
struct Cli {
    /// YAML file containing the hotkey definitions
    #[arg(value_parser = existing_file)]
    yaml_file: PathBuf,

    /// Output PDF file path (default: the input path with a .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only validate the YAML file without generating a PDF
    #[arg(short, long)]
    validate: bool,

    /// Print the estimated number of pages and exit
    #[arg(short, long)]
    estimate_pages: bool,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File '{}' does not exist.", value))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, SheetError> {
    let errors = validation::validate_file(&cli.yaml_file);
    if !errors.is_empty() {
        eprintln!("YAML validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Ok(ExitCode::FAILURE);
    }

    if cli.validate {
        println!("✓ YAML file is valid");
        return Ok(ExitCode::SUCCESS);
    }

    let document = parser::parse_file(&cli.yaml_file)?;
    println!(
        "Parsed {} hotkeys from {}",
        document.entries().len(),
        cli.yaml_file.display()
    );

    let generator = SheetGenerator::new(document);
    let estimated = generator.estimate_pages();
    if cli.estimate_pages {
        println!("Estimated pages: {}", estimated);
        return Ok(ExitCode::SUCCESS);
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.yaml_file.with_extension("pdf"));
    generator.generate(&output)?;

    println!("✓ Generated cheat sheet: {}", output.display());
    println!("  - Title: {}", generator.document().title());
    println!("  - Hotkeys: {}", generator.document().entries().len());
    println!("  - Estimated pages: {}", estimated);
    Ok(ExitCode::SUCCESS)
}
