use crate::config::{ChildSpacing, Config, load_config};
use crate::forest::build_forest_with;
use crate::layout::compute_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump, write_layout_dump_to};
use crate::parser::parse_records;
use crate::validate::validate_records;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "otl", version, about = "Lay out parent/child records as rooted trees")]
pub struct Args {
    /// Input file (JSON/JSON5 records) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the JSON layout. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (nodeWidth, nodeHeight, horizontalSpacing, ...)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Node width
    #[arg(short = 'w', long = "nodeWidth")]
    pub node_width: Option<f32>,

    /// Node height
    #[arg(short = 'H', long = "nodeHeight")]
    pub node_height: Option<f32>,

    /// Gap between sibling subtrees and between root trees
    #[arg(long = "horizontalSpacing")]
    pub horizontal_spacing: Option<f32>,

    /// Distance between levels
    #[arg(long = "verticalSpacing")]
    pub vertical_spacing: Option<f32>,

    /// Space children by their measured subtree width instead of fixed slots
    #[arg(long = "measured")]
    pub measured: bool,

    /// Fail on duplicate ids, unknown parents and cycles
    #[arg(long = "strict")]
    pub strict: bool,

    /// Only validate the records; print one issue per line
    #[arg(long = "check")]
    pub check: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = apply_args(load_config(args.config.as_deref())?, &args);

    let input = read_input(args.input.as_deref())?;
    let records = parse_records(&input)?;

    if args.check {
        let issues = validate_records(&records);
        for issue in &issues {
            println!("{issue}");
        }
        if !issues.is_empty() {
            return Err(anyhow::anyhow!("{} issue(s) found", issues.len()));
        }
        return Ok(());
    }

    let mut forest = build_forest_with(&records, &config.assembly)?;
    compute_layout(&mut forest, &config.layout);
    info!(
        records = records.len(),
        roots = forest.roots().len(),
        "laid out forest"
    );

    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &forest, &config.layout)?,
        None => {
            let dump = LayoutDump::from_forest(&forest, &config.layout);
            let mut stdout = io::stdout().lock();
            write_layout_dump_to(&mut stdout, &dump)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(v) = args.node_width {
        config.layout.node_width = v;
    }
    if let Some(v) = args.node_height {
        config.layout.node_height = v;
    }
    if let Some(v) = args.horizontal_spacing {
        config.layout.horizontal_spacing = v;
    }
    if let Some(v) = args.vertical_spacing {
        config.layout.vertical_spacing = v;
    }
    if args.measured {
        config.layout.child_spacing = ChildSpacing::Measured;
    }
    if args.strict {
        config.assembly.strict = true;
    }
    config
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_file() {
        let args = Args::parse_from([
            "otl",
            "--nodeWidth",
            "120",
            "--verticalSpacing",
            "60",
            "--measured",
            "--strict",
        ]);
        let config = apply_args(Config::default(), &args);
        assert_eq!(config.layout.node_width, 120.0);
        assert_eq!(config.layout.node_height, 80.0);
        assert_eq!(config.layout.vertical_spacing, 60.0);
        assert_eq!(config.layout.child_spacing, ChildSpacing::Measured);
        assert!(config.assembly.strict);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let args = Args::parse_from(["otl", "-i", "org.json"]);
        let config = apply_args(Config::default(), &args);
        assert_eq!(config.layout.horizontal_spacing, 50.0);
        assert_eq!(config.layout.child_spacing, ChildSpacing::Slot);
        assert!(!config.assembly.strict);
        assert_eq!(args.input.as_deref(), Some(Path::new("org.json")));
    }
}
