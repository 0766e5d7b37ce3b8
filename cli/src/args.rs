use clap::{Args, Parser, Subcommand, ValueEnum};
use shared::models::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webutil", about = "Locale-aware value conversion and file cleanup")]
pub struct Cli {
    /// JSON config file; the embedded defaults are used when absent
    #[arg(long, global = true, env = "WEBUTIL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a value in one locale and print it in another
    Convert(ConvertArgs),
    /// Remove files (directories are refused)
    Remove(RemoveArgs),
    /// Remove folders with everything in them
    RemoveFolder(RemoveArgs),
    /// Print the local path a file: URL points to
    UrlPath { url: String },
}

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    #[arg(long = "type", value_enum)]
    pub value_type: ValueType,

    /// Locale the value is written in
    #[arg(long)]
    pub from: Option<Locale>,

    /// Locale to print the value in
    #[arg(long)]
    pub to: Option<Locale>,

    pub value: String,
}

#[derive(Args, Clone, Debug)]
pub struct RemoveArgs {
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Char,
    Date,
    Time,
    Datetime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_command() {
        let cli = Cli::try_parse_from(["webutil", "convert", "--type", "float", "--from", "de_DE", "1.234,5"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.value_type, ValueType::Float);
                assert_eq!(args.from, Some(Locale::germany()));
                assert_eq!(args.to, None);
                assert_eq!(args.value, "1.234,5");
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_remove_requires_a_path() {
        assert!(Cli::try_parse_from(["webutil", "remove"]).is_err());
        let cli = Cli::try_parse_from(["webutil", "remove-folder", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::RemoveFolder(ref args) if args.paths.len() == 2));
    }

    #[test]
    fn test_bad_locale_rejected() {
        assert!(Cli::try_parse_from(["webutil", "convert", "--type", "int", "--to", "?", "1"]).is_err());
    }
}
