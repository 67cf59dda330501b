use clap::Parser;
use std::path::PathBuf;

/// Printed when more than two positional arguments are given; the run goes on
/// with the first two.
pub const USAGE_WARNING: &str =
    "\nToo many arguments provided.\n\nUsage: phlat_rs <target directory> <output directory>\n";

#[derive(Parser, Debug)]
#[command(name = "phlat_rs")]
#[command(about = "Flatten a directory tree, keeping one copy of each unique file", long_about = None)]
pub struct Cli {
    /// Directory tree to flatten
    pub source: PathBuf,

    /// Flat output directory (created if missing)
    pub output: PathBuf,

    /// Anything beyond the two directories, flags included, is ignored
    #[arg(
        hide = true,
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub extra: Vec<String>,
}

impl Cli {
    pub fn extra_args_warning(&self) -> Option<&'static str> {
        if self.extra.is_empty() {
            None
        } else {
            Some(USAGE_WARNING)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_arguments_parse_cleanly() {
        let cli = Cli::try_parse_from(["phlat_rs", "src", "out"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("src"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.extra_args_warning().is_none());
    }

    #[test]
    fn test_extra_arguments_warn_and_keep_first_two() {
        let cli = Cli::try_parse_from(["phlat_rs", "src", "out", "more", "-x", "--verbose"])
            .unwrap();
        assert_eq!(cli.source, PathBuf::from("src"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.extra, vec!["more", "-x", "--verbose"]);
        assert_eq!(cli.extra_args_warning(), Some(USAGE_WARNING));
    }

    #[test]
    fn test_leading_flag_extra_is_accepted() {
        let cli = Cli::try_parse_from(["phlat_rs", "src", "out", "-x"]).unwrap();
        assert_eq!(cli.extra, vec!["-x"]);
        assert!(cli.extra_args_warning().is_some());
    }

    #[test]
    fn test_missing_output_is_a_usage_error() {
        assert!(Cli::try_parse_from(["phlat_rs", "src"]).is_err());
    }
}
