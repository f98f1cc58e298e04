//! The `ckshow` command line.
//!
//! [`CkShowArgs::parse`] walks `argv` one slot at a time with
//! [`cktools_args::Argument`], so every option accepts both `--opt value`
//! and `--opt=value`, and a value attached to a flag that takes none is
//! rejected.

use std::path::PathBuf;

use cktools_args::{ArgError, Argument, Token};

use crate::output::{ColorWhen, Format};

pub const HELP: &str = r#"
Usage: ckshow [OPTIONS] file

  Shows the tensors and metadata stored in a checkpoint file.

  OPTIONS:
    -n, --name <NAME>      Show the value of the metadata entry with the given key. e.g. 'modelspec.title'
    -m, --metadata         Print metadata information related to the checkpoint file
    -p, --prefix <PREFIX>  Filter the tensor names by a prefix to display only matching tensors
    -d, --depth <DEPTH>    Group tensors by the first DEPTH components of their names

  Output formats:
    -u, --human            Output in a human-readable format with clear formatting (default)
    -b, --basic            Output in a plain, easily parseable format for scripts or tools
    -j, --json             Output data in JSON format

    --color <WHEN>         Colorize the output: auto, always or never (default: auto)
    --nc, --no-color       Disable color output.
    -h, --help             Show this help message and exit.
    -v, --version          Show version information and exit.

  Examples:
    ckshow --prefix model.diffusion_model. 'checkpoint.safetensors'
    ckshow --metadata --no-color 'checkpoint.safetensors'
"#;

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    ListTensors,
    ListMetadata,
}

/// Parsed `ckshow` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CkShowArgs {
    pub command: Command,
    /// The checkpoint to read.
    pub filename: Option<PathBuf>,
    /// Metadata key to print (`--name`).
    pub name: Option<String>,
    /// Only list tensors starting with this prefix.
    pub prefix: String,
    /// Group the tensor listing by this many name components (0 = flat).
    pub depth: usize,
    pub format: Format,
    pub color: ColorWhen,
    pub help: bool,
    pub version: bool,
}

impl CkShowArgs {
    /// Parses a full argument vector (program name at index 0).
    pub fn parse<S: AsRef<str>>(argv: &[S]) -> Result<Self, ArgError> {
        let mut args = CkShowArgs::default();

        let mut i = 1;
        while i < argv.len() {
            let mut arg = Argument::new(argv, i);
            log::trace!("argv[{}] = {:?}", i, arg.token());

            if arg.is_option() {
                args.apply_option(&mut arg, &mut i)?;
            } else if args.filename.is_none() {
                args.filename = Some(PathBuf::from(arg.name()));
            } else {
                return Err(ArgError::TooManyPositionals(arg.name().to_string()));
            }

            arg.ensure_consumed()?;
            i += 1;
        }

        log::debug!("{:?}", args);
        Ok(args)
    }

    /// Finds the color choice in `argv` without validating anything else.
    ///
    /// Used to color the error report when [`CkShowArgs::parse`] fails. The
    /// last valid choice wins; unknown `--color` values are skipped.
    pub fn scan_color<S: AsRef<str>>(argv: &[S]) -> ColorWhen {
        let mut color = ColorWhen::Auto;
        for i in 1..argv.len() {
            let token = Token::parse(argv, i);
            if token.is("--nc") || token.is("--no-color") {
                color = ColorWhen::Never;
            } else if token.is("--color") {
                let raw = token.raw_value();
                if let Some(when) = ColorWhen::parse(raw.strip_prefix('=').unwrap_or(raw)) {
                    color = when;
                }
            }
        }
        color
    }

    fn apply_option(&mut self, arg: &mut Argument<'_>, i: &mut usize) -> Result<(), ArgError> {
        if arg.is_any(&["-n", "--name"]) {
            self.name = Some(arg.require_value(i)?.to_string());
        } else if arg.is_any(&["-m", "--metadata"]) {
            self.command = Command::ListMetadata;
        } else if arg.is_any(&["-p", "--prefix"]) {
            self.prefix = arg.require_value(i)?.to_string();
        } else if arg.is_any(&["-d", "--depth"]) {
            let name = arg.name();
            let depth = arg.int_value(i)?;
            self.depth = usize::try_from(depth)
                .map_err(|_| ArgError::invalid_integer(name, depth.to_string()))?;
        } else if arg.is_any(&["-u", "--human"]) {
            self.format = Format::Human;
        } else if arg.is_any(&["-b", "--basic"]) {
            self.format = Format::Basic;
        } else if arg.is_any(&["-j", "--json"]) {
            self.format = Format::Json;
        } else if arg.is("--color") {
            let name = arg.name();
            let value = arg.require_value(i)?;
            self.color = ColorWhen::parse(value)
                .ok_or_else(|| ArgError::invalid_choice(name, value, ColorWhen::CHOICES))?;
        } else if arg.is_any(&["--nc", "--no-color"]) {
            self.color = ColorWhen::Never;
        } else if arg.is_any(&["-h", "--help"]) {
            self.help = true;
        } else if arg.is_any(&["-v", "--version"]) {
            self.version = true;
        } else {
            return Err(ArgError::unknown(arg.name()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<CkShowArgs, ArgError> {
        let mut full = vec!["ckshow"];
        full.extend_from_slice(argv);
        CkShowArgs::parse(&full)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, CkShowArgs::default());
        assert_eq!(args.command, Command::ListTensors);
        assert_eq!(args.format, Format::Human);
    }

    #[test]
    fn test_file_and_flags() {
        let args = parse(&["--metadata", "model.safetensors", "--json"]).unwrap();
        assert_eq!(args.command, Command::ListMetadata);
        assert_eq!(args.filename, Some(PathBuf::from("model.safetensors")));
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_value_forms() {
        let args = parse(&["-p", "model.", "--name=title", "file"]).unwrap();
        assert_eq!(args.prefix, "model.");
        assert_eq!(args.name.as_deref(), Some("title"));
        assert_eq!(args.filename, Some(PathBuf::from("file")));
    }

    #[test]
    fn test_depth() {
        assert_eq!(parse(&["--depth", "2"]).unwrap().depth, 2);
        assert_eq!(parse(&["-d=3"]).unwrap_err(), ArgError::unknown("-d=3"));
        assert_eq!(parse(&["--depth=3"]).unwrap().depth, 3);
        assert_eq!(
            parse(&["--depth", "x"]).unwrap_err(),
            ArgError::invalid_integer("--depth", "x")
        );
        assert_eq!(
            parse(&["--depth=-1"]).unwrap_err(),
            ArgError::invalid_integer("--depth", "-1")
        );
    }

    #[test]
    fn test_color_modes() {
        assert_eq!(parse(&["--color", "never"]).unwrap().color, ColorWhen::Never);
        assert_eq!(parse(&["--color=always"]).unwrap().color, ColorWhen::Always);
        assert_eq!(parse(&["--nc"]).unwrap().color, ColorWhen::Never);
        assert!(matches!(
            parse(&["--color", "blue"]),
            Err(ArgError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_scan_color_survives_bad_arguments() {
        let scan = |argv: &[&str]| {
            let mut full = vec!["ckshow"];
            full.extend_from_slice(argv);
            CkShowArgs::scan_color(&full)
        };
        assert_eq!(scan(&["--bogus", "--nc"]), ColorWhen::Never);
        assert_eq!(scan(&["--no-color", "a", "b"]), ColorWhen::Never);
        assert_eq!(scan(&["--depth", "x", "--color=never"]), ColorWhen::Never);
        assert_eq!(scan(&["--color", "never", "--name"]), ColorWhen::Never);
        assert_eq!(scan(&["--nc", "--color", "always", "--bogus"]), ColorWhen::Always);
        assert_eq!(scan(&["--color=purple", "--bogus"]), ColorWhen::Auto);
        assert_eq!(scan(&["--prefix", "--nc"]), ColorWhen::Never);
        assert_eq!(scan(&[]), ColorWhen::Auto);
    }

    #[test]
    fn test_value_on_flag_is_rejected() {
        assert_eq!(
            parse(&["--metadata=yes", "file"]).unwrap_err(),
            ArgError::UnexpectedValue("--metadata".to_string())
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["file", "--name"]).unwrap_err(),
            ArgError::MissingValue("--name".to_string())
        );
        assert_eq!(
            parse(&["--prefix", "--json", "file"]).unwrap_err(),
            ArgError::MissingValue("--prefix".to_string())
        );
    }

    #[test]
    fn test_unknown_option() {
        assert_eq!(parse(&["--bogus"]).unwrap_err(), ArgError::unknown("--bogus"));
    }

    #[test]
    fn test_too_many_files() {
        assert_eq!(
            parse(&["a.safetensors", "b.safetensors"]).unwrap_err(),
            ArgError::TooManyPositionals("b.safetensors".to_string())
        );
    }

    #[test]
    fn test_help_and_version() {
        let args = parse(&["-h", "-v"]).unwrap();
        assert!(args.help);
        assert!(args.version);
    }
}
