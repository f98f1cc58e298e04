//! Running a parsed `ckshow` invocation.

use std::io::Write;

use cktools_render::{messages, Palette};

use crate::args::{CkShowArgs, Command, HELP};
use crate::commands;
use crate::error::CkShowError;
use crate::output::{Format, TerminalProbe};
use crate::reader::CheckpointReader;

/// One `ckshow` invocation.
#[derive(Debug, Clone)]
pub struct CkShow {
    args: CkShowArgs,
}

impl CkShow {
    pub fn new(args: CkShowArgs) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &CkShowArgs {
        &self.args
    }

    /// Whether output should be colored, given where stdout goes.
    pub fn colors_wanted(&self, probe: &dyn TerminalProbe) -> bool {
        self.args.color.use_colors(probe)
    }

    /// Prints help or version, or reads the checkpoint and prints the
    /// requested listing to `out`.
    pub fn run<R, W>(&self, reader: &R, palette: &Palette, out: &mut W) -> Result<(), CkShowError>
    where
        R: CheckpointReader + ?Sized,
        W: Write + ?Sized,
    {
        let args = &self.args;

        if args.help {
            writeln!(out, "{}", HELP)?;
            return Ok(());
        }
        if args.version {
            writeln!(out, "ckshow (CheckpointTools ckshow) {}", env!("CARGO_PKG_VERSION"))?;
            return Ok(());
        }

        let filename = args.filename.as_deref().ok_or(CkShowError::NoFile)?;
        if args.depth > 0 && args.format != Format::Human {
            messages::warning(palette, "--depth only applies to the human format, ignoring it.");
        }
        let map = reader.read(filename)?;
        log::debug!(
            "{}: {} tensors, {} metadata entries",
            filename.display(),
            map.tensors().len(),
            map.metadata().len()
        );

        // --name is a lookup on its own, with or without --metadata
        match (args.name.as_deref(), args.command) {
            (Some(key), _) => commands::print_metadata(&map, key, args.format, out),
            (None, Command::ListMetadata) => commands::list_metadata(&map, args.format, palette, out),
            (None, Command::ListTensors) => {
                commands::list_tensors(&map, args.format, &args.prefix, args.depth, palette, out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::Path;

    use crate::reader::{ReadError, TensorInfo, TensorMap};

    struct FixedReader(Result<TensorMap, ReadError>);

    impl CheckpointReader for FixedReader {
        fn read(&self, _path: &Path) -> Result<TensorMap, ReadError> {
            self.0.clone()
        }
    }

    fn run(argv: &[&str], reader: &FixedReader) -> Result<String, CkShowError> {
        let mut full = vec!["ckshow"];
        full.extend_from_slice(argv);
        let app = CkShow::new(CkShowArgs::parse(&full)?);
        let mut out = Vec::new();
        app.run(reader, &Palette::disabled(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn sample_reader() -> FixedReader {
        let mut metadata = BTreeMap::new();
        metadata.insert("title".to_string(), "Tiny".to_string());
        FixedReader(Ok(TensorMap::new(
            vec![TensorInfo::new("w", "F16", vec![2, 2])],
            metadata,
        )))
    }

    #[test]
    fn test_help_wins_over_missing_file() {
        let output = run(&["--help"], &sample_reader()).unwrap();
        assert!(output.contains("Usage: ckshow [OPTIONS] file"));
    }

    #[test]
    fn test_version() {
        let output = run(&["--version"], &sample_reader()).unwrap();
        assert_eq!(
            output,
            format!("ckshow (CheckpointTools ckshow) {}\n", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_no_file() {
        assert!(matches!(run(&[], &sample_reader()), Err(CkShowError::NoFile)));
    }

    #[test]
    fn test_read_error_propagates() {
        let reader = FixedReader(Err(ReadError::InvalidFormat));
        assert!(matches!(
            run(&["x.safetensors"], &reader),
            Err(CkShowError::Read(ReadError::InvalidFormat))
        ));
    }

    #[test]
    fn test_dispatch_by_command() {
        let reader = sample_reader();
        assert_eq!(run(&["f"], &reader).unwrap(), "[2,2] F16 w\n");
        assert_eq!(run(&["-m", "f"], &reader).unwrap(), " str  title: Tiny\n");
        assert_eq!(run(&["-m", "-n", "title", "f"], &reader).unwrap(), "Tiny\n");
        assert_eq!(run(&["--name=title", "f"], &reader).unwrap(), "Tiny\n");
    }
}
