//! # ckshow - Main Entry Point
//!
//! Parses the command line, decides on colors once, and hands the rest to
//! [`CkShow::run`]. Failures are reported through
//! [`messages::fatal`], which exits with the error's code.

use std::io::{self, Write};

use ckshow::{CkShow, CkShowArgs, CkShowError, SafetensorsReader, StdoutProbe};
use cktools_render::{messages, palette, Palette};

fn main() {
    env_logger::init();

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let args = match CkShowArgs::parse(&argv) {
        Ok(args) => args,
        Err(err) => {
            // honor --nc and --color even though the rest did not parse
            let color = CkShowArgs::scan_color(&argv);
            palette::install(Palette::with_colors(color.use_colors(&StdoutProbe)));
            fail(CkShowError::from(err))
        }
    };

    let app = CkShow::new(args);
    if !palette::install(Palette::with_colors(app.colors_wanted(&StdoutProbe))) {
        log::debug!("palette already installed");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = app
        .run(&SafetensorsReader, palette::get(), &mut out)
        .and_then(|()| out.flush().map_err(CkShowError::from));

    if let Err(err) = result {
        if err.is_broken_pipe() {
            log::debug!("stdout closed early");
            return;
        }
        fail(err);
    }
}

fn fail(err: CkShowError) -> ! {
    log::debug!("{:?}", err);
    messages::fatal(palette::get(), &err.to_string(), &err.hints(), err.exit_code())
}
