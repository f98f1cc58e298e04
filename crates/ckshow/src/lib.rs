//! # ckshow - Inspect Checkpoint Files
//!
//! `ckshow` lists the tensors and metadata stored in a model checkpoint:
//!
//! ```text
//! $ ckshow --depth 1 model.safetensors
//!          [] F32 logit_scale
//!                 conv_in
//!       [320] F32 conv_in|bias
//! [320,4,3,3] F16 conv_in|weight
//! ```
//!
//! The binary is a thin shell over this library:
//!
//! - [`args`]: the command line, parsed with `cktools-args`
//! - [`reader`]: the [`CheckpointReader`] seam and its safetensors
//!   implementation
//! - [`commands`]: the listings, written to any `io::Write`
//! - [`app`]: [`CkShow::run`], which ties them together
//!
//! Output goes through a [`Palette`](cktools_render::Palette) passed in by
//! the caller, so the whole run can be exercised in tests without a terminal.

pub mod app;
pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod reader;

pub use app::CkShow;
pub use args::{CkShowArgs, Command};
pub use error::CkShowError;
pub use output::{ColorWhen, Format, StdoutProbe, TerminalProbe};
pub use reader::{CheckpointReader, ReadError, SafetensorsReader, TensorInfo, TensorMap};
