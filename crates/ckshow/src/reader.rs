//! Checkpoint reading.
//!
//! The tool only needs a read-only view of a checkpoint: the tensors it
//! declares and its string metadata. [`CheckpointReader`] is the seam between
//! the commands and whatever decodes the file; [`SafetensorsReader`] delegates
//! the decoding to the `safetensors` crate.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use safetensors::tensor::Metadata;
use serde::Serialize;

/// Magic bytes at the start of every GGUF file.
const GGUF_MAGIC: &[u8] = b"GGUF";

/// Size of the little-endian header length that opens a safetensors file.
const LENGTH_PREFIX: u64 = 8;

/// Largest JSON header accepted, the same limit the `safetensors` crate uses.
const MAX_HEADER_SIZE: usize = 100_000_000;

/// Why a checkpoint could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The path does not exist or cannot be opened.
    #[error("File not found.")]
    FileNotFound,

    /// The file is not a checkpoint this tool understands.
    #[error("This is probably not a valid .safetensors or .gguf file.")]
    InvalidFormat,

    /// The file uses a format version this tool does not support.
    #[error("The file may be from an older or newer version of the format that this tool does not support.")]
    UnsupportedVersion,

    /// The declared header size is out of bounds.
    #[error("The file header may be corrupted, incomplete, or have other issues that prevent it from being read correctly.")]
    HeaderTooLarge,

    /// The file could not be loaded into memory.
    #[error("There may not be enough memory available to read this file, or it is corrupted in a way that prevents allocation of enough memory.")]
    MemoryAllocationFailed,

    /// The file ends before all declared data.
    #[error("The file is missing some required data, which may indicate corruption or have other issues that prevent it from being read correctly.")]
    MissingData,
}

impl ReadError {
    fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => ReadError::FileNotFound,
            io::ErrorKind::OutOfMemory => ReadError::MemoryAllocationFailed,
            io::ErrorKind::UnexpectedEof => ReadError::MissingData,
            _ => ReadError::InvalidFormat,
        }
    }

    fn from_header(err: &serde_json::Error) -> Self {
        match err.io_error_kind() {
            Some(kind) => ReadError::from_io(&io::Error::from(kind)),
            None => ReadError::InvalidFormat,
        }
    }
}

/// A tensor declared by a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TensorInfo {
    pub name: String,
    pub dtype: String,
    pub shape: Vec<usize>,
}

impl TensorInfo {
    pub fn new(name: impl Into<String>, dtype: impl Into<String>, shape: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            dtype: dtype.into(),
            shape,
        }
    }

    /// Shape as `[a,b,c]`.
    pub fn shape_bracketed(&self) -> String {
        format!("[{}]", self.shape_joined(","))
    }

    /// Shape dimensions joined by `separator` (e.g. `320x4x3x3`).
    pub fn shape_joined(&self, separator: &str) -> String {
        self.shape
            .iter()
            .map(|dim| dim.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Read-only view of a checkpoint: tensors sorted by name plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TensorMap {
    tensors: Vec<TensorInfo>,
    metadata: BTreeMap<String, String>,
}

impl TensorMap {
    pub fn new(mut tensors: Vec<TensorInfo>, metadata: BTreeMap<String, String>) -> Self {
        tensors.sort_by(|a, b| a.name.cmp(&b.name));
        Self { tensors, metadata }
    }

    /// All tensors, sorted by name.
    pub fn tensors(&self) -> &[TensorInfo] {
        &self.tensors
    }

    /// Tensors whose name starts with `prefix`.
    pub fn tensors_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a TensorInfo> + 'a {
        self.tensors
            .iter()
            .filter(move |tensor| tensor.name.starts_with(prefix))
    }

    /// Metadata entries, sorted by key.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Something that turns a file path into a [`TensorMap`].
pub trait CheckpointReader {
    fn read(&self, path: &Path) -> Result<TensorMap, ReadError>;
}

/// Reads `.safetensors` files through the `safetensors` crate.
///
/// Only the length prefix and the JSON header are read; tensor data is never
/// loaded, so listing a multi-gigabyte checkpoint costs the size of its
/// header. GGUF files are recognized by their magic bytes and rejected with
/// [`ReadError::UnsupportedVersion`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SafetensorsReader;

impl CheckpointReader for SafetensorsReader {
    fn read(&self, path: &Path) -> Result<TensorMap, ReadError> {
        log::debug!("reading checkpoint {}", path.display());
        let io_error = |err: io::Error| {
            log::debug!("cannot read {}: {}", path.display(), err);
            ReadError::from_io(&err)
        };

        let mut file = File::open(path).map_err(io_error)?;
        let file_len = file.metadata().map_err(io_error)?.len();

        let mut prefix = Vec::with_capacity(LENGTH_PREFIX as usize);
        file.by_ref()
            .take(LENGTH_PREFIX)
            .read_to_end(&mut prefix)
            .map_err(io_error)?;
        if prefix.starts_with(GGUF_MAGIC) {
            log::debug!("{} is a GGUF file", path.display());
            return Err(ReadError::UnsupportedVersion);
        }
        let header_len = parse_header_len(&prefix)?;
        log::debug!("header of {} bytes", header_len);

        let mut header = Vec::with_capacity(header_len);
        file.by_ref()
            .take(header_len as u64)
            .read_to_end(&mut header)
            .map_err(io_error)?;
        if header.len() < header_len {
            return Err(ReadError::MissingData);
        }

        let metadata: Metadata = serde_json::from_slice(&header).map_err(|err| {
            log::debug!("invalid safetensors header in {}: {}", path.display(), err);
            ReadError::from_header(&err)
        })?;

        let data_len = data_len(&metadata)?;
        let expected = (LENGTH_PREFIX + header_len as u64).checked_add(data_len);
        if expected != Some(file_len) {
            log::debug!("{} has {} bytes, header declares {:?}", path.display(), file_len, expected);
            return Err(ReadError::MissingData);
        }

        let tensors = metadata
            .tensors()
            .into_iter()
            .map(|(name, info)| TensorInfo::new(name, format!("{:?}", info.dtype), info.shape.clone()))
            .collect();
        let entries = metadata
            .metadata()
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect();

        Ok(TensorMap::new(tensors, entries))
    }
}

/// Decodes the 8-byte little-endian header length.
fn parse_header_len(prefix: &[u8]) -> Result<usize, ReadError> {
    let bytes: [u8; 8] = prefix.try_into().map_err(|_| ReadError::MissingData)?;
    let len = usize::try_from(u64::from_le_bytes(bytes)).map_err(|_| ReadError::HeaderTooLarge)?;
    if len > MAX_HEADER_SIZE {
        return Err(ReadError::HeaderTooLarge);
    }
    Ok(len)
}

/// Checks that the tensors tile the data section and returns its length.
///
/// Tensors must be laid out back to back from offset 0, each spanning exactly
/// `elements * dtype size` bytes.
fn data_len(metadata: &Metadata) -> Result<u64, ReadError> {
    let mut infos: Vec<_> = metadata.tensors().into_values().collect();
    infos.sort_by_key(|info| info.data_offsets);

    let mut end = 0usize;
    for info in infos {
        let (begin, stop) = info.data_offsets;
        if begin != end || stop < begin {
            return Err(ReadError::InvalidFormat);
        }
        let bytes = info
            .shape
            .iter()
            .try_fold(info.dtype.size(), |acc, &dim| acc.checked_mul(dim))
            .ok_or(ReadError::InvalidFormat)?;
        if stop - begin != bytes {
            return Err(ReadError::InvalidFormat);
        }
        end = stop;
    }
    Ok(end as u64)
}
