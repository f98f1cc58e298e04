//! The listings `ckshow` can print.
//!
//! Every command writes to a generic sink and takes the palette explicitly,
//! so the exact output can be checked in tests with
//! [`Palette::disabled`](cktools_render::Palette::disabled).

use std::collections::BTreeMap;
use std::io::Write;

use cktools_render::{truncate_end, Align, Palette, StyleName, Table};

use crate::error::CkShowError;
use crate::output::Format;
use crate::reader::{TensorInfo, TensorMap};

/// Metadata values longer than this are cut and marked with `...`.
pub const METADATA_MAX_WIDTH: usize = 50;

const ELLIPSIS: &str = "...";

/// safetensors metadata only holds strings.
const STRING_TYPE_LABEL: &str = " str ";

// --- tensors ---

/// Lists the tensors whose name starts with `prefix` in the given format.
///
/// `depth` only affects the human format.
pub fn list_tensors<W: Write + ?Sized>(
    map: &TensorMap,
    format: Format,
    prefix: &str,
    depth: usize,
    palette: &Palette,
    out: &mut W,
) -> Result<(), CkShowError> {
    let tensors: Vec<&TensorInfo> = map.tensors_with_prefix(prefix).collect();
    log::debug!("listing {} tensors as {:?}", tensors.len(), format);
    match format {
        Format::Human => list_tensors_human(&tensors, depth, palette, out),
        Format::Basic => list_tensors_basic(&tensors, out),
        Format::Json => list_tensors_json(&tensors, out),
    }
}

/// Aligned `[shape, dtype, name]` table, optionally grouped by name prefix.
pub fn list_tensors_human<W: Write + ?Sized>(
    tensors: &[&TensorInfo],
    depth: usize,
    palette: &Palette,
    out: &mut W,
) -> Result<(), CkShowError> {
    let palette = *palette;
    let mut table = Table::new();
    table.set_alignments([Align::Right, Align::Right, Align::Left]);
    table.set_colorizer(move |column, text| match column {
        0 => palette.paint(StyleName::Data, text),
        1 => palette.paint(StyleName::Data2, text),
        _ => palette.paint(StyleName::Primary, text),
    });
    table.reserve(tensors.len());

    let mut tree = TensorTree::default();
    for &tensor in tensors {
        tree.insert(tensor, depth);
    }
    tree.fold_single_tensor_children();
    tree.add_rows(&mut table, "");

    table.write_to(out)?;
    Ok(())
}

/// CSV with a `name,shape,dtype` header; shapes are written as `AxBxC`.
pub fn list_tensors_basic<W: Write + ?Sized>(
    tensors: &[&TensorInfo],
    out: &mut W,
) -> Result<(), CkShowError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["name", "shape", "dtype"])?;
    for tensor in tensors {
        writer.write_record([
            tensor.name.as_str(),
            tensor.shape_joined("x").as_str(),
            tensor.dtype.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON array of `{name, dtype, shape}` objects.
pub fn list_tensors_json<W: Write + ?Sized>(
    tensors: &[&TensorInfo],
    out: &mut W,
) -> Result<(), CkShowError> {
    serde_json::to_writer_pretty(&mut *out, tensors)?;
    writeln!(out)?;
    Ok(())
}

/// Tensors arranged by the dot-separated components of their names.
///
/// A tensor sits in the node named by its first `depth` components, or by
/// all but its last one when the name is shorter. Each node keeps the rest of
/// the name for its own tensors.
#[derive(Debug, Default)]
struct TensorTree<'a> {
    tensors: Vec<(String, &'a TensorInfo)>,
    children: BTreeMap<&'a str, TensorTree<'a>>,
}

impl<'a> TensorTree<'a> {
    fn insert(&mut self, tensor: &'a TensorInfo, depth: usize) {
        let levels = depth.min(tensor.name.matches('.').count());
        let mut parts = tensor.name.splitn(levels + 1, '.');

        let mut node = self;
        for segment in parts.by_ref().take(levels) {
            node = node.children.entry(segment).or_default();
        }
        let rest = parts.next().unwrap_or_default();
        node.tensors.push((rest.to_string(), tensor));
    }

    /// Moves the tensor of every leaf node holding exactly one into its
    /// parent, bottom-up.
    fn fold_single_tensor_children(&mut self) {
        let mut folded = Vec::new();
        self.children.retain(|segment, child| {
            child.fold_single_tensor_children();
            if child.children.is_empty() && child.tensors.len() == 1 {
                let (rest, tensor) = child.tensors.remove(0);
                folded.push((format!("{}.{}", segment, rest), tensor));
                false
            } else {
                true
            }
        });
        self.tensors.extend(folded);
        self.tensors.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    }

    /// Own tensors first, then each child under a `["", "", path]` row.
    fn add_rows(&self, table: &mut Table<'_>, path: &str) {
        for (rest, tensor) in &self.tensors {
            let name = if path.is_empty() {
                rest.clone()
            } else {
                format!("{}|{}", path, rest)
            };
            table.add_row([tensor.shape_bracketed(), tensor.dtype.clone(), name]);
        }
        for (segment, child) in &self.children {
            let child_path = if path.is_empty() {
                segment.to_string()
            } else {
                format!("{}.{}", path, segment)
            };
            table.add_row(["", "", child_path.as_str()]);
            child.add_rows(table, &child_path);
        }
    }
}

// --- metadata ---

/// Lists every metadata entry in the given format.
pub fn list_metadata<W: Write + ?Sized>(
    map: &TensorMap,
    format: Format,
    palette: &Palette,
    out: &mut W,
) -> Result<(), CkShowError> {
    log::debug!("listing {} metadata entries as {:?}", map.metadata().len(), format);
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, map.metadata())?;
            writeln!(out)?;
        }
        Format::Basic => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["key", "value"])?;
            for (key, value) in map.metadata() {
                writer.write_record([key, value])?;
            }
            writer.flush()?;
        }
        Format::Human => {
            let palette = *palette;
            let mut table = Table::new();
            table.set_colorizer(move |column, text| match column {
                0 => palette.paint(StyleName::Data2, text),
                1 => palette.paint(StyleName::Primary, text),
                _ => palette.paint(StyleName::Data, text),
            });
            for (key, value) in map.metadata() {
                table.add_row([
                    STRING_TYPE_LABEL.to_string(),
                    format!("{}:", key),
                    shorten_value(value),
                ]);
            }
            table.write_to(out)?;
        }
    }
    Ok(())
}

/// Prints the raw value of one metadata entry.
pub fn print_metadata<W: Write + ?Sized>(
    map: &TensorMap,
    key: &str,
    format: Format,
    out: &mut W,
) -> Result<(), CkShowError> {
    let value = map
        .metadata_value(key)
        .ok_or_else(|| CkShowError::MissingMetadata(key.to_string()))?;
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, value)?;
            writeln!(out)?;
        }
        Format::Human | Format::Basic => writeln!(out, "{}", value)?,
    }
    Ok(())
}

/// Cuts long values and flattens line breaks and tabs into spaces.
fn shorten_value(value: &str) -> String {
    truncate_end(value, METADATA_MAX_WIDTH, ELLIPSIS).replace(['\n', '\r', '\t'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tensor(name: &str) -> TensorInfo {
        TensorInfo::new(name, "F32", vec![2])
    }

    fn tree<'a>(tensors: &'a [TensorInfo], depth: usize) -> TensorTree<'a> {
        let mut tree = TensorTree::default();
        for tensor in tensors {
            tree.insert(tensor, depth);
        }
        tree.fold_single_tensor_children();
        tree
    }

    fn rests<'a>(node: &'a TensorTree<'_>) -> Vec<&'a str> {
        node.tensors.iter().map(|(rest, _)| rest.as_str()).collect()
    }

    #[test]
    fn test_insert_stops_at_depth() {
        let all = [tensor("a.b.c.w"), tensor("a.b.c.v")];
        let root = tree(&all, 2);
        let ab = &root.children["a"].children["b"];
        assert!(ab.children.is_empty());
        assert_eq!(rests(ab), vec!["c.v", "c.w"]);
    }

    #[test]
    fn test_short_names_stay_above_depth() {
        let all = [tensor("a.x"), tensor("a.y"), tensor("c")];
        let root = tree(&all, 3);
        assert_eq!(rests(&root), vec!["c"]);
        assert_eq!(rests(&root.children["a"]), vec!["x", "y"]);
    }

    #[test]
    fn test_single_tensor_children_are_folded() {
        let all = [tensor("a.x"), tensor("a.y"), tensor("b.z"), tensor("c")];
        let root = tree(&all, 1);
        assert_eq!(rests(&root), vec!["b.z", "c"]);
        assert_eq!(root.children.len(), 1);
        assert_eq!(rests(&root.children["a"]), vec!["x", "y"]);
    }

    #[test]
    fn test_folding_works_bottom_up() {
        let all = [tensor("a.b.c.w"), tensor("a.b.d.w"), tensor("a.e.w")];
        let root = tree(&all, 2);
        let a = &root.children["a"];
        assert_eq!(rests(a), vec!["e.w"]);
        assert_eq!(rests(&a.children["b"]), vec!["c.w", "d.w"]);

        let lone = [tensor("x.y.z")];
        let root = tree(&lone, 2);
        assert!(root.children.is_empty());
        assert_eq!(rests(&root), vec!["x.y.z"]);
    }

    #[test]
    fn test_depth_zero_keeps_everything_flat() {
        let all = [tensor("a.x"), tensor("a.y")];
        let root = tree(&all, 0);
        assert_eq!(rests(&root), vec!["a.x", "a.y"]);
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_shorten_value() {
        assert_eq!(shorten_value("line\none\ttab\r"), "line one tab ");

        let long = "x".repeat(60);
        let short = shorten_value(&long);
        assert_eq!(short.len(), METADATA_MAX_WIDTH);
        assert!(short.ends_with("..."));
        assert_eq!(&short[..47], &long[..47]);

        let exact = "y".repeat(METADATA_MAX_WIDTH);
        assert_eq!(shorten_value(&exact), exact);
    }

    #[test]
    fn test_print_metadata_missing_key() {
        let map = TensorMap::default();
        let mut out = Vec::new();
        let err = print_metadata(&map, "title", Format::Human, &mut out).unwrap_err();
        assert!(matches!(err, CkShowError::MissingMetadata(key) if key == "title"));
        assert!(out.is_empty());
    }
}
