use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::input::reader::{for_each_line, is_gz};

/// A per-gene coexpression file. `gene` is the file name with any `.gz` suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneFile {
    pub gene: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct CoexprEntry<'a> {
    pub line_no: usize,
    pub partner: &'a str,
    pub value: &'a str,
}

/// Lists regular files in `dir`, sorted by file name so that runs are reproducible
/// regardless of the platform's directory order.
pub fn list_gene_files(dir: &Path) -> Result<Vec<GeneFile>, InputError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(InputError::io(dir))? {
        let entry = entry.map_err(InputError::io(dir))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(InputError::io(&path))?;
        if file_type.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %path.display(), "skipping non-UTF-8 file name");
            continue;
        };
        let gene = if is_gz(&path) {
            name.strip_suffix(".gz").unwrap_or(&name).to_string()
        } else {
            name
        };
        files.push(GeneFile { gene, path });
    }
    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(files)
}

/// Streams `partner \t value` lines. Lines that do not split into exactly two
/// fields are rejected; the value is left unparsed so callers can skip it cheaply.
pub fn for_each_entry<F>(path: &Path, mut f: F) -> Result<(), InputError>
where
    F: FnMut(CoexprEntry<'_>) -> Result<(), InputError>,
{
    for_each_line(path, |line_no, line| {
        let mut fields = line.split('\t');
        let (Some(partner), Some(value), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(InputError::format(
                path,
                line_no,
                "expected `gene<TAB>value`",
            ));
        };
        if partner.is_empty() {
            return Err(InputError::format(path, line_no, "empty partner gene"));
        }
        f(CoexprEntry {
            line_no,
            partner,
            value,
        })
    })
}

pub fn parse_value(path: &Path, line_no: usize, raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::format(path, line_no, format!("invalid value `{raw}`")))?;
    if !value.is_finite() {
        return Err(InputError::format(
            path,
            line_no,
            format!("non-finite value `{raw}`"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/coexpr.rs"]
mod tests;
