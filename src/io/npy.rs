//! Reader for NumPy `.npy` arrays holding one motion sequence each.
//!
//! Supported: format versions 1.0-3.0, 2-D shapes, C or Fortran order,
//! integer and float dtypes of either byte order. Values are widened to f64
//! and must be finite.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MetricFtError, Result};

pub const MAGIC: [u8; 6] = *b"\x93NUMPY";
const HEADER_ALIGN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Float,
    Int,
    Uint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dtype {
    order: ByteOrder,
    kind: Kind,
    size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NpyHeader {
    dtype: Dtype,
    fortran_order: bool,
    shape: Vec<usize>,
}

/// Rectangular `frames x metrics` matrix, stored row-major.
#[derive(Debug, Clone)]
pub struct MetricMatrix {
    pub path: PathBuf,
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>,
}

impl MetricMatrix {
    pub fn from_rows(
        path: impl Into<PathBuf>,
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    ) -> Result<Self> {
        let path = path.into();
        if Some(data.len()) != rows.checked_mul(cols) {
            return Err(MetricFtError::malformed(
                path,
                format!(
                    "shape ({}, {}) does not match {} values",
                    rows,
                    cols,
                    data.len()
                ),
            ));
        }
        Ok(Self {
            path,
            rows,
            cols,
            data,
        })
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> Result<Vec<f64>> {
        if col >= self.cols {
            return Err(MetricFtError::malformed(
                &self.path,
                format!("column {} out of range ({} columns)", col, self.cols),
            ));
        }
        Ok((0..self.rows).map(|r| self.data[r * self.cols + col]).collect())
    }

    pub fn require_columns(&self, min_cols: usize) -> Result<()> {
        if self.cols < min_cols {
            return Err(MetricFtError::malformed(
                &self.path,
                format!("expected at least {} columns, found {}", min_cols, self.cols),
            ));
        }
        Ok(())
    }
}

pub fn read_matrix(path: &Path) -> Result<MetricMatrix> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MetricFtError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => MetricFtError::malformed(path, format!("unreadable: {}", e)),
    })?;
    parse_matrix(path, &bytes)
}

pub fn parse_matrix(path: &Path, bytes: &[u8]) -> Result<MetricMatrix> {
    let malformed = |reason: String| MetricFtError::malformed(path, reason);

    if bytes.len() < 10 || bytes[..6] != MAGIC {
        return Err(malformed("missing NPY magic".to_string()));
    }
    let major = bytes[6];
    let (header_len, header_start) = match major {
        1 => (u16::from_le_bytes([bytes[8], bytes[9]]) as usize, 10),
        2 | 3 => {
            if bytes.len() < 12 {
                return Err(malformed("truncated NPY preamble".to_string()));
            }
            let len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
            (len as usize, 12)
        }
        other => {
            return Err(malformed(format!(
                "unsupported NPY version {}.{}",
                other, bytes[7]
            )));
        }
    };
    let data_start = header_start + header_len;
    if bytes.len() < data_start {
        return Err(malformed("truncated NPY header".to_string()));
    }
    let header_text = std::str::from_utf8(&bytes[header_start..data_start])
        .map_err(|_| malformed("NPY header is not valid text".to_string()))?;
    let header = parse_header(header_text).map_err(malformed)?;

    let &[rows, cols] = header.shape.as_slice() else {
        return Err(malformed(format!(
            "expected a 2-D array, found shape {:?}",
            header.shape
        )));
    };

    let count = rows
        .checked_mul(cols)
        .ok_or_else(|| malformed(format!("shape ({}, {}) is too large", rows, cols)))?;
    let payload = &bytes[data_start..];
    let needed = count.saturating_mul(header.dtype.size);
    if payload.len() < needed {
        return Err(malformed(format!(
            "truncated data: need {} bytes, have {}",
            needed,
            payload.len()
        )));
    }

    let mut values = Vec::with_capacity(count);
    for (i, chunk) in payload[..needed].chunks_exact(header.dtype.size).enumerate() {
        let v = decode(header.dtype, chunk);
        if !v.is_finite() {
            return Err(malformed(format!("non-finite value at flat index {}", i)));
        }
        values.push(v);
    }

    let data = if header.fortran_order {
        let mut row_major = vec![0.0; count];
        for c in 0..cols {
            for r in 0..rows {
                row_major[r * cols + c] = values[c * rows + r];
            }
        }
        row_major
    } else {
        values
    };

    MetricMatrix::from_rows(path, rows, cols, data)
}

/// Writes a little-endian f64, C-order, version 1.0 array.
pub fn write_matrix<W: Write>(
    mut w: W,
    rows: usize,
    cols: usize,
    data: &[f64],
) -> std::io::Result<()> {
    if data.len() != rows * cols {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "data length does not match shape",
        ));
    }
    let mut header = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': ({}, {}), }}",
        rows, cols
    );
    let unpadded = MAGIC.len() + 4 + header.len() + 1;
    let pad = (HEADER_ALIGN - unpadded % HEADER_ALIGN) % HEADER_ALIGN;
    header.push_str(&" ".repeat(pad));
    header.push('\n');

    w.write_all(&MAGIC)?;
    w.write_all(&[1, 0])?;
    w.write_all(&(header.len() as u16).to_le_bytes())?;
    w.write_all(header.as_bytes())?;
    for v in data {
        w.write_all(&v.to_le_bytes())?;
    }
    Ok(())
}

fn parse_header(text: &str) -> std::result::Result<NpyHeader, String> {
    let descr = dict_value(text, "descr").ok_or("NPY header missing 'descr'")?;
    let descr = descr.trim_matches(|c| c == '\'' || c == '"');
    let dtype = parse_dtype(descr)?;

    let fortran_order = match dict_value(text, "fortran_order") {
        Some("True") => true,
        Some("False") => false,
        Some(other) => return Err(format!("invalid fortran_order '{}'", other)),
        None => return Err("NPY header missing 'fortran_order'".to_string()),
    };

    let shape_text = dict_value(text, "shape").ok_or("NPY header missing 'shape'")?;
    let inner = shape_text
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("invalid shape '{}'", shape_text))?;
    let shape = inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("invalid shape dimension '{}'", s))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(NpyHeader {
        dtype,
        fortran_order,
        shape,
    })
}

/// Raw text of a value in the header's dict literal.
fn dict_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let quoted = [format!("'{}'", key), format!("\"{}\"", key)];
    let pos = quoted
        .iter()
        .find_map(|k| text.find(k.as_str()).map(|p| p + k.len()))?;
    let rest = text[pos..].trim_start().strip_prefix(':')?.trim_start();

    let end = if rest.starts_with('(') {
        rest.find(')')? + 1
    } else if let Some(quote) = rest.chars().next().filter(|c| *c == '\'' || *c == '"') {
        rest[1..].find(quote)? + 2
    } else {
        rest.find([',', '}']).unwrap_or(rest.len())
    };
    Some(rest[..end].trim())
}

fn parse_dtype(descr: &str) -> std::result::Result<Dtype, String> {
    let mut chars = descr.chars();
    let order = match chars.next() {
        Some('<') | Some('|') | Some('=') => ByteOrder::Little,
        Some('>') => ByteOrder::Big,
        _ => return Err(format!("unsupported dtype '{}'", descr)),
    };
    let kind = match chars.next() {
        Some('f') => Kind::Float,
        Some('i') => Kind::Int,
        Some('u') => Kind::Uint,
        _ => return Err(format!("unsupported dtype '{}'", descr)),
    };
    let size: usize = chars
        .as_str()
        .parse()
        .map_err(|_| format!("unsupported dtype '{}'", descr))?;
    let supported = match kind {
        Kind::Float => matches!(size, 4 | 8),
        Kind::Int | Kind::Uint => matches!(size, 1 | 2 | 4 | 8),
    };
    if !supported {
        return Err(format!("unsupported dtype '{}'", descr));
    }
    Ok(Dtype { order, kind, size })
}

fn decode(dtype: Dtype, chunk: &[u8]) -> f64 {
    macro_rules! read {
        ($t:ty, $n:literal) => {{
            let mut buf = [0u8; $n];
            buf.copy_from_slice(chunk);
            match dtype.order {
                ByteOrder::Little => <$t>::from_le_bytes(buf),
                ByteOrder::Big => <$t>::from_be_bytes(buf),
            }
        }};
    }
    match (dtype.kind, dtype.size) {
        (Kind::Float, 4) => read!(f32, 4) as f64,
        (Kind::Float, _) => read!(f64, 8),
        (Kind::Int, 1) => read!(i8, 1) as f64,
        (Kind::Int, 2) => read!(i16, 2) as f64,
        (Kind::Int, 4) => read!(i32, 4) as f64,
        (Kind::Int, _) => read!(i64, 8) as f64,
        (Kind::Uint, 1) => read!(u8, 1) as f64,
        (Kind::Uint, 2) => read!(u16, 2) as f64,
        (Kind::Uint, 4) => read!(u32, 4) as f64,
        (Kind::Uint, _) => read!(u64, 8) as f64,
    }
}
