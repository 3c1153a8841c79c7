use std::path::Path;

use motion_metric_ft::error::MetricFtError;
use motion_metric_ft::io::npy::{parse_matrix, read_matrix, write_matrix};
use tempfile::TempDir;

fn npy_v1(descr: &str, fortran: bool, shape: &str, payload: &[u8]) -> Vec<u8> {
    let mut header = format!(
        "{{'descr': '{}', 'fortran_order': {}, 'shape': {}, }}",
        descr,
        if fortran { "True" } else { "False" },
        shape
    );
    while (10 + header.len() + 1) % 64 != 0 {
        header.push(' ');
    }
    header.push('\n');
    let mut out = b"\x93NUMPY\x01\x00".to_vec();
    out.extend_from_slice(&(header.len() as u16).to_le_bytes());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(payload);
    out
}

fn reason(err: MetricFtError) -> String {
    match err {
        MetricFtError::MalformedArray { reason, .. } => reason,
        other => panic!("expected malformed array, got {other:?}"),
    }
}

#[test]
fn written_matrix_reads_back() {
    let data: Vec<f64> = (0..48).map(|i| i as f64 / 4.0).collect();
    let mut bytes = Vec::new();
    write_matrix(&mut bytes, 3, 16, &data).unwrap();
    assert_eq!((bytes.len() - 16 * 3 * 8) % 64, 0);

    let m = parse_matrix(Path::new("a.npy"), &bytes).unwrap();
    assert_eq!((m.rows, m.cols), (3, 16));
    assert_eq!(m.row(1)[0], 4.0);
    assert_eq!(m.column(2).unwrap(), vec![0.5, 4.5, 8.5]);
    m.require_columns(16).unwrap();
}

#[test]
fn fortran_order_is_transposed() {
    // Column-major 2x3: columns [1, 4], [2, 5], [3, 6].
    let payload: Vec<u8> = [1i32, 4, 2, 5, 3, 6]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let bytes = npy_v1("<i4", true, "(2, 3)", &payload);
    let m = parse_matrix(Path::new("f.npy"), &bytes).unwrap();
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn big_endian_floats_decoded() {
    let payload: Vec<u8> = [0.5f32, -1.25].iter().flat_map(|v| v.to_be_bytes()).collect();
    let bytes = npy_v1(">f4", false, "(1, 2)", &payload);
    let m = parse_matrix(Path::new("b.npy"), &bytes).unwrap();
    assert_eq!(m.row(0), &[0.5, -1.25]);
}

#[test]
fn version_two_header_supported() {
    let header = "{'descr': '|u1', 'fortran_order': False, 'shape': (2, 2), }\n";
    let mut bytes = b"\x93NUMPY\x02\x00".to_vec();
    bytes.extend_from_slice(&(header.len() as u32).to_le_bytes());
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(&[1, 2, 3, 250]);
    let m = parse_matrix(Path::new("v2.npy"), &bytes).unwrap();
    assert_eq!(m.column(1).unwrap(), vec![2.0, 250.0]);
}

#[test]
fn one_dimensional_array_rejected() {
    let payload: Vec<u8> = [1.0f64, 2.0].iter().flat_map(|v| v.to_le_bytes()).collect();
    let bytes = npy_v1("<f8", false, "(2,)", &payload);
    let err = parse_matrix(Path::new("x.npy"), &bytes).unwrap_err();
    assert!(reason(err).contains("2-D"));
}

#[test]
fn bad_magic_rejected() {
    let err = parse_matrix(Path::new("x.npy"), b"not an array at all").unwrap_err();
    assert!(reason(err).contains("magic"));
}

#[test]
fn truncated_payload_rejected() {
    let bytes = npy_v1("<f8", false, "(2, 2)", &[0u8; 16]);
    let err = parse_matrix(Path::new("x.npy"), &bytes).unwrap_err();
    assert!(reason(err).contains("truncated"));
}

#[test]
fn unsupported_dtype_rejected() {
    let bytes = npy_v1("<c16", false, "(1, 1)", &[0u8; 16]);
    let err = parse_matrix(Path::new("x.npy"), &bytes).unwrap_err();
    assert!(reason(err).contains("dtype"));
}

#[test]
fn non_finite_values_rejected() {
    let payload: Vec<u8> = [1.0f64, f64::NAN].iter().flat_map(|v| v.to_le_bytes()).collect();
    let bytes = npy_v1("<f8", false, "(1, 2)", &payload);
    let err = parse_matrix(Path::new("x.npy"), &bytes).unwrap_err();
    assert!(reason(err).contains("non-finite"));
}

#[test]
fn narrow_matrix_fails_column_check() {
    let mut bytes = Vec::new();
    write_matrix(&mut bytes, 2, 3, &[0.0; 6]).unwrap();
    let m = parse_matrix(Path::new("narrow.npy"), &bytes).unwrap();
    let err = m.require_columns(16).unwrap_err();
    assert!(err.to_string().contains("narrow.npy"));
    assert!(reason(err).contains("at least 16 columns"));
    assert!(m.column(3).is_err());
}

#[test]
fn missing_file_is_input_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = read_matrix(&tmp.path().join("absent.npy")).unwrap_err();
    assert!(matches!(err, MetricFtError::InputNotFound { .. }));
}
