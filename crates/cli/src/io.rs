//! JSON in/out for polygon rings and search results.
//!
//! Accepted ring documents:
//! - bare: `[[x, y], [x, y], ...]`
//! - wrapped: `{"ring": [[x, y], ...]}` (what `sample` and `hull` write)
//!
//! Point sets for `hull` are either bare pairs or `{"points": [[x, y], ...]}`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use polylabel::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RingDoc {
    Bare(Vec<[f64; 2]>),
    Wrapped { ring: Vec<[f64; 2]> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointsDoc {
    Bare(Vec<[f64; 2]>),
    Wrapped { points: Vec<[f64; 2]> },
}

/// Serialized ring (`{"ring": [[x, y], ...]}`).
#[derive(Serialize, Debug)]
pub struct RingOut {
    pub ring: Vec<[f64; 2]>,
}

impl RingOut {
    pub fn from_points(points: &[Vec2<f64>]) -> Self {
        Self {
            ring: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

/// Result row printed by `solve`.
#[derive(Serialize, Debug)]
pub struct SolveOut {
    pub point: [f64; 2],
    pub distance: Option<f64>,
    pub probes: usize,
}

pub fn parse_ring(text: &str) -> Result<Vec<Vec2<f64>>> {
    let doc: RingDoc = serde_json::from_str(text).context("parsing ring JSON")?;
    let pairs = match doc {
        RingDoc::Bare(v) => v,
        RingDoc::Wrapped { ring } => ring,
    };
    Ok(pairs.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

pub fn parse_points(text: &str) -> Result<Vec<Vec2<f64>>> {
    let doc: PointsDoc = serde_json::from_str(text).context("parsing points JSON")?;
    let pairs = match doc {
        PointsDoc::Bare(v) => v,
        PointsDoc::Wrapped { points } => points,
    };
    Ok(pairs.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

/// Read a ring from a file path, or from stdin when `input == "-"`.
pub fn read_ring(input: &str) -> Result<Vec<Vec2<f64>>> {
    parse_ring(&read_input(input)?)
}

/// Read a point set from a file path, or from stdin when `input == "-"`.
pub fn read_points(input: &str) -> Result<Vec<Vec2<f64>>> {
    parse_points(&read_input(input)?)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        read_all(std::io::stdin().lock()).context("reading stdin")
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn read_all<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Write pretty JSON to `out`, creating parent directories as needed.
pub fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_bare_and_wrapped_rings() {
        let bare = parse_ring("[[0, 0], [4, 0], [4, 3]]").unwrap();
        assert_eq!(bare.len(), 3);
        assert_eq!(bare[2], Vec2::new(4.0, 3.0));
        let wrapped = parse_ring(r#"{"ring": [[0.5, 1], [2, 2], [1, 3]]}"#).unwrap();
        assert_eq!(wrapped[0], Vec2::new(0.5, 1.0));
    }

    #[test]
    fn rejects_malformed_ring() {
        assert!(parse_ring("[[0, 0], [1]]").is_err());
        assert!(parse_ring(r#"{"points": []}"#).is_err());
    }

    #[test]
    fn ring_from_reader_matches_file_contents() {
        let text = read_all(std::io::Cursor::new(b"[[0, 0], [3, 0], [0, 3]]".to_vec())).unwrap();
        let ring = parse_ring(&text).unwrap();
        assert_eq!(ring[1], Vec2::new(3.0, 0.0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.json");
        fs::write(&path, &text).unwrap();
        assert_eq!(read_ring(&path.to_string_lossy()).unwrap(), ring);
        assert!(read_ring(&dir.path().join("missing.json").to_string_lossy()).is_err());
    }

    #[test]
    fn parses_bare_and_wrapped_point_sets() {
        let bare = parse_points("[[0, 0], [1, 2]]").unwrap();
        assert_eq!(bare, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0)]);
        let wrapped = parse_points(r#"{"points": [[5, 6]]}"#).unwrap();
        assert_eq!(wrapped, vec![Vec2::new(5.0, 6.0)]);
        assert!(parse_points(r#"{"ring": [[5, 6]]}"#).is_err());
    }

    #[test]
    fn ring_out_roundtrips_through_parser() {
        let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(1.5, 0.0), Vec2::new(0.0, 2.0)];
        let text = serde_json::to_string(&RingOut::from_points(&pts)).unwrap();
        assert_eq!(parse_ring(&text).unwrap(), pts);
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/deeper/pole.json");
        let row = SolveOut {
            point: [1.0, 2.0],
            distance: None,
            probes: 4,
        };
        write_json(&out, &row).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["probes"], 4);
        assert!(parsed["distance"].is_null());
    }
}
