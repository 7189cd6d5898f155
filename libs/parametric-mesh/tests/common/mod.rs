//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use parametric_mesh::Mesh;

/// A parsed OBJ document with 1-based indices exactly as written.
#[derive(Debug, Default)]
pub struct ParsedObj {
    pub vertices: Vec<[f64; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub faces: Vec<[(usize, Option<usize>); 3]>,
}

/// Parses the subset of OBJ the exporter writes (`v`, `vn`, `f`).
pub fn parse_obj(text: &str) -> ParsedObj {
    let mut obj = ParsedObj::default();
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => obj.vertices.push(parse_vector(parts)),
            Some("vn") => obj.normals.push(parse_vector(parts)),
            Some("f") => {
                let corners: Vec<_> = parts.map(parse_corner).collect();
                assert_eq!(corners.len(), 3, "face is not a triangle: {line}");
                obj.faces.push([corners[0], corners[1], corners[2]]);
            }
            other => panic!("unexpected line {other:?}: {line}"),
        }
    }
    obj
}

fn parse_vector<'a>(parts: impl Iterator<Item = &'a str>) -> [f64; 3] {
    let values: Vec<f64> = parts.map(|p| p.parse().unwrap()).collect();
    assert_eq!(values.len(), 3);
    [values[0], values[1], values[2]]
}

fn parse_corner(corner: &str) -> (usize, Option<usize>) {
    match corner.split_once("//") {
        Some((v, n)) => (v.parse().unwrap(), Some(n.parse().unwrap())),
        None => (corner.parse().unwrap(), None),
    }
}

/// Asserts that every directed edge occurs once and its reverse occurs too,
/// so each undirected edge is shared by exactly two consistently wound
/// triangles.
pub fn assert_closed_and_oriented(mesh: &Mesh) {
    let mut directed = HashSet::new();
    for face in mesh.faces() {
        let [a, b, c] = face.vertices;
        for edge in [(a, b), (b, c), (c, a)] {
            assert!(directed.insert(edge), "directed edge {edge:?} used twice");
        }
    }
    for &(a, b) in &directed {
        assert!(directed.contains(&(b, a)), "edge ({a}, {b}) has no twin");
    }
}
