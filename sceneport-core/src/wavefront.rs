//! Wavefront OBJ output for a single object's geometry.
//!
//! Writes positions, UVs and normals with the engine axis convention
//! (forward = -Z, up = +Y) applied, triangulates every face, and emits no
//! material statements; materials travel in their own descriptor files.

use crate::convert;
use crate::scene::{Corner, MeshData};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `mesh` as a triangulated OBJ file at `path`.
pub fn write(mesh: &MeshData, object_name: &str, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# {}", object_name)?;
    writeln!(out, "o {}", object_name)?;

    for position in &mesh.positions {
        let p = convert::to_engine(*position);
        writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {:.6} {:.6}", uv[0], uv[1])?;
    }
    for normal in &mesh.normals {
        let n = convert::to_engine(*normal);
        writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    }

    for face in &mesh.faces {
        // Fan triangulation around the first corner
        for i in 1..face.corners.len().saturating_sub(1) {
            writeln!(
                out,
                "f {} {} {}",
                corner_ref(&face.corners[0]),
                corner_ref(&face.corners[i]),
                corner_ref(&face.corners[i + 1]),
            )?;
        }
    }

    out.flush()
}

/// OBJ `v/vt/vn` reference for one corner, 1-based
fn corner_ref(corner: &Corner) -> String {
    let v = corner.position + 1;
    match (corner.uv, corner.normal) {
        (Some(vt), Some(vn)) => format!("{}/{}/{}", v, vt + 1, vn + 1),
        (Some(vt), None) => format!("{}/{}", v, vt + 1),
        (None, Some(vn)) => format!("{}//{}", v, vn + 1),
        (None, None) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Face;
    use glam::Vec3;
    use tempfile::TempDir;

    fn quad() -> MeshData {
        MeshData {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vec3::new(0.0, 0.0, 1.0)],
            uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            faces: vec![Face {
                corners: (0..4)
                    .map(|i| Corner {
                        position: i,
                        uv: Some(i),
                        normal: Some(0),
                    })
                    .collect(),
            }],
        }
    }

    fn write_to_string(mesh: &MeshData) -> String {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mesh.obj");
        write(mesh, "Quad", &path).expect("write obj");
        std::fs::read_to_string(&path).expect("read obj")
    }

    #[test]
    fn applies_axis_conversion_to_positions_and_normals() {
        let contents = write_to_string(&quad());

        // (0, 1, 0) -> (0, 0, -1)
        assert!(contents.contains("v 0.000000 0.000000 -1.000000"));
        // +Z normal becomes +Y up
        assert!(contents.contains("vn 0.000000 1.000000 -0.000000"));
    }

    #[test]
    fn triangulates_quads_into_two_fan_triangles() {
        let contents = write_to_string(&quad());

        let faces: Vec<&str> = contents
            .lines()
            .filter(|l| l.starts_with("f "))
            .collect();
        assert_eq!(faces, ["f 1/1/1 2/2/1 3/3/1", "f 1/1/1 3/3/1 4/4/1"]);
    }

    #[test]
    fn keeps_uvs_unconverted() {
        let contents = write_to_string(&quad());
        assert!(contents.contains("vt 1.000000 1.000000"));
    }

    #[test]
    fn corner_refs_match_available_attributes() {
        let full = Corner { position: 0, uv: Some(2), normal: Some(4) };
        assert_eq!(corner_ref(&full), "1/3/5");

        let no_uv = Corner { position: 1, uv: None, normal: Some(0) };
        assert_eq!(corner_ref(&no_uv), "2//1");

        let bare = Corner { position: 7, uv: None, normal: None };
        assert_eq!(corner_ref(&bare), "8");
    }
}
