use glam::Vec3;

// Golden-ratio icosahedron, 12 corners and 20 faces (counter-clockwise outward).
const PHI: f32 = 1.618_034;

const CORNERS: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

pub const BASE_FACE_COUNT: usize = FACES.len();

/// Number of triangles an icosahedron of the given detail is made of.
#[inline]
pub fn triangle_count(detail: u32) -> usize {
    let segments = detail as usize + 1;
    BASE_FACE_COUNT * segments * segments
}

/// Triangles of a subdivided icosahedron projected onto a sphere of `radius`.
///
/// Every face is split into `(detail + 1)^2` smaller triangles by walking rows
/// from the first edge towards the opposite corner, the same lattice the
/// wireframe has always been drawn with.
pub fn icosphere_triangles(radius: f32, detail: u32) -> Vec<[Vec3; 3]> {
    let cols = detail as usize + 1;
    let mut out = Vec::with_capacity(triangle_count(detail));
    for face in FACES.iter() {
        let a = Vec3::from(CORNERS[face[0]]);
        let b = Vec3::from(CORNERS[face[1]]);
        let c = Vec3::from(CORNERS[face[2]]);

        let mut lattice: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            lattice.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [lattice[i][k + 1], lattice[i + 1][k], lattice[i][k]]
                } else {
                    [lattice[i][k + 1], lattice[i + 1][k + 1], lattice[i + 1][k]]
                };
                out.push(tri.map(|v| v.normalize_or_zero() * radius));
            }
        }
    }
    out
}

/// Line-list vertices (two per edge, three edges per triangle) for wireframe
/// drawing. Shared edges are emitted once per adjoining triangle.
pub fn wireframe_lines(radius: f32, detail: u32) -> Vec<[f32; 3]> {
    let triangles = icosphere_triangles(radius, detail);
    let mut lines = Vec::with_capacity(triangles.len() * 6);
    for [p0, p1, p2] in triangles {
        for (from, to) in [(p0, p1), (p1, p2), (p2, p0)] {
            lines.push(from.to_array());
            lines.push(to.to_array());
        }
    }
    lines
}
