//! Mesh representation for 3D models
//!
//! Pure CPU-side geometry: vertices, triangle indices and, for procedurally
//! generated shapes, the parameters they were generated from.

use std::f32::consts::TAU;

use crate::foundation::math::Vec3;

/// 3D vertex data structure
///
/// Represents a single vertex with position, normal, and texture coordinate data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Parameters of a procedurally generated mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Y-up cone centred on the origin, apex at `+height / 2`
    Cone {
        /// Radius of the base ring
        radius: f32,
        /// Distance from base to apex
        height: f32,
        /// Number of segments around the circumference
        radial_segments: u32,
    },
}

/// Axis-aligned bounds of a mesh in its local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Bounds {
    /// Size along each axis
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest bounds containing both `self` and `other`
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

/// Triangle mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Triangle indices, three per face
    pub indices: Vec<u32>,

    /// Generator parameters, `None` for imported geometry
    pub primitive: Option<Primitive>,
}

impl Mesh {
    /// Create a new mesh from imported vertex and index data
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            primitive: None,
        }
    }

    /// Build a mesh from the flat position/normal arrays an OBJ parser produces
    ///
    /// Missing or mismatched normals are replaced with averaged face normals.
    pub fn from_flat(
        positions: &[f32],
        normals: &[f32],
        tex_coords: &[f32],
        indices: Vec<u32>,
    ) -> Self {
        let normals = if !normals.is_empty() && normals.len() == positions.len() {
            normals.to_vec()
        } else {
            Self::calculate_face_normals(positions, &indices)
        };

        let vertices = (0..positions.len() / 3)
            .map(|i| {
                let tex_coord = if tex_coords.len() >= (i + 1) * 2 {
                    [tex_coords[i * 2], tex_coords[i * 2 + 1]]
                } else {
                    [0.0, 0.0]
                };
                Vertex::new(
                    [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]],
                    [normals[i * 3], normals[i * 3 + 1], normals[i * 3 + 2]],
                    tex_coord,
                )
            })
            .collect();

        Self::new(vertices, indices)
    }

    /// Generate a cone with its base ring at `-height / 2` and apex at `+height / 2`
    ///
    /// The side has one apex vertex per segment so each face gets its own
    /// normal; the base is closed with a fan around a centre vertex.
    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        let segments = radial_segments.max(3);
        let half_height = height * 0.5;
        let slope = radius / height;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        // Side: ring vertices at the base, one apex per segment
        for i in 0..=segments {
            let u = i as f32 / segments as f32;
            let angle = u * TAU;
            let (sin_a, cos_a) = angle.sin_cos();
            let normal = Vec3::new(sin_a, slope, cos_a).normalize();

            vertices.push(Vertex::new(
                [radius * sin_a, -half_height, radius * cos_a],
                normal.into(),
                [u, 1.0],
            ));
            vertices.push(Vertex::new([0.0, half_height, 0.0], normal.into(), [u, 0.0]));
        }

        for i in 0..segments {
            let base = i * 2;
            let apex = base + 1;
            let next_base = base + 2;
            indices.extend_from_slice(&[apex, base, next_base]);
        }

        // Base cap
        let center = vertices.len() as u32;
        vertices.push(Vertex::new([0.0, -half_height, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]));
        let ring_start = vertices.len() as u32;
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin_a, cos_a) = angle.sin_cos();
            vertices.push(Vertex::new(
                [radius * sin_a, -half_height, radius * cos_a],
                [0.0, -1.0, 0.0],
                [sin_a * 0.5 + 0.5, cos_a * 0.5 + 0.5],
            ));
        }
        for i in 0..segments {
            indices.extend_from_slice(&[center, ring_start + i + 1, ring_start + i]);
        }

        Self {
            vertices,
            indices,
            primitive: Some(Primitive::Cone {
                radius,
                height,
                radial_segments: segments,
            }),
        }
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space bounds, `None` for an empty mesh
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?;
        let start = Bounds {
            min: Vec3::from(first.position),
            max: Vec3::from(first.position),
        };
        Some(self.vertices.iter().fold(start, |acc, v| {
            let p = Vec3::from(v.position);
            Bounds {
                min: acc.min.inf(&p),
                max: acc.max.sup(&p),
            }
        }))
    }

    /// Average face normals per vertex for meshes that ship without normals
    pub fn calculate_face_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
        let vertex_count = positions.len() / 3;
        let mut accumulated = vec![Vec3::zeros(); vertex_count];
        let at = |i: usize| Vec3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]);

        for triangle in indices.chunks_exact(3) {
            let [i0, i1, i2] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
            if i0.max(i1).max(i2) >= vertex_count {
                continue;
            }
            let face_normal = (at(i1) - at(i0)).cross(&(at(i2) - at(i0)));
            for idx in [i0, i1, i2] {
                accumulated[idx] += face_normal;
            }
        }

        accumulated
            .into_iter()
            .flat_map(|n| {
                let n = n.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::y);
                [n.x, n.y, n.z]
            })
            .collect()
    }
}
