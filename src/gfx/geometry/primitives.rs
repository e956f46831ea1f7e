//! # Primitive Shape Generation
//!
//! Y-up meshes with outward normals and UV coordinates.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a UV sphere centered at the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `sectors` - Number of vertical slices (longitude lines), at least 3
/// * `stacks` - Number of horizontal bands (latitude lines), at least 2
pub fn generate_sphere(radius: f32, sectors: u32, stacks: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let sectors = sectors.max(3);
    let stacks = stacks.max(2);

    for stack in 0..=stacks {
        let theta = stack as f32 * PI / stacks as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for sector in 0..=sectors {
            let phi = sector as f32 * 2.0 * PI / sectors as f32; // 0 to 2*PI
            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            data.vertices.push([x * radius, y * radius, z * radius]);
            data.normals.push([x, y, z]);
            data.tex_coords
                .push([sector as f32 / sectors as f32, stack as f32 / stacks as f32]);
        }
    }

    for stack in 0..stacks {
        for sector in 0..sectors {
            let first = stack * (sectors + 1) + sector;
            let second = first + sectors + 1;

            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a plane in the XZ plane with its normal along +Y
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `width_segments` - Subdivisions along X
/// * `depth_segments` - Subdivisions along Z
pub fn generate_plane(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let d_segs = depth_segments.max(1);

    for row in 0..=d_segs {
        let v = row as f32 / d_segs as f32;
        let pos_z = (v - 0.5) * depth;

        for col in 0..=w_segs {
            let u = col as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, 0.0, pos_z]);
            data.normals.push([0.0, 1.0, 0.0]);
            data.tex_coords.push([u, v]);
        }
    }

    // Counter-clockwise when viewed from +Y
    for row in 0..d_segs {
        for col in 0..w_segs {
            let i = row * (w_segs + 1) + col;
            let next_row = i + w_segs + 1;

            data.indices.extend_from_slice(&[i, next_row, i + 1]);
            data.indices.extend_from_slice(&[next_row, next_row + 1, i + 1]);
        }
    }

    data
}
