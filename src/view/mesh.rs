use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::model::{ObstacleTrack, LANE_COUNT};

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

const LANE_COLORS: [[f32; 4]; 2] = [[0.15, 0.15, 0.22, 1.0], [0.22, 0.22, 0.32, 1.0]];
const OBSTACLE_COLOR: [f32; 4] = [0.95, 0.35, 0.25, 1.0];

/// Floor sits just below the camera so the lanes read as a road.
const FLOOR_Y: f32 = -0.5;

/// Empty corridor drawn behind the start and past the last obstacle.
const CORRIDOR_MARGIN: f32 = 20.0;

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Append a quad given its corners in counter-clockwise order.
    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(corners.iter().map(|&pos| Vertex { pos, normal, color }));
        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Append an axis-aligned cube centered at `center`.
    pub fn push_cube(&mut self, center: [f32; 3], half: f32, color: [f32; 4]) {
        let [cx, cy, cz] = center;
        let (x0, x1) = (cx - half, cx + half);
        let (y0, y1) = (cy - half, cy + half);
        let (z0, z1) = (cz - half, cz + half);

        self.push_quad([[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]], [0.0, 0.0, 1.0], color);
        self.push_quad([[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]], [0.0, 0.0, -1.0], color);
        self.push_quad([[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]], [1.0, 0.0, 0.0], color);
        self.push_quad([[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]], [-1.0, 0.0, 0.0], color);
        self.push_quad([[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]], [0.0, 1.0, 0.0], color);
        self.push_quad([[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]], [0.0, -1.0, 0.0], color);
    }

    pub fn upload(&self, device: &wgpu::Device) -> MeshBuffer {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: self.indices.len() as u32,
        }
    }
}

/// Build the static corridor: one floor strip per lane plus a cube per
/// obstacle. Lane offsets map directly to world x.
pub fn build_corridor_mesh(track: &ObstacleTrack, start_z: f32) -> Mesh {
    let mut mesh = Mesh::default();

    let last_z = track.obstacles().last().map_or(start_z, |o| o.forward_distance);
    let near = start_z + CORRIDOR_MARGIN;
    let far = last_z - CORRIDOR_MARGIN;

    let half_lanes = LANE_COUNT / 2;
    for (i, lane) in (-half_lanes..=half_lanes).enumerate() {
        let x0 = lane as f32 - 0.5;
        let x1 = lane as f32 + 0.5;
        mesh.push_quad(
            [[x0, FLOOR_Y, near], [x1, FLOOR_Y, near], [x1, FLOOR_Y, far], [x0, FLOOR_Y, far]],
            [0.0, 1.0, 0.0],
            LANE_COLORS[i % LANE_COLORS.len()],
        );
    }

    for obstacle in track.obstacles() {
        mesh.push_cube(
            [obstacle.lane as f32, FLOOR_Y + obstacle.half_width, obstacle.forward_distance],
            obstacle.half_width,
            OBSTACLE_COLOR,
        );
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Obstacle;

    #[test]
    fn test_corridor_mesh_counts() {
        let track = ObstacleTrack::from_obstacles(vec![
            Obstacle { lane: -2, forward_distance: -16.0, half_width: 0.5 },
            Obstacle { lane: 1, forward_distance: -24.0, half_width: 0.5 },
        ]);
        let mesh = build_corridor_mesh(&track, 3.0);
        // five floor quads, six faces per cube
        let quads = 5 + 2 * 6;
        assert_eq!(mesh.vertices.len(), quads * 4);
        assert_eq!(mesh.indices.len(), quads * 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_obstacle_cube_sits_in_its_lane() {
        let track = ObstacleTrack::from_obstacles(vec![Obstacle { lane: 2, forward_distance: -8.0, half_width: 0.5 }]);
        let mesh = build_corridor_mesh(&track, 3.0);
        let cube = &mesh.vertices[5 * 4..];
        assert!(cube.iter().all(|v| (1.5..=2.5).contains(&v.pos[0])));
        assert!(cube.iter().all(|v| (-8.5..=-7.5).contains(&v.pos[2])));
        assert!(!mesh.is_empty());
    }
}
