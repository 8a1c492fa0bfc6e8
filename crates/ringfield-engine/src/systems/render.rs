use crate::components::mesh::{Color, Material, Mesh};
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Pack one mesh into its wire form.
pub fn mesh_instance(mesh: &Mesh) -> MeshInstance {
    let t = &mesh.transform;
    let color = mesh.material.color();
    let (emissive, mut flags) = match mesh.material {
        Material::Lambert { emissive, .. } => (emissive, MeshInstance::FLAG_LIT),
        Material::Basic { .. } => (Color::BLACK, 0),
    };
    if mesh.material.is_wireframe() {
        flags |= MeshInstance::FLAG_WIREFRAME;
    }

    MeshInstance {
        x: t.position.x,
        y: t.position.y,
        z: t.position.z,
        rot_x: t.rotation.x,
        rot_y: t.rotation.y,
        rot_z: t.rotation.z,
        radius: mesh.geometry.radius(),
        kind: mesh.geometry.kind() as f32,
        detail: mesh.geometry.detail() as f32,
        r: color.r,
        g: color.g,
        b: color.b,
        emissive_r: emissive.r,
        emissive_g: emissive.g,
        emissive_b: emissive.b,
        flags: flags as f32,
    }
}

/// Build the render buffer from a set of meshes.
/// Solid meshes go first, wireframes after; `wireframe_split` marks the boundary.
/// At most `max_instances` meshes are written.
pub fn build_render_buffer<'a>(
    meshes: impl Iterator<Item = &'a Mesh>,
    buffer: &mut RenderBuffer,
    max_instances: usize,
) {
    buffer.clear();

    let mut wireframes: Vec<MeshInstance> = Vec::new();
    let mut written = 0usize;

    for mesh in meshes {
        if written == max_instances {
            log::warn!("render buffer full at {} instances, dropping the rest", max_instances);
            break;
        }
        written += 1;

        let instance = mesh_instance(mesh);
        if mesh.material.is_wireframe() {
            wireframes.push(instance);
        } else {
            buffer.push(instance);
        }
    }

    buffer.set_wireframe_split(buffer.instance_count());
    for inst in wireframes {
        buffer.push(inst);
    }
}
