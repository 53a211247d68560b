//! Path-addressed text persistence for built rigs.
//!
//! Node references are stored exclusively as hierarchy-relative slash paths
//! and re-resolved against a live skeleton on load; node identity is never
//! assumed to survive a save/load boundary.

use crate::{
    Error, PhysicsChain, RIG_MANAGER_NAME, RigBackend, RigBuildResult, Scene, SphereCollider,
};
use glam::Vec3;
use std::collections::HashSet;

/// Fixed leading marker of the rig persistence text form. The format carries
/// no version field; changes to it are breaking.
pub const RIG_TEXT_PREFIX: &str = "SpringRig:";

/// Serializes every chain under `manager` to the persistence text form.
///
/// Paths are relative to the manager's parent (the skeleton root the rig was
/// built under). A collider node that has lost its sphere list serializes
/// with an empty sphere list rather than being dropped.
pub fn serialize<B: RigBackend>(scene: &Scene, backend: &B, manager: usize) -> String {
    let rig_root = scene.parent(manager).unwrap_or(manager);
    let records: Vec<String> = backend
        .read_chains(scene, manager)
        .iter()
        .map(|chain| serialize_chain(scene, backend, rig_root, chain))
        .collect();
    format!("{RIG_TEXT_PREFIX}{}", records.join("|"))
}

fn serialize_chain<B: RigBackend>(
    scene: &Scene,
    backend: &B,
    rig_root: usize,
    chain: &PhysicsChain,
) -> String {
    let gravity = chain.gravity_direction;
    let scalars = format!(
        "{},{},{},{},{},{},{}",
        chain.stiffness,
        chain.gravity_power,
        gravity.x,
        gravity.y,
        gravity.z,
        chain.drag_force,
        chain.hit_radius
    );
    let center = chain
        .center
        .and_then(|node| scene.path_between(rig_root, node))
        .unwrap_or_default();
    let roots: Vec<String> = chain
        .root_nodes
        .iter()
        .filter_map(|&node| scene.path_between(rig_root, node))
        .collect();
    let colliders: Vec<String> = chain
        .collider_nodes
        .iter()
        .filter_map(|&node| {
            let path = scene.path_between(rig_root, node)?;
            let spheres: Vec<String> = backend
                .read_colliders(scene, node)
                .unwrap_or(&[])
                .iter()
                .map(|sphere| {
                    format!(
                        "{},{},{};{}",
                        sphere.offset.x, sphere.offset.y, sphere.offset.z, sphere.radius
                    )
                })
                .collect();
            Some(format!("{path}={}", spheres.join("~")))
        })
        .collect();
    format!("{scalars};{center};{};{}", roots.join(","), colliders.join("~"))
}

struct ParsedProxy {
    path: String,
    spheres: Vec<SphereCollider>,
}

struct ParsedChain {
    stiffness: f32,
    gravity_power: f32,
    gravity_direction: Vec3,
    drag_force: f32,
    hit_radius: f32,
    center_path: String,
    root_paths: Vec<String>,
    proxies: Vec<ParsedProxy>,
}

/// Reconstructs a rig from the persistence text form against a live skeleton.
///
/// The whole text is parsed before the scene is touched, so a malformed
/// record leaves the scene unchanged. During reconstruction, center and root
/// paths that no longer resolve are dropped; collider paths that no longer
/// resolve are recreated as bare container nodes so saved rigs stay loadable
/// after minor renames elsewhere.
pub fn deserialize<B: RigBackend>(
    scene: &mut Scene,
    backend: &B,
    skeleton_root: usize,
    text: &str,
) -> Result<RigBuildResult, Error> {
    if !scene.contains(skeleton_root) {
        return Err(Error::UnknownNode { index: skeleton_root });
    }
    let body = text.strip_prefix(RIG_TEXT_PREFIX).ok_or(Error::RigTextPrefix)?;

    let mut parsed = Vec::new();
    if !body.is_empty() {
        for (index, record) in body.split('|').enumerate() {
            parsed.push(
                parse_chain_record(record)
                    .map_err(|message| Error::RigTextRecord { record: index, message })?,
            );
        }
    }

    let manager = match scene.find_child(skeleton_root, RIG_MANAGER_NAME) {
        Some(node) => node,
        None => scene.add_node(skeleton_root, RIG_MANAGER_NAME),
    };
    backend.clear_chains(scene, manager);

    let mut collider_nodes = Vec::new();
    let mut written: HashSet<usize> = HashSet::new();
    let mut chains = Vec::new();
    for record in parsed {
        let center = if record.center_path.is_empty() {
            None
        } else {
            scene.resolve_path(skeleton_root, &record.center_path)
        };
        let root_nodes: Vec<usize> = record
            .root_paths
            .iter()
            .filter_map(|path| scene.resolve_path(skeleton_root, path))
            .collect();
        let mut chain_colliders = Vec::new();
        let mut chain_seen: HashSet<usize> = HashSet::new();
        for proxy in record.proxies {
            let node = scene.resolve_or_create_path(skeleton_root, &proxy.path);
            backend.write_colliders(scene, node, proxy.spheres);
            if written.insert(node) {
                collider_nodes.push(node);
            }
            if chain_seen.insert(node) {
                chain_colliders.push(node);
            }
        }
        let chain = PhysicsChain {
            stiffness: record.stiffness,
            gravity_power: record.gravity_power,
            gravity_direction: record.gravity_direction,
            drag_force: record.drag_force,
            hit_radius: record.hit_radius,
            center,
            root_nodes,
            collider_nodes: chain_colliders,
        };
        backend.write_chain(scene, manager, &chain);
        chains.push(chain);
    }

    Ok(RigBuildResult { manager, collider_nodes, chains })
}

fn parse_chain_record(record: &str) -> Result<ParsedChain, String> {
    // splitn keeps the collider field's internal ';' separators intact.
    let mut fields = record.splitn(4, ';');
    let scalars = fields.next().unwrap_or("");
    let center = fields.next().ok_or("missing center path field")?;
    let roots = fields.next().ok_or("missing root paths field")?;
    let colliders = fields.next().ok_or("missing collider field")?;

    let parts: Vec<&str> = scalars.split(',').collect();
    if parts.len() != 7 {
        return Err(format!("expected 7 scalar fields, got {}", parts.len()));
    }
    let stiffness = parse_f32(parts[0])?;
    let gravity_power = parse_f32(parts[1])?;
    let gravity_direction = Vec3::new(parse_f32(parts[2])?, parse_f32(parts[3])?, parse_f32(parts[4])?);
    let drag_force = parse_f32(parts[5])?;
    let hit_radius = parse_f32(parts[6])?;

    let root_paths: Vec<String> = if roots.is_empty() {
        Vec::new()
    } else {
        roots.split(',').map(str::to_string).collect()
    };

    Ok(ParsedChain {
        stiffness,
        gravity_power,
        gravity_direction,
        drag_force,
        hit_radius,
        center_path: center.to_string(),
        root_paths,
        proxies: parse_collider_field(colliders)?,
    })
}

/// A `~` segment containing `=` opens a new proxy (`path=x,y,z;r`); a bare
/// segment (`x,y,z;r`) is a further sphere of the current proxy.
fn parse_collider_field(field: &str) -> Result<Vec<ParsedProxy>, String> {
    let mut proxies: Vec<ParsedProxy> = Vec::new();
    if field.is_empty() {
        return Ok(proxies);
    }
    for segment in field.split('~') {
        if let Some((path, sphere)) = segment.split_once('=') {
            if path.is_empty() {
                return Err("empty collider path".to_string());
            }
            let mut proxy = ParsedProxy { path: path.to_string(), spheres: Vec::new() };
            if !sphere.is_empty() {
                proxy.spheres.push(parse_sphere(sphere)?);
            }
            proxies.push(proxy);
        } else {
            let Some(proxy) = proxies.last_mut() else {
                return Err(format!("sphere '{segment}' precedes any collider path"));
            };
            proxy.spheres.push(parse_sphere(segment)?);
        }
    }
    Ok(proxies)
}

fn parse_sphere(value: &str) -> Result<SphereCollider, String> {
    let (offset, radius) = value
        .split_once(';')
        .ok_or_else(|| format!("invalid sphere '{value}'"))?;
    let parts: Vec<&str> = offset.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("invalid sphere offset '{offset}'"));
    }
    Ok(SphereCollider {
        offset: Vec3::new(parse_f32(parts[0])?, parse_f32(parts[1])?, parse_f32(parts[2])?),
        radius: parse_f32(radius)?,
    })
}

fn parse_f32(value: &str) -> Result<f32, String> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid number '{value}'"))
}
