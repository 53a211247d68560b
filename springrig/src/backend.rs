use crate::{Component, PhysicsChain, Scene, SphereCollider};
use glam::Vec3;

/// Spring-family chain component: the internal chain fields stored verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringChainComponent {
    pub stiffness: f32,
    pub gravity_power: f32,
    pub gravity_direction: Vec3,
    pub drag_force: f32,
    pub hit_radius: f32,
    pub center: Option<usize>,
    pub root_nodes: Vec<usize>,
    pub collider_nodes: Vec<usize>,
}

/// Dynamic-family chain component: the stiffness/drag pair is expressed as
/// elasticity/damping and gravity is one baked vector.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicChainComponent {
    pub elasticity: f32,
    pub damping: f32,
    pub gravity: Vec3,
    pub radius: f32,
    pub center: Option<usize>,
    pub root_nodes: Vec<usize>,
    pub collider_nodes: Vec<usize>,
}

/// Adapter between the internal chain/collider representation and a concrete
/// scene component family, chosen at composition time. Classification,
/// reduction, build and codec logic never branch on the family.
pub trait RigBackend {
    /// Removes every chain component of this family under `manager`.
    fn clear_chains(&self, scene: &mut Scene, manager: usize);

    /// Appends one chain component under `manager`.
    fn write_chain(&self, scene: &mut Scene, manager: usize, chain: &PhysicsChain);

    /// Reads back every chain under `manager`, in insertion order.
    fn read_chains(&self, scene: &Scene, manager: usize) -> Vec<PhysicsChain>;

    /// Replaces `node`'s sphere list, attaching one if absent.
    fn write_colliders(&self, scene: &mut Scene, node: usize, spheres: Vec<SphereCollider>) {
        scene.set_sphere_colliders(node, spheres);
    }

    /// Reads `node`'s sphere list, if it carries one.
    fn read_colliders<'a>(&self, scene: &'a Scene, node: usize) -> Option<&'a [SphereCollider]> {
        scene.sphere_colliders(node)
    }
}

/// Backend storing chains in the spring component family.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpringChainBackend;

impl RigBackend for SpringChainBackend {
    fn clear_chains(&self, scene: &mut Scene, manager: usize) {
        scene.retain_components(manager, |component| {
            !matches!(component, Component::SpringChain(_))
        });
    }

    fn write_chain(&self, scene: &mut Scene, manager: usize, chain: &PhysicsChain) {
        scene.push_component(
            manager,
            Component::SpringChain(SpringChainComponent {
                stiffness: chain.stiffness,
                gravity_power: chain.gravity_power,
                gravity_direction: chain.gravity_direction,
                drag_force: chain.drag_force,
                hit_radius: chain.hit_radius,
                center: chain.center,
                root_nodes: chain.root_nodes.clone(),
                collider_nodes: chain.collider_nodes.clone(),
            }),
        );
    }

    fn read_chains(&self, scene: &Scene, manager: usize) -> Vec<PhysicsChain> {
        scene
            .components(manager)
            .iter()
            .filter_map(|component| match component {
                Component::SpringChain(spring) => Some(PhysicsChain {
                    stiffness: spring.stiffness,
                    gravity_power: spring.gravity_power,
                    gravity_direction: spring.gravity_direction,
                    drag_force: spring.drag_force,
                    hit_radius: spring.hit_radius,
                    center: spring.center,
                    root_nodes: spring.root_nodes.clone(),
                    collider_nodes: spring.collider_nodes.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

/// Gravity direction reported for a dynamic chain whose baked gravity vector
/// carries no magnitude.
const DEFAULT_GRAVITY_DIRECTION: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Backend storing chains in the dynamic component family.
#[derive(Copy, Clone, Debug, Default)]
pub struct DynamicChainBackend;

impl RigBackend for DynamicChainBackend {
    fn clear_chains(&self, scene: &mut Scene, manager: usize) {
        scene.retain_components(manager, |component| {
            !matches!(component, Component::DynamicChain(_))
        });
    }

    fn write_chain(&self, scene: &mut Scene, manager: usize, chain: &PhysicsChain) {
        scene.push_component(
            manager,
            Component::DynamicChain(DynamicChainComponent {
                elasticity: chain.stiffness,
                damping: chain.drag_force,
                gravity: chain.gravity_direction * chain.gravity_power,
                radius: chain.hit_radius,
                center: chain.center,
                root_nodes: chain.root_nodes.clone(),
                collider_nodes: chain.collider_nodes.clone(),
            }),
        );
    }

    fn read_chains(&self, scene: &Scene, manager: usize) -> Vec<PhysicsChain> {
        scene
            .components(manager)
            .iter()
            .filter_map(|component| match component {
                Component::DynamicChain(dynamic) => {
                    let gravity_power = dynamic.gravity.length();
                    let gravity_direction = if gravity_power > 0.0 {
                        dynamic.gravity / gravity_power
                    } else {
                        DEFAULT_GRAVITY_DIRECTION
                    };
                    Some(PhysicsChain {
                        stiffness: dynamic.elasticity,
                        gravity_power,
                        gravity_direction,
                        drag_force: dynamic.damping,
                        hit_radius: dynamic.radius,
                        center: dynamic.center,
                        root_nodes: dynamic.root_nodes.clone(),
                        collider_nodes: dynamic.collider_nodes.clone(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}
