use crate::{DynamicChainComponent, SphereCollider, SpringChainComponent};
use glam::{Quat, Vec3};

/// A component attached to a scene node.
///
/// Sphere-collider lists appear at most once per node and are replaced in
/// place; chain components may repeat on the rig manager node, one per chain.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    SphereColliders(Vec<SphereCollider>),
    SpringChain(SpringChainComponent),
    DynamicChain(DynamicChainComponent),
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    parent: Option<usize>,
    children: Vec<usize>,

    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    components: Vec<Component>,
}

/// Index-addressed node arena standing in for the host scene graph.
///
/// Node names are matched verbatim by path resolution, so names must not
/// contain the persistence delimiters (`/`, `|`, `~`, `;`, `,`, `=`).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.nodes.len()
    }

    /// Adds a parentless node and returns its index.
    pub fn add_root(&mut self, name: &str) -> usize {
        self.push_node(name, None)
    }

    /// Adds a child under `parent` and returns its index.
    pub fn add_node(&mut self, parent: usize, name: &str) -> usize {
        let node = self.push_node(name, Some(parent));
        self.nodes[parent].children.push(node);
        node
    }

    fn push_node(&mut self, name: &str, parent: Option<usize>) -> usize {
        self.nodes.push(Node {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            components: Vec::new(),
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, node: usize) -> &Node {
        &self.nodes[node]
    }

    pub fn node_mut(&mut self, node: usize) -> &mut Node {
        &mut self.nodes[node]
    }

    pub fn name(&self, node: usize) -> &str {
        &self.nodes[node].name
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    pub fn find_child(&self, parent: usize, name: &str) -> Option<usize> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].name == name)
    }

    /// Componentwise product of local scales along the root-to-node chain.
    pub fn world_scale(&self, node: usize) -> Vec3 {
        let mut scale = self.nodes[node].scale;
        let mut current = self.nodes[node].parent;
        while let Some(parent) = current {
            scale *= self.nodes[parent].scale;
            current = self.nodes[parent].parent;
        }
        scale
    }

    /// Largest world-scale component, used to keep collider radii in world
    /// proportion on non-uniformly scaled joints.
    pub fn world_scale_factor(&self, node: usize) -> f32 {
        let scale = self.world_scale(node);
        scale.x.max(scale.y).max(scale.z)
    }

    /// Every node strictly below `node`, preorder.
    pub fn descendants(&self, node: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[node].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current].children.iter().rev().copied());
        }
        out
    }

    /// True when `ancestor` is strictly above `node`.
    pub fn is_ancestor(&self, ancestor: usize, node: usize) -> bool {
        let mut current = self.nodes[node].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent;
        }
        false
    }

    /// Slash-joined names from just below `root` down to `node`.
    ///
    /// `None` when `node` is not a strict descendant of `root`.
    pub fn path_between(&self, root: usize, node: usize) -> Option<String> {
        if node == root {
            return None;
        }
        let mut segments = Vec::new();
        let mut current = node;
        while current != root {
            segments.push(self.nodes[current].name.as_str());
            current = self.nodes[current].parent?;
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    /// Walks slash-separated segments from `root`, matching each segment to a
    /// direct child by exact name. First matching child wins.
    pub fn resolve_path(&self, root: usize, path: &str) -> Option<usize> {
        if path.is_empty() {
            return None;
        }
        let mut current = root;
        for segment in path.split('/') {
            current = self.find_child(current, segment)?;
        }
        Some(current)
    }

    /// Like [`resolve_path`](Self::resolve_path), but missing segments are
    /// created as bare child nodes.
    pub fn resolve_or_create_path(&mut self, root: usize, path: &str) -> usize {
        let mut current = root;
        for segment in path.split('/') {
            current = match self.find_child(current, segment) {
                Some(child) => child,
                None => self.add_node(current, segment),
            };
        }
        current
    }

    pub fn components(&self, node: usize) -> &[Component] {
        &self.nodes[node].components
    }

    pub fn push_component(&mut self, node: usize, component: Component) {
        self.nodes[node].components.push(component);
    }

    pub fn retain_components(&mut self, node: usize, keep: impl FnMut(&Component) -> bool) {
        self.nodes[node].components.retain(keep);
    }

    pub fn sphere_colliders(&self, node: usize) -> Option<&[SphereCollider]> {
        self.nodes[node].components.iter().find_map(|component| match component {
            Component::SphereColliders(spheres) => Some(spheres.as_slice()),
            _ => None,
        })
    }

    /// Replaces the node's sphere list, or attaches one if absent.
    pub fn set_sphere_colliders(&mut self, node: usize, spheres: Vec<SphereCollider>) {
        for component in &mut self.nodes[node].components {
            if let Component::SphereColliders(existing) = component {
                *existing = spheres;
                return;
            }
        }
        self.nodes[node].components.push(Component::SphereColliders(spheres));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_level_scene() -> (Scene, usize, usize, usize) {
        let mut scene = Scene::new();
        let root = scene.add_root("Model");
        let hips = scene.add_node(root, "Hips");
        let leg = scene.add_node(hips, "LeftUpperLeg");
        (scene, root, hips, leg)
    }

    #[test]
    fn world_scale_multiplies_down_the_chain() {
        let (mut scene, root, hips, leg) = three_level_scene();
        scene.node_mut(root).scale = Vec3::new(2.0, 2.0, 2.0);
        scene.node_mut(hips).scale = Vec3::new(1.0, 3.0, 1.0);

        let scale = scene.world_scale(leg);
        assert_eq!(scale, Vec3::new(2.0, 6.0, 2.0));
        assert_eq!(scene.world_scale_factor(leg), 6.0);
    }

    #[test]
    fn path_between_and_resolve_round_trip() {
        let (scene, root, _hips, leg) = three_level_scene();

        let path = scene.path_between(root, leg).unwrap();
        assert_eq!(path, "Hips/LeftUpperLeg");
        assert_eq!(scene.resolve_path(root, &path), Some(leg));

        assert_eq!(scene.path_between(root, root), None);
        assert_eq!(scene.resolve_path(root, ""), None);
        assert_eq!(scene.resolve_path(root, "Hips/Missing"), None);
    }

    #[test]
    fn resolve_or_create_builds_missing_segments() {
        let (mut scene, root, hips, _leg) = three_level_scene();

        let created = scene.resolve_or_create_path(root, "Hips/Tail/Tail1");
        assert_eq!(scene.name(created), "Tail1");
        let tail = scene.parent(created).unwrap();
        assert_eq!(scene.name(tail), "Tail");
        assert_eq!(scene.parent(tail), Some(hips));

        // Resolving again finds the same nodes instead of duplicating them.
        assert_eq!(scene.resolve_or_create_path(root, "Hips/Tail/Tail1"), created);
    }

    #[test]
    fn descendants_are_preorder_and_exclude_self() {
        let mut scene = Scene::new();
        let root = scene.add_root("Model");
        let a = scene.add_node(root, "A");
        let a1 = scene.add_node(a, "A1");
        let b = scene.add_node(root, "B");

        assert_eq!(scene.descendants(root), vec![a, a1, b]);
        assert!(scene.is_ancestor(root, a1));
        assert!(scene.is_ancestor(a, a1));
        assert!(!scene.is_ancestor(b, a1));
        assert!(!scene.is_ancestor(a1, a1));
    }

    #[test]
    fn sphere_colliders_replace_in_place() {
        let (mut scene, _root, hips, _leg) = three_level_scene();

        scene.set_sphere_colliders(
            hips,
            vec![SphereCollider { offset: Vec3::ZERO, radius: 0.1 }],
        );
        scene.set_sphere_colliders(
            hips,
            vec![SphereCollider { offset: Vec3::Y, radius: 0.2 }],
        );

        let spheres = scene.sphere_colliders(hips).unwrap();
        assert_eq!(spheres.len(), 1);
        assert_eq!(spheres[0].radius, 0.2);
        assert_eq!(scene.components(hips).len(), 1);
    }
}
