use springrig::{
    MatchStrategy, RigBuilder, RigProfile, Scene, SpringChainBackend, serialize,
};

fn main() {
    let mut scene = Scene::new();
    let root = scene.add_root("Model");
    let hips = scene.add_node(root, "Hips");
    let spine = scene.add_node(hips, "Spine");
    let neck = scene.add_node(spine, "Neck");
    let head = scene.add_node(neck, "Head");
    scene.add_node(head, "HairFront");
    scene.add_node(head, "HairBack");
    let tail = scene.add_node(hips, "Tail");
    scene.add_node(tail, "Tail1");

    for side in ["Left", "Right"] {
        let leg = scene.add_node(hips, &format!("{side}LegD"));
        scene.add_node(leg, &format!("{side}KneeD"));
        let shoulder = scene.add_node(spine, &format!("{side}Shoulder"));
        let arm = scene.add_node(shoulder, &format!("{side}Arm"));
        scene.add_node(arm, &format!("{side}Elbow"));
    }

    let builder = RigBuilder::new(SpringChainBackend);
    let result = builder
        .build(
            &mut scene,
            root,
            None,
            &RigProfile::default(),
            MatchStrategy::NameOnly,
        )
        .expect("build rig");

    eprintln!(
        "built {} collider proxies and {} chains",
        result.collider_nodes.len(),
        result.chains.len()
    );
    for chain in &result.chains {
        let roots: Vec<&str> = chain.root_nodes.iter().map(|&n| scene.name(n)).collect();
        eprintln!(
            "  chain stiffness={} gravity={} roots={roots:?}",
            chain.stiffness, chain.gravity_power
        );
    }

    println!("{}", serialize(&scene, builder.backend(), result.manager));
}
