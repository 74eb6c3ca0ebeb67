//! End-to-end pipeline tests over hand-encoded scene files.

use mapscan_core::artifact::SceneFile;
use mapscan_core::binfmt::{self, DecodeError};
use mapscan_core::catalog::{
    AssetCategory, BuiltinDataset, DependencyCache, EditorPlugins, NoDependencies,
};
use mapscan_core::report::model::{FindingKind, Report, ToolInfo};
use mapscan_core::verify::{AttributionMap, NoAttribution};
use mapscan_core::{ScanInputs, scan};

/// Minimal scene-file encoder mirroring the wire grammar: header literal,
/// package name, string table, then the recursive root node.
mod enc {
    #[derive(Debug, Default, Clone)]
    pub struct Node {
        pub name: String,
        pub attrs: Vec<(String, String)>,
        pub children: Vec<Node>,
    }

    impl Node {
        pub fn named(name: &str) -> Self {
            Node {
                name: name.to_string(),
                ..Default::default()
            }
        }

        pub fn attr(mut self, name: &str, value: &str) -> Self {
            self.attrs.push((name.to_string(), value.to_string()));
            self
        }

        pub fn child(mut self, child: Node) -> Self {
            self.children.push(child);
            self
        }
    }

    fn varint(out: &mut Vec<u8>, mut value: u32) {
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                out.push(byte);
                break;
            }
            out.push(byte | 0x80);
        }
    }

    fn var_string(out: &mut Vec<u8>, s: &str) {
        varint(out, s.len() as u32);
        out.extend_from_slice(s.as_bytes());
    }

    fn u16(out: &mut Vec<u8>, v: u16) {
        out.extend_from_slice(&[(v & 0xff) as u8, (v >> 8) as u8]);
    }

    fn collect_names(node: &Node, table: &mut Vec<String>) {
        let mut intern = |s: &str| {
            if !table.iter().any(|t| t == s) {
                table.push(s.to_string());
            }
        };
        intern(&node.name);
        for (name, _) in &node.attrs {
            intern(name);
        }
        for child in &node.children {
            collect_names(child, table);
        }
    }

    fn index(table: &[String], s: &str) -> u16 {
        table.iter().position(|t| t == s).unwrap() as u16
    }

    fn emit_node(out: &mut Vec<u8>, node: &Node, table: &[String]) {
        u16(out, index(table, &node.name));
        out.push(node.attrs.len() as u8);
        for (name, value) in &node.attrs {
            u16(out, index(table, name));
            out.push(6); // string tag
            var_string(out, value);
        }
        u16(out, node.children.len() as u16);
        for child in &node.children {
            emit_node(out, child, table);
        }
    }

    pub fn encode(package: &str, root: &Node) -> Vec<u8> {
        let mut table = Vec::new();
        collect_names(root, &mut table);

        let mut out = Vec::new();
        var_string(&mut out, "SCENE BIN");
        var_string(&mut out, package);
        u16(&mut out, table.len() as u16);
        for s in &table {
            var_string(&mut out, s);
        }
        emit_node(&mut out, root, &table);
        out
    }
}

fn tool() -> ToolInfo {
    ToolInfo {
        name: "mapscan".into(),
        version: "0.1.0-test".into(),
        commit: None,
    }
}

fn scan_bytes(buffers: &[Vec<u8>], inputs: &ScanInputs<'_>) -> Report {
    let files: Vec<SceneFile> = buffers
        .iter()
        .enumerate()
        .map(|(i, b)| SceneFile::from_bytes(Some(format!("map{i}.bin")), b.clone()))
        .collect();
    scan(&files, inputs, tool())
}

fn finding_kinds(report: &Report) -> Vec<FindingKind> {
    report.findings.iter().map(|f| f.kind).collect()
}

#[test]
fn unknown_decal_yields_exactly_one_missing_decal_finding() {
    // Package "Foo", one decal referencing a texture no catalog knows.
    let root = enc::Node::named("")
        .child(enc::Node::named("decal").attr("texture", "decals/unknownDecal.png"))
        .child(enc::Node::named("entities").child(enc::Node::named("Bar_Thing")));
    let bytes = enc::encode("Foo", &root);

    let map = binfmt::decode(&bytes).expect("well-formed file");
    assert_eq!(map.package, "Foo");

    let builtin = BuiltinDataset {
        entities: vec!["Bar/Thing".into()],
        ..Default::default()
    }
    .to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[bytes], &inputs);

    assert_eq!(report.packages, [Some("Foo".to_string())]);
    assert_eq!(finding_kinds(&report), [FindingKind::MissingDecal]);
    assert_eq!(report.findings[0].identifiers, ["unknownDecal"]);
    assert!(report.findings[0].attributed_to.is_empty());
    assert_eq!(report.exit_code, 1);
}

#[test]
fn bundled_listing_satisfies_references() {
    let root = enc::Node::named("")
        .child(enc::Node::named("decal").attr("texture", "decals/custom/flag.png"));
    let bytes = enc::encode("Pkg", &root);

    let listing = vec!["Graphics/Atlases/Gameplay/decals/custom/flag.png".to_string()];
    let builtin = BuiltinDataset::default().to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &listing,
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[bytes], &inputs);

    assert!(report.findings.is_empty(), "got: {:?}", report.findings);
    assert_eq!(report.exit_code, 0);
}

#[test]
fn dependency_plugins_satisfy_namespaced_entities() {
    let root = enc::Node::named("").child(
        enc::Node::named("entities").child(enc::Node::named("HelperPack_CustomSpring")),
    );
    let bytes = enc::encode("Pkg", &root);

    let mut cache = DependencyCache::default();
    cache.insert_plugins(
        "HelperPack",
        EditorPlugins {
            entities: vec!["HelperPack/CustomSpring".into()],
            ..Default::default()
        },
    );

    let builtin = BuiltinDataset::default().to_catalog();
    let deps = vec!["HelperPack".to_string()];
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &deps,
        source: &cache,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[bytes], &inputs);

    assert!(report.findings.is_empty(), "got: {:?}", report.findings);
}

#[test]
fn missing_dependency_metadata_degrades_to_partial_verification() {
    let root = enc::Node::named("")
        .child(enc::Node::named("decal").attr("texture", "decals/first/a.png"))
        .child(enc::Node::named("decal").attr("texture", "decals/ghost/b.png"));
    let bytes = enc::encode("Pkg", &root);

    // "First" is cached, "Ghost" is not; only Ghost's decal goes missing.
    let mut cache = DependencyCache::default();
    cache.insert_listing(
        "First",
        vec!["Graphics/Atlases/Gameplay/decals/first/a.png".into()],
    );

    let builtin = BuiltinDataset::default().to_catalog();
    let deps = vec!["First".to_string(), "Ghost".to_string()];
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &deps,
        source: &cache,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[bytes], &inputs);

    assert_eq!(finding_kinds(&report), [FindingKind::MissingDecal]);
    assert_eq!(report.findings[0].identifiers, ["ghost/b"]);
}

#[test]
fn attribution_suggests_a_dependency_for_misses() {
    let root = enc::Node::named("")
        .child(enc::Node::named("triggers").child(enc::Node::named("WindPack_Gale")));
    let bytes = enc::encode("Pkg", &root);

    let mut attribution = AttributionMap::default();
    attribution.insert(AssetCategory::Triggers, "WindPack/Gale", "WindPack");

    let builtin = BuiltinDataset::default().to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &attribution,
    };
    let report = scan_bytes(&[bytes], &inputs);

    assert_eq!(finding_kinds(&report), [FindingKind::MissingTrigger]);
    assert_eq!(report.findings[0].attributed_to, ["WindPack"]);
}

#[test]
fn one_broken_file_does_not_suppress_the_others() {
    let good = enc::encode(
        "Good",
        &enc::Node::named("")
            .child(enc::Node::named("decal").attr("texture", "decals/missing.png")),
    );
    let mut broken = enc::encode("Broken", &enc::Node::named(""));
    broken.truncate(broken.len() - 1);

    let builtin = BuiltinDataset::default().to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[good, broken], &inputs);

    let kinds = finding_kinds(&report);
    assert!(kinds.contains(&FindingKind::MissingDecal));
    assert!(kinds.contains(&FindingKind::DecodeError));
    // Decode errors dominate the exit code.
    assert_eq!(report.exit_code, 2);
    // The broken file still occupies its slot in the package column.
    assert_eq!(report.packages, [Some("Good".to_string()), None]);
    assert_eq!(report.artifacts.len(), 2);
}

#[test]
fn packages_stay_aligned_when_the_first_file_is_broken() {
    let mut broken = enc::encode("Broken", &enc::Node::named(""));
    broken.truncate(broken.len() - 1);
    let good = enc::encode(
        "Good",
        &enc::Node::named("")
            .child(enc::Node::named("decal").attr("texture", "decals/missing.png")),
    );

    let builtin = BuiltinDataset::default().to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[broken, good], &inputs);

    assert_eq!(report.packages, [None, Some("Good".to_string())]);
    assert_eq!(report.artifacts.len(), 2);

    // Text output must list both files, pairing "Good" with the second one.
    let text = mapscan_core::report::render::render_text(&report);
    let map0 = text
        .lines()
        .find(|l| l.contains("map0.bin"))
        .expect("map0.bin line");
    let map1 = text
        .lines()
        .find(|l| l.contains("map1.bin"))
        .expect("map1.bin line");
    assert!(map0.ends_with("undecoded)"), "got: {map0}");
    assert!(map1.ends_with("package \"Good\")"), "got: {map1}");
}

#[test]
fn decode_error_reports_offset_of_corruption() {
    let bytes = enc::encode("Pkg", &enc::Node::named(""));
    let mut corrupt = bytes.clone();
    let last = corrupt.len() - 1;
    corrupt[last] = 9; // child count 0x0900 with no children following

    let err = binfmt::decode(&corrupt).unwrap_err();
    match err {
        DecodeError::UnexpectedEof { offset, .. } => assert_eq!(offset, corrupt.len()),
        other => panic!("expected truncation, got {other:?}"),
    }
}

#[test]
fn styleground_pool_boundary_is_respected_end_to_end() {
    let root = enc::Node::named("")
        .child(enc::Node::named("parallax").attr("texture", "misc/cloud"))
        .child(enc::Node::named("parallax").attr("texture", "bgs/ghost/sky"));
    let bytes = enc::encode("Pkg", &root);

    let builtin = BuiltinDataset::default().to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let report = scan_bytes(&[bytes], &inputs);

    // Only the in-pool reference is checked; the out-of-pool one never
    // appears, known or not.
    assert_eq!(finding_kinds(&report), [FindingKind::MissingStyleground]);
    assert_eq!(report.findings[0].identifiers, ["ghost/sky"]);
}

#[test]
fn identical_input_produces_identical_reports() {
    let root = enc::Node::named("")
        .child(enc::Node::named("decal").attr("texture", "decals/zeta.png"))
        .child(enc::Node::named("entities").child(enc::Node::named("ghost")));
    let bytes = enc::encode("Pkg", &root);

    let builtin = BuiltinDataset::default().to_catalog();
    let inputs = ScanInputs {
        bundled_listing: &[],
        dependencies: &[],
        source: &NoDependencies,
        builtin: &builtin,
        attribution: &NoAttribution,
    };
    let a = scan_bytes(&[bytes.clone()], &inputs);
    let b = scan_bytes(&[bytes], &inputs);

    assert_eq!(
        serde_json::to_string(&a.findings).unwrap(),
        serde_json::to_string(&b.findings).unwrap()
    );
}
