//! Output routing contracts

use firecat::{AssetCategory, ContentHash, OutputArtifact, OutputRouter};

fn asset(name: &str) -> OutputArtifact {
    OutputArtifact::asset(format!("src/{name}"), b"bytes".to_vec())
}

/// CONTRACT: category table on the last three characters of the file name
#[test]
fn contract_category_table() {
    let cases = [
        ("style.css", AssetCategory::Stylesheet),
        ("logo.svg", AssetCategory::Image),
        ("hero.png", AssetCategory::Image),
        ("jump.mp3", AssetCategory::Audio),
        ("pixel.ttf", AssetCategory::Font),
        ("level.xyz", AssetCategory::Generic),
    ];
    for (name, category) in cases {
        assert_eq!(AssetCategory::from_file_name(name), category, "{name}");
    }
}

/// CONTRACT: every artifact has exactly one destination
#[test]
fn contract_routing_table_snapshot() {
    let router = OutputRouter::default();
    let names = [
        "style.css",
        "logo.svg",
        "hero.png",
        "jump.mp3",
        "pixel.ttf",
        "level.xyz",
        "README",
        "logo.PNG",
        "theme.xcss",
        "archive.tar.gz",
    ];

    let mut table: Vec<String> = names
        .iter()
        .map(|name| format!("{name} -> {}", router.destination(&asset(name))))
        .collect();
    table.push(format!(
        "entry -> {}",
        router.destination(&OutputArtifact::entry("src/main.js", vec![], b"x".to_vec()))
    ));
    table.push(format!(
        "vendor -> {}",
        router.destination(&OutputArtifact::chunk("vendor", vec![], b"x".to_vec()))
    ));

    insta::assert_snapshot!(table.join("\n"), @r"
    style.css -> css/style-[hash].css
    logo.svg -> img/logo-[hash].svg
    hero.png -> img/hero-[hash].png
    jump.mp3 -> sounds/jump-[hash].mp3
    pixel.ttf -> fonts/pixel-[hash].ttf
    level.xyz -> assets/level-[hash].xyz
    README -> assets/README-[hash]
    logo.PNG -> assets/logo-[hash].PNG
    theme.xcss -> css/theme-[hash].xcss
    archive.tar.gz -> assets/archive.tar-[hash].gz
    entry -> js/app-[hash].js
    vendor -> js/vendor-[hash].js
    ");
}

/// CONTRACT: the entry lands at `js/app-<hash>.js`, hashed from its bytes
#[test]
fn contract_entry_path_and_hash() {
    let router = OutputRouter::default();
    let entry = |content: &[u8]| OutputArtifact::entry("src/main.js", vec![], content.to_vec());

    assert_eq!(
        router.route(&entry(b"export default 1;\n")),
        "js/app-96909e1d.js"
    );
    assert_eq!(
        router.route(&entry(b"export default 1;\n")),
        router.route(&entry(b"export default 1;\n"))
    );
    assert_ne!(
        router.route(&entry(b"export default 1;\n")),
        router.route(&entry(b"export default 2;\n"))
    );
}

/// CONTRACT: the hash length is configurable, the prefix is stable
#[test]
fn contract_hash_length() {
    let css = OutputArtifact::asset("src/a.css", b"body{}".to_vec());
    let full = ContentHash::from_bytes(b"body{}");

    assert_eq!(
        full.to_string(),
        "sha256:7c98040a541657584690ae2a1cc3b42a8b53b159cc60c5d3abbfecbaeac6c94a"
    );
    assert_eq!(OutputRouter::new(8).route(&css), "css/a-7c98040a.css");
    assert_eq!(OutputRouter::new(12).route(&css), "css/a-7c98040a5416.css");
}
