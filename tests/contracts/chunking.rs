//! Manual chunk grouping contracts

use firecat::domain::services::plan_chunks;
use firecat::manual_chunk;

/// CONTRACT: dependency modules go to `vendor`, first-party modules never do
#[test]
fn contract_vendor_grouping() {
    assert_eq!(manual_chunk("node_modules/engine/index.js"), Some("vendor"));
    assert_eq!(
        manual_chunk("/home/dev/game/node_modules/@scope/pkg/dist/x.mjs"),
        Some("vendor")
    );
    assert_eq!(manual_chunk("src/main.js"), None);
    assert_eq!(manual_chunk("src/node_module.js"), None);
    assert_eq!(manual_chunk("src/vendor/lib.js"), None);
}

/// CONTRACT: one shared vendor chunk; first-party modules stay with the entry
#[test]
fn contract_plan_has_single_vendor_group() {
    let plan = plan_chunks(
        "src/main.js",
        [
            "src/main.js",
            "src/game.js",
            "node_modules/b/index.js",
            "node_modules/a/index.js",
        ],
    );

    assert_eq!(plan.entry, vec!["src/main.js", "src/game.js"]);
    assert_eq!(plan.groups.len(), 1);
    assert_eq!(
        plan.groups["vendor"],
        vec!["node_modules/a/index.js", "node_modules/b/index.js"]
    );
    assert_eq!(plan.group_of("src/game.js"), None);
    assert_eq!(plan.group_of("node_modules/a/index.js"), Some("vendor"));
}
