// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use stmark_api::ENDPOINTS;

#[test]
fn router_paths_match_the_endpoint_catalog() {
    let server_src = std::fs::read_to_string(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs"),
    )
    .expect("read server routing source");

    let param_re = regex::Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("param regex");
    let mut route_set = BTreeSet::new();
    for cap in regex::Regex::new(r#"\.route\(\s*"([^"]+)""#)
        .expect("regex")
        .captures_iter(&server_src)
    {
        route_set.insert(param_re.replace_all(&cap[1], "{$1}").to_string());
    }

    let mut catalog_set = BTreeSet::new();
    for ep in ENDPOINTS {
        assert!(
            matches!(ep.method, "GET" | "POST"),
            "unsupported method {} {}",
            ep.method,
            ep.path
        );
        assert!(!ep.name.trim().is_empty(), "unnamed endpoint {}", ep.path);
        catalog_set.insert(ep.path.to_string());
    }

    assert_eq!(route_set, catalog_set, "server route registry drift");
}
