// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

#[test]
fn api_crate_stays_transport_free() {
    let cargo =
        std::fs::read_to_string(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"))
            .expect("read Cargo.toml");

    for forbidden in ["tokio", "axum", "tracing", "stmark-server"] {
        assert!(
            !cargo.contains(forbidden),
            "forbidden dependency in api crate: {forbidden}"
        );
    }
}
