//! End-to-end tests of the `ndfc` binary against a mock controller.
//!
//! Every parameter is supplied as a flag so the binary never prompts, and
//! `--yes` / `--save` stand in for the interactive confirmations.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const NETWORKS_PATH: &str =
    "/appcenter/cisco/ndfc/api/v1/lan-fabric/rest/top-down/fabrics/Prod/networks";

/// Build a `Command` pointed at the mock controller, prompts disabled.
fn ndfc_cmd(server_uri: &str, current: &str, new: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ndfc");
    cmd.env_remove("NDFC_HOST")
        .env_remove("NDFC_USERNAME")
        .env_remove("NDFC_PASSWORD")
        .env_remove("NDFC_DOMAIN")
        .env_remove("NDFC_VERIFY_TLS")
        .env_remove("DEFAULT_FABRIC")
        .args(["--host", server_uri])
        .args(["--fabric", "Prod"])
        .args(["--username", "admin"])
        .args(["--password", "secret"])
        .args(["--display-name", current])
        .args(["--new-display-name", new])
        .arg("--yes");
    cmd
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .mount(server)
        .await;
}

// ── Scenarios ───────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn same_name_takes_the_no_op_branch_without_a_put() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(NETWORKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"displayName": "Prod-Net", "networkName": "NET1"}
        ])))
        .mount(&server)
        .await;

    let output = ndfc_cmd(&server.uri(), "Prod-Net", "Prod-Net")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("NETWORK DETAILS"), "stdout:\n{stdout}");
    assert!(stderr.contains("no update needed"), "stderr:\n{stderr}");

    let puts = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == "PUT")
        .count();
    assert_eq!(puts, 0, "the no-op branch must not issue a PUT");
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_login_exits_1_without_touching_the_networks_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let output = ndfc_cmd(&server.uri(), "Prod-Net", "").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Authentication failed"), "stderr:\n{stderr}");

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests.iter().all(|r| r.url.path() == "/login"),
        "only the login endpoint may be hit: {requests:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_network_lists_the_alternatives_and_exits_1() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(NETWORKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"displayName": "Dev-Net", "networkName": "NET2"}
        ])))
        .mount(&server)
        .await;

    let output = ndfc_cmd(&server.uri(), "Prod-Net", "").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Available networks"), "stderr:\n{stderr}");
    assert!(stderr.contains("Dev-Net"), "stderr:\n{stderr}");
    assert!(stderr.contains("not found"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn accepted_update_saves_the_renamed_record() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    // First listing resolves the old name; the re-fetch sees the rename.
    Mock::given(method("GET"))
        .and(path(NETWORKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"displayName": "Prod Net", "networkName": "NET1", "networkStatus": "DEPLOYED"}
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(NETWORKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"displayName": "Core Net", "networkName": "NET1", "networkStatus": "DEPLOYED"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("{NETWORKS_PATH}/NET1")))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"displayName": "Core Net"})))
        .mount(&server)
        .await;

    let workdir = tempfile::tempdir().unwrap();
    let output = ndfc_cmd(&server.uri(), "Prod Net", "Core Net")
        .arg("--save")
        .current_dir(workdir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("updated successfully"), "stderr:\n{stderr}");

    // Spaces become underscores and the updated suffix is appended.
    let saved = workdir.path().join("network_Core_Net_updated.json");
    let contents = std::fs::read_to_string(&saved).expect("saved file exists");
    assert!(contents.contains("\"displayName\": \"Core Net\""));

    // The PUT body was sanitized on the way out.
    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .expect("one PUT");
    let body: serde_json::Value = put.body_json().unwrap();
    assert_eq!(body.get("displayName"), Some(&json!("Core Net")));
    assert_eq!(body.get("networkStatus"), None);
}
