// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! End-to-end tests of the HTTP surface against a scripted gluster.

mod common;

use std::io::Write;

use gluster_rest::prelude::ServiceConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{scripted_service, spawn_server};

#[tokio::test]
async fn test_peer_add_ok() {
    let (service, executor) = scripted_service(ServiceConfig::default());
    executor.reply(0, "peer probe: success\n");
    let base = spawn_server(service).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/gluster/peer/add"))
        .json(&json!({"hostname": "10.0.0.2"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"result": "OK", "errors": "peer probe: success\n"}));
    assert_eq!(executor.commands(), ["gluster peer probe 10.0.0.2 "]);
}

#[tokio::test]
async fn test_peer_add_malformed_json_is_error_envelope() {
    let (service, executor) = scripted_service(ServiceConfig::default());
    let base = spawn_server(service).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/gluster/peer/add"))
        .body("{\"hostname\":")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"], "ERROR");
    assert!(body["errors"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(executor.commands().is_empty());
}

#[tokio::test]
async fn test_brick_remove_malformed_json_is_server_error() {
    let (service, executor) = scripted_service(ServiceConfig::default());
    let base = spawn_server(service).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/gluster/volume/brick/remove"))
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.bytes().await.unwrap().is_empty());
    assert!(executor.commands().is_empty());
}

#[tokio::test]
async fn test_malformed_body_status_per_route() {
    // (route, answers with HTTP 500 and an empty body)
    let routes = [
        ("/gluster/peer/add", false),
        ("/gluster/peer/delete", false),
        ("/gluster/volume/create", false),
        ("/gluster/volume/start", false),
        ("/gluster/volume/stop", false),
        ("/gluster/volume/delete", false),
        ("/gluster/volume/info", false),
        ("/gluster/volume/status", false),
        ("/gluster/volume/health", false),
        ("/gluster/volume/rebalance", false),
        ("/gluster/volume/brick/add", false),
        ("/gluster/volume/brick/remove", true),
        ("/gluster/mount/add", false),
        ("/gluster/mount/delete", false),
        ("/gluster/mount/list", false),
    ];

    let (service, executor) = scripted_service(ServiceConfig::default());
    let base = spawn_server(service).await;
    let client = reqwest::Client::new();

    for (route, server_error) in routes {
        let response = client
            .post(format!("{base}{route}"))
            .body("not json")
            .send()
            .await
            .unwrap();

        if server_error {
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{route}");
            assert!(response.bytes().await.unwrap().is_empty(), "{route}");
        } else {
            assert_eq!(response.status(), StatusCode::OK, "{route}");
            let body: Value = response.json().await.unwrap();
            assert_eq!(body["result"], "ERROR", "{route}");
            assert!(
                body["errors"].as_str().is_some_and(|e| !e.is_empty()),
                "{route}"
            );
        }
    }

    assert!(executor.commands().is_empty());
}

#[tokio::test]
async fn test_rebalance_illegal_option_runs_nothing() {
    let (service, executor) = scripted_service(ServiceConfig::default());
    let base = spawn_server(service).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/gluster/volume/rebalance"))
        .json(&json!({"volname": "gv0", "options": "fix-layout"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({"result": "ERROR", "errors": "Volume Options illegal"}));
    assert!(executor.commands().is_empty());
}

#[tokio::test]
async fn test_peer_list_resolves_localhost() {
    let (service, executor) = scripted_service(ServiceConfig::default());
    executor
        .reply(0, "U1\t10.0.0.1\tConnected\nU2\tlocalhost\tConnected\n")
        .reply(0, "node-a\n");
    let base = spawn_server(service).await;

    let body: Value = reqwest::get(format!("{base}/gluster/peer/list"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({
            "result": "OK",
            "hosts": [
                {"uuid": "U1", "hostname": "10.0.0.1", "state": "Connected", "localhost": false},
                {"uuid": "U2", "hostname": "node-a", "state": "Connected", "localhost": true}
            ]
        })
    );
}

#[tokio::test]
async fn test_volume_info_renames_fields() {
    let (service, executor) = scripted_service(ServiceConfig::default());
    executor.reply(
        0,
        "<cliOutput><opRet>0</opRet><volInfo><volumes><volume><name>gv0</name>\
         <statusStr>Started</statusStr><typeStr>Replicate</typeStr><transport>0</transport>\
         <bricks><brick><name>n1:/b</name></brick></bricks>\
         </volume><count>1</count></volumes></volInfo></cliOutput>",
    );
    let base = spawn_server(service).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/gluster/volume/info"))
        .json(&json!({"volname": "gv0"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["result"], "OK");
    let volumes = &body["VolInfo"]["Volumes"];
    assert_eq!(volumes["Count"], 1);
    assert_eq!(volumes["Volume"][0]["status_str"], "Started");
    assert_eq!(volumes["Volume"][0]["type_str"], "Replicate");
    assert_eq!(volumes["Volume"][0]["transports"], "0");
    assert_eq!(volumes["Volume"][0]["bricks"][0]["brick"], "n1:/b");
    assert_eq!(executor.commands(), ["gluster volume info gv0 --xml"]);
}

#[tokio::test]
async fn test_mount_list_reads_mount_table() {
    let mut mtab = tempfile::NamedTempFile::new().unwrap();
    writeln!(mtab, "/dev/sda1 / ext4 rw,relatime 0 0").unwrap();
    writeln!(mtab, "localhost:gv0 /mnt/gv0 fuse.glusterfs rw,relatime 0 0").unwrap();

    let config = ServiceConfig {
        mount_table: mtab.path().to_path_buf(),
        ..Default::default()
    };
    let (service, executor) = scripted_service(config);
    let base = spawn_server(service).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{base}/gluster/mount/list"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // 1000 blocks of 4 KiB with 750 available
    assert_eq!(
        body,
        json!({
            "result": "OK",
            "data": [{
                "filesystem": "gv0",
                "type": "fuse.glusterfs",
                "size": "3.9M",
                "used": "1000.0K",
                "avail": "2.9M",
                "use_percent": "25.0%",
                "mount_point": "/mnt/gv0"
            }]
        })
    );
    assert!(executor.commands().is_empty());
}

#[tokio::test]
async fn test_cors_headers() {
    let (service, _) = scripted_service(ServiceConfig::default());
    let base = spawn_server(service).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/gluster/peer/status"))
        .header("Origin", "http://dashboard.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (service, _) = scripted_service(ServiceConfig::default());
    let base = spawn_server(service).await;

    let response = reqwest::get(format!("{base}/gluster/volume/snapshot"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
