// tests/integration/watch_runtime.rs

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use sankeydag::dag::GraphAggregator;
use sankeydag::engine::{OutlineSession, Runtime, RuntimeEvent, RuntimeOptions};
use sankeydag::fs::FileSystem;
use sankeydag::fs::mock::MockFileSystem;
use sankeydag::outline::EdgeParser;
use sankeydag::output::OutputTarget;
use sankeydag::types::OutputFormat;

use crate::common::{init_tracing, with_timeout};

fn input() -> PathBuf {
    PathBuf::from("/notes/plan.md")
}

fn output() -> PathBuf {
    PathBuf::from("/out/graph.json")
}

fn runtime(fs: &MockFileSystem, rx: mpsc::Receiver<RuntimeEvent>) -> Runtime {
    let session = OutlineSession::new(EdgeParser::default(), GraphAggregator::default());
    let fs: Arc<dyn FileSystem> = Arc::new(fs.clone());
    Runtime::new(
        session,
        rx,
        fs,
        RuntimeOptions {
            input: input(),
            target: OutputTarget::File(output()),
            format: OutputFormat::Json,
            pretty: false,
        },
    )
}

fn node_names(json: &str) -> Vec<String> {
    let value: Value = serde_json::from_str(json).unwrap();
    value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn rebuild_is_written_to_output() {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_file(input(), "* Design > Research [5|0.1]\n");

        let (tx, rx) = mpsc::channel(8);
        tx.send(RuntimeEvent::OutlineChanged).await.unwrap();
        tx.send(RuntimeEvent::ShutdownRequested).await.unwrap();

        let session = runtime(&fs, rx).run().await.unwrap();

        assert_eq!(session.revisions(), 1);
        let written = fs.contents(output()).expect("output written");
        assert_eq!(node_names(&written), vec!["Research", "Design"]);
    })
    .await
}

#[tokio::test]
async fn cyclic_edit_keeps_previous_output() {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_file(input(), "* B > A\n");

        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(runtime(&fs, rx).run());

        tx.send(RuntimeEvent::OutlineChanged).await.unwrap();
        // Let the first evaluation land before editing.
        while fs.contents(output()).is_none() {
            tokio::task::yield_now().await;
        }
        let before = fs.contents(output()).unwrap();

        fs.add_file(input(), "* B > A\n* A > B\n");
        tx.send(RuntimeEvent::OutlineChanged).await.unwrap();
        tx.send(RuntimeEvent::ShutdownRequested).await.unwrap();

        let session = handle.await.unwrap().unwrap();

        assert_eq!(session.revisions(), 1);
        assert_eq!(fs.contents(output()).unwrap(), before);
        assert!(session.last_valid().unwrap().node("A").is_some());
    })
    .await
}

#[tokio::test]
async fn unchanged_text_is_not_rewritten() {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_file(input(), "* B > A [2]\n");

        let (tx, rx) = mpsc::channel(8);
        for _ in 0..3 {
            tx.send(RuntimeEvent::OutlineChanged).await.unwrap();
        }
        tx.send(RuntimeEvent::ShutdownRequested).await.unwrap();

        let session = runtime(&fs, rx).run().await.unwrap();
        assert_eq!(session.revisions(), 1);
    })
    .await
}

#[tokio::test]
async fn missing_input_waits_for_next_change() {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();

        let (tx, rx) = mpsc::channel(8);
        tx.send(RuntimeEvent::OutlineChanged).await.unwrap();
        drop(tx);

        let session = runtime(&fs, rx).run().await.unwrap();
        assert_eq!(session.revisions(), 0);
        assert!(fs.contents(output()).is_none());
    })
    .await
}
