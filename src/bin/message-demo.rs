//! Simulated message traffic over the pooled factories.
//!
//! Spawns a wave of short-lived tasks on a single-threaded runtime, each
//! rebuilding a server request from a canned transport fixture and
//! producing a response, then prints per-pool traffic counters.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use clap::Parser;
use tokio::task::LocalSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use http_message_pool::config::{load_config, MessageConfig};
use http_message_pool::factory::{FactoryError, MessageFactories};
use http_message_pool::task;
use http_message_pool::transport::RawRequest;

#[derive(Parser)]
#[command(name = "message-demo")]
#[command(about = "Simulate pooled HTTP message traffic", long_about = None)]
struct Cli {
    /// Optional TOML file with pool capacities.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total number of simulated tasks.
    #[arg(short, long, default_value_t = 1000)]
    tasks: usize,

    /// Tasks in flight at once.
    #[arg(long, default_value_t = 16)]
    concurrency: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_message_pool=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("message-demo v0.1.0 starting");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MessageConfig::default(),
    };

    tracing::info!(
        uri_capacity = config.uri_pool.capacity,
        request_capacity = config.request_pool.capacity,
        response_capacity = config.response_pool.capacity,
        server_request_capacity = config.server_request_pool.capacity,
        "Configuration loaded"
    );

    let factories = Arc::new(MessageFactories::from_config(&config));

    let local = LocalSet::new();
    let batch_size = cli.concurrency.max(1);
    local
        .run_until(async {
            let mut done = 0;
            while done < cli.tasks {
                let batch = batch_size.min(cli.tasks - done);
                let mut handles = Vec::with_capacity(batch);
                for i in 0..batch {
                    let factories = Arc::clone(&factories);
                    let task_no = done + i;
                    handles.push(tokio::task::spawn_local(task::scope(async move {
                        handle_one(&factories, task_no).await
                    })));
                }
                for handle in handles {
                    if let Err(e) = handle.await.expect("simulated task panicked") {
                        tracing::error!(error = %e, "Simulated task failed");
                    }
                }
                done += batch;
            }
        })
        .await;

    tracing::info!(tasks = cli.tasks, "Simulation complete");

    let stats = serde_json::json!({
        "uri": factories.uris.pool().stats(),
        "request": factories.requests.pool().stats(),
        "response": factories.responses.pool().stats(),
        "server_request": factories.server_requests.pool().stats(),
    });
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// One simulated request/response cycle inside its own task scope.
async fn handle_one(factories: &MessageFactories, task_no: usize) -> Result<(), FactoryError> {
    let raw = sample_raw(task_no);
    let request = factories.server_requests.create_server_request(raw.into())?;

    tracing::debug!(
        method = %request.get().method(),
        uri = %request.get().uri(),
        "Handling request"
    );

    // Cooperative suspension point, as I/O would be in a real handler.
    tokio::task::yield_now().await;

    let response = factories.responses.create_response(200, "OK")?;
    response
        .get_mut()
        .set_body(Bytes::from(format!("handled /jobs/{}", task_no)));
    Ok(())
}

/// Canned transport fields for one simulated request.
fn sample_raw(task_no: usize) -> RawRequest {
    let mut server = HashMap::new();
    server.insert("request_method".to_string(), "GET".to_string());
    server.insert("http_host".to_string(), "demo.internal:8080".to_string());
    server.insert(
        "request_uri".to_string(),
        format!("/jobs/{}?page=1", task_no),
    );
    server.insert("server_protocol".to_string(), "HTTP/1.1".to_string());

    let mut headers = HashMap::new();
    headers.insert("host".to_string(), "demo.internal:8080".to_string());
    headers.insert("accept".to_string(), "application/json".to_string());

    RawRequest {
        server,
        headers,
        body: Bytes::from_static(b"{}"),
        ..RawRequest::default()
    }
}
