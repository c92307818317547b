use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use percolate::config::Params;

#[derive(Deserialize)]
struct RunRequest {
    seed: Option<u64>,
    grid_size: Option<usize>,
    trials: Option<usize>,
    snapshot_cell: Option<usize>,
}

#[derive(Serialize)]
struct RunResponse {
    grid_size: usize,
    trials: usize,
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> String {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)
        .expect("PNG encode failed");
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    format!("data:image/png;base64,{}", b64)
}

async fn run_handler(
    Json(req): Json<RunRequest>,
) -> Result<Json<RunResponse>, (StatusCode, String)> {
    let seed = req.seed.unwrap_or(42);

    let defaults = Params::default();
    let params = Params {
        grid_size: req.grid_size.unwrap_or(defaults.grid_size),
        trials: req.trials.unwrap_or(defaults.trials),
        snapshot_cell: req.snapshot_cell.unwrap_or(defaults.snapshot_cell),
    };

    let result: Result<RunResponse, percolate::error::InvalidArgument> =
        tokio::task::spawn_blocking(move || {
            let (report, timings) = percolate::run(seed, &params)?;

            let layers = vec![Layer {
                name: "snapshot".into(),
                data_url: encode_png(
                    &report.snapshot_rgba,
                    report.snapshot_px,
                    report.snapshot_px,
                ),
            }];

            let timing_entries = timings
                .iter()
                .map(|t| TimingEntry {
                    name: t.name.to_string(),
                    ms: t.ms,
                })
                .collect();

            Ok(RunResponse {
                grid_size: report.grid_size,
                trials: report.trials,
                mean: report.mean,
                stddev: report.stddev,
                confidence_lo: report.confidence_lo,
                confidence_hi: report.confidence_hi,
                layers,
                timings: timing_entries,
            })
        })
        .await
        .unwrap();

    match result {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
    }
}

#[tokio::main]
async fn main() {
    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/run", post(run_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("percolate server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
