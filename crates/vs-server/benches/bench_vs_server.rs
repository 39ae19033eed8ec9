use axum::body::Body;
use axum::http::Request;
use axum::Router;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;
use tower::ServiceExt;
use vs_core::SkillConfig;
use vs_handler::{RandomSource, SeededRandom};
use vs_server::{app_with_state, state::AppState};

fn launch_body(application_id: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "bench",
            "application": { "applicationId": application_id },
            "user": { "userId": "bench" }
        },
        "request": { "type": "LaunchRequest", "requestId": "bench", "locale": "en-US" }
    }))
    .unwrap()
}

fn invoke_n(rt: &Runtime, app: &Router, body: &[u8], n: usize) {
    rt.block_on(async {
        for _ in 0..n {
            let req = Request::post("/")
                .header("content-type", "application/json")
                .body(Body::from(body.to_vec()))
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            black_box(resp.status());
        }
    })
}

fn bench_http_invoke(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let body = launch_body("amzn1.ask.skill.coin");

    let thread = app_with_state(AppState::new());
    c.bench_function("http_invoke_thread_random_1000", |b| {
        b.iter(|| invoke_n(&rt, &thread, &body, 1000))
    });

    let seeded = app_with_state(AppState::new().with_random(|| -> Box<dyn RandomSource + Send> {
        Box::new(SeededRandom::new(11))
    }));
    c.bench_function("http_invoke_seeded_1000", |b| {
        b.iter(|| invoke_n(&rt, &seeded, &body, 1000))
    });
}

fn bench_http_rejections(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let config = SkillConfig { application_id: Some("amzn1.ask.skill.coin".into()), ..SkillConfig::default() };
    let app = app_with_state(AppState::with_config(config));

    let malformed = br#"{"version":"1.0","request":{}}"#.to_vec();
    c.bench_function("http_reject_malformed_1000", |b| {
        b.iter(|| invoke_n(&rt, &app, &malformed, 1000))
    });

    let foreign = launch_body("amzn1.ask.skill.other");
    c.bench_function("http_reject_application_1000", |b| {
        b.iter(|| invoke_n(&rt, &app, &foreign, 1000))
    });
}

criterion_group!(benches, bench_http_invoke, bench_http_rejections);
criterion_main!(benches);
