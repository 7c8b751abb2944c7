use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TrackReading {
    track: u8,
    label: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    completed: usize,
    total: usize,
    percent: f64,
}

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    readings: Vec<TrackReading>,
    progress: ProgressResponse,
}

#[derive(Debug, Deserialize)]
struct MonthGrid {
    year: i32,
    month: u32,
    leading_blanks: u32,
    days_in_month: u32,
    cells: Vec<Option<u32>>,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    cursor: String,
    today: String,
    grid: MonthGrid,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_mcheyne_tracker"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .env_remove("APP_PLAN_PATH")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_day(client: &Client, base_url: &str, date: &str) -> DayResponse {
    client
        .get(format!("{base_url}/api/day?date={date}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_toggle(client: &Client, base_url: &str, date: &str, track: u8) -> DayResponse {
    let response = client
        .post(format!("{base_url}/api/toggle"))
        .json(&serde_json::json!({ "date": date, "track": track }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_day_view_has_four_composite_readings() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let day = get_day(&client, &server.base_url, "2026-03-15").await;
    assert_eq!(day.date, "2026-03-15");
    assert_eq!(day.readings.len(), 4);
    for (i, reading) in day.readings.iter().enumerate() {
        assert_eq!(reading.track, i as u8 + 1);
        assert!(reading.label.contains(" / "));
    }
    assert_eq!(day.progress.total, 365 * 4);
}

#[tokio::test]
async fn http_toggle_twice_restores_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-07-04";

    let before = get_day(&client, &server.base_url, date).await;
    assert!(!before.readings[0].completed);

    let once = post_toggle(&client, &server.base_url, date, 1).await;
    assert!(once.readings[0].completed);
    assert_eq!(once.progress.completed, before.progress.completed + 1);
    assert!(once.progress.percent >= before.progress.percent);

    let twice = post_toggle(&client, &server.base_url, date, 1).await;
    assert!(!twice.readings[0].completed);
    assert_eq!(twice.progress.completed, before.progress.completed);
    assert_eq!(twice.progress.percent, before.progress.percent);
}

#[tokio::test]
async fn http_toggle_leaves_other_tracks_alone() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = "2026-09-10";

    let day = post_toggle(&client, &server.base_url, date, 2).await;
    assert!(day.readings[1].completed);
    assert!(!day.readings[0].completed);
    assert!(!day.readings[2].completed);
    assert!(!day.readings[3].completed);

    let neighbor = get_day(&client, &server.base_url, "2026-09-11").await;
    assert!(!neighbor.readings[1].completed);
}

#[tokio::test]
async fn http_progress_stays_in_bounds() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let progress: ProgressResponse = client
        .get(format!("{}/api/progress", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(progress.total, 365 * 4);
    assert!(progress.completed <= progress.total);
    assert!((0.0..=100.0).contains(&progress.percent));
}

#[tokio::test]
async fn http_calendar_grid_shape() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // April 2026 starts on a Wednesday and has 30 days
    let calendar: CalendarResponse = client
        .get(format!(
            "{}/api/calendar?cursor=2026-04-15&shift=0",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(calendar.cursor, "2026-04-15");
    assert!(!calendar.today.is_empty());
    assert_eq!(calendar.grid.year, 2026);
    assert_eq!(calendar.grid.month, 4);
    assert_eq!(calendar.grid.leading_blanks, 3);
    assert_eq!(calendar.grid.days_in_month, 30);
    assert_eq!(calendar.grid.cells.len(), 33);
    assert!(calendar.grid.cells[..3].iter().all(Option::is_none));
    assert_eq!(calendar.grid.cells[3], Some(1));
    assert_eq!(calendar.grid.cells[32], Some(30));
}

#[tokio::test]
async fn http_calendar_month_shift_rolls_overflow() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let calendar: CalendarResponse = client
        .get(format!(
            "{}/api/calendar?cursor=2026-01-31&shift=1",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Feb 2026 has no 31st, so the cursor lands on Mar 3
    assert_eq!(calendar.cursor, "2026-03-03");
    assert_eq!(calendar.grid.month, 3);
}

#[tokio::test]
async fn http_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let bad_date = client
        .get(format!("{}/api/day?date=not-a-date", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_date.status(), reqwest::StatusCode::BAD_REQUEST);

    let bad_track = client
        .post(format!("{}/api/toggle", server.base_url))
        .json(&serde_json::json!({ "date": "2026-03-15", "track": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_track.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_serves_offline_assets() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let plan: Vec<serde_json::Value> = client
        .get(format!("{}/mcheyne-plan.json", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(plan.len(), 365);
    assert!(plan[0].get("track1").is_some());

    let worker = client
        .get(format!("{}/service-worker.js", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(worker.status().is_success());
    let body = worker.text().await.unwrap();
    assert!(body.contains("mcheyne"));

    let shell = client
        .get(format!("{}/index.html", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(shell.status().is_success());
    let html = shell.text().await.unwrap();
    assert!(html.contains("calendar-grid"));
}

#[tokio::test]
async fn http_today_matches_server_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: DayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!today.date.is_empty());
    assert_eq!(today.readings.len(), 4);
}
