//! HTTP integration tests against an in-process mock backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use habit_client::display::{roadmap_fill_percent, roadmap_status_label};
use habit_client::{
    initial_selection, ApiConfig, ApiError, AskRequest, HabitApi, ImageUpload, NewHabit,
    NewProgress, RecordId, RequestSequencer, Transcript, ViewState,
};

#[derive(Default)]
struct Backend {
    habits: Vec<Value>,
    next_id: i64,
    hits: HashMap<String, usize>,
    asked: Vec<Value>,
    progress: Vec<Value>,
}

impl Backend {
    fn seeded() -> Self {
        Self {
            habits: vec![json!({
                "id": 1,
                "name": "Read",
                "description": "Daily reading",
                "target_days_per_week": 5
            })],
            next_id: 2,
            ..Default::default()
        }
    }

    fn hit(&mut self, key: String) {
        *self.hits.entry(key).or_default() += 1;
    }
}

type Shared = Arc<Mutex<Backend>>;

async fn list_habits(State(state): State<Shared>) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.hit("habits".into());
    Json(Value::Array(backend.habits.clone()))
}

/// Acknowledges with only the new id, or with no body at all for "Quiet".
async fn create_habit(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();
    let id = backend.next_id;
    backend.next_id += 1;
    let quiet = body["name"] == "Quiet";
    let mut habit = body;
    habit["id"] = json!(id);
    backend.habits.push(habit);
    if quiet {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
    }
}

async fn roadmap(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    state.lock().unwrap().hit(format!("roadmap/{id}"));
    match id.as_str() {
        "missing" => (StatusCode::NOT_FOUND, "no such habit").into_response(),
        "13" => Json(json!({ "not": "a list" })).into_response(),
        "1" => Json(json!([
            { "id": 9, "title": "Week 1", "description": "", "order": 0, "completed": false }
        ]))
        .into_response(),
        other => Json(json!([
            {
                "id": 10,
                "title": format!("Plan for {other}"),
                "description": "",
                "order": 2,
                "completed": false
            },
            { "id": 11, "title": "Warm-up", "description": "", "order": 1, "completed": true }
        ]))
        .into_response(),
    }
}

async fn resources(State(state): State<Shared>, Path(id): Path<String>) -> Json<Value> {
    state.lock().unwrap().hit(format!("resources/{id}"));
    Json(json!([{
        "id": 1,
        "type": "article",
        "title": "Atomic habits",
        "url": "https://example.com/a",
        "provider": "Blog"
    }]))
}

async fn ask(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let answer = format!("You asked: {}", body["question"].as_str().unwrap_or_default());
    state.lock().unwrap().asked.push(body);
    Json(json!({ "answer": answer }))
}

async fn progress(State(state): State<Shared>, Path(id): Path<String>) -> Json<Value> {
    let backend = state.lock().unwrap();
    let items: Vec<Value> = backend
        .progress
        .iter()
        .filter(|p| p["habit_id"].to_string() == id)
        .cloned()
        .collect();
    let streak = items.len();
    Json(json!({ "items": items, "streak": streak }))
}

async fn add_progress(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    state.lock().unwrap().progress.push(body);
    Json(json!({ "ok": true }))
}

async fn spawn_backend() -> (HabitApi, Shared) {
    let state: Shared = Arc::new(Mutex::new(Backend::seeded()));
    let app = Router::new()
        .route("/api/habits", get(list_habits).post(create_habit))
        .route("/api/habits/:id/roadmap", get(roadmap))
        .route("/api/habits/:id/resources", get(resources))
        .route("/api/ask", post(ask))
        .route("/api/progress", post(add_progress))
        .route("/api/progress/:id", get(progress))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = HabitApi::new(ApiConfig::new(format!("http://{addr}/")));
    (api, state)
}

#[tokio::test]
async fn habits_load_and_first_roadmap_renders_pending() {
    let (api, _state) = spawn_backend().await;

    let habits = api.list_habits().await.unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Read");
    assert_eq!(habits[0].target_days_per_week, 5);

    let active = initial_selection(None, &habits).unwrap();
    assert_eq!(active, RecordId::Number(1));

    let items = api.roadmap(&active).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Week 1");
    assert_eq!(roadmap_fill_percent(&items[0]), 0);
    assert_eq!(roadmap_status_label(&items[0]), "Pending");
}

#[tokio::test]
async fn created_habit_appears_after_reload() {
    let (api, _state) = spawn_backend().await;

    api.create_habit(&NewHabit {
        name: "Meditate".into(),
        description: "Ten minutes".into(),
        ..Default::default()
    })
    .await
    .unwrap();

    let habits = api.list_habits().await.unwrap();
    assert_eq!(habits.len(), 2);
    let created = habits.iter().find(|h| h.name == "Meditate").unwrap();
    assert_eq!(created.id, RecordId::Number(2));
    assert_eq!(created.target_days_per_week, 5);

    // An existing selection survives the reload.
    let current = RecordId::Number(1);
    assert_eq!(initial_selection(Some(&current), &habits), None);
}

#[tokio::test]
async fn partial_or_empty_create_acknowledgement_is_success() {
    let (api, state) = spawn_backend().await;

    // `{"id":2}` with 201 and an empty 204 both mean the habit exists.
    for name in ["Stretch", "Quiet"] {
        let result = api
            .create_habit(&NewHabit {
                name: name.into(),
                ..Default::default()
            })
            .await;
        assert!(result.is_ok(), "{name}: {result:?}");
    }

    assert_eq!(state.lock().unwrap().habits.len(), 3);
    let names: Vec<_> = api
        .list_habits()
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names, ["Read", "Stretch", "Quiet"]);
}

#[tokio::test]
async fn resources_are_listed_for_habit() {
    let (api, state) = spawn_backend().await;
    let resources = api.resources(&RecordId::Number(1)).await.unwrap();
    assert_eq!(resources[0].kind, "article");
    assert_eq!(resources[0].provider, "Blog");
    assert_eq!(state.lock().unwrap().hits.get("resources/1"), Some(&1));
}

#[tokio::test]
async fn ask_sends_data_url_and_grows_transcript() {
    let (api, state) = spawn_backend().await;
    let habit = RecordId::Number(1);
    let mut transcript = Transcript::new();

    let image = ImageUpload::new("cover.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]);
    let data_url = image.to_data_url();
    let answer = api
        .ask(&AskRequest {
            habit_id: &habit,
            question: "Is this a good book?",
            image_base64: Some(&data_url),
        })
        .await
        .unwrap();
    transcript.record_exchange("Is this a good book?", Some(data_url.clone()), answer.answer);

    let answer = api
        .ask(&AskRequest {
            habit_id: &habit,
            question: "How long per day?",
            image_base64: None,
        })
        .await
        .unwrap();
    transcript.record_exchange("How long per day?", None, answer.answer);

    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript.messages()[1].content, "You asked: Is this a good book?");
    assert_eq!(transcript.messages()[3].content, "You asked: How long per day?");

    let backend = state.lock().unwrap();
    assert_eq!(backend.asked[0]["habit_id"], json!(1));
    assert_eq!(backend.asked[0]["image_base64"], json!("data:image/jpeg;base64,/9j/4A=="));
    assert_eq!(backend.asked[1]["image_base64"], Value::Null);
}

#[tokio::test]
async fn progress_submission_is_visible_on_refetch() {
    let (api, state) = spawn_backend().await;
    let habit = RecordId::Number(1);

    let before = api.progress(&habit).await.unwrap();
    assert!(before.items.is_empty());
    assert_eq!(before.streak, 0);

    api.add_progress(&NewProgress {
        habit_id: &habit,
        note: "Read 10 pages",
        image_base64: None,
    })
    .await
    .unwrap();

    let after = api.progress(&habit).await.unwrap();
    assert_eq!(after.streak, 1);
    assert_eq!(after.items[0].visible_note(), Some("Read 10 pages"));
    assert_eq!(after.items[0].habit_id, Some(habit.clone()));
    assert_eq!(state.lock().unwrap().progress[0]["image_base64"], Value::Null);
}

#[tokio::test]
async fn switching_habits_fetches_once_each_and_drops_stale_response() {
    let (api, state) = spawn_backend().await;
    let sequencer = RequestSequencer::new();
    let mut view = ViewState::default();

    let first = sequencer.begin(Some(RecordId::Number(1))).unwrap();
    let second = sequencer.begin(Some(RecordId::Number(2))).unwrap();

    let (api_a, api_b) = (api.clone(), api.clone());
    let (stale, fresh) = tokio::join!(
        first.run(|id| async move { api_a.roadmap(&id).await }),
        second.run(|id| async move { api_b.roadmap(&id).await }),
    );

    assert!(stale.is_none());
    view.settle(fresh.unwrap());
    assert_eq!(view.data[0].title, "Plan for 2");

    let backend = state.lock().unwrap();
    assert_eq!(backend.hits.get("roadmap/1"), Some(&1));
    assert_eq!(backend.hits.get("roadmap/2"), Some(&1));
}

#[tokio::test]
async fn error_status_is_reported_and_view_keeps_data() {
    let (api, _state) = spawn_backend().await;
    let mut view = ViewState::default();
    view.settle(api.roadmap(&RecordId::Number(1)).await);
    assert_eq!(view.data.len(), 1);

    let result = api.roadmap(&RecordId::from("missing")).await;
    match &result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(*status, 404);
            assert_eq!(body, "no such habit");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    view.settle(result);
    assert_eq!(view.data.len(), 1);
    assert!(view.notice.is_some());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (api, _state) = spawn_backend().await;
    let err = api.roadmap(&RecordId::Number(13)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HabitApi::new(ApiConfig::new(format!("http://127.0.0.1:{port}")));
    let err = api.list_habits().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
