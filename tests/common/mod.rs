// 测试用的模拟 API 服务
// 按 "METHOD /path?query" 匹配预设的响应，并记录收到的每个请求

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use nh_client::api::ApiClient;
use nh_client::session::Session;
use nh_client::storage::{MemoryStore, SessionStore};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub target: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    once: HashMap<String, VecDeque<Reply>>,
    always: HashMap<String, Reply>,
    requests: Vec<Recorded>,
}

#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只响应一次，多次调用按顺序排队
    pub fn reply_once(&self, route: &str, status: u16, body: Value) -> &Self {
        self.reply_raw_once(route, status, &body.to_string())
    }

    pub fn reply_raw_once(&self, route: &str, status: u16, body: &str) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .once
            .entry(route.to_string())
            .or_default()
            .push_back(Reply {
                status,
                body: body.to_string(),
            });
        self
    }

    /// 没有一次性响应时使用的默认响应
    pub fn reply(&self, route: &str, status: u16, body: Value) -> &Self {
        self.inner.lock().unwrap().always.insert(
            route.to_string(),
            Reply {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, route: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| format!("{} {}", r.method, r.target) == route)
            .collect()
    }

    /// 启动服务，返回 origin
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn handle(
    State(mock): State<MockApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let route = format!("{} {}", method, target);

    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let reply = {
        let mut inner = mock.inner.lock().unwrap();
        inner.requests.push(Recorded {
            method: method.to_string(),
            target,
            authorization: header_value(header::AUTHORIZATION),
            content_type: header_value(header::CONTENT_TYPE),
            body: serde_json::from_slice(&body).ok(),
        });
        let queued = inner.once.get_mut(&route).and_then(VecDeque::pop_front);
        queued.or_else(|| inner.always.get(&route).cloned())
    };

    let reply = reply.unwrap_or_else(|| Reply {
        status: 404,
        body: json!({"success": false, "message": "Resource not found"}).to_string(),
    });

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

/// 一个空闲端口上的地址，连接会被拒绝
pub async fn unreachable_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn login_success(token: &str, full_name: &str) -> Value {
    json!({
        "success": true,
        "message": "Login successful",
        "data": {
            "token": token,
            "user": {
                "user_id": 1,
                "username": "admin",
                "full_name": full_name,
                "email": "admin@nh.example.org",
                "role": "central",
                "division_office_id": null,
                "division_name": null,
                "office_name": null
            }
        }
    })
}

/// 客户端和它背后的内存存储
pub async fn client_with_store(origin: &str, store: Arc<MemoryStore>) -> ApiClient {
    let session = Session::restore(store).await;
    ApiClient::new(origin, Arc::new(session)).unwrap()
}

pub async fn client(origin: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (client_with_store(origin, store.clone()).await, store)
}

/// 已经持有令牌的客户端
pub async fn client_with_token(origin: &str, token: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    store
        .set_entries(&[
            ("nh_token", token),
            ("nh_user", r#"{"full_name":"Asha Rao"}"#),
        ])
        .await
        .unwrap();
    (client_with_store(origin, store.clone()).await, store)
}
