//! Dashboard feature driven through the `Store`.

#![allow(clippy::unwrap_used)]

use admin_console::{DashboardAction, DashboardEnvironment, DashboardReducer, DashboardState};
use admin_console_api::{ApiError, DashboardData, ResponseCode};
use admin_console_runtime::Store;
use admin_console_testing::{StaticDashboardApi, test_clock};
use std::sync::Arc;
use std::time::Duration;

fn store(
    api: StaticDashboardApi,
) -> Store<DashboardState, DashboardAction, DashboardEnvironment, DashboardReducer> {
    let env = DashboardEnvironment::new(Arc::new(api), Arc::new(test_clock()));
    Store::new(DashboardState::default(), DashboardReducer, env)
}

#[tokio::test]
async fn load_fills_counters() {
    let data = DashboardData {
        users_count: 12,
        projects_count: 4,
        gateways_count: 9,
        devices_count: 130,
    };
    let api = StaticDashboardApi::ok(data);
    let store = store(api.clone());

    let loaded = store
        .send_and_wait_for(
            DashboardAction::Load,
            |action| matches!(action, DashboardAction::Loaded(_)),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
    assert!(matches!(loaded, DashboardAction::Loaded(Ok(d)) if d == data));

    store
        .send(DashboardAction::Load)
        .await
        .unwrap()
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.data, Some(data));
    assert!(!state.loading);
    assert_eq!(api.calls(), 2);
}

#[tokio::test]
async fn failure_is_reported_once() {
    let store = store(StaticDashboardApi::failing(ApiError::api(
        ResponseCode::Unauthorized,
        401,
        "token expired",
    )));

    store
        .send(DashboardAction::Load)
        .await
        .unwrap()
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert!(state.data.is_none());
    assert_eq!(state.error.map(|e| e.code()), Some(ResponseCode::Unauthorized));
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].message, "Unauthorized");
}
