//! Dashboard feature: the four summary counters

use crate::notification::Notification;
use admin_console_api::{ApiError, DashboardApi, DashboardData};
use admin_console_core::{
    SmallVec, async_effect,
    effect::{Effect, EffectId},
    environment::Clock,
    reducer::Reducer,
    smallvec,
};
use std::sync::Arc;

/// Cancellation id of the in-flight dashboard request
pub const FETCH: EffectId = EffectId::new("dashboard/fetch");

/// State of the dashboard page
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    /// Last loaded counters
    pub data: Option<DashboardData>,
    /// A request is in flight
    pub loading: bool,
    /// Error of the last request, cleared on success
    pub error: Option<ApiError>,
    /// Pending notifications
    pub notifications: Vec<Notification>,
}

/// Actions for the dashboard
#[derive(Clone, Debug)]
pub enum DashboardAction {
    /// Fetch the counters
    Load,
    /// The fetch completed
    Loaded(Result<DashboardData, ApiError>),
    /// The view showed the pending notifications
    NotificationsDismissed,
}

/// Environment dependencies for the dashboard reducer
#[derive(Clone)]
pub struct DashboardEnvironment {
    /// Dashboard service
    pub api: Arc<dyn DashboardApi>,
    /// Clock for notification timestamps
    pub clock: Arc<dyn Clock>,
}

impl DashboardEnvironment {
    /// Creates a new `DashboardEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn DashboardApi>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }
}

/// Reducer for the dashboard
#[derive(Clone, Debug, Default)]
pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Action = DashboardAction;
    type Environment = DashboardEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            DashboardAction::Load => {
                tracing::debug!("Loading dashboard");
                state.loading = true;

                let api = Arc::clone(&env.api);
                smallvec![
                    async_effect! {
                        Some(DashboardAction::Loaded(api.get_data().await))
                    }
                    .cancellable(FETCH)
                ]
            },
            DashboardAction::Loaded(Ok(data)) => {
                state.loading = false;
                state.data = Some(data);
                state.error = None;
                SmallVec::new()
            },
            DashboardAction::Loaded(Err(error)) => {
                tracing::warn!(%error, "Dashboard failed to load");
                state.loading = false;
                state
                    .notifications
                    .push(Notification::from_error(&error, env.clock.now()));
                state.error = Some(error);
                SmallVec::new()
            },
            DashboardAction::NotificationsDismissed => {
                state.notifications.clear();
                SmallVec::new()
            },
        }
    }
}
