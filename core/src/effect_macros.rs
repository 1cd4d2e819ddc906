//! Declarative macros for ergonomic effect construction
//!
//! These macros reduce boilerplate when creating `Effect` variants, particularly
//! for service calls and debounce timers.

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```rust,ignore
/// use admin_console_core::async_effect;
///
/// async_effect! {
///     let result = api.get_data().await;
///     Some(DashboardAction::Loaded(result.map_err(Into::into)))
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

/// Create an `Effect::Delay` for scheduling delayed actions
///
/// # Example
///
/// ```rust,ignore
/// use admin_console_core::delay;
/// use std::time::Duration;
///
/// delay! {
///     duration: Duration::from_secs(1),
///     action: ProjectsAction::SearchCommitted(text)
/// }
/// ```
#[macro_export]
macro_rules! delay {
    (
        duration: $duration:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Delay {
            duration: $duration,
            action: ::std::boxed::Box::new($action),
        }
    };
}

/// Create a debounced action: a delay that restarts whenever it is re-issued
/// under the same id
///
/// # Example
///
/// ```rust,ignore
/// use admin_console_core::debounce;
///
/// debounce! {
///     id: SEARCH_DEBOUNCE,
///     duration: Duration::from_millis(1000),
///     action: ProjectsAction::SearchCommitted(text)
/// }
/// ```
#[macro_export]
macro_rules! debounce {
    (
        id: $id:expr,
        duration: $duration:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Cancellable {
            id: $id,
            effect: ::std::boxed::Box::new($crate::delay! {
                duration: $duration,
                action: $action
            }),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::{Effect, EffectId};
    use std::time::Duration;

    #[derive(Clone, Debug)]
    enum TestAction {
        AsyncResult { value: i32 },
        SearchCommitted(String),
    }

    #[test]
    fn test_async_effect_macro() {
        let effect = async_effect! {
            Some(TestAction::AsyncResult { value: 42 })
        };

        assert!(matches!(effect, Effect::Future(_)));
    }

    #[test]
    fn test_delay_macro() {
        let effect = delay! {
            duration: Duration::from_secs(30),
            action: TestAction::SearchCommitted("late".to_string())
        };

        assert!(matches!(effect, Effect::Delay { .. }));
    }

    #[test]
    fn test_debounce_macro() {
        const ID: EffectId = EffectId::new("debounce");

        let effect = debounce! {
            id: ID,
            duration: Duration::from_millis(1000),
            action: TestAction::SearchCommitted("abc".to_string())
        };

        match effect {
            Effect::Cancellable { id, effect } => {
                assert_eq!(id, ID);
                assert!(matches!(
                    *effect,
                    Effect::Delay { duration, .. } if duration == Duration::from_millis(1000)
                ));
            },
            other => unreachable!("expected cancellable delay, got {other:?}"),
        }
    }
}
