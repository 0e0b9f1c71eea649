//! Type-erased action handlers.
//!
//! The registry stores handlers as `Arc<dyn ActionHandler>`. Plain async
//! closures over the raw payload implement the trait directly;
//! [`TypedHandler`] adapts a closure over a concrete input type.

use std::future::Future;
use std::marker::PhantomData;

use anyhow::Context as _;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// The effect side of a registered action.
///
/// Receives the validated (possibly normalized) payload and performs a
/// side-effecting, possibly asynchronous operation with no return value.
/// Failures are opaque to the dispatcher: message and structured cause are
/// preserved, never interpreted.
#[async_trait]
pub trait ActionHandler: Send + Sync + 'static {
    /// Run the action's effect with the validated payload.
    async fn call(&self, payload: serde_json::Value) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> ActionHandler for F
where
    F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn call(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        (self)(payload).await
    }
}

/// Adapter invoking a closure over a concrete input type.
///
/// Deserializes the validated payload into `T` before the call. Pair with
/// [`InputSchema::of`](crate::schema::InputSchema::of) over the same type
/// so the schema gate and the Rust type stay in agreement; a payload that
/// passes the schema but not deserialization surfaces as a handler
/// failure.
pub struct TypedHandler<T, F> {
    handler: F,
    _input: PhantomData<fn(T)>,
}

impl<T, F> TypedHandler<T, F> {
    /// Wrap a closure over a concrete input type.
    pub fn new<Fut>(handler: F) -> Self
    where
        F: Fn(T) -> Fut,
    {
        Self {
            handler,
            _input: PhantomData,
        }
    }
}

#[async_trait]
impl<T, F, Fut> ActionHandler for TypedHandler<T, F>
where
    T: DeserializeOwned + Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn call(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        let input: T = serde_json::from_value(payload)
            .context("payload did not deserialize into the handler's input type")?;
        (self.handler)(input).await
    }
}

impl<T, F> std::fmt::Debug for TypedHandler<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedHandler")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn closures_are_handlers() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = {
            let hits = Arc::clone(&hits);
            move |_payload: serde_json::Value| {
                let hits = Arc::clone(&hits);
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    anyhow::Ok(())
                }
            }
        };

        handler.call(json!(null)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn typed_handler_deserializes_before_the_call() {
        #[derive(Deserialize)]
        struct Operands {
            a: f64,
            b: f64,
        }

        let sum = Arc::new(AtomicUsize::new(0));
        let handler = TypedHandler::new({
            let sum = Arc::clone(&sum);
            move |input: Operands| {
                let sum = Arc::clone(&sum);
                async move {
                    sum.store((input.a + input.b) as usize, Ordering::SeqCst);
                    anyhow::Ok(())
                }
            }
        });

        handler.call(json!({ "a": 2, "b": 3 })).await.unwrap();
        assert_eq!(sum.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn typed_handler_reports_deserialization_failures() {
        #[derive(Deserialize)]
        struct Operands {
            #[allow(dead_code)]
            a: f64,
        }

        let handler = TypedHandler::new(|_input: Operands| async { anyhow::Ok(()) });
        let err = handler.call(json!({ "a": "not a number" })).await.unwrap_err();
        assert!(err.to_string().contains("did not deserialize"));
    }

    #[test]
    fn debug_names_the_input_type() {
        let handler = TypedHandler::new(|_input: u32| async { anyhow::Ok(()) });
        assert!(format!("{handler:?}").contains("u32"));
    }
}
