//! Calculator demo: four arithmetic actions registered once, then driven
//! from both call sites — direct dispatch the way UI event handlers would,
//! and scripted tool-calls the way an AI agent would. Finishes with the
//! sync document a build step would ship.
//!
//! Run with `RUST_LOG=debug` to watch registration and dispatch; the
//! re-registration of `add_numbers` surfaces the duplicate-id warning.

use std::sync::{Arc, Mutex, MutexGuard};

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use actkit_bridge::{ActConfig, SyncDocument, ToolCall, dispatch_tool_call, tool_descriptors};
use actkit_core::{Act, ActionDefinition, InputSchema, TypedHandler};

/// History entries kept, newest first.
const HISTORY_LIMIT: usize = 10;

/// Stand-in project config when no `actkit.toml` is present.
const DEMO_CONFIG: &str = "api_key = \"demo-api-key\"\n\
                           project_id = \"demo-project-id\"\n\
                           description = \"Demo app exposing AI-callable calculator actions\"\n";

#[derive(Debug, Deserialize, JsonSchema)]
struct Operands {
    a: f64,
    b: f64,
}

/// The state both callers mutate — the same struct a UI would render.
#[derive(Debug, Default)]
struct Calculator {
    result: String,
    history: Vec<String>,
}

impl Calculator {
    fn record(&mut self, a: f64, b: f64, symbol: char, value: f64) {
        self.result = value.to_string();
        self.history
            .insert(0, format!("{a} {symbol} {b} = {}", self.result));
        self.history.truncate(HISTORY_LIMIT);
    }

    fn note(&mut self, message: &str) {
        self.result = message.to_owned();
    }
}

type SharedCalculator = Arc<Mutex<Calculator>>;

fn lock(state: &SharedCalculator) -> anyhow::Result<MutexGuard<'_, Calculator>> {
    state
        .lock()
        .map_err(|_| anyhow::anyhow!("calculator state poisoned"))
}

fn register_add(act: &mut Act, state: &SharedCalculator, description: &str) -> anyhow::Result<()> {
    let calc = Arc::clone(state);
    act.action(
        ActionDefinition::new("add_numbers", description)
            .with_input(InputSchema::of::<Operands>()?),
        TypedHandler::new(move |input: Operands| {
            let calc = Arc::clone(&calc);
            async move {
                lock(&calc)?.record(input.a, input.b, '+', input.a + input.b);
                anyhow::Ok(())
            }
        }),
    );
    Ok(())
}

fn register_actions(state: &SharedCalculator) -> anyhow::Result<Act> {
    let mut act = Act::new();

    register_add(&mut act, state, "Add two numbers")?;

    let calc = Arc::clone(state);
    act.action(
        ActionDefinition::new("subtract_numbers", "Subtract one number from another")
            .with_input(InputSchema::of::<Operands>()?),
        TypedHandler::new(move |input: Operands| {
            let calc = Arc::clone(&calc);
            async move {
                lock(&calc)?.record(input.a, input.b, '-', input.a - input.b);
                anyhow::Ok(())
            }
        }),
    );

    let calc = Arc::clone(state);
    act.action(
        ActionDefinition::new("multiply_numbers", "Multiply two numbers together")
            .with_input(InputSchema::of::<Operands>()?),
        TypedHandler::new(move |input: Operands| {
            let calc = Arc::clone(&calc);
            async move {
                lock(&calc)?.record(input.a, input.b, '×', input.a * input.b);
                anyhow::Ok(())
            }
        }),
    );

    let calc = Arc::clone(state);
    act.action(
        ActionDefinition::new("divide_numbers", "Divide one number by another")
            .with_input(InputSchema::of::<Operands>()?),
        TypedHandler::new(move |input: Operands| {
            let calc = Arc::clone(&calc);
            async move {
                let mut calc = lock(&calc)?;
                let quotient = input.a / input.b;
                if quotient.is_finite() {
                    calc.record(input.a, input.b, '÷', quotient);
                } else {
                    calc.note("Cannot divide by zero");
                }
                anyhow::Ok(())
            }
        }),
    );

    let calc = Arc::clone(state);
    act.action(
        ActionDefinition::new("clear_history", "Clear the calculation history"),
        move |_: Value| {
            let calc = Arc::clone(&calc);
            async move {
                lock(&calc)?.history.clear();
                anyhow::Ok(())
            }
        },
    );

    Ok(act)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state: SharedCalculator = Arc::new(Mutex::new(Calculator::default()));
    let mut act = register_actions(&state)?;

    // A dev-reload shaped re-registration: warns, the newer description wins.
    register_add(&mut act, &state, "Add two numbers together")?;

    println!("── UI path: direct dispatch ─────────────────────────────");
    act.run("add_numbers", Some(json!({ "a": 2, "b": 3 }))).await?;
    act.run("subtract_numbers", Some(json!({ "a": 10, "b": 4 }))).await?;
    act.run("multiply_numbers", Some(json!({ "a": 6, "b": 7 }))).await?;
    act.run("divide_numbers", Some(json!({ "a": 1, "b": 0 }))).await?;

    // Direct callers get the raw failure, exactly as if they had called
    // the undecorated function.
    if let Err(err) = act.run("add_numbers", Some(json!({ "a": 2 }))).await {
        println!("rejected: {err}");
    }

    {
        let calc = lock(&state)?;
        println!("result: {}", calc.result);
        for line in &calc.history {
            println!("  {line}");
        }
    }

    println!();
    println!("── AI path: advertised tools ────────────────────────────");
    println!("{}", serde_json::to_string_pretty(&tool_descriptors(&act))?);

    println!();
    println!("── AI path: scripted tool-calls ─────────────────────────");
    let script = vec![
        ToolCall {
            id: "tc_1".into(),
            name: "add_numbers".into(),
            arguments: json!({ "a": 19, "b": 23 }),
        },
        // Missing operand: the report cites every violated constraint.
        ToolCall {
            id: "tc_2".into(),
            name: "multiply_numbers".into(),
            arguments: json!({ "a": 7 }),
        },
        // No such action: the report says so instead of crashing the turn.
        ToolCall {
            id: "tc_3".into(),
            name: "sqrt_number".into(),
            arguments: json!({ "a": 16 }),
        },
        ToolCall {
            id: "tc_4".into(),
            name: "clear_history".into(),
            arguments: Value::Null,
        },
    ];

    for call in script {
        let response = dispatch_tool_call(&act, call).await;
        println!("{}", serde_json::to_string_pretty(&response.output)?);
    }

    println!();
    println!("── Build path: sync export ──────────────────────────────");
    let config = match ActConfig::load() {
        Ok(config) => config,
        Err(err) if err.is_not_found() => {
            tracing::debug!(error = %err, "no project config, using demo defaults");
            DEMO_CONFIG.parse()?
        }
        Err(err) => return Err(err.into()),
    };
    let document = SyncDocument::assemble(&config, &act);
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
