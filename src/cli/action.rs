//! `action` command: run one widget action string the way a host would.

use std::error::Error;

use serde_json::{Map, Value};

use crate::utils::clipboard::SystemClipboard;
use crate::widgets::{ActionDispatcher, ActionOutcome, LinkOpener, RenderHooks};

/// Prints the url instead of launching a browser.
struct PrintingOpener;

impl LinkOpener for PrintingOpener {
    fn open_in_new_context(&self, url: &str) {
        println!("🔗 open {url}");
    }
}

pub fn run_action(action: &str, payload: Option<&str>) -> Result<(), Box<dyn Error>> {
    let payload = parse_payload(payload)?;
    let hooks = RenderHooks::new()
        .on_send_message(|text| println!("💬 send {text}"))
        .on_copy_success(|text| println!("📋 copied {text}"))
        .on_action(|action, payload| {
            let payload = payload
                .map(|map| Value::Object(map.clone()).to_string())
                .unwrap_or_else(|| "null".to_string());
            println!("➡️  {action} {payload}");
        });
    let dispatcher = ActionDispatcher::new(&PrintingOpener, &SystemClipboard, &hooks);

    match dispatcher.dispatch_raw(action, payload.as_ref()) {
        ActionOutcome::Blocked => Err(format!("blocked unsafe url in action '{action}'").into()),
        ActionOutcome::CopyFailed(err) => Err(Box::new(err)),
        _ => Ok(()),
    }
}

pub fn parse_payload(payload: Option<&str>) -> Result<Option<Map<String, Value>>, Box<dyn Error>> {
    let Some(raw) = payload else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(Some(map)),
        other => Err(format!("payload must be a JSON object, got {other}").into()),
    }
}
