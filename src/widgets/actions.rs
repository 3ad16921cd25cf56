//! Widget action protocol.
//!
//! Widget buttons carry an action string. Three prefixes are understood by
//! the crate itself (`url:`, `copy:`, `msg:`); anything else is an opaque
//! legacy action handed to the host verbatim together with its payload map.

use crate::utils::clipboard::{Clipboard, ClipboardError};
use crate::utils::url::{sanitize_href, UNSAFE_URL_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const URL_PREFIX: &str = "url:";
const COPY_PREFIX: &str = "copy:";
const MESSAGE_PREFIX: &str = "msg:";

/// A button attached to a widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetAction {
    pub label: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Map<String, Value>>,
    /// Presentation hint such as `primary` or `link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl WidgetAction {
    pub fn kind(&self) -> ActionKind {
        ActionKind::parse(&self.action, self.payload.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionKind {
    OpenUrl(String),
    Copy(String),
    SendMessage(String),
    Legacy {
        action: String,
        payload: Option<Map<String, Value>>,
    },
}

impl ActionKind {
    pub fn parse(action: &str, payload: Option<&Map<String, Value>>) -> Self {
        let trimmed = action.trim();
        if let Some(target) = trimmed.strip_prefix(URL_PREFIX) {
            ActionKind::OpenUrl(target.trim().to_string())
        } else if let Some(text) = trimmed.strip_prefix(COPY_PREFIX) {
            ActionKind::Copy(text.to_string())
        } else if let Some(text) = trimmed.strip_prefix(MESSAGE_PREFIX) {
            ActionKind::SendMessage(text.to_string())
        } else {
            ActionKind::Legacy {
                action: action.to_string(),
                payload: payload.cloned(),
            }
        }
    }
}

pub type SendMessageHook = Box<dyn Fn(&str)>;
pub type CopySuccessHook = Box<dyn Fn(&str)>;
pub type FallbackActionHook = Box<dyn Fn(&str, Option<&Map<String, Value>>)>;

/// Optional host callbacks supplied alongside a render.
#[derive(Default)]
pub struct RenderHooks {
    pub on_send_message: Option<SendMessageHook>,
    pub on_copy_success: Option<CopySuccessHook>,
    pub on_action: Option<FallbackActionHook>,
}

impl RenderHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_send_message(mut self, hook: impl Fn(&str) + 'static) -> Self {
        self.on_send_message = Some(Box::new(hook));
        self
    }

    pub fn on_copy_success(mut self, hook: impl Fn(&str) + 'static) -> Self {
        self.on_copy_success = Some(Box::new(hook));
        self
    }

    pub fn on_action(
        mut self,
        hook: impl Fn(&str, Option<&Map<String, Value>>) + 'static,
    ) -> Self {
        self.on_action = Some(Box::new(hook));
        self
    }
}

/// Opens external links in a new browsing context (tab, window, browser).
pub trait LinkOpener {
    fn open_in_new_context(&self, url: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Opened(String),
    /// The url target was rejected by the href sanitizer.
    Blocked,
    Copied,
    CopyFailed(ClipboardError),
    MessageSent,
    /// Legacy action handed to the fallback hook.
    Forwarded,
    /// No hook was registered for the action.
    Unhandled,
}

/// Routes widget actions to the host's collaborators.
pub struct ActionDispatcher<'a> {
    opener: &'a dyn LinkOpener,
    clipboard: &'a dyn Clipboard,
    hooks: &'a RenderHooks,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(
        opener: &'a dyn LinkOpener,
        clipboard: &'a dyn Clipboard,
        hooks: &'a RenderHooks,
    ) -> Self {
        Self {
            opener,
            clipboard,
            hooks,
        }
    }

    pub fn dispatch(&self, action: &WidgetAction) -> ActionOutcome {
        self.dispatch_kind(action.kind())
    }

    /// Dispatch a raw action string, e.g. read back from a button's
    /// `data-action` attribute.
    pub fn dispatch_raw(
        &self,
        action: &str,
        payload: Option<&Map<String, Value>>,
    ) -> ActionOutcome {
        self.dispatch_kind(ActionKind::parse(action, payload))
    }

    pub fn dispatch_kind(&self, kind: ActionKind) -> ActionOutcome {
        match kind {
            ActionKind::OpenUrl(target) => {
                let url = sanitize_href(&target);
                if url == UNSAFE_URL_PLACEHOLDER {
                    warn!(target = %target, "blocked unsafe url action");
                    return ActionOutcome::Blocked;
                }
                self.opener.open_in_new_context(&url);
                ActionOutcome::Opened(url)
            }
            ActionKind::Copy(text) => match self.clipboard.write(&text) {
                Ok(()) => {
                    if let Some(hook) = &self.hooks.on_copy_success {
                        hook(&text);
                    }
                    ActionOutcome::Copied
                }
                Err(err) => {
                    debug!(error = %err, "copy action failed");
                    ActionOutcome::CopyFailed(err)
                }
            },
            ActionKind::SendMessage(text) => match &self.hooks.on_send_message {
                Some(hook) => {
                    hook(&text);
                    ActionOutcome::MessageSent
                }
                None => ActionOutcome::Unhandled,
            },
            ActionKind::Legacy { action, payload } => match &self.hooks.on_action {
                Some(hook) => {
                    hook(&action, payload.as_ref());
                    ActionOutcome::Forwarded
                }
                None => ActionOutcome::Unhandled,
            },
        }
    }
}
