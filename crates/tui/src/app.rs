use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sentinel_core::{Message, MetricsWindow};
use sentinel_inventory::{logs, nodes, security, LogEntry, SecurityPosture, StorageNode};

/// Which view fills the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Security,
    Analyst,
}

impl View {
    pub const ALL: [View; 3] = [View::Overview, View::Security, View::Analyst];

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "System Overview",
            View::Security => "Security & Protection",
            View::Analyst  => "AI Log Analyst",
        }
    }

    fn next(self) -> View {
        match self {
            View::Overview => View::Security,
            View::Security => View::Analyst,
            View::Analyst  => View::Overview,
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// One entry in the analyst conversation.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

const GREETING: &str = "Hello. I am Sentinel, your storage diagnostics assistant. \
I have access to the recent system logs. How can I assist you with analyzing the \
storage infrastructure today?";

/// Full console state.
///
/// Background tasks never touch this directly; they publish [`Message`]s that
/// the event loop folds in via [`App::on_message`].
pub struct App {
    pub view: View,
    /// Latest metrics window published by the feed.
    pub window: MetricsWindow,
    pub nodes: Vec<StorageNode>,
    pub logs: Vec<LogEntry>,
    pub posture: SecurityPosture,
    pub chat: Vec<ChatMessage>,
    /// Chat input line under construction.
    pub input: String,
    /// One query in flight at a time; input is ignored while set.
    pub awaiting_reply: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(window: MetricsWindow) -> Self {
        Self {
            view: View::Overview,
            window,
            nodes:   nodes::fleet(),
            logs:    logs::recent_entries(),
            posture: security::posture(),
            chat:    vec![ChatMessage::new(Role::Model, GREETING)],
            input:   String::new(),
            awaiting_reply: false,
            should_quit:    false,
        }
    }

    /// Context blob handed to the analyst with every query.
    #[must_use]
    pub fn log_context(&self) -> String {
        logs::render_context(&self.logs)
    }

    /// Fold a background-task message into the state.
    pub fn on_message(&mut self, message: Message) {
        match message {
            Message::WindowAdvanced(window) => self.window = window,
            Message::AnalystReply(text) => {
                self.chat.push(ChatMessage::new(Role::Model, text));
                self.awaiting_reply = false;
            }
        }
    }

    /// Handle one key press. Returns a query when the user submits a chat
    /// message that should be dispatched to the analyst.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Tab => {
                self.view = self.view.next();
                return None;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            _ => {}
        }

        match self.view {
            View::Analyst => self.on_chat_key(key),
            _ => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
                None
            }
        }
    }

    fn on_chat_key(&mut self, key: KeyEvent) -> Option<String> {
        if self.awaiting_reply {
            return None;
        }
        match key.code {
            KeyCode::Enter => {
                let query = self.input.trim().to_string();
                if query.is_empty() {
                    return None;
                }
                self.input.clear();
                self.chat.push(ChatMessage::new(Role::User, query.clone()));
                self.awaiting_reply = true;
                Some(query)
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }
}
