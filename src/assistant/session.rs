//! Conversation session
//!
//! Append-only log of user and bot turns. Each accepted user turn schedules one
//! delayed bot reply on the Tokio runtime.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, Weak};

use tokio::sync::{mpsc, watch};
use uuid::Uuid;

use crate::assistant::responder::{classify, select_response, GREETING};
use crate::types::config::{ChatConfig, ReplyPolicy};
use crate::types::message::{Message, MessageId, Sender};

/// Whether the session owes the user an answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Handle to a chat session. Clones share the same log.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    id: Uuid,
    config: ChatConfig,
    log: Mutex<Vec<Message>>,
    next_id: AtomicU64,
    pending: AtomicUsize,
    open: AtomicBool,
    revision: watch::Sender<u64>,
    queue: OnceLock<mpsc::UnboundedSender<String>>,
}

impl ChatSession {
    /// Start a session whose log holds only the greeting
    pub fn new(config: ChatConfig) -> Self {
        let (revision, _) = watch::channel(0);
        let inner = SessionInner {
            id: Uuid::new_v4(),
            config,
            log: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            pending: AtomicUsize::new(0),
            open: AtomicBool::new(false),
            revision,
            queue: OnceLock::new(),
        };
        inner.append(Sender::Bot, GREETING.to_string());

        tracing::info!(
            session = %inner.id,
            delay_ms = inner.config.reply_delay.as_millis() as u64,
            policy = ?inner.config.reply_policy,
            "Chat session started"
        );

        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn config(&self) -> &ChatConfig {
        &self.inner.config
    }

    /// Record a user turn and schedule the reply.
    ///
    /// Whitespace-only input is ignored and yields `None`. Must be called from
    /// within a Tokio runtime.
    pub fn submit(&self, text: impl Into<String>) -> Option<MessageId> {
        let text = text.into();
        if text.trim().is_empty() {
            tracing::debug!(session = %self.inner.id, "Ignoring blank submission");
            return None;
        }

        let id = self.inner.append(Sender::User, text.clone());
        self.inner.pending.fetch_add(1, Ordering::SeqCst);

        match self.inner.config.reply_policy {
            ReplyPolicy::Independent => {
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    tokio::time::sleep(inner.config.reply_delay).await;
                    inner.reply_to(&text);
                });
            }
            ReplyPolicy::Serialized => {
                let queue = self.inner.queue.get_or_init(|| spawn_reply_worker(&self.inner));
                if queue.send(text).is_err() {
                    // Worker only exits once the session is gone, so this is unreachable in practice.
                    tracing::error!(session = %self.inner.id, "Reply worker is gone");
                    self.inner.pending.fetch_sub(1, Ordering::SeqCst);
                }
            }
        }

        tracing::debug!(session = %self.inner.id, message = %id, "Reply scheduled");
        Some(id)
    }

    /// Ordered snapshot of the log, most recent last
    pub fn messages(&self) -> Vec<Message> {
        self.inner.log.lock().expect("log mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.inner.log.lock().expect("log mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pending_replies(&self) -> usize {
        self.inner.pending.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> SessionState {
        if self.pending_replies() > 0 {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    /// Show the chat view. The log is untouched.
    pub fn open(&self) {
        if !self.inner.open.swap(true, Ordering::SeqCst) {
            tracing::info!(session = %self.inner.id, "Chat opened");
        }
    }

    /// Hide the chat view. Pending replies still land.
    pub fn close(&self) {
        if self.inner.open.swap(false, Ordering::SeqCst) {
            tracing::info!(
                session = %self.inner.id,
                pending = self.pending_replies(),
                "Chat closed"
            );
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.load(Ordering::SeqCst)
    }

    /// Receiver whose value changes on every append
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }
}

impl SessionInner {
    fn append(&self, sender: Sender, text: String) -> MessageId {
        // Id is taken under the lock so log order and id order agree.
        let id = {
            let mut log = self.log.lock().expect("log mutex poisoned");
            let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst));
            log.push(Message::new(id, sender, text));
            id
        };
        self.revision.send_modify(|rev| *rev += 1);
        id
    }

    fn reply_to(&self, text: &str) {
        let topic = classify(text);
        let id = self.append(Sender::Bot, select_response(text).to_string());
        self.pending.fetch_sub(1, Ordering::SeqCst);
        match topic {
            Some(topic) => tracing::debug!(session = %self.id, message = %id, %topic, "Bot replied"),
            None => tracing::debug!(session = %self.id, message = %id, "Bot replied with fallback"),
        }
    }
}

/// Single-slot reply queue. Holds only a weak handle so dropping the session
/// closes the channel and ends the worker.
fn spawn_reply_worker(inner: &Arc<SessionInner>) -> mpsc::UnboundedSender<String> {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let weak: Weak<SessionInner> = Arc::downgrade(inner);
    let delay = inner.config.reply_delay;
    let session = inner.id;

    tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            tokio::time::sleep(delay).await;
            match weak.upgrade() {
                Some(inner) => inner.reply_to(&text),
                None => break,
            }
        }
        tracing::debug!(%session, "Reply worker stopped");
    });

    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::responder::{Topic, FALLBACK};
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    fn session(policy: ReplyPolicy) -> ChatSession {
        ChatSession::new(ChatConfig {
            reply_delay: Duration::from_millis(1000),
            reply_policy: policy,
        })
    }

    async fn wait_for_len(session: &ChatSession, len: usize) {
        let mut rx = session.subscribe();
        timeout(Duration::from_secs(60), async {
            while session.len() < len {
                rx.changed().await.expect("session dropped");
            }
        })
        .await
        .expect("timed out waiting for replies");
    }

    fn bots(session: &ChatSession) -> Vec<Message> {
        session
            .messages()
            .into_iter()
            .filter(|m| m.sender == Sender::Bot)
            .collect()
    }

    #[tokio::test]
    async fn test_new_session_is_seeded() {
        let session = session(ReplyPolicy::Independent);
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].text, GREETING);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submission_is_noop() {
        let session = session(ReplyPolicy::Independent);
        assert_eq!(session.submit(""), None);
        assert_eq!(session.submit("   "), None);
        assert_eq!(session.submit("\n\t"), None);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(session.len(), 1);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let session = session(ReplyPolicy::Independent);
        let id = session.submit("Tell me about the temple").expect("accepted");

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].id, id);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "Tell me about the temple");
        assert_eq!(session.state(), SessionState::AwaitingReply);

        sleep(Duration::from_millis(999)).await;
        assert_eq!(session.len(), 2);

        sleep(Duration::from_millis(2)).await;
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert_eq!(messages[2].text, Topic::Temple.response());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_text_kept_verbatim() {
        let session = session(ReplyPolicy::Independent);
        session.submit("  Malpe BEACH?  ");
        wait_for_len(&session, 3).await;

        let messages = session.messages();
        assert_eq!(messages[1].text, "  Malpe BEACH?  ");
        assert_eq!(messages[2].text, Topic::Beach.response());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_submissions_all_answered() {
        let session = session(ReplyPolicy::Independent);
        let inputs = ["temple", "beach", "xyz123", "weather", "shop"];
        for input in inputs {
            assert!(session.submit(input).is_some());
        }
        assert_eq!(session.len(), 1 + inputs.len());
        assert_eq!(session.pending_replies(), inputs.len());

        wait_for_len(&session, 1 + 2 * inputs.len()).await;

        let messages = session.messages();
        let users = messages.iter().filter(|m| m.sender == Sender::User).count();
        assert_eq!(users, inputs.len());
        // Greeting plus one reply per submission
        assert_eq!(bots(&session).len(), inputs.len() + 1);
        assert_eq!(session.state(), SessionState::Idle);

        let mut replies: Vec<String> = bots(&session)[1..].iter().map(|m| m.text.clone()).collect();
        let mut expected: Vec<String> = inputs.iter().map(|i| select_response(i).to_string()).collect();
        replies.sort();
        expected.sort();
        assert_eq!(replies, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_replies_overlap() {
        let session = session(ReplyPolicy::Independent);
        session.submit("temple");
        sleep(Duration::from_millis(500)).await;
        session.submit("food");

        // First reply at t=1000, second at t=1500
        sleep(Duration::from_millis(600)).await;
        assert_eq!(bots(&session).len(), 2);
        sleep(Duration::from_millis(500)).await;
        assert_eq!(bots(&session).len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_serialized_replies_in_submission_order() {
        let session = session(ReplyPolicy::Serialized);
        session.submit("krishna");
        session.submit("xyz123");
        session.submit("bus fares");
        assert_eq!(session.pending_replies(), 3);

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(bots(&session).len(), 2);
        assert_eq!(session.state(), SessionState::AwaitingReply);

        wait_for_len(&session, 7).await;
        let replies: Vec<String> = bots(&session)[1..].iter().map(|m| m.text.clone()).collect();
        assert_eq!(
            replies,
            vec![
                Topic::Temple.response().to_string(),
                FALLBACK.to_string(),
                Topic::Transport.response().to_string(),
            ]
        );
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_does_not_cancel_or_clear() {
        let session = session(ReplyPolicy::Independent);
        session.open();
        assert!(session.is_open());
        session.submit("hotel");
        session.close();
        assert!(!session.is_open());

        wait_for_len(&session, 3).await;
        assert_eq!(bots(&session).last().map(|m| m.text.as_str()), Some(Topic::Hotel.response()));

        session.open();
        assert_eq!(session.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_increase_in_log_order() {
        let session = session(ReplyPolicy::Independent);
        session.submit("a");
        session.submit("b");
        wait_for_len(&session, 5).await;

        let ids: Vec<MessageId> = session.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_subscribe_sees_appends() {
        let session = session(ReplyPolicy::Independent);
        let mut rx = session.subscribe();
        let before = *rx.borrow_and_update();
        session.submit("market");
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), before + 1);
    }
}
