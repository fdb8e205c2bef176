use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use serde::Serialize;

use crate::error::SiteError;

pub const BUSY_LABEL: &str = "Sending...";
pub const THANK_YOU_NOTICE: &str = "Thank you for your message! We will get back to you soon.";
pub const FAILURE_NOTICE: &str = "Sorry, your message could not be sent. Please try again.";

/// Field values of a submitted contact form, in form order. Values are
/// neither validated nor trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    fields: Vec<(String, String)>,
}

impl ContactMessage {
    /// Adds a field; a repeated name replaces the earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Delivers a contact message somewhere. Resolves once delivery finished.
pub trait MessageSender {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SiteError>>;
}

/// Stand-in transport: waits a fixed latency and always succeeds.
pub struct SimulatedSender {
    latency_ms: u32,
}

impl SimulatedSender {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

impl MessageSender for SimulatedSender {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SiteError>> {
        let latency_ms = self.latency_ms;
        Box::pin(async move {
            let body = serde_json::to_string(&message).map_err(|e| SiteError::Send(e.to_string()))?;
            debug!("Simulating delivery of {}", body);
            TimeoutFuture::new(latency_ms).await;
            Ok(())
        })
    }
}

/// What the submission flow needs from the form it runs on.
pub trait SubmitView {
    fn set_busy(&self, busy: bool);
    fn notify(&self, notice: &str);
    fn reset_fields(&self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(String),
}

impl SubmitOutcome {
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => THANK_YOU_NOTICE,
            SubmitOutcome::Failed(_) => FAILURE_NOTICE,
        }
    }
}

/// Runs one submission: the control is busy from the first poll until the
/// sender has resolved and the visitor has been told the result.
pub async fn submit<V: SubmitView>(
    sender: &dyn MessageSender,
    message: ContactMessage,
    view: &V,
) -> SubmitOutcome {
    view.set_busy(true);

    let outcome = match sender.send(message).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => SubmitOutcome::Failed(e.to_string()),
    };

    view.notify(outcome.notice());
    if outcome == SubmitOutcome::Sent {
        view.reset_fields();
    }
    view.set_busy(false);
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum ViewEvent {
        Busy(bool),
        Notice(&'static str),
        Reset,
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        events: Rc<RefCell<Vec<ViewEvent>>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.borrow().clone()
        }
    }

    impl SubmitView for RecordingView {
        fn set_busy(&self, busy: bool) {
            self.events.borrow_mut().push(ViewEvent::Busy(busy));
        }

        fn notify(&self, notice: &str) {
            let notice = if notice == THANK_YOU_NOTICE {
                THANK_YOU_NOTICE
            } else {
                FAILURE_NOTICE
            };
            self.events.borrow_mut().push(ViewEvent::Notice(notice));
        }

        fn reset_fields(&self) {
            self.events.borrow_mut().push(ViewEvent::Reset);
        }
    }

    /// Resolves only when the test says so.
    struct ChannelSender {
        pending: RefCell<Option<oneshot::Receiver<Result<(), SiteError>>>>,
        received: Rc<RefCell<Vec<ContactMessage>>>,
    }

    impl ChannelSender {
        fn new() -> (Self, oneshot::Sender<Result<(), SiteError>>) {
            let (tx, rx) = oneshot::channel();
            let sender = Self {
                pending: RefCell::new(Some(rx)),
                received: Rc::default(),
            };
            (sender, tx)
        }
    }

    impl MessageSender for ChannelSender {
        fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SiteError>> {
            self.received.borrow_mut().push(message);
            let rx = self.pending.borrow_mut().take();
            Box::pin(async move {
                match rx {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(SiteError::Send("dropped".to_string()))),
                    None => Err(SiteError::Send("already used".to_string())),
                }
            })
        }
    }

    fn spawn_submission(
        pool: &LocalPool,
        sender: Rc<ChannelSender>,
        message: ContactMessage,
        view: RecordingView,
    ) -> Rc<RefCell<Option<SubmitOutcome>>> {
        let outcome = Rc::new(RefCell::new(None));
        let slot = outcome.clone();
        pool.spawner()
            .spawn_local(async move {
                let result = submit(sender.as_ref(), message, &view).await;
                *slot.borrow_mut() = Some(result);
            })
            .unwrap();
        outcome
    }

    #[test]
    fn control_stays_busy_until_sender_resolves() {
        let mut pool = LocalPool::new();
        let (sender, resolve) = ChannelSender::new();
        let sender = Rc::new(sender);
        let view = RecordingView::default();

        // Empty form: nothing is validated.
        let outcome = spawn_submission(&pool, sender.clone(), ContactMessage::default(), view.clone());

        pool.run_until_stalled();
        assert_eq!(view.events(), vec![ViewEvent::Busy(true)]);
        assert!(outcome.borrow().is_none());

        resolve.send(Ok(())).unwrap();
        pool.run_until_stalled();
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Busy(true),
                ViewEvent::Notice(THANK_YOU_NOTICE),
                ViewEvent::Reset,
                ViewEvent::Busy(false),
            ]
        );
        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Sent));
        assert_eq!(sender.received.borrow().len(), 1);
    }

    #[test]
    fn failed_delivery_keeps_fields_and_releases_control() {
        let mut pool = LocalPool::new();
        let (sender, resolve) = ChannelSender::new();
        let view = RecordingView::default();
        let mut message = ContactMessage::default();
        message.insert("email", "visitor@example.com");

        let outcome = spawn_submission(&pool, Rc::new(sender), message, view.clone());
        resolve.send(Err(SiteError::Send("offline".to_string()))).unwrap();
        pool.run_until_stalled();

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Busy(true),
                ViewEvent::Notice(FAILURE_NOTICE),
                ViewEvent::Busy(false),
            ]
        );
        assert!(matches!(*outcome.borrow(), Some(SubmitOutcome::Failed(_))));
    }

    #[test]
    fn repeated_field_names_keep_the_last_value() {
        let mut message = ContactMessage::default();
        message.insert("name", "Ada");
        message.insert("topic", "quote");
        message.insert("name", "Grace");
        assert_eq!(message.len(), 2);
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({ "fields": [["name", "Grace"], ["topic", "quote"]] })
        );
    }
}
