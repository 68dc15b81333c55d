use std::time::Duration;

use iced::{
    Element, Task,
    widget::{container, text},
};

/// How long a toast stays up before auto-dismissing.
const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub enum Message {
    Expired(u64),
}

/// Transient success notification.
///
/// There is no queue: a new message replaces the current one and restarts the
/// clock. The generation counter makes the superseded dismissal a no-op.
#[derive(Debug, Default)]
pub struct Toast {
    message: Option<String>,
    generation: u64,
}

impl Toast {
    /// Show a message, pre-empting any currently visible one.
    pub fn show(&mut self, message: impl Into<String>) -> Task<Message> {
        self.message = Some(message.into());
        self.generation += 1;

        let generation = self.generation;
        Task::perform(tokio::time::sleep(DISMISS_AFTER), move |_| {
            Message::Expired(generation)
        })
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Expired(generation) => {
                if generation == self.generation {
                    self.message = None;
                }
            }
        }
    }

    pub fn view(&self) -> Option<Element<'_, Message>> {
        self.message.as_ref().map(|message| {
            container(text(message))
                .padding(12)
                .style(container::rounded_box)
                .into()
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_show_makes_the_toast_visible() {
        let mut toast = Toast::default();

        let _task = toast.show("Entry added successfully!");

        assert_eq!(toast.message.as_deref(), Some("Entry added successfully!"));
    }

    #[tokio::test]
    async fn test_matching_expiry_dismisses() {
        let mut toast = Toast::default();
        let _task = toast.show("hello");

        toast.update(Message::Expired(toast.generation));

        assert!(toast.message.is_none());
    }

    #[tokio::test]
    async fn test_newer_message_outlives_the_old_timer() {
        let mut toast = Toast::default();
        let _task = toast.show("first");
        let stale = toast.generation;
        let _task = toast.show("second");

        // The first toast's timer fires, but a newer message owns the surface
        toast.update(Message::Expired(stale));

        assert_eq!(toast.message.as_deref(), Some("second"));
    }
}
