use iced::{
    Element, Length, Task,
    widget::{button, column, row, scrollable, table, text},
};
use medstock_lib::{Entry, EntryId, Ledger, RowStore};

use crate::icons::icon;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Entry>, String>),
    DeleteButtonPressed(EntryId),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    /// Ask the parent to confirm and delete the entry with this identifier.
    Delete(EntryId),
}

pub enum State {
    Loading,
    Error(String),
    Loaded(Ledger),
}

pub struct StockTable {
    state: State,
}

impl StockTable {
    pub fn new(store: RowStore) -> (Self, Task<Message>) {
        (
            Self {
                state: State::Loading,
            },
            load_entries(store),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(Ok(entries)) => {
                self.state = State::Loaded(Ledger::from(entries));
                Action::None
            }
            Message::Loaded(Err(error)) => {
                tracing::error!(%error, "failed to load entries");
                self.state = State::Error("Failed to load entries.".into());
                Action::None
            }
            Message::DeleteButtonPressed(id) => Action::Delete(id),
        }
    }

    /// Append a freshly persisted entry to the view. Creates still work when
    /// the initial load failed; the table simply starts from this entry.
    pub fn push(&mut self, entry: Entry) {
        if let State::Loaded(ledger) = &mut self.state {
            ledger.push(entry);
        } else {
            self.state = State::Loaded(Ledger::from(vec![entry]));
        }
    }

    /// Drop the row with the given identifier. Called only after the remote
    /// deletion succeeded.
    pub fn remove(&mut self, id: &EntryId) {
        if let State::Loaded(ledger) = &mut self.state {
            ledger.remove(id);
        }
    }

    /// Snapshot of the currently visible entries.
    pub fn entries(&self) -> Vec<Entry> {
        match &self.state {
            State::Loaded(ledger) => ledger.entries().to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            State::Loading => column![text("Loading entries...")].into(),
            State::Error(e) => column![text(e)].into(),
            State::Loaded(ledger) => {
                let columns = [
                    table::column(text("Date"), |entry: Entry| text(entry.date)),
                    table::column(text("Branch"), |entry: Entry| text(entry.branch)),
                    table::column(text("Product"), |entry: Entry| text(entry.product)),
                    table::column(text("Quantity"), |entry: Entry| text(entry.quantity_label())),
                    table::column(text("Action"), |entry: Entry| {
                        button(row![icon("delete"), text(" Delete")])
                            .style(button::danger)
                            .on_press(Message::DeleteButtonPressed(entry.id))
                    }),
                ];

                column![scrollable(
                    table(columns, ledger.entries().to_vec()).width(Length::Fill)
                )]
                .into()
            }
        }
    }
}

fn load_entries(store: RowStore) -> Task<Message> {
    Task::perform(
        async move { store.fetch_all().await.map_err(|e| e.to_string()) },
        Message::Loaded,
    )
}
