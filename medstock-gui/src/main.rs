use iced::{
    Element,
    Length::{self, Fill},
    Task, Theme, application,
    widget::{button, column, container, row, space, stack, text},
};
use medstock_lib::{
    Entry, EntryId, RowStore,
    export::{self, ExportConfig},
};
use tokio::task::spawn_blocking;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        entry_form::{self, EntryForm},
        stock_table::{self, StockTable},
        toast::{self, Toast},
    },
    config::GuiConfig,
    icons::icon,
};

pub mod components;
pub mod config;
pub mod dialogs;
pub mod icons;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ExportButtonPressed,
    Created(Entry, Result<(), String>),
    DeleteResolved(EntryId, Option<Result<(), String>>),
    Exported(Result<String, String>),
    AlertClosed,
    // Components
    EntryForm(entry_form::Message),
    Table(stock_table::Message),
    Toast(toast::Message),
}

struct App {
    title: String,
    theme: Theme,
    store: RowStore,
    export_cfg: ExportConfig,
    // Components
    entry_form: EntryForm,
    table: StockTable,
    toast: Toast,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let theme = GuiConfig::load().theme();
        let store = RowStore::new();

        let (entry_form, entry_form_task) = EntryForm::new();
        let (table, table_task) = StockTable::new(store.clone());

        (
            Self {
                title: "Medstock".into(),
                theme,
                store,
                export_cfg: ExportConfig::default(),
                entry_form,
                table,
                toast: Toast::default(),
            },
            Task::batch([
                entry_form_task.map(Message::EntryForm),
                table_task.map(Message::Table),
            ]),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to relevant child components
            Message::EntryForm(message) => match self.entry_form.update(message) {
                entry_form::Action::None => Task::none(),
                entry_form::Action::Invalid(error) => alert(error.to_string()),
                entry_form::Action::Submit(entry) => {
                    let store = self.store.clone();
                    Task::perform(
                        async move {
                            let result = store.append(&entry).await.map_err(|e| e.to_string());
                            (entry, result)
                        },
                        |(entry, result)| Message::Created(entry, result),
                    )
                }
            },
            Message::Table(message) => match self.table.update(message) {
                stock_table::Action::None => Task::none(),
                stock_table::Action::Delete(id) => {
                    let store = self.store.clone();
                    Task::perform(
                        async move {
                            if !dialogs::confirm("Are you sure you want to delete this entry?")
                                .await
                            {
                                return (id, None);
                            }

                            let result = store.delete(&id).await.map_err(|e| e.to_string());
                            (id, Some(result))
                        },
                        |(id, outcome)| Message::DeleteResolved(id, outcome),
                    )
                }
            },
            Message::Toast(message) => {
                self.toast.update(message);
                Task::none()
            }
            Message::Created(entry, Ok(())) => {
                self.entry_form.clear();
                self.table.push(entry);
                self.toast
                    .show("Entry added successfully!")
                    .map(Message::Toast)
            }
            Message::Created(_, Err(error)) => {
                tracing::error!(%error, "failed to save entry");
                alert(format!("Failed to save data: {error}"))
            }
            Message::DeleteResolved(_, None) => Task::none(),
            Message::DeleteResolved(id, Some(Ok(()))) => {
                self.table.remove(&id);
                self.toast.show("Entry deleted.").map(Message::Toast)
            }
            Message::DeleteResolved(_, Some(Err(error))) => {
                tracing::error!(%error, "failed to delete entry");
                alert("Failed to delete entry.".into())
            }
            Message::ExportButtonPressed => {
                let entries = self.table.entries();
                let cfg = self.export_cfg.clone();
                Task::perform(
                    async move {
                        spawn_blocking(move || {
                            export::write_report(&entries, &cfg)
                                .map(|path| path.display().to_string())
                                .map_err(|e| e.to_string())
                        })
                        .await
                        .map_err(|e| e.to_string())?
                    },
                    Message::Exported,
                )
            }
            Message::Exported(Ok(path)) => self
                .toast
                .show(format!("Report saved to {path}"))
                .map(Message::Toast),
            Message::Exported(Err(error)) => {
                tracing::error!(%error, "failed to export report");
                alert(format!("Failed to export report: {error}"))
            }
            Message::AlertClosed => Task::none(),
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            // Top bar
            row![
                text("Medstock").size(20),
                space::horizontal(),
                button(row![icon("download"), text(" Export PDF")])
                    .on_press(Message::ExportButtonPressed),
            ],
            self.entry_form.view().map(Message::EntryForm),
            self.table.view().map(Message::Table),
        ]
        .spacing(12)
        .padding(12)
        .height(Fill);

        if let Some(toast) = self.toast.view() {
            toast_overlay(content, toast.map(Message::Toast))
        } else {
            content.into()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn alert(description: String) -> Task<Message> {
    Task::perform(dialogs::alert(description), |_| Message::AlertClosed)
}

/// Float the toast over the base content, bottom-centered. Unlike a modal,
/// the rest of the interface stays interactive underneath.
fn toast_overlay<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    toast: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        column![
            space::vertical(),
            row![
                space::horizontal(),
                container(toast.into()).padding(8),
                space::horizontal()
            ],
        ]
        .padding(24),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
