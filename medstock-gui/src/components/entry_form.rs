use iced::{
    Element, Task,
    widget::{button, column, combo_box, container, row, space, text, text_input},
};
use medstock_lib::entry::{Entry, EntryDraft, ValidationError};
use strum::IntoEnumIterator;

use crate::icons::icon;

/// Products offered by the fixed selector. `Other` reveals a free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum ProductChoice {
    Gloves,
    Masks,
    Syringes,
    Gowns,
    Thermometers,
    Other,
}

#[derive(Debug, Clone)]
pub enum Message {
    DateInput(String),
    BranchInput(String),
    ProductSelected(ProductChoice),
    OtherProductInput(String),
    QuantityInput(String),
    SubmitPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    /// A validated entry, ready to be persisted.
    Submit(Entry),
    /// The draft failed validation; nothing may be sent to the store.
    Invalid(ValidationError),
}

pub struct EntryForm {
    date: String,
    branch: String,
    product: Option<ProductChoice>,
    product_state: combo_box::State<ProductChoice>,
    other_product: String,
    quantity: String,
}

impl EntryForm {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                date: "".into(),
                branch: "".into(),
                product: None,
                product_state: combo_box::State::new(ProductChoice::iter().collect()),
                other_product: "".into(),
                quantity: "".into(),
            },
            Task::none(),
        )
    }

    /// Reset the form state. Called after a successful create; a rejected
    /// draft keeps its values so the user can fix them.
    pub fn clear(&mut self) {
        self.date.clear();
        self.branch.clear();
        self.product = None;
        self.other_product.clear();
        self.quantity.clear();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::DateInput(content) => {
                self.date = content;
                Action::None
            }
            Message::BranchInput(content) => {
                self.branch = content;
                Action::None
            }
            Message::ProductSelected(choice) => {
                self.product = Some(choice);
                if choice != ProductChoice::Other {
                    self.other_product.clear();
                }
                Action::None
            }
            Message::OtherProductInput(content) => {
                self.other_product = content;
                Action::None
            }
            Message::QuantityInput(content) => {
                self.quantity = content;
                Action::None
            }
            Message::SubmitPressed => {
                let draft = EntryDraft {
                    date: self.date.clone(),
                    branch: self.branch.clone(),
                    product: self.resolved_product(),
                    quantity: self.quantity.clone(),
                };

                match draft.validate() {
                    Ok(entry) => Action::Submit(entry),
                    Err(error) => Action::Invalid(error),
                }
            }
        }
    }

    fn resolved_product(&self) -> String {
        match self.product {
            Some(ProductChoice::Other) => self.other_product.trim().to_owned(),
            Some(choice) => choice.to_string(),
            None => String::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut fields = column![
            row![
                text("Date: "),
                text_input("YYYY-MM-DD", &self.date).on_input(Message::DateInput),
            ],
            row![
                text("Branch: "),
                text_input("Branch", &self.branch).on_input(Message::BranchInput),
            ],
            row![
                text("Product: "),
                combo_box(
                    &self.product_state,
                    "Select a product",
                    self.product.as_ref(),
                    Message::ProductSelected
                ),
            ],
        ]
        .spacing(8);

        if self.product == Some(ProductChoice::Other) {
            fields = fields.push(row![
                text("Other product: "),
                text_input("Product name", &self.other_product)
                    .on_input(Message::OtherProductInput),
            ]);
        }

        fields = fields.push(row![
            text("Quantity: "),
            text_input("0", &self.quantity).on_input(Message::QuantityInput),
        ]);

        container(column![
            fields,
            row![
                space::horizontal(),
                button(row![icon("plus"), text(" Add Entry")]).on_press(Message::SubmitPressed),
            ],
        ])
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled_form() -> EntryForm {
        let (mut form, _) = EntryForm::new();
        form.update(Message::DateInput("2024-02-02".into()));
        form.update(Message::BranchInput("Annex".into()));
        form.update(Message::ProductSelected(ProductChoice::Gloves));
        form.update(Message::QuantityInput("5".into()));
        form
    }

    #[test]
    fn test_valid_submit_produces_an_entry() {
        let mut form = filled_form();

        let Action::Submit(entry) = form.update(Message::SubmitPressed) else {
            panic!("expected a submit action");
        };

        assert_eq!(entry.date, "2024-02-02");
        assert_eq!(entry.branch, "Annex");
        assert_eq!(entry.product, "Gloves");
        assert_eq!(entry.quantity, 5.0);
        assert!(!entry.id.as_str().is_empty());
    }

    #[test]
    fn test_other_product_uses_the_free_text() {
        let mut form = filled_form();
        form.update(Message::ProductSelected(ProductChoice::Other));
        form.update(Message::OtherProductInput("  Bandages ".into()));

        let Action::Submit(entry) = form.update(Message::SubmitPressed) else {
            panic!("expected a submit action");
        };

        assert_eq!(entry.product, "Bandages");
    }

    #[test]
    fn test_switching_away_from_other_clears_the_free_text() {
        let mut form = filled_form();
        form.update(Message::ProductSelected(ProductChoice::Other));
        form.update(Message::OtherProductInput("Bandages".into()));
        form.update(Message::ProductSelected(ProductChoice::Masks));

        let Action::Submit(entry) = form.update(Message::SubmitPressed) else {
            panic!("expected a submit action");
        };

        assert_eq!(entry.product, "Masks");
        assert!(form.other_product.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected_locally() {
        let mut form = filled_form();
        form.update(Message::QuantityInput("0".into()));

        assert!(matches!(
            form.update(Message::SubmitPressed),
            Action::Invalid(ValidationError::InvalidQuantity)
        ));
    }

    #[test]
    fn test_empty_other_product_is_rejected() {
        let mut form = filled_form();
        form.update(Message::ProductSelected(ProductChoice::Other));

        assert!(matches!(
            form.update(Message::SubmitPressed),
            Action::Invalid(ValidationError::MissingProduct)
        ));
    }

    #[test]
    fn test_rejected_draft_keeps_its_values() {
        let mut form = filled_form();
        form.update(Message::QuantityInput("-1".into()));
        form.update(Message::SubmitPressed);

        assert_eq!(form.date, "2024-02-02");
        assert_eq!(form.branch, "Annex");
        assert_eq!(form.quantity, "-1");
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut form = filled_form();
        form.update(Message::ProductSelected(ProductChoice::Other));
        form.update(Message::OtherProductInput("Bandages".into()));

        form.clear();

        assert!(form.date.is_empty());
        assert!(form.branch.is_empty());
        assert!(form.product.is_none());
        assert!(form.other_product.is_empty());
        assert!(form.quantity.is_empty());
    }
}
