use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }
}
