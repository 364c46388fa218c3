// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::ui::{loading, slide};
use iced::Element;

impl App {
    /// Renders the current screen.
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Loading => loading::view(self.preload.progress_percent()),
            Screen::Gallery => slide::view(&self.navigator, &self.playback),
        }
    }
}
