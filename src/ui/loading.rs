// SPDX-License-Identifier: MPL-2.0
//! Loading screen with the preload progress bar.

use crate::ui::styles;
use iced::widget::{column, container, progress_bar, text};
use iced::{Element, Length};

const BAR_WIDTH: f32 = 320.0;
const BAR_HEIGHT: f32 = 8.0;

/// Renders the loading screen for a progress percentage in `0.0..=100.0`.
pub fn view<'a, Message: 'a>(progress: f32) -> Element<'a, Message> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = progress.round().clamp(0.0, 100.0) as u32;

    let content = column![
        text("Loading memories…").size(20),
        progress_bar(0.0..=100.0, progress)
            .length(Length::Fixed(BAR_WIDTH))
            .girth(Length::Fixed(BAR_HEIGHT)),
        text(format!("{percent}%")).size(14),
    ]
    .spacing(16)
    .align_x(iced::Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::backdrop)
        .into()
}
