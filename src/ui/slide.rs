// SPDX-License-Identifier: MPL-2.0
//! Gallery slide view.
//!
//! Renders the current slide: images through Iced's image widget, videos as
//! a labelled pane reflecting their playback state. The caption exposes the
//! read-only observables: title, position, and the transition flag.

use crate::domain::media::{MediaItem, MediaKind};
use crate::domain::navigation::Navigator;
use crate::domain::playback::{PlaybackRegistry, PlaybackState};
use crate::ui::styles;
use iced::widget::{column, container, image, text};
use iced::{ContentFit, Element, Length};

/// Renders the gallery screen.
pub fn view<'a, Message: 'a>(
    navigator: &'a Navigator,
    playback: &'a PlaybackRegistry,
) -> Element<'a, Message> {
    let Some(item) = navigator.current_item() else {
        return container(text("No media to show").size(20))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::backdrop)
            .into();
    };

    let index = navigator.current_index();
    let media: Element<'a, Message> = match item.kind {
        MediaKind::Image => image(image::Handle::from_path(&item.source))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        MediaKind::Video => video_pane(item, playback.slot(index).map(|slot| slot.state)),
    };

    let counter = format!("{} / {}", index + 1, navigator.len());
    let caption = container(
        column![text(item.title.as_str()).size(22), text(counter).size(14)]
            .spacing(4)
            .align_x(iced::Alignment::Center),
    )
    .padding(12)
    .style(styles::caption);

    let content = column![
        container(media).width(Length::Fill).height(Length::Fill),
        container(caption).center_x(Length::Fill).padding(16),
    ];

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::backdrop)
        .into()
}

/// Placeholder pane standing in for the video surface.
fn video_pane<'a, Message: 'a>(
    item: &'a MediaItem,
    state: Option<PlaybackState>,
) -> Element<'a, Message> {
    let label = match state {
        Some(PlaybackState::Playing) => "▶ playing",
        Some(PlaybackState::Paused) => "⏸ paused",
        _ => "video",
    };

    container(
        column![
            text(label).size(26),
            text(item.source.as_str()).size(13),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::video_pane)
    .into()
}
