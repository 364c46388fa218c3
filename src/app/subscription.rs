// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw keyboard, wheel, and touch events are mapped to semantic messages
//! here; all gating (thresholds, cooldowns, the transition lock) happens in
//! `App::update` where the state lives.

use super::{App, Message, Screen};
use crate::input::wheel;
use iced::{event, Subscription};

impl App {
    /// Creates the event subscription for the current screen.
    ///
    /// The loading screen takes no input at all; the gallery listens to
    /// keyboard, wheel, and touch.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.screen {
            Screen::Loading => Subscription::none(),
            Screen::Gallery => event::listen_with(|event, status, _window| match event {
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                    match status {
                        event::Status::Ignored => Some(Message::KeyPressed(key)),
                        event::Status::Captured => None,
                    }
                }
                event::Event::Mouse(iced::mouse::Event::WheelScrolled { delta }) => {
                    Some(Message::WheelScrolled(wheel::scroll_pixels(&delta)))
                }
                event::Event::Touch(iced::touch::Event::FingerPressed { position, .. }) => {
                    Some(Message::TouchStarted(position.y))
                }
                event::Event::Touch(iced::touch::Event::FingerLifted { position, .. }) => {
                    Some(Message::TouchEnded(position.y))
                }
                _ => None,
            }),
        }
    }
}
