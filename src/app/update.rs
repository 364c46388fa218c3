// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation requests from all three input sources funnel through
//! [`App::navigate`], so the transition lock and the playback handoff are
//! enforced in exactly one place.

use super::{App, Message, Screen};
use crate::domain::navigation::NavCommand;
use crate::input::keyboard::{intent_for_key, Intent};
use crate::media::ProbeOutcome;
use iced::Task;
use std::time::Instant;

impl App {
    /// Routes one message through the state machines and returns the timer
    /// tasks they request.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProbeResolved { id, outcome } => {
                if outcome != ProbeOutcome::Loaded {
                    eprintln!("Item {id} did not preload ({outcome:?}); showing it anyway");
                }
                // Late resolutions after the handoff are absorbed by the
                // tracker's saturation; no screen check needed.
                let finished = self.preload.record(outcome);
                if finished {
                    Self::settling_task()
                } else {
                    Task::none()
                }
            }
            Message::PreloadSettled => {
                self.screen = Screen::Gallery;
                // The opening slide may be a video; hand it the playing slot.
                let commands = self.navigator.playback_commands();
                self.playback.apply_all(&commands);
                Task::none()
            }
            Message::TransitionElapsed => {
                self.navigator.finish_transition();
                Task::none()
            }
            Message::KeyPressed(key) => {
                if self.screen != Screen::Gallery {
                    return Task::none();
                }
                match intent_for_key(&key) {
                    Some(Intent::Step(direction)) => {
                        let commands = self.navigator.step(direction);
                        self.navigate(commands)
                    }
                    Some(Intent::First) => {
                        let commands = self.navigator.go_to(0);
                        self.navigate(commands)
                    }
                    Some(Intent::Last) => {
                        if self.navigator.is_empty() {
                            return Task::none();
                        }
                        let last = self.navigator.len() - 1;
                        let commands = self.navigator.go_to(last);
                        self.navigate(commands)
                    }
                    None => Task::none(),
                }
            }
            Message::WheelScrolled(delta_y) => {
                if self.screen != Screen::Gallery {
                    return Task::none();
                }
                self.wheel(delta_y, Instant::now())
            }
            Message::TouchStarted(y) => {
                self.swipe.begin(y);
                Task::none()
            }
            Message::TouchEnded(y) => {
                if self.screen != Screen::Gallery {
                    // Finish the gesture anyway so stale state cannot leak
                    // into the gallery.
                    let _ = self.swipe.finish(y);
                    return Task::none();
                }
                match self.swipe.finish(y) {
                    Some(direction) => {
                        let commands = self.navigator.step(direction);
                        self.navigate(commands)
                    }
                    None => Task::none(),
                }
            }
        }
    }

    /// Handles one wheel displacement at the given instant.
    ///
    /// The transition lock is checked before the gate, so an event landing
    /// mid-transition never commits a cooldown anchor for a step that the
    /// navigator would drop anyway.
    fn wheel(&mut self, delta_y: f32, now: Instant) -> Task<Message> {
        if self.navigator.is_transitioning() {
            return Task::none();
        }
        match self.wheel_gate.accept(delta_y, now) {
            Some(direction) => {
                let commands = self.navigator.step(direction);
                self.navigate(commands)
            }
            None => Task::none(),
        }
    }

    /// Executes the side effects of an accepted navigation: updates the
    /// playback registry and schedules the unlock timer. An empty command
    /// list (a dropped request) produces no task.
    fn navigate(&mut self, commands: Vec<NavCommand>) -> Task<Message> {
        self.playback.apply_all(&commands);

        let unlock = commands.iter().find_map(|command| match command {
            NavCommand::ScheduleUnlock(duration) => Some(*duration),
            _ => None,
        });
        match unlock {
            Some(duration) => Task::perform(tokio::time::sleep(duration), |()| {
                Message::TransitionElapsed
            }),
            None => Task::none(),
        }
    }
}
