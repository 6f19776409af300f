// SPDX-License-Identifier: GPL-3.0-only

//! Source switcher widget implementation (Camera/Library toggle)

use crate::app::state::{AppModel, Message};
use crate::input::ImageSource;
use cosmic::Element;
use cosmic::widget;

impl AppModel {
    /// Build the source switcher widget
    ///
    /// Shows one button per image source. The active source is highlighted
    /// with a suggested button style; pressing the other one emits the
    /// change event that re-derives the capture attribute.
    pub fn build_source_switcher(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let camera_button = widget::button::text("CAMERA")
            .on_press(Message::SetSource(ImageSource::Camera))
            .class(if self.source == ImageSource::Camera {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            });

        let library_button = widget::button::text("LIBRARY")
            .on_press(Message::SetSource(ImageSource::Library))
            .class(if self.source == ImageSource::Library {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            });

        widget::row()
            .push(camera_button)
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(library_button)
            .spacing(spacing.space_xxs)
            .into()
    }
}
