// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Composes the attachment form: source switcher, the file input button,
//! and the current attachment.

use crate::app::state::{AppModel, CaptureProbe, Message};
use crate::constants::ui;
use crate::fl;
use crate::input::PickerRoute;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut form = widget::column()
            .push(self.build_source_switcher())
            .push(widget::vertical_space().height(spacing.space_m))
            .push(self.build_input_button())
            .align_x(Alignment::Center)
            .spacing(spacing.space_xxs);

        if let Some(status) = self.build_probe_status() {
            form = form
                .push(widget::vertical_space().height(spacing.space_s))
                .push(status);
        }

        if let Some(error) = &self.attach_error {
            form = form
                .push(widget::vertical_space().height(spacing.space_s))
                .push(widget::text(error.to_string()).class(cosmic::theme::Text::Accent));
        }

        form = form
            .push(widget::vertical_space().height(spacing.space_m))
            .push(self.build_attachment());

        widget::container(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(spacing.space_l)
            .into()
    }

    /// Build the file input button
    ///
    /// Label and icon follow the activation route derived from the capture
    /// attribute.
    fn build_input_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let (icon_name, label) = match self.image_input.route() {
            PickerRoute::CaptureDevice => ("camera-photo-symbolic", fl!("take-photo")),
            PickerRoute::FileBrowser => ("folder-pictures-symbolic", fl!("browse-library")),
        };

        let content = widget::row()
            .push(icon::from_name(icon_name).size(16))
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(widget::text(label))
            .align_y(Alignment::Center);

        widget::button::custom(content)
            .padding(spacing.space_xs)
            .on_press(Message::ActivateInput)
            .class(cosmic::theme::Button::Standard)
            .into()
    }

    /// Build the capture probe status line, if a probe ran
    fn build_probe_status(&self) -> Option<Element<'_, Message>> {
        let probe = self.capture_probe.as_ref()?;

        let text = match probe {
            CaptureProbe::Checking => fl!("capture-checking"),
            CaptureProbe::Present => fl!("capture-present"),
            CaptureProbe::Absent => fl!("capture-absent"),
            CaptureProbe::Failed(err) => err.to_string(),
        };

        Some(widget::text(text).size(12).into())
    }

    /// Build the attachment area: preview and actions, or a placeholder
    fn build_attachment(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let Some(path) = &self.attached_image else {
            return widget::container(widget::text(fl!("no-image")).size(12))
                .center_x(Length::Fill)
                .into();
        };

        let preview: Element<'_, Message> = if let Some(handle) = &self.attachment_preview {
            widget::image::Image::new(handle.clone())
                .content_fit(cosmic::iced::ContentFit::Contain)
                .width(Length::Fixed(ui::PREVIEW_SIZE))
                .height(Length::Fixed(ui::PREVIEW_SIZE))
                .into()
        } else {
            widget::container(icon::from_name("image-x-generic-symbolic").size(48))
                .width(Length::Fixed(ui::PREVIEW_SIZE))
                .height(Length::Fixed(ui::PREVIEW_SIZE))
                .center(ui::PREVIEW_SIZE)
                .into()
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let actions = widget::row()
            .push(widget::button::standard(fl!("reveal-image")).on_press(Message::RevealImage))
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(widget::button::standard(fl!("remove-image")).on_press(Message::RemoveImage))
            .spacing(0);

        widget::column()
            .push(preview)
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(widget::text(file_name).size(12))
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(actions)
            .align_x(Alignment::Center)
            .spacing(spacing.space_xxs)
            .into()
    }
}
