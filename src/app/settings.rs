// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, Message};
use crate::config::AppTheme;
use crate::constants::app_info;
use crate::fl;
use crate::input::ImageSource;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows theme selection and the default image source.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Theme dropdown
        let current_theme_index = match self.config.app_theme {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        };

        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(current_theme_index),
            Message::SetAppTheme,
        );

        // Default source dropdown
        let current_source_index = ImageSource::ALL
            .iter()
            .position(|source| *source == self.config.default_source);

        let source_dropdown = widget::dropdown(
            &self.source_dropdown_options,
            current_source_index,
            Message::SetDefaultSource,
        );

        // Version info string
        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        // Build settings column
        let settings_column: Element<'_, Message> = widget::column()
            .push(widget::text(fl!("theme")).size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("default-source"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(source_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::text(version_info).size(12))
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(crate::app::state::ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
