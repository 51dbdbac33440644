// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is a short description and a row of buttons, one per
//! severity, with the notifications layered on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Severity, Toast};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Manager,
    pub theme_mode: ThemeMode,
}

const DEMO_SEVERITIES: [(Severity, &str); 5] = [
    (Severity::Info, "demo-show-info"),
    (Severity::Success, "demo-show-success"),
    (Severity::Warning, "demo-show-warning"),
    (Severity::Danger, "demo-show-danger"),
    (Severity::Unrecognized, "demo-show-unrecognized"),
];

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let show_buttons = DEMO_SEVERITIES
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, (severity, key)| {
            row.push(button(Text::new(i18n.tr(key))).on_press(Message::Show(*severity)))
        });

    let theme_label = i18n.tr_with_args(
        "demo-theme-button",
        &[("mode", i18n.tr(ctx.theme_mode.label_key()).as_str())],
    );
    let locale = i18n.current_locale().to_string();
    let language_label = i18n.tr_with_args("demo-language-button", &[("locale", locale.as_str())]);

    let settings_buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new(i18n.tr("demo-clear"))).on_press(Message::ClearNotifications))
        .push(button(Text::new(theme_label)).on_press(Message::CycleTheme))
        .push(button(Text::new(language_label)).on_press(Message::CycleLanguage))
        .push(button(Text::new(i18n.tr("demo-export"))).on_press(Message::ExportDiagnostics));

    let status = i18n.tr_with_args(
        "demo-status",
        &[
            ("inline", ctx.notifications.inline_count().to_string().as_str()),
            (
                "blocking",
                ctx.notifications.blocking_count().to_string().as_str(),
            ),
        ],
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("demo-description")).size(typography::BODY))
        .push(show_buttons)
        .push(settings_buttons)
        .push(Text::new(status).size(typography::CAPTION));

    let base: Element<'_, Message> = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into();

    Toast::view_overlay(ctx.notifications, i18n, base, Message::Notification)
}
