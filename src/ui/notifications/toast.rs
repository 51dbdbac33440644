// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering notifications.
//!
//! Inline toasts are small cards stacked in the bottom-right corner with a
//! dismiss button. A blocking toast is a centered card drawn above a
//! backdrop that dims and swallows input for the rest of the window.

use super::manager::{Entry, Manager, Message, Phase};
use super::notification::{Body, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, container, mouse_area, opaque, text, tooltip, Column, Container, Row, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    Color, Element, Font, Length, Theme,
};

/// Width of the blocking card.
const BLOCKING_WIDTH: f32 = sizing::TOAST_WIDTH * 1.5;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single inline toast.
    pub fn view<'a>(entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = entry.severity();
        let faded = entry.phase() == Phase::Dismissing;

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .padding([0.0, spacing::XXS])
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, faded));
        // A fading toast no longer reacts to the button.
        let dismiss_button = if faded {
            dismiss_button
        } else {
            dismiss_button.on_press(Message::Dismiss(entry.id()))
        };
        let dismiss = tooltip(
            dismiss_button,
            Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION),
            tooltip::Position::Top,
        )
        .gap(spacing::XXS);

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center);
        if let Some(glyph) = severity_glyph(severity) {
            content = content.push(glyph_text(glyph, severity, faded));
        }
        let content = content
            .push(
                Container::new(body_view(entry.body(), faded))
                    .width(Length::Fill)
                    .align_x(Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, severity.color(), faded))
            .into()
    }

    /// Renders a blocking toast card, without backdrop.
    ///
    /// There is no dismiss button: a blocking toast only leaves through
    /// its backdrop or programmatically.
    pub fn view_blocking<'a>(entry: &'a Entry, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = entry.severity();
        let faded = entry.phase() == Phase::Dismissing;

        let mut header = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center);
        if let Some(glyph) = severity_glyph(severity) {
            header = header.push(glyph_text(glyph, severity, faded));
        }
        let header = header.push(
            Text::new(i18n.tr(title_key(severity)))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(ColorScheme::for_theme(theme).text_primary, faded)),
                }),
        );

        let content = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(body_view(entry.body(), faded))
            .push(
                Text::new(i18n.tr("notification-backdrop-hint"))
                    .size(typography::CAPTION)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(fade(ColorScheme::for_theme(theme).text_secondary, faded)),
                    }),
            );

        Container::new(content)
            .width(Length::Fixed(BLOCKING_WIDTH))
            .padding(spacing::LG)
            .style(move |theme: &Theme| toast_container_style(theme, severity.color(), faded))
            .into()
    }

    /// Renders `base` with every notification layered on top of it.
    ///
    /// From bottom to top: `base`, the inline host, blocking toasts still
    /// leaving, the backdrop, and the active blocking toast.
    pub fn view_overlay<'a, M: 'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        base: Element<'a, M>,
        on_message: fn(Message) -> M,
    ) -> Element<'a, M> {
        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base);

        let toasts: Vec<Element<'a, Message>> = manager
            .inline()
            .map(|entry| Self::view(entry, i18n))
            .collect();
        if !toasts.is_empty() {
            let column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(Horizontal::Right);
            let host: Element<'a, Message> = Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding(spacing::MD)
                .into();
            stack = stack.push(host.map(on_message));
        }

        for entry in manager.leaving() {
            stack = stack.push(centered(Self::view_blocking(entry, i18n)).map(on_message));
        }

        if let Some(backdrop) = manager.backdrop() {
            let surface = Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(backdrop_style);
            let layer: Element<'a, Message> =
                opaque(mouse_area(surface).on_press(Message::BackdropClicked(backdrop.owner())));
            stack = stack.push(layer.map(on_message));
        }

        if let Some(entry) = manager.blocking() {
            // The card itself swallows clicks so they never reach the backdrop.
            let card = opaque(Self::view_blocking(entry, i18n));
            stack = stack.push(centered(card).map(on_message));
        }

        stack.into()
    }
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn body_view<'a>(body: &'a Body, faded: bool) -> Element<'a, Message> {
    let style = move |theme: &Theme| text::Style {
        color: Some(fade(ColorScheme::for_theme(theme).text_primary, faded)),
    };
    match body {
        Body::Text(content) => Text::new(content.as_str())
            .size(typography::BODY)
            .style(style)
            .into(),
        Body::Rich(spans) => Row::with_children(spans.iter().map(|span| {
            let weight = if span.strong {
                Weight::Bold
            } else {
                Weight::Normal
            };
            Text::new(span.text.as_str())
                .size(typography::BODY)
                .font(Font {
                    weight,
                    ..Font::default()
                })
                .style(style)
                .into()
        }))
        .into(),
    }
}

fn glyph_text<'a>(glyph: &'static str, severity: Severity, faded: bool) -> Text<'a> {
    let color = severity.color();
    Text::new(glyph)
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(
                color.unwrap_or(ColorScheme::for_theme(theme).text_secondary),
                faded,
            )),
        })
}

/// Returns the glyph shown next to the body, if the severity has one.
fn severity_glyph(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Info => Some("ℹ"),
        Severity::Success => Some("✓"),
        Severity::Warning => Some("⚠"),
        Severity::Danger => Some("✖"),
        Severity::Unrecognized => None,
    }
}

fn title_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "notification-title-warning",
        Severity::Danger => "notification-title-danger",
        Severity::Info | Severity::Success | Severity::Unrecognized => "notification-title-info",
    }
}

/// Applies the dismissing fade to a color.
fn fade(color: Color, faded: bool) -> Color {
    if faded {
        Color {
            a: color.a * opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container.
///
/// Unrecognized severities get a neutral border instead of an accent.
fn toast_container_style(theme: &Theme, accent: Option<Color>, faded: bool) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    let border_color = accent.unwrap_or(scheme.surface_secondary);

    container::Style {
        background: Some(iced::Background::Color(fade(
            Color {
                a: opacity::SURFACE,
                ..scheme.surface_primary
            },
            faded,
        ))),
        border: iced::Border {
            color: fade(border_color, faded),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if faded { shadow::NONE } else { shadow::MD },
        text_color: Some(fade(scheme.text_primary, faded)),
        ..Default::default()
    }
}

fn backdrop_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            ColorScheme::for_theme(theme).backdrop,
        )),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, faded: bool) -> button::Style {
    let text_color = fade(ColorScheme::for_theme(theme).text_primary, faded);
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
