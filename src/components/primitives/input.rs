//! Input Component
//!
//! A labeled, controlled text field. The caller owns the editor state and
//! the validation outcome; the input only frames them and reports edits.

use std::str::FromStr;

use gpui::{
    AnyElement, App, Context, ElementId, Entity, Focusable, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::input::{Input as TextField, InputEvent, InputState};
use gpui_component::{Disableable, Icon};
use serde::{Deserialize, Serialize};

use crate::assets::StatusIconName;
use crate::components::style::{
    GradientChoice, HoverEffect, Paint, SizeMetrics, SizeStep, Stroke, StyleExt, WidthMode,
    parse_token,
};
use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::theme::colors::{Color, GradientSpec};
use crate::theme::tokens::ShadowPreset;
use crate::theme::typography::Typography;

/// Opacity of a disabled input
const DISABLED_OPACITY: f32 = 0.5;

/// Width of the gradient frame, matching the thick border
const RING_WIDTH: f32 = 2.0;

/// Input variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// White field with a light border
    #[default]
    Default,
    /// Gray fill, no visible border
    Filled,
    /// Transparent fill, stronger border
    Outlined,
    /// White field framed by a named gradient
    Gradient,
}

impl InputVariant {
    pub const ALL: [InputVariant; 4] = [
        InputVariant::Default,
        InputVariant::Filled,
        InputVariant::Outlined,
        InputVariant::Gradient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputVariant::Default => "default",
            InputVariant::Filled => "filled",
            InputVariant::Outlined => "outlined",
            InputVariant::Gradient => "gradient",
        }
    }
}

impl FromStr for InputVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_token("input variant", s, &Self::ALL, Self::name)
    }
}

/// Input size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

impl InputSize {
    pub const ALL: [InputSize; 3] = [InputSize::Small, InputSize::Medium, InputSize::Large];

    pub fn name(self) -> &'static str {
        match self {
            InputSize::Small => "sm",
            InputSize::Medium => "md",
            InputSize::Large => "lg",
        }
    }

    fn step(self) -> SizeStep {
        match self {
            InputSize::Small => SizeStep::Sm,
            InputSize::Medium => SizeStep::Md,
            InputSize::Large => SizeStep::Lg,
        }
    }
}

impl FromStr for InputSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_token("input size", s, &Self::ALL, Self::name)
    }
}

/// Validation outcome shown by the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Neutral,
    Error,
    Success,
}

impl Validity {
    /// Error takes precedence over success
    ///
    /// A non-empty error message always yields [`Validity::Error`], whatever
    /// the success flag says. An empty message counts as no error.
    pub fn classify(error: Option<&str>, success: bool) -> Self {
        match (error.is_some_and(|e| !e.is_empty()), success) {
            (true, _) => Validity::Error,
            (false, true) => Validity::Success,
            (false, false) => Validity::Neutral,
        }
    }
}

/// What occupies the slot after the text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingSlot {
    ErrorIcon,
    SuccessIcon,
    Custom,
    Empty,
}

impl TrailingSlot {
    /// Error icon, then success icon, then the caller's icon
    pub fn select(validity: Validity, has_custom: bool) -> Self {
        match validity {
            Validity::Error => TrailingSlot::ErrorIcon,
            Validity::Success => TrailingSlot::SuccessIcon,
            Validity::Neutral if has_custom => TrailingSlot::Custom,
            Validity::Neutral => TrailingSlot::Empty,
        }
    }
}

/// Text rendered below the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportingText {
    Error(SharedString),
    Helper(SharedString),
}

impl SupportingText {
    /// The error message wins over helper text; empty strings count as absent
    pub fn select(error: Option<SharedString>, helper: Option<SharedString>) -> Option<Self> {
        let present = |text: &SharedString| !text.is_empty();
        error
            .filter(present)
            .map(SupportingText::Error)
            .or_else(|| helper.filter(present).map(SupportingText::Helper))
    }

    pub fn text(&self) -> &SharedString {
        match self {
            SupportingText::Error(text) | SupportingText::Helper(text) => text,
        }
    }
}

/// Everything about an input that affects its style, apart from validity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputProps {
    pub variant: InputVariant,
    pub size: InputSize,
    /// Only read when `variant` is [`InputVariant::Gradient`]
    pub gradient: GradientChoice,
    pub success: bool,
    pub disabled: bool,
    pub full_width: bool,
}

/// Outline of the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Border(Stroke),
    /// A gradient band of [`RING_WIDTH`] around the fill
    GradientRing(GradientSpec),
}

/// Resolved input appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputStyle {
    pub frame: Frame,
    pub fill: Paint,
    pub shadow: Option<ShadowPreset>,
    /// Applied while hovered and not focused; empty when disabled
    pub hover: HoverEffect,
    pub metrics: SizeMetrics,
    pub width: WidthMode,
    pub radius: f32,
    /// Space between label, field and supporting text
    pub gap: f32,
    pub opacity: f32,
    pub label_color: Color,
    pub supporting_color: Color,
    pub icon_color: Color,
    pub text_color: Color,
    pub interactive: bool,
}

impl InputStyle {
    /// A disabled input never shows focus, even while it holds it
    pub fn resolve(theme: &Theme, props: &InputProps, validity: Validity, focused: bool) -> Self {
        let c = &theme.colors;
        let focused = focused && !props.disabled;
        let ring = |color: Color, alpha: f32| {
            ShadowPreset::ring(color.with_alpha(alpha), theme.shadows.ring_width)
        };
        let focus_ring = ring(c.primary.s500, 0.1);

        let (mut frame, mut fill, mut shadow, mut hover) = match props.variant {
            InputVariant::Default => (
                Frame::Border(Stroke::thick(c.neutral.s200)),
                Paint::Solid(c.white),
                None,
                HoverEffect {
                    border_color: Some(c.neutral.s300),
                    ..Default::default()
                },
            ),
            InputVariant::Filled => (
                Frame::Border(Stroke::thick(Color::TRANSPARENT)),
                Paint::Solid(c.neutral.s100),
                None,
                HoverEffect {
                    fill: Some(Paint::Solid(c.neutral.s200)),
                    ..Default::default()
                },
            ),
            InputVariant::Outlined => (
                Frame::Border(Stroke::thick(c.neutral.s300)),
                Paint::Transparent,
                None,
                HoverEffect {
                    border_color: Some(c.neutral.s400),
                    ..Default::default()
                },
            ),
            InputVariant::Gradient => (
                Frame::GradientRing(props.gradient.spec(theme)),
                Paint::Solid(c.white),
                None,
                HoverEffect {
                    shadow: Some(theme.shadows.glow),
                    ..Default::default()
                },
            ),
        };

        if focused {
            match props.variant {
                InputVariant::Gradient => shadow = Some(ring(c.primary.s500, 0.2)),
                InputVariant::Filled => {
                    fill = Paint::Solid(c.neutral.s50);
                    frame = Frame::Border(Stroke::thick(c.primary.s500));
                    shadow = Some(focus_ring);
                }
                InputVariant::Default | InputVariant::Outlined => {
                    frame = Frame::Border(Stroke::thick(c.primary.s500));
                    shadow = Some(focus_ring);
                }
            }
            hover = HoverEffect::default();
        }

        // Validity colors override both the variant border and the focus ring
        let status = match validity {
            Validity::Error => Some(c.error),
            Validity::Success => Some(c.success),
            Validity::Neutral => None,
        };
        if let Some(color) = status {
            frame = Frame::Border(Stroke::thick(color));
            shadow = Some(ring(color, 0.1));
            hover.border_color = None;
            hover.shadow = None;
        }

        let (label_color, supporting_color) = match status {
            Some(color) => (color, color),
            None => (c.neutral.s700, c.neutral.s500),
        };

        if props.disabled {
            fill = Paint::Solid(c.neutral.s100);
            hover = HoverEffect::default();
        }

        Self {
            frame,
            fill,
            shadow,
            hover,
            metrics: SizeMetrics::step(theme, props.size.step()),
            width: WidthMode::from_full_width(props.full_width),
            radius: theme.radii.lg,
            gap: theme.spacing.sm,
            opacity: if props.disabled { DISABLED_OPACITY } else { 1.0 },
            label_color,
            supporting_color,
            icon_color: c.neutral.s500,
            text_color: if props.disabled {
                c.neutral.s500
            } else {
                c.neutral.s900
            },
            interactive: !props.disabled,
        }
    }
}

/// A labeled text field around a caller-owned [`InputState`]
///
/// Placeholder and initial value are set on the state itself. Edits are
/// reported through [`Input::subscribe`].
#[derive(IntoElement)]
pub struct Input {
    id: ElementId,
    state: Entity<InputState>,
    label: Option<SharedString>,
    error: Option<SharedString>,
    helper_text: Option<SharedString>,
    left_icon: Option<AnyElement>,
    right_icon: Option<AnyElement>,
    props: InputProps,
}

impl Input {
    /// Create an input editing `state`
    pub fn new(id: impl Into<ElementId>, state: &Entity<InputState>) -> Self {
        Self {
            id: id.into(),
            state: state.clone(),
            label: None,
            error: None,
            helper_text: None,
            left_icon: None,
            right_icon: None,
            props: InputProps::default(),
        }
    }

    /// Forward every edit of `state` to `handler` with the new value
    ///
    /// Disabled inputs reject edits, so they never report a change.
    pub fn subscribe<T: 'static>(
        state: &Entity<InputState>,
        cx: &mut Context<T>,
        handler: impl Fn(&mut T, &str, &mut Context<T>) + 'static,
    ) -> Subscription {
        cx.subscribe(state, move |this, state, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change) {
                let value = state.read(cx).value().to_string();
                tracing::trace!(len = value.len(), "Input changed");
                handler(this, &value, cx);
            }
        })
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.props.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.props.size = size;
        self
    }

    /// Set the gradient used by the gradient variant
    pub fn gradient(mut self, gradient: GradientChoice) -> Self {
        self.props.gradient = gradient;
        self
    }

    /// Label shown above the field
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Error message; a non-empty message puts the input in the error state
    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Same as [`Input::error`] for an optional message
    pub fn error_opt(mut self, error: Option<impl Into<SharedString>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Show the success state unless an error is present
    pub fn success(mut self, success: bool) -> Self {
        self.props.success = success;
        self
    }

    /// Text shown below the field when there is no error
    pub fn helper_text(mut self, helper_text: impl Into<SharedString>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Stretch to the width of the parent
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = full_width;
        self
    }

    /// Content shown before the text
    pub fn left_icon(mut self, icon: impl IntoElement) -> Self {
        self.left_icon = Some(icon.into_any_element());
        self
    }

    /// Content shown after the text when no validity icon takes the slot
    pub fn right_icon(mut self, icon: impl IntoElement) -> Self {
        self.right_icon = Some(icon.into_any_element());
        self
    }

    pub fn validity(&self) -> Validity {
        Validity::classify(self.error.as_ref().map(|e| e.as_ref()), self.props.success)
    }
}

fn status_icon(name: StatusIconName, color: Color, margin: f32) -> AnyElement {
    div()
        .flex()
        .flex_none()
        .items_center()
        .justify_center()
        .ml(px(margin))
        .text_color(color.to_rgba())
        .child(Icon::from(name).size_4().text_color(color.to_rgba()))
        .into_any_element()
}

impl RenderOnce for Input {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let focused = self.state.read(cx).focus_handle(cx).is_focused(window);
        let theme = Theme::global(cx);
        let validity = self.validity();
        let style = InputStyle::resolve(theme, &self.props, validity, focused);
        let spacing = theme.spacing.sm;

        let trailing = match TrailingSlot::select(validity, self.right_icon.is_some()) {
            TrailingSlot::ErrorIcon => Some(status_icon(
                StatusIconName::InputError,
                theme.colors.error,
                spacing,
            )),
            TrailingSlot::SuccessIcon => Some(status_icon(
                StatusIconName::InputSuccess,
                theme.colors.success,
                spacing,
            )),
            TrailingSlot::Custom => self.right_icon.take().map(|icon| {
                div()
                    .flex()
                    .flex_none()
                    .items_center()
                    .ml(px(spacing))
                    .text_color(style.icon_color.to_rgba())
                    .child(icon)
                    .into_any_element()
            }),
            TrailingSlot::Empty => None,
        };

        let leading = self.left_icon.take().map(|icon| {
            div()
                .flex()
                .flex_none()
                .items_center()
                .mr(px(spacing))
                .text_color(style.icon_color.to_rgba())
                .child(icon)
        });

        // The frame below draws border, fill and ring; the editor only draws text
        let editor = TextField::new(&self.state)
            .appearance(false)
            .disabled(self.props.disabled)
            .flex_1()
            .px_0()
            .text_size(px(style.metrics.font_size))
            .text_color(style.text_color.to_rgba());

        let row = div()
            .flex()
            .flex_1()
            .items_center()
            .children(leading)
            .child(editor)
            .children(trailing);

        let mut field = div()
            .id(self.id)
            .flex()
            .items_center()
            .rounded(px(style.radius))
            .width_mode(style.width)
            .drop_shadows(style.shadow);

        field = match style.frame {
            Frame::Border(stroke) => field
                .paint(style.fill)
                .stroke(stroke)
                .metrics(style.metrics)
                .child(row),
            Frame::GradientRing(gradient) => field
                .p(px(RING_WIDTH))
                .paint(Paint::Gradient(gradient))
                .child(
                    div()
                        .flex()
                        .flex_1()
                        .items_center()
                        .rounded(px(style.radius - RING_WIDTH))
                        .paint(style.fill)
                        .metrics(style.metrics)
                        .child(row),
                ),
        };

        field = if style.interactive {
            let hover = style.hover;
            field.cursor_text().hover(move |s| s.hover_effect(hover))
        } else {
            field.cursor_not_allowed()
        };

        let label = self.label.map(|label| {
            div()
                .text_size(theme.typography.rem(Typography::TEXT_SM))
                .label_weight(theme)
                .text_color(style.label_color.to_rgba())
                .child(label)
        });

        let supporting = SupportingText::select(self.error, self.helper_text).map(|note| {
            div()
                .text_size(theme.typography.rem(Typography::TEXT_XS))
                .text_color(style.supporting_color.to_rgba())
                .child(note.text().clone())
        });

        div()
            .flex()
            .flex_col()
            .gap(px(style.gap))
            .width_mode(style.width)
            .opacity(style.opacity)
            .children(label)
            .child(field)
            .children(supporting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(props: InputProps, validity: Validity, focused: bool) -> InputStyle {
        InputStyle::resolve(&Theme::default(), &props, validity, focused)
    }

    fn variant(variant: InputVariant) -> InputProps {
        InputProps {
            variant,
            ..Default::default()
        }
    }

    #[test]
    fn test_error_wins_over_success() {
        assert_eq!(
            Validity::classify(Some("Required field"), true),
            Validity::Error
        );
        assert_eq!(Validity::classify(Some("Required field"), false), Validity::Error);
    }

    #[test]
    fn test_success_without_error() {
        assert_eq!(Validity::classify(Some(""), true), Validity::Success);
        assert_eq!(Validity::classify(None, true), Validity::Success);
    }

    #[test]
    fn test_neutral_without_either() {
        assert_eq!(Validity::classify(None, false), Validity::Neutral);
        assert_eq!(Validity::classify(Some(""), false), Validity::Neutral);
    }

    #[test]
    fn test_trailing_slot_priority() {
        assert_eq!(TrailingSlot::select(Validity::Error, true), TrailingSlot::ErrorIcon);
        assert_eq!(TrailingSlot::select(Validity::Success, true), TrailingSlot::SuccessIcon);
        assert_eq!(TrailingSlot::select(Validity::Neutral, true), TrailingSlot::Custom);
        assert_eq!(TrailingSlot::select(Validity::Neutral, false), TrailingSlot::Empty);
    }

    #[test]
    fn test_bad_error_takes_slot_from_custom_icon() {
        let validity = Validity::classify(Some("Bad"), false);
        assert_eq!(TrailingSlot::select(validity, true), TrailingSlot::ErrorIcon);
    }

    #[test]
    fn test_supporting_text_priority() {
        let error = || Some(SharedString::from("Required field"));
        let helper = || Some(SharedString::from("We never share it"));

        assert_eq!(
            SupportingText::select(error(), helper()),
            Some(SupportingText::Error("Required field".into()))
        );
        assert_eq!(
            SupportingText::select(None, helper()),
            Some(SupportingText::Helper("We never share it".into()))
        );
        assert_eq!(
            SupportingText::select(Some("".into()), helper()),
            Some(SupportingText::Helper("We never share it".into()))
        );
        assert_eq!(SupportingText::select(None, Some("".into())), None);
        assert_eq!(SupportingText::select(None, None), None);
    }

    #[test]
    fn test_error_state_colors() {
        let theme = Theme::default();
        let style = resolve(
            InputProps {
                success: true,
                ..Default::default()
            },
            Validity::classify(Some("Required field"), true),
            false,
        );
        assert_eq!(style.frame, Frame::Border(Stroke::thick(theme.colors.error)));
        assert_eq!(style.label_color, theme.colors.error);
        assert_eq!(style.supporting_color, theme.colors.error);
    }

    #[test]
    fn test_success_state_colors() {
        let theme = Theme::default();
        let style = resolve(Default::default(), Validity::Success, false);
        assert_eq!(style.frame, Frame::Border(Stroke::thick(theme.colors.success)));
        assert_eq!(style.label_color, theme.colors.success);
        assert_eq!(
            style.shadow,
            Some(ShadowPreset::ring(
                theme.colors.success.with_alpha(0.1),
                theme.shadows.ring_width
            ))
        );
    }

    #[test]
    fn test_neutral_state_colors() {
        let theme = Theme::default();
        let style = resolve(Default::default(), Validity::Neutral, false);
        assert_eq!(style.frame, Frame::Border(Stroke::thick(theme.colors.neutral.s200)));
        assert_eq!(style.label_color, theme.colors.neutral.s700);
        assert_eq!(style.supporting_color, theme.colors.neutral.s500);
        assert_eq!(style.shadow, None);
    }

    #[test]
    fn test_validity_overrides_focus_ring() {
        let theme = Theme::default();
        for v in InputVariant::ALL {
            let style = resolve(variant(v), Validity::Error, true);
            assert_eq!(style.frame, Frame::Border(Stroke::thick(theme.colors.error)), "{v:?}");
            assert_eq!(
                style.shadow,
                Some(ShadowPreset::ring(
                    theme.colors.error.with_alpha(0.1),
                    theme.shadows.ring_width
                ))
            );
        }
    }

    #[test]
    fn test_focus_styles() {
        let theme = Theme::default();
        let c = &theme.colors;

        let filled = resolve(variant(InputVariant::Filled), Validity::Neutral, true);
        assert_eq!(filled.fill, Paint::Solid(c.neutral.s50));
        assert_eq!(filled.frame, Frame::Border(Stroke::thick(c.primary.s500)));
        assert_eq!(filled.hover, HoverEffect::default());

        let gradient = resolve(variant(InputVariant::Gradient), Validity::Neutral, true);
        assert_eq!(gradient.frame, Frame::GradientRing(c.gradients.purple));
        assert_eq!(
            gradient.shadow,
            Some(ShadowPreset::ring(c.primary.s500.with_alpha(0.2), theme.shadows.ring_width))
        );
    }

    #[test]
    fn test_every_variant_and_size_resolves() {
        for v in InputVariant::ALL {
            for size in InputSize::ALL {
                let props = InputProps {
                    variant: v,
                    size,
                    ..Default::default()
                };
                let first = resolve(props, Validity::Neutral, false);
                assert_eq!(first, resolve(props, Validity::Neutral, false));
                assert!(first.metrics.min_height > 0.0);
                assert!(first.interactive);
            }
        }
    }

    #[test]
    fn test_gradient_ignored_unless_gradient_variant() {
        for v in InputVariant::ALL {
            if v == InputVariant::Gradient {
                continue;
            }
            let base = resolve(variant(v), Validity::Neutral, false);
            for gradient in GradientChoice::ALL {
                let props = InputProps {
                    gradient,
                    ..variant(v)
                };
                assert_eq!(base, resolve(props, Validity::Neutral, false));
            }
        }

        let theme = Theme::default();
        let dark = resolve(
            InputProps {
                gradient: GradientChoice::Dark,
                ..variant(InputVariant::Gradient)
            },
            Validity::Neutral,
            false,
        );
        assert_eq!(dark.frame, Frame::GradientRing(theme.colors.gradients.dark));
    }

    #[test]
    fn test_disabled_dims_and_blocks() {
        let theme = Theme::default();
        let props = InputProps {
            disabled: true,
            ..variant(InputVariant::Outlined)
        };
        let style = resolve(props, Validity::Neutral, false);
        assert_eq!(style.opacity, DISABLED_OPACITY);
        assert_eq!(style.fill, Paint::Solid(theme.colors.neutral.s100));
        assert_eq!(style.hover, HoverEffect::default());
        assert_eq!(style.text_color, theme.colors.neutral.s500);
        assert!(!style.interactive);
    }

    #[test]
    fn test_disabled_input_hides_focus() {
        let theme = Theme::default();
        for v in InputVariant::ALL {
            let props = InputProps {
                disabled: true,
                ..variant(v)
            };
            assert_eq!(
                resolve(props, Validity::Neutral, true),
                resolve(props, Validity::Neutral, false),
                "{v:?}"
            );
        }

        let outlined = resolve(
            InputProps {
                disabled: true,
                ..variant(InputVariant::Outlined)
            },
            Validity::Neutral,
            true,
        );
        assert_eq!(outlined.frame, Frame::Border(Stroke::thick(theme.colors.neutral.s300)));
        assert_eq!(outlined.shadow, None);
    }

    #[test]
    fn test_full_width() {
        let wide = resolve(
            InputProps {
                full_width: true,
                ..Default::default()
            },
            Validity::Neutral,
            false,
        );
        assert_eq!(wide.width, WidthMode::Fill);
        assert_eq!(
            resolve(Default::default(), Validity::Neutral, false).width,
            WidthMode::Intrinsic
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("outlined".parse::<InputVariant>().ok(), Some(InputVariant::Outlined));
        assert_eq!("lg".parse::<InputSize>().ok(), Some(InputSize::Large));
        assert!(matches!(
            "xl".parse::<InputSize>(),
            Err(Error::UnknownToken { kind: "input size", .. })
        ));
    }
}
