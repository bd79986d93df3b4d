//! Button Component

use std::str::FromStr;
use std::time::Duration;

use gpui::{
    Animation, AnimationExt, AnyElement, App, ClickEvent, ElementId, FocusHandle,
    InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Transformation, Window, div, percentage, prelude::*, px,
    relative,
};
use gpui_component::{Icon, IconName};
use serde::{Deserialize, Serialize};

use crate::components::style::{
    GradientChoice, HoverEffect, Paint, SizeMetrics, SizeStep, Stroke, StyleExt, Surface,
    WidthMode, parse_token,
};
use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::theme::colors::{Color, GradientSpec};
use crate::theme::tokens::{Easing, ShadowPreset};

/// Opacity of an effectively disabled button
const DISABLED_OPACITY: f32 = 0.5;

/// Upward shift on hover, in pixels
const HOVER_LIFT: f32 = 2.0;

/// Focus outline width and its gap from the button edge, in pixels
const FOCUS_WIDTH: f32 = 2.0;
const FOCUS_OFFSET: f32 = 2.0;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid brand fill
    #[default]
    Primary,
    /// Muted slate fill
    Secondary,
    /// Brand border, transparent fill
    Outline,
    /// Text only until hovered
    Ghost,
    /// Named gradient fill with a hover sweep
    Gradient,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Gradient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Gradient => "gradient",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_token("button variant", s, &Self::ALL, Self::name)
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
    #[serde(rename = "xl")]
    ExtraLarge,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Small,
        ButtonSize::Medium,
        ButtonSize::Large,
        ButtonSize::ExtraLarge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
            ButtonSize::ExtraLarge => "xl",
        }
    }

    fn step(self) -> SizeStep {
        match self {
            ButtonSize::Small => SizeStep::Sm,
            ButtonSize::Medium => SizeStep::Md,
            ButtonSize::Large => SizeStep::Lg,
            ButtonSize::ExtraLarge => SizeStep::Xl,
        }
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_token("button size", s, &Self::ALL, Self::name)
    }
}

/// Everything about a button that affects its style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    /// Only read when `variant` is [`ButtonVariant::Gradient`]
    pub gradient: GradientChoice,
    pub loading: bool,
    pub disabled: bool,
    pub full_width: bool,
}

impl ButtonProps {
    /// Disabled or loading; either blocks interaction
    pub fn is_effectively_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Pass a click handler through only while the button accepts clicks
    pub fn gate_click<H>(&self, handler: Option<H>) -> Option<H> {
        if self.is_effectively_disabled() {
            None
        } else {
            handler
        }
    }

    /// Only buttons that accept clicks take keyboard focus
    pub fn accepts_focus(&self) -> bool {
        !self.is_effectively_disabled()
    }
}

/// Outline drawn around a focused button: a white gap, then the brand ring
///
/// Shadows paint in order, so the wider ring comes first.
pub fn focus_outline(
    theme: &Theme,
    props: &ButtonProps,
    focused: bool,
) -> Option<[ShadowPreset; 2]> {
    (focused && props.accepts_focus()).then(|| {
        [
            ShadowPreset::ring(theme.colors.primary.s500, FOCUS_OFFSET + FOCUS_WIDTH),
            ShadowPreset::ring(theme.colors.white, FOCUS_OFFSET),
        ]
    })
}

/// Hover tracking behind the gradient sweep
///
/// Each hover entry starts a new pass of the band across the button; the
/// band ends past the right edge and stays there until the pointer leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sweep {
    hovered: bool,
    passes: usize,
}

impl Sweep {
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered && !self.hovered {
            self.passes += 1;
        }
        self.hovered = hovered;
    }

    pub fn is_active(&self) -> bool {
        self.hovered
    }

    /// Number of passes started so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Left edge of the full-width band, relative to the button width
    pub fn band_left(progress: f32) -> f32 {
        -1.0 + 2.0 * progress.clamp(0.0, 1.0)
    }
}

/// Resolved button appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub surface: Surface,
    /// Empty while effectively disabled
    pub hover: HoverEffect,
    pub metrics: SizeMetrics,
    pub width: WidthMode,
    pub radius: f32,
    /// Space between icons and label
    pub gap: f32,
    pub opacity: f32,
    /// Opacity of label and icons; zero while loading
    pub content_opacity: f32,
    pub interactive: bool,
}

impl ButtonStyle {
    pub fn resolve(theme: &Theme, props: &ButtonProps) -> Self {
        let (surface, hover) = variant_surface(theme, props.variant, props.gradient);
        let interactive = !props.is_effectively_disabled();

        Self {
            surface,
            hover: if interactive { hover } else { HoverEffect::default() },
            metrics: SizeMetrics::step(theme, props.size.step()),
            width: WidthMode::from_full_width(props.full_width),
            radius: theme.radii.lg,
            gap: theme.spacing.sm,
            opacity: if interactive { 1.0 } else { DISABLED_OPACITY },
            content_opacity: if props.loading { 0.0 } else { 1.0 },
            interactive,
        }
    }
}

fn variant_surface(
    theme: &Theme,
    variant: ButtonVariant,
    gradient: GradientChoice,
) -> (Surface, HoverEffect) {
    let c = &theme.colors;
    let purple = Some(theme.shadows.purple);

    match variant {
        ButtonVariant::Primary => (
            Surface {
                fill: Paint::Solid(c.primary.s600),
                text: c.white,
                border: Stroke::thin(c.primary.s600),
            },
            HoverEffect {
                fill: Some(Paint::Solid(c.primary.s700)),
                border_color: Some(c.primary.s700),
                lift: HOVER_LIFT,
                shadow: purple,
                ..Default::default()
            },
        ),
        ButtonVariant::Secondary => (
            Surface {
                fill: Paint::Solid(c.secondary.s100),
                text: c.secondary.s700,
                border: Stroke::thin(c.secondary.s200),
            },
            HoverEffect {
                fill: Some(Paint::Solid(c.secondary.s200)),
                border_color: Some(c.secondary.s300),
                lift: HOVER_LIFT,
                ..Default::default()
            },
        ),
        ButtonVariant::Outline => (
            Surface {
                fill: Paint::Transparent,
                text: c.primary.s600,
                border: Stroke::thick(c.primary.s600),
            },
            HoverEffect {
                fill: Some(Paint::Solid(c.primary.s600)),
                text: Some(c.white),
                lift: HOVER_LIFT,
                shadow: purple,
                ..Default::default()
            },
        ),
        ButtonVariant::Ghost => (
            Surface {
                fill: Paint::Transparent,
                text: c.primary.s600,
                border: Stroke::thin(Color::TRANSPARENT),
            },
            HoverEffect {
                fill: Some(Paint::Solid(c.primary.s50)),
                text: Some(c.primary.s700),
                ..Default::default()
            },
        ),
        ButtonVariant::Gradient => (
            Surface {
                fill: Paint::Gradient(gradient.spec(theme)),
                text: c.white,
                border: Stroke::NONE,
            },
            HoverEffect {
                lift: HOVER_LIFT,
                shadow: purple,
                sweep: true,
                ..Default::default()
            },
        ),
    }
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: AnyElement,
    left_icon: Option<AnyElement>,
    right_icon: Option<AnyElement>,
    props: ButtonProps,
    focus_handle: Option<FocusHandle>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl IntoElement) -> Self {
        Self {
            id: id.into(),
            label: label.into_any_element(),
            left_icon: None,
            right_icon: None,
            props: ButtonProps::default(),
            focus_handle: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.props.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.props.size = size;
        self
    }

    /// Set the gradient used by the gradient variant
    pub fn gradient(mut self, gradient: GradientChoice) -> Self {
        self.props.gradient = gradient;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.props.loading = loading;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Stretch to the width of the parent
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = full_width;
        self
    }

    /// Content shown before the label
    pub fn left_icon(mut self, icon: impl IntoElement) -> Self {
        self.left_icon = Some(icon.into_any_element());
        self
    }

    /// Content shown after the label
    pub fn right_icon(mut self, icon: impl IntoElement) -> Self {
        self.right_icon = Some(icon.into_any_element());
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl IntoElement) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl IntoElement) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl IntoElement) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Make the button focusable; Enter and Space then activate it
    pub fn focus_handle(mut self, handle: &FocusHandle) -> Self {
        self.focus_handle = Some(handle.clone());
        self
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl IntoElement) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Create a gradient button
    pub fn gradient_filled(
        id: impl Into<ElementId>,
        label: impl IntoElement,
        gradient: GradientChoice,
    ) -> Self {
        Self::new(id, label)
            .variant(ButtonVariant::Gradient)
            .gradient(gradient)
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn style(&self, theme: &Theme) -> ButtonStyle {
        ButtonStyle::resolve(theme, &self.props)
    }

    /// The click handler, unless the button is effectively disabled
    fn take_click_handler(&mut self) -> Option<ClickHandler> {
        let handler = self.on_click.take();
        if handler.is_some() && self.props.is_effectively_disabled() {
            tracing::trace!(id = ?self.id, loading = self.props.loading, "Click handler suppressed");
        }
        self.props.gate_click(handler)
    }
}

fn icon_slot(icon: AnyElement) -> impl IntoElement {
    div()
        .flex()
        .flex_none()
        .items_center()
        .justify_center()
        .child(icon)
}

/// Translucent full-width band that crosses gradient buttons on hover
fn sweep_band(pass: usize, duration: Duration, easing: Easing) -> impl IntoElement {
    let band = GradientSpec::new(90.0, Color::WHITE.with_alpha(0.0), Color::WHITE.with_alpha(0.2));
    div()
        .absolute()
        .top_0()
        .h_full()
        .w_full()
        .left(relative(Sweep::band_left(0.0)))
        .bg(band.to_background())
        .with_animation(
            SharedString::from(format!("vivid-button-sweep-{pass}")),
            Animation::new(duration).with_easing(move |t| easing.apply(t)),
            |band, delta| band.left(relative(Sweep::band_left(delta))),
        )
}

fn spinner(color: Color, period: Duration) -> impl IntoElement {
    div()
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .child(
            Icon::new(IconName::Loader)
                .size_4()
                .text_color(color.to_rgba())
                .with_animation(
                    "vivid-button-spinner",
                    Animation::new(period).repeat(),
                    |icon, delta| icon.transform(Transformation::rotate(percentage(delta))),
                ),
        )
}

impl RenderOnce for Button {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let sweep = (self.props.variant == ButtonVariant::Gradient && self.props.accepts_focus())
            .then(|| window.use_keyed_state(self.id.clone(), cx, |_, _| Sweep::default()));
        let focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));

        let theme = Theme::global(cx);
        let style = self.style(theme);
        let outline = focus_outline(theme, &self.props, focused);
        let spinner_period = theme.animations.spinner();
        let sweep_duration = theme.animations.slow();
        let easing = theme.animations.easing;
        let on_click = self.take_click_handler();

        let content = div()
            .flex()
            .items_center()
            .gap(px(style.gap))
            .opacity(style.content_opacity)
            .children(self.left_icon.map(icon_slot))
            .child(self.label)
            .children(self.right_icon.map(icon_slot));

        let mut element = div()
            .id(self.id)
            .relative()
            .overflow_hidden()
            .flex()
            .items_center()
            .justify_center()
            .whitespace_nowrap()
            .rounded(px(style.radius))
            .label_weight(theme)
            .surface(style.surface)
            .metrics(style.metrics)
            .width_mode(style.width)
            .opacity(style.opacity)
            .drop_shadows(outline.into_iter().flatten())
            .child(content);

        if let Some(sweep) = sweep {
            let state = *sweep.read(cx);
            if state.is_active() {
                element = element.child(sweep_band(state.passes(), sweep_duration, easing));
            }
            element = element.on_hover(move |hovered, window, cx| {
                sweep.update(cx, |sweep, cx| {
                    sweep.set_hovered(*hovered);
                    cx.notify();
                });
                window.refresh();
            });
        }

        if self.props.loading {
            element = element.child(spinner(style.surface.text, spinner_period));
        }

        if style.interactive {
            let hover = style.hover;
            element = element.cursor_pointer().hover(move |s| s.hover_effect(hover));

            // A focused element with a click listener also fires it for Enter and Space
            if let Some(handle) = self.focus_handle.as_ref() {
                element = element.track_focus(handle);
            }
            if let Some(handler) = on_click {
                element = element.on_click(handler);
            }
        } else {
            element = element.cursor_not_allowed();
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(variant: ButtonVariant, size: ButtonSize) -> ButtonProps {
        ButtonProps {
            variant,
            size,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let props = ButtonProps::default();
        assert_eq!(props.variant, ButtonVariant::Primary);
        assert_eq!(props.size, ButtonSize::Medium);
        assert_eq!(props.gradient, GradientChoice::Purple);
        assert!(!props.loading && !props.disabled && !props.full_width);
    }

    #[test]
    fn test_every_variant_and_size_resolves_deterministically() {
        let theme = Theme::default();
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let first = ButtonStyle::resolve(&theme, &props(variant, size));
                let second = ButtonStyle::resolve(&theme, &props(variant, size));
                assert_eq!(first, second, "{variant:?}/{size:?}");
                assert!(first.metrics.min_height > 0.0);
                assert!(first.metrics.font_size > 0.0);
                assert!(first.interactive);
                assert_eq!(first.opacity, 1.0);
            }
        }
    }

    #[test]
    fn test_variant_colors() {
        let theme = Theme::default();
        let c = &theme.colors;

        let primary = ButtonStyle::resolve(&theme, &props(ButtonVariant::Primary, ButtonSize::Medium));
        assert_eq!(primary.surface.fill, Paint::Solid(c.primary.s600));
        assert_eq!(primary.surface.text, c.white);
        assert_eq!(primary.hover.shadow, Some(theme.shadows.purple));
        assert_eq!(primary.hover.lift, HOVER_LIFT);

        let outline = ButtonStyle::resolve(&theme, &props(ButtonVariant::Outline, ButtonSize::Medium));
        assert_eq!(outline.surface.fill, Paint::Transparent);
        assert_eq!(outline.surface.border, Stroke::thick(c.primary.s600));
        assert_eq!(outline.hover.text, Some(c.white));

        let ghost = ButtonStyle::resolve(&theme, &props(ButtonVariant::Ghost, ButtonSize::Medium));
        assert_eq!(ghost.hover.lift, 0.0);
        assert_eq!(ghost.hover.fill, Some(Paint::Solid(c.primary.s50)));

        let gradient = ButtonStyle::resolve(&theme, &props(ButtonVariant::Gradient, ButtonSize::Medium));
        assert_eq!(gradient.surface.fill, Paint::Gradient(c.gradients.purple));
        assert_eq!(gradient.surface.border, Stroke::NONE);
        assert!(gradient.hover.sweep);
    }

    #[test]
    fn test_size_metrics_follow_spacing_tokens() {
        let theme = Theme::default();
        let xl = ButtonStyle::resolve(&theme, &props(ButtonVariant::Primary, ButtonSize::ExtraLarge));
        assert_eq!(xl.metrics.padding_y, theme.spacing.xl);
        assert_eq!(xl.metrics.padding_x, theme.spacing.xxl);
        assert_eq!(xl.metrics.min_height, 56.0);

        let sm = ButtonStyle::resolve(&theme, &props(ButtonVariant::Primary, ButtonSize::Small));
        assert_eq!(sm.metrics.font_size, 14.0);
        assert_eq!(sm.metrics.min_height, 32.0);
    }

    #[test]
    fn test_gradient_ignored_unless_gradient_variant() {
        let theme = Theme::default();
        for variant in ButtonVariant::ALL {
            if variant == ButtonVariant::Gradient {
                continue;
            }
            let base = ButtonStyle::resolve(&theme, &props(variant, ButtonSize::Medium));
            for gradient in GradientChoice::ALL {
                let with_gradient = ButtonStyle::resolve(
                    &theme,
                    &ButtonProps {
                        gradient,
                        ..props(variant, ButtonSize::Medium)
                    },
                );
                assert_eq!(base, with_gradient, "{variant:?} with {gradient:?}");
            }
        }
    }

    #[test]
    fn test_gradient_choice_selects_fill() {
        let theme = Theme::default();
        let violet = ButtonStyle::resolve(
            &theme,
            &ButtonProps {
                gradient: GradientChoice::Violet,
                ..props(ButtonVariant::Gradient, ButtonSize::Medium)
            },
        );
        assert_eq!(violet.surface.fill, Paint::Gradient(theme.colors.gradients.violet));
    }

    #[test]
    fn test_effective_disabled() {
        for (disabled, loading) in [(false, false), (true, false), (false, true), (true, true)] {
            let props = ButtonProps {
                disabled,
                loading,
                ..Default::default()
            };
            assert_eq!(props.is_effectively_disabled(), disabled || loading);
        }
    }

    #[test]
    fn test_loading_hides_content_and_blocks_hover() {
        let theme = Theme::default();
        let style = ButtonStyle::resolve(
            &theme,
            &ButtonProps {
                loading: true,
                ..Default::default()
            },
        );
        assert_eq!(style.content_opacity, 0.0);
        assert_eq!(style.opacity, DISABLED_OPACITY);
        assert!(!style.interactive);
        assert_eq!(style.hover, HoverEffect::default());

        let idle = ButtonStyle::resolve(&theme, &ButtonProps::default());
        assert_eq!(style.metrics, idle.metrics);
    }

    #[test]
    fn test_disabled_keeps_content_visible() {
        let theme = Theme::default();
        let style = ButtonStyle::resolve(
            &theme,
            &ButtonProps {
                disabled: true,
                ..Default::default()
            },
        );
        assert_eq!(style.content_opacity, 1.0);
        assert!(!style.interactive);
    }

    #[test]
    fn test_click_handler_withheld_while_effectively_disabled() {
        let handler = || Some(|clicks: &mut u32| *clicks += 1);

        for (disabled, loading) in [(true, false), (false, true), (true, true)] {
            let props = ButtonProps {
                disabled,
                loading,
                ..Default::default()
            };
            assert!(props.gate_click(handler()).is_none());
        }

        let mut clicks = 0;
        if let Some(on_click) = ButtonProps::default().gate_click(handler()) {
            on_click(&mut clicks);
        }
        assert_eq!(clicks, 1);
        assert!(ButtonProps::default().gate_click(None::<fn()>).is_none());
    }

    #[test]
    fn test_focus_follows_effective_disabled() {
        let theme = Theme::default();
        let idle = ButtonProps::default();
        assert!(idle.accepts_focus());

        let rings = focus_outline(&theme, &idle, true).expect("focused ring");
        assert_eq!(rings[0].color, theme.colors.primary.s500);
        assert_eq!(rings[0].spread, FOCUS_OFFSET + FOCUS_WIDTH);
        assert_eq!(rings[1].color, theme.colors.white);
        assert_eq!(rings[1].spread, FOCUS_OFFSET);
        assert!(focus_outline(&theme, &idle, false).is_none());

        for blocked in [
            ButtonProps {
                disabled: true,
                ..Default::default()
            },
            ButtonProps {
                loading: true,
                ..Default::default()
            },
        ] {
            assert!(!blocked.accepts_focus());
            assert!(focus_outline(&theme, &blocked, true).is_none());
        }
    }

    #[test]
    fn test_sweep_starts_a_pass_per_hover_entry() {
        let mut sweep = Sweep::default();
        assert!(!sweep.is_active());

        sweep.set_hovered(true);
        sweep.set_hovered(true);
        assert!(sweep.is_active());
        assert_eq!(sweep.passes(), 1);

        sweep.set_hovered(false);
        assert!(!sweep.is_active());
        sweep.set_hovered(true);
        assert_eq!(sweep.passes(), 2);
    }

    #[test]
    fn test_sweep_band_crosses_the_surface() {
        assert_eq!(Sweep::band_left(0.0), -1.0);
        assert_eq!(Sweep::band_left(0.5), 0.0);
        // Settled band sits past the right edge, clipped away
        assert_eq!(Sweep::band_left(1.0), 1.0);
        assert_eq!(Sweep::band_left(2.0), 1.0);

        let easing = Theme::default().animations.easing;
        assert_eq!(Sweep::band_left(easing.apply(1.0)), 1.0);
    }

    #[test]
    fn test_full_width() {
        let theme = Theme::default();
        let wide = ButtonProps {
            full_width: true,
            ..Default::default()
        };
        assert_eq!(ButtonStyle::resolve(&theme, &wide).width, WidthMode::Fill);
        assert_eq!(
            ButtonStyle::resolve(&theme, &ButtonProps::default()).width,
            WidthMode::Intrinsic
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("ghost".parse::<ButtonVariant>().ok(), Some(ButtonVariant::Ghost));
        assert_eq!("xl".parse::<ButtonSize>().ok(), Some(ButtonSize::ExtraLarge));
        assert!(matches!(
            "huge".parse::<ButtonSize>(),
            Err(Error::UnknownToken { kind: "button size", .. })
        ));
    }
}
