//! Gallery - Showcase of Every Control State
//!
//! Owns the editor states, values and validation results the inputs
//! display, the way a host application would.

use std::time::Duration;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::input::InputState;
use gpui_component::{Icon, IconName};

use crate::components::primitives::{
    Button, ButtonSize, ButtonVariant, Input, InputSize, InputVariant,
};
use crate::components::style::{GradientChoice, StyleExt};
use crate::constants::GALLERY_SUBMIT_DELAY_MS;
use crate::styles::global::GlobalStyle;
use crate::theme::Theme;
use crate::theme::colors::{ColorScale, Shade};
use crate::theme::tokens::ShadowPreset;

/// Tailwind blue, swapped in to show a live palette change
const OCEAN: [u32; 10] = [
    0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8, 0x1e40af,
    0x1e3a8a,
];

/// Validate an email address the way a simple sign-up form would
///
/// An empty value is not an error yet; it just is not a success either.
pub fn email_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Some("Email must contain @");
    };
    if local.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Some("Enter a valid email address");
    }
    None
}

/// The installed theme with its brand scale replaced
pub fn with_primary(theme: &Theme, primary: ColorScale) -> Theme {
    let mut theme = theme.clone();
    theme.colors.primary = primary;
    theme
}

fn editor(
    window: &mut Window,
    cx: &mut App,
    placeholder: impl Into<SharedString>,
    value: &str,
) -> Entity<InputState> {
    let placeholder = placeholder.into();
    let value = value.to_string();
    cx.new(|cx| {
        InputState::new(window, cx)
            .placeholder(placeholder)
            .default_value(value)
    })
}

pub struct Gallery {
    variant_inputs: [Entity<InputState>; 4],
    size_inputs: [Entity<InputState>; 3],
    state_inputs: [Entity<InputState>; 4],
    email_input: Entity<InputState>,
    search_input: Entity<InputState>,
    email: String,
    submit_focus: FocusHandle,
    submitting: bool,
    submit_task: Option<Task<()>>,
    submitted: usize,
    /// Theme installed at startup, restored when the swap is undone
    base_theme: Theme,
    ocean: bool,
    _subscriptions: Vec<Subscription>,
}

impl Gallery {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let variant_inputs = InputVariant::ALL.map(|_| editor(window, cx, "Type here", ""));
        let size_inputs = InputSize::ALL.map(|size| editor(window, cx, size.name(), ""));
        let state_inputs = [
            editor(window, cx, "Username", "taken"),
            editor(window, cx, "Username", "vivid"),
            editor(window, cx, "", "Locked"),
            editor(window, cx, "Dark gradient", ""),
        ];
        let email_input = editor(window, cx, "you@example.com", "");
        let search_input = editor(window, cx, "Search", "");

        let subscriptions = vec![
            Input::subscribe(&email_input, cx, |this: &mut Self, value, cx| {
                this.email = value.to_string();
                cx.notify();
            }),
            Input::subscribe(&search_input, cx, |_, value, _| {
                tracing::debug!(query = value, "Search changed");
            }),
        ];

        let email_focus = email_input.read(cx).focus_handle(cx);
        window.focus(&email_focus);

        Self {
            variant_inputs,
            size_inputs,
            state_inputs,
            email_input,
            search_input,
            email: String::new(),
            submit_focus: cx.focus_handle(),
            submitting: false,
            submit_task: None,
            submitted: 0,
            base_theme: Theme::global(cx).clone(),
            ocean: false,
            _subscriptions: subscriptions,
        }
    }

    fn email_is_valid(&self) -> bool {
        !self.email.is_empty() && email_error(&self.email).is_none()
    }

    /// Pretend to send the form, holding the button in its loading state
    fn submit(&mut self, cx: &mut Context<Self>) {
        if self.submitting {
            return;
        }
        self.submitting = true;
        tracing::info!(email = %self.email, "Submitting");

        self.submit_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(GALLERY_SUBMIT_DELAY_MS))
                .await;

            let _ = this.update(cx, |this, cx| {
                this.submitting = false;
                this.submitted += 1;
                tracing::info!(count = this.submitted, "Submitted");
                cx.notify();
            });
        }));
        cx.notify();
    }

    /// Toggle the brand scale between the startup theme and blue
    fn swap_palette(&mut self, cx: &mut Context<Self>) {
        self.ocean = !self.ocean;
        let theme = if self.ocean {
            with_primary(&self.base_theme, ColorScale::from_hex(OCEAN))
        } else {
            self.base_theme.clone()
        };
        tracing::info!(ocean = self.ocean, "Swapping palette");
        crate::init_with_theme(theme, cx);
        cx.notify();
    }

    fn palette(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let colors = &theme.colors;
        let scales = [
            ("primary", &colors.primary),
            ("secondary", &colors.secondary),
            ("neutral", &colors.neutral),
        ]
        .map(|(name, scale)| {
            row(Shade::ALL.map(|shade| swatch(scale, shade, theme.shadows.sm)))
                .child(div().text_sm().child(name))
        });

        let label = if self.ocean { "Restore palette" } else { "Swap palette" };
        card("Palette", theme.shadows.md).children(scales).child(
            Button::outline("palette-swap", label)
                .left_icon(Icon::new(IconName::Settings).size_4())
                .on_click(cx.listener(|this, _, _, cx| this.swap_palette(cx))),
        )
    }

    fn buttons(&self, theme: &Theme) -> impl IntoElement {
        let by_variant = ButtonVariant::ALL.map(|variant| {
            row(ButtonSize::ALL.map(|size| {
                Button::new(
                    SharedString::from(format!("button-{}-{}", variant.name(), size.name())),
                    format!("{} {}", variant.name(), size.name()),
                )
                .variant(variant)
                .size(size)
            }))
        });

        let by_gradient = row(GradientChoice::ALL.map(|gradient| {
            Button::new(
                SharedString::from(format!("button-gradient-{}", gradient.name())),
                gradient.name(),
            )
            .variant(ButtonVariant::Gradient)
            .gradient(gradient)
        }));

        let states = row([
            Button::primary("button-disabled", "Disabled").disabled(true),
            Button::primary("button-loading", "Loading").loading(true),
            Button::outline("button-icons", "Next")
                .left_icon(Icon::new(IconName::Plus).size_4())
                .right_icon(Icon::new(IconName::ArrowRight).size_4()),
        ]);

        card("Buttons", theme.shadows.md)
            .children(by_variant)
            .child(by_gradient)
            .child(states)
            .child(Button::secondary("button-full", "Full width").full_width(true))
    }

    fn inputs(&self, theme: &Theme) -> impl IntoElement {
        let by_variant = row(InputVariant::ALL.into_iter().zip(&self.variant_inputs).map(
            |(variant, state)| {
                Input::new(SharedString::from(format!("input-{}", variant.name())), state)
                    .variant(variant)
                    .label(variant.name())
            },
        ));

        let by_size = row(InputSize::ALL.into_iter().zip(&self.size_inputs).map(
            |(size, state)| {
                Input::new(SharedString::from(format!("input-size-{}", size.name())), state)
                    .size(size)
            },
        ));

        let [taken, available, locked, dark] = &self.state_inputs;
        let states = row([
            Input::new("input-error", taken)
                .label("Username")
                .error("Required field")
                .success(true),
            Input::new("input-success", available)
                .label("Username")
                .success(true)
                .helper_text("Available"),
            Input::new("input-disabled", locked)
                .label("Disabled")
                .disabled(true),
            Input::new("input-dark", dark)
                .variant(InputVariant::Gradient)
                .gradient(GradientChoice::Dark),
        ]);

        card("Inputs", theme.shadows.md)
            .child(by_variant)
            .child(by_size)
            .child(states)
    }

    fn form(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let status = if self.submitted == 0 {
            SharedString::from("Nothing sent yet")
        } else {
            SharedString::from(format!("Sent {} time(s)", self.submitted))
        };

        card("Sign up", theme.shadows.lg)
            .child(
                Input::new("form-email", &self.email_input)
                    .label("Email")
                    .helper_text("We never share your email")
                    .error_opt(email_error(&self.email))
                    .success(self.email_is_valid())
                    .full_width(true),
            )
            .child(
                Input::new("form-search", &self.search_input)
                    .variant(InputVariant::Filled)
                    .left_icon(Icon::new(IconName::Search).size_4())
                    .right_icon(Icon::new(IconName::ArrowRight).size_4())
                    .full_width(true),
            )
            .child(
                Button::gradient_filled("form-submit", "Submit", GradientChoice::Violet)
                    .size(ButtonSize::Large)
                    .loading(self.submitting)
                    .disabled(!self.email_is_valid())
                    .full_width(true)
                    .focus_handle(&self.submit_focus)
                    .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
            )
            .child(div().text_sm().child(status))
    }
}

fn swatch(scale: &ColorScale, shade: Shade, shadow: ShadowPreset) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_1()
        .child(
            div()
                .size(px(36.0))
                .rounded(px(6.0))
                .bg(scale.shade(shade).to_rgba())
                .drop_shadows([shadow]),
        )
        .child(div().text_xs().child(shade.name()))
}

fn card(title: &'static str, shadow: ShadowPreset) -> gpui::Div {
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_6()
        .rounded(px(12.0))
        .bg(gpui::white())
        .drop_shadows([shadow])
        .child(
            div()
                .text_xl()
                .font_weight(gpui::FontWeight::BOLD)
                .child(title),
        )
}

fn row<E: IntoElement>(items: impl IntoIterator<Item = E>) -> gpui::Div {
    div().flex().flex_wrap().items_start().gap_3().children(items)
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = Theme::global(cx).clone();
        let spacing = theme.spacing.xxl;
        let palette = self.palette(&theme, cx);
        let form = self.form(&theme, cx);

        GlobalStyle::root(cx).child(
            div()
                .id("gallery")
                .size_full()
                .overflow_y_scroll()
                .p(px(spacing))
                .flex()
                .flex_col()
                .gap(px(spacing * 2.0))
                .child(palette)
                .child(self.buttons(&theme))
                .child(self.inputs(&theme))
                .child(div().max_w(px(420.0)).child(form)),
        )
    }
}
