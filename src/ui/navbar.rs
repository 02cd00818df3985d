// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The navbar shows the brand link on the left and a dropdown trigger on the
//! right. The dropdown's contents depend on the session: signed out it offers
//! Login, signed in it shows who is signed in plus the upload and sign-out
//! actions. The menu closes when the pointer leaves it and after any item is
//! activated; the brand link sits outside the dropdown and never touches it.

use crate::app::i18n::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Local part of the signed-in account's email; `None` when signed out.
    pub account_label: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    BrandPressed,
    ToggleMenu,
    CloseMenu,
    OpenLogin,
    OpenUpload,
    SignOutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Brand was activated: navigate home and greet the user.
    GoHome,
    OpenLogin,
    OpenUpload,
    SignOutRequested,
}

/// Entries the dropdown renders, decided solely by session presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Non-interactive row showing who is signed in.
    Account(String),
    Login,
    Upload,
    SignOut,
}

/// Computes the dropdown contents for the given session state.
///
/// Signed out renders exactly the login entry; signed in renders the account
/// label plus the upload and sign-out actions. Never both branches.
#[must_use]
pub fn menu_entries(account_label: Option<&str>) -> Vec<MenuEntry> {
    match account_label {
        Some(label) => vec![
            MenuEntry::Account(label.to_string()),
            MenuEntry::Upload,
            MenuEntry::SignOut,
        ],
        None => vec![MenuEntry::Login],
    }
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::BrandPressed => {
            // The brand sits outside the dropdown; pressing it leaves the menu as-is.
            Event::GoHome
        }
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenLogin => {
            *menu_open = false;
            Event::OpenLogin
        }
        Message::OpenUpload => {
            *menu_open = false;
            Event::OpenUpload
        }
        Message::SignOutPressed => {
            *menu_open = false;
            Event::SignOutRequested
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open), aligned under the trigger on the right
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(
            Container::new(dropdown)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding([0.0, spacing::SM]),
        );
    }

    content.into()
}

/// Build the top bar with the brand link and the dropdown trigger.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("navbar-brand"))
            .size(typography::TITLE_MD),
    )
    .on_press(Message::BrandPressed)
    .padding(spacing::XS)
    .style(styles::button::link);

    let trigger = button(
        Text::new("☰")
            .size(typography::TITLE_SM)
            .width(sizing::ICON_MD)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::ToggleMenu)
    .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(trigger);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Build the dropdown menu from the session-dependent entry list.
///
/// The whole menu is wrapped in a `mouse_area` so moving the pointer off it
/// closes it, matching hover-menu expectations.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for entry in menu_entries(ctx.account_label) {
        menu_column = menu_column.push(build_entry(ctx, entry));
    }

    let menu = Container::new(menu_column)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: border::WIDTH_SM,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        });

    mouse_area(menu).on_exit(Message::CloseMenu).into()
}

/// Render a single dropdown entry.
fn build_entry<'a>(ctx: &ViewContext<'a>, entry: MenuEntry) -> Element<'a, Message> {
    match entry {
        MenuEntry::Account(label) => Container::new(
            Text::new(label)
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::muted_text_color()),
                }),
        )
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .into(),
        MenuEntry::Login => build_menu_item(ctx.i18n.tr("navbar-login"), Message::OpenLogin),
        MenuEntry::Upload => build_menu_item(ctx.i18n.tr("navbar-upload"), Message::OpenUpload),
        MenuEntry::SignOut => {
            build_menu_item(ctx.i18n.tr("navbar-sign-out"), Message::SignOutPressed)
        }
    }
}

/// Build a single activatable menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu items.
///
/// Entries never disable, so the disabled arm just mirrors the resting look.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color) = match status {
        button::Status::Hovered => (
            Some(palette.background.strong.color.into()),
            palette.background.base.text,
        ),
        button::Status::Pressed => (
            Some(palette.primary.strong.color.into()),
            palette.primary.strong.text,
        ),
        button::Status::Active | button::Status::Disabled => {
            (None, palette.background.base.text)
        }
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_signed_out() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
            account_label: None,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_signed_in_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
            account_label: Some("viewer"),
        };
        let _element = view(ctx);
    }

    #[test]
    fn signed_out_menu_is_exactly_login() {
        assert_eq!(menu_entries(None), vec![MenuEntry::Login]);
    }

    #[test]
    fn signed_in_menu_has_account_upload_and_sign_out() {
        let entries = menu_entries(Some("viewer"));
        assert_eq!(
            entries,
            vec![
                MenuEntry::Account("viewer".to_string()),
                MenuEntry::Upload,
                MenuEntry::SignOut,
            ]
        );
        assert!(!entries.contains(&MenuEntry::Login));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn toggle_parity_holds_over_many_presses() {
        let mut menu_open = false;
        for press in 1..=7 {
            let _ = update(Message::ToggleMenu, &mut menu_open);
            assert_eq!(menu_open, press % 2 == 1);
        }
    }

    #[test]
    fn pointer_exit_always_closes_the_menu() {
        let mut menu_open = true;
        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));

        // Closing an already-closed menu stays closed
        let _ = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;
        let event = update(Message::OpenLogin, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenLogin));

        menu_open = true;
        let event = update(Message::OpenUpload, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenUpload));

        menu_open = true;
        let event = update(Message::SignOutPressed, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::SignOutRequested));
    }

    #[test]
    fn brand_press_leaves_the_menu_alone() {
        let mut menu_open = true;
        let event = update(Message::BrandPressed, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::GoHome));

        menu_open = false;
        let event = update(Message::BrandPressed, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::GoHome));
    }
}
