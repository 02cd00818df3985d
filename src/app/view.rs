// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state. The navbar sits above every screen and toast
//! notifications float over the whole window.

use super::{notifications, Message, Screen};
use crate::app::i18n::I18n;
use crate::domain::{Session, VideoAsset, VideoId};
use crate::ui::design_tokens::spacing;
use crate::ui::detail::{self, ViewContext as DetailViewContext};
use crate::ui::feed::{self, ViewContext as FeedViewContext};
use crate::ui::login::{self, ViewContext as LoginViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::upload_form::{State as UploadFormState, ViewContext as UploadFormViewContext};
use iced::widget::image::Handle;
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub menu_open: bool,
    pub account: Option<&'a Session>,
    pub feed: &'a feed::State,
    pub posters: &'a HashMap<VideoId, Handle>,
    pub detail: Option<&'a VideoAsset>,
    pub upload_form: &'a UploadFormState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Feed => view_feed(&ctx),
        Screen::Detail => view_detail(&ctx),
        Screen::Upload => view_upload(&ctx),
        Screen::Login => view_login(&ctx),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        account_label: ctx.account.map(Session::account_label),
    })
    .map(Message::Navbar);

    let page = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        stack = stack.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    stack.into()
}

fn view_feed<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    feed::view(FeedViewContext {
        i18n: ctx.i18n,
        state: ctx.feed,
        posters: ctx.posters,
    })
    .map(Message::Feed)
}

fn view_detail<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(video) = ctx.detail {
        detail::view(DetailViewContext {
            i18n: ctx.i18n,
            video,
            poster: ctx.posters.get(&video.id),
        })
        .map(Message::Detail)
    } else {
        // Fallback if no asset is selected
        Container::new(Text::new("No video selected"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }
}

fn view_upload<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx
        .upload_form
        .view(UploadFormViewContext { i18n: ctx.i18n })
        .map(Message::UploadForm);

    scrollable(
        Container::new(form)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_login<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    login::view(LoginViewContext { i18n: ctx.i18n })
}
