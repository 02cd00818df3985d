// SPDX-License-Identifier: MPL-2.0
//! Login screen: a static explainer, no credential form.
//!
//! Sessions are established in the ReelsBook web app and picked up from
//! persisted state; this screen only tells the user how to do that. It is
//! message-generic because it never emits anything.

use crate::app::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the login screen.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let title = Text::new(ctx.i18n.tr("login-title")).size(typography::TITLE_LG);

    let instructions = Text::new(ctx.i18n.tr("login-instructions")).size(typography::BODY);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(instructions),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel);

    let content = Container::new(panel)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XXL, spacing::LG]);

    scrollable(content).width(Length::Fill).height(Length::Fill).into()
}
