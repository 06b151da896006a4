//! All Couriers screen
//!
//! Renders [`CourierListState`] into an [`Element`] tree and routes the
//! host's event handlers back to the controller or the navigator.

use crate::components::{
    Alignment, Button, Container, Element, Icon, IconPosition, JustifyContent, List, ListItem,
    Spacing, Spinner, StyleProps, Text,
};
use crate::format::{CourierCard, NOTES_MAX_LINES};
use crate::navigation::{Navigator, Route};
use crate::status::filter_label;
use crate::theme::colors;
use crate::tokens::{border, font_size, icons, radius, shadows, sizing, spacing, FontWeight};
use app_state::{CourierListController, CourierListState, FetchOutcome};
use courier_client::CourierFilter;

const HANDLER_BACK: &str = "go_back";
const HANDLER_REFRESH: &str = "refresh";
const HANDLER_SELECT_FILTER: &str = "select_filter:";
const HANDLER_OPEN_COURIER: &str = "open_courier:";

// =============================================================================
// Actions
// =============================================================================

/// User interactions on the courier list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Header back button
    Back,
    /// Filter tab pressed
    SelectFilter(CourierFilter),
    /// Pull-to-refresh
    Refresh,
    /// Card or "View Details" pressed
    OpenCourier(String),
}

impl ScreenAction {
    /// Handler identifier carried by the element tree
    pub fn handler(&self) -> String {
        match self {
            ScreenAction::Back => HANDLER_BACK.to_string(),
            ScreenAction::Refresh => HANDLER_REFRESH.to_string(),
            ScreenAction::SelectFilter(filter) => format!("{}{}", HANDLER_SELECT_FILTER, filter),
            ScreenAction::OpenCourier(id) => format!("{}{}", HANDLER_OPEN_COURIER, id),
        }
    }

    /// Parse a handler identifier sent back by the host
    pub fn from_handler(handler: &str) -> Option<Self> {
        match handler {
            HANDLER_BACK => Some(ScreenAction::Back),
            HANDLER_REFRESH => Some(ScreenAction::Refresh),
            _ => {
                if let Some(filter) = handler.strip_prefix(HANDLER_SELECT_FILTER) {
                    filter.parse().ok().map(ScreenAction::SelectFilter)
                } else {
                    handler
                        .strip_prefix(HANDLER_OPEN_COURIER)
                        .map(|id| ScreenAction::OpenCourier(id.to_string()))
                }
            }
        }
    }
}

// =============================================================================
// Screen
// =============================================================================

/// The courier list screen bound to its controller
#[derive(Clone)]
pub struct AllCouriersScreen {
    controller: CourierListController,
}

impl AllCouriersScreen {
    /// Create the screen
    pub fn new(controller: CourierListController) -> Self {
        Self { controller }
    }

    /// Underlying controller
    pub fn controller(&self) -> &CourierListController {
        &self.controller
    }

    /// Initial fetch when the screen appears
    pub async fn mount(&self) -> FetchOutcome {
        self.controller.mount().await
    }

    /// Render the current state
    pub fn render(&self) -> Element {
        render_all_couriers(&self.controller.state())
    }

    /// Perform an action; returns the fetch outcome when one was issued
    pub async fn handle<N: Navigator>(
        &self,
        action: ScreenAction,
        navigator: &mut N,
    ) -> Option<FetchOutcome> {
        match action {
            ScreenAction::Back => {
                navigator.go_back();
                None
            }
            ScreenAction::SelectFilter(filter) => self.controller.set_filter(filter).await,
            ScreenAction::Refresh => Some(self.controller.refresh().await),
            ScreenAction::OpenCourier(courier_id) => {
                navigator.navigate(Route::courier_view(courier_id));
                None
            }
        }
    }

    /// Dispatch a raw handler identifier; unknown handlers are ignored
    pub async fn handle_event<N: Navigator>(
        &self,
        handler: &str,
        navigator: &mut N,
    ) -> Option<FetchOutcome> {
        match ScreenAction::from_handler(handler) {
            Some(action) => self.handle(action, navigator).await,
            None => {
                tracing::warn!(handler, "Ignoring unknown screen event");
                None
            }
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render the courier list screen
pub fn render_all_couriers(state: &CourierListState) -> Element {
    let body: Element = if state.loading {
        Container::column()
            .with_id("loading")
            .with_justify(JustifyContent::Center)
            .with_align(Alignment::Center)
            .child(Spinner {
                large: true,
                color: colors::PRIMARY.to_string(),
            })
            .into()
    } else {
        render_list(state).into()
    };

    Container::column()
        .with_id("all_couriers")
        .with_background(colors::LIGHT)
        .child(render_header())
        .child(render_tabs(state.filter))
        .child(body)
        .into()
}

fn render_header() -> Container {
    Container::row()
        .with_id("header")
        .with_align(Alignment::Center)
        .with_gap(spacing::SPACE_LG)
        .with_style(StyleProps {
            padding: Some(Spacing::uniform(spacing::SPACE_LG)),
            background_color: Some(colors::WHITE.to_string()),
            border_bottom_width: Some(border::THIN),
            border_color: Some(colors::LIGHT_GRAY.to_string()),
            ..Default::default()
        })
        .child(
            Button::new("Back")
                .with_id("back")
                .on_press(ScreenAction::Back.handler())
                .with_icon(
                    Icon::new(icons::ARROW_BACK)
                        .with_size(sizing::icon::LG)
                        .with_color(colors::DARK),
                    IconPosition::Only,
                ),
        )
        .child(
            Text::new(Route::AllCouriers.title())
                .with_id("title")
                .with_size(font_size::XL)
                .with_weight(FontWeight::Bold)
                .with_color(colors::DARK),
        )
}

fn render_tabs(selected: CourierFilter) -> Container {
    CourierFilter::all().into_iter().fold(
        Container::row()
            .with_id("filter_tabs")
            .with_gap(spacing::SPACE_SM)
            .with_padding(Spacing::uniform(spacing::SPACE_LG))
            .with_background(colors::WHITE),
        |tabs, filter| {
            let active = filter == selected;
            let (background, text) = if active {
                (colors::PRIMARY, colors::WHITE)
            } else {
                (colors::LIGHT, colors::GRAY)
            };
            tabs.child(
                Button::new(filter_label(filter))
                    .with_id(format!("tab:{}", filter))
                    .active(active)
                    .on_press(ScreenAction::SelectFilter(filter).handler())
                    .with_text_color(text)
                    .with_style(StyleProps {
                        padding: Some(Spacing::symmetric(spacing::SPACE_SM, spacing::SPACE_LG)),
                        background_color: Some(background.to_string()),
                        border_radius: Some(radius::MD),
                        ..Default::default()
                    }),
            )
        },
    )
}

fn render_list(state: &CourierListState) -> List {
    let items = state
        .couriers
        .iter()
        .map(|record| {
            let card = CourierCard::from_record(record);
            ListItem {
                key: card.key.clone(),
                element: render_card(&card),
            }
        })
        .collect();

    let empty = state
        .shows_empty_placeholder()
        .then(|| Box::new(render_empty()));

    List {
        id: Some("courier_list".to_string()),
        items,
        refreshing: state.refreshing,
        on_refresh: Some(ScreenAction::Refresh.handler()),
        empty,
        content_padding: Some(spacing::SPACE_LG),
    }
}

fn render_empty() -> Element {
    Container::column()
        .with_id("empty")
        .with_align(Alignment::Center)
        .with_padding(Spacing::uniform(spacing::SPACE_3XL))
        .child(
            Icon::new(icons::INBOX)
                .with_size(sizing::icon::XXL)
                .with_color(colors::LIGHT_GRAY),
        )
        .child(
            Text::new("No couriers found")
                .with_size(font_size::LG)
                .with_color(colors::GRAY),
        )
        .into()
}

fn detail_row(icon: &str, content: &str) -> Container {
    Container::row()
        .with_align(Alignment::Center)
        .with_gap(spacing::SPACE_SM)
        .child(Icon::new(icon).with_color(colors::GRAY))
        .child(
            Text::new(content)
                .with_size(font_size::MD)
                .with_color(colors::DARK),
        )
}

/// Render one courier card
pub fn render_card(card: &CourierCard) -> Element {
    let open = ScreenAction::OpenCourier(card.key.clone()).handler();

    let heading = Container::row()
        .with_justify(JustifyContent::SpaceBetween)
        .with_align(Alignment::Start)
        .child(
            Container::column()
                .with_gap(spacing::SPACE_XS)
                .child(
                    Text::new(card.tracking_code.as_str())
                        .with_id("tracking_code")
                        .with_size(font_size::LG)
                        .with_weight(FontWeight::Bold)
                        .with_color(colors::DARK),
                )
                .child(
                    Text::new(card.sent_time.as_str())
                        .with_id("sent_time")
                        .with_size(font_size::XS)
                        .with_color(colors::GRAY),
                ),
        )
        .child(
            Container::row()
                .with_id("status_badge")
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_XS)
                .with_style(StyleProps {
                    padding: Some(Spacing::symmetric(spacing::SPACE_XS, spacing::SPACE_SM)),
                    background_color: Some(card.status_color.to_string()),
                    border_radius: Some(radius::LG),
                    ..Default::default()
                })
                .child(Icon::new(card.status_icon).with_color(colors::WHITE))
                .child(
                    Text::new(card.status_label)
                        .with_id("status_label")
                        .with_size(font_size::XS)
                        .with_weight(FontWeight::Semibold)
                        .with_color(colors::WHITE),
                ),
        );

    let details = Container::column()
        .with_gap(spacing::SPACE_SM)
        .child(detail_row(icons::PERSON, &card.technicians))
        .child(detail_row(icons::INVENTORY, &card.items))
        .child_opt(
            card.amount
                .as_deref()
                .map(|amount| detail_row(icons::CURRENCY_RUPEE, amount)),
        );

    let notes = card.notes.as_deref().map(|notes| {
        Container::column()
            .with_id("notes")
            .with_gap(spacing::SPACE_XS)
            .with_style(StyleProps {
                padding: Some(Spacing::uniform(spacing::SPACE_MD)),
                background_color: Some(colors::LIGHT.to_string()),
                border_radius: Some(radius::MD),
                ..Default::default()
            })
            .child(
                Text::new("Notes:")
                    .with_size(font_size::SM)
                    .with_weight(FontWeight::Semibold)
                    .with_color(colors::GRAY),
            )
            .child(
                Text::new(notes)
                    .with_size(font_size::SM)
                    .with_color(colors::DARK)
                    .with_lines(NOTES_MAX_LINES),
            )
    });

    let footer = Container::row()
        .with_justify(JustifyContent::End)
        .with_style(StyleProps {
            padding: Some(Spacing::individual(spacing::SPACE_BASE, 0.0, 0.0, 0.0)),
            border_top_width: Some(border::THIN),
            border_color: Some(colors::LIGHT_GRAY.to_string()),
            ..Default::default()
        })
        .child(
            Button::new("View Details")
                .with_id("view_details")
                .on_press(open.clone())
                .with_text_color(colors::PRIMARY)
                .with_icon(
                    Icon::new(icons::ARROW_FORWARD).with_color(colors::PRIMARY),
                    IconPosition::Right,
                ),
        );

    Container::column()
        .with_id(format!("courier:{}", card.key))
        .on_press(open)
        .with_gap(spacing::SPACE_BASE)
        .with_style(StyleProps {
            margin: Some(Spacing::individual(0.0, 0.0, spacing::SPACE_BASE, 0.0)),
            padding: Some(Spacing::uniform(spacing::SPACE_LG)),
            background_color: Some(colors::WHITE.to_string()),
            border_radius: Some(radius::LG),
            shadow: Some(shadows::card()),
            ..Default::default()
        })
        .child(heading)
        .child(details)
        .child_opt(notes)
        .child(footer)
        .into()
}

// =============================================================================
// Tests
// =============================================================================
