// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! This example prints the geometry of the layouts from the layout codelab.
//!
//! Run with `RUST_LOG=trace` to see each layout pass.

use custom_layout::kurbo::Size;
use custom_layout::{
    BoxConstraints, CrossAxisAlignment, CustomColumn, Density, Dp, LayoutElement, LayoutEnv,
    LayoutError, LazyColumn, LazyListState, Padding, Row, ScrollColumn, ScrollState, SizedBox,
    StackLayout, Text, TextStyle,
};
use tracing_subscriber::EnvFilter;

const LIST_SIZE: usize = 100;

fn custom_body_content(env: &LayoutEnv) -> impl LayoutElement {
    let column = CustomColumn::with_stack(env.vertical_stack())
        .with_child(Text::new("Custom Column"))
        .with_child(Text::new("Great Work"))
        .with_child(Text::new("Wow good job"));
    Padding::uniform_dp(Dp(8.), env.density(), column)
}

fn photographer_card(env: &LayoutEnv) -> impl LayoutElement {
    let avatar = SizedBox::empty().size_dp(Dp(48.), env.density());
    let name = Text::new("Richard Dewan\n5 minutes ago").with_style(TextStyle::new(16.));
    let info = Padding::new((env.px(Dp(8.)), 0., 0., 0.), name);
    let row = Row::new()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .with_child(avatar)
        .with_child(info);
    Padding::uniform_dp(
        Dp(8.),
        env.density(),
        Padding::uniform_dp(Dp(16.), env.density(), row),
    )
}

fn image_list_item(env: LayoutEnv, index: usize) -> Row {
    Row::new()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .with_spacing(env.px(Dp(8.)))
        .with_child(SizedBox::empty().size_dp(Dp(48.), env.density()))
        .with_child(Text::new(format!("Lazy Item #{}", index)).with_font_size(16.))
}

fn report(name: &str, layout: &StackLayout) {
    tracing::info!("{}: {:?}", name, layout.size);
    layout.place_with(|index, origin| tracing::info!("  child {} at {:?}", index, origin));
}

fn run() -> Result<(), LayoutError> {
    let env = LayoutEnv::new().with_density(Density::new(2.));
    let screen = BoxConstraints::try_new(Size::ZERO, Size::new(720., 1280.))?;

    let body = custom_body_content(&env);
    tracing::info!("custom body content: {:?}", body.measure(&screen)?.size());

    let baseline = env.first_baseline_to_top(Dp(24.)).wrap(Text::new("Hi there"));
    let layout = baseline.layout(&screen)?;
    tracing::info!(
        "text with padding to baseline: {:?}, text at {:?}",
        layout.size,
        layout.placement.origin
    );

    let text = Text::new("Hi there with normal padding");
    let padded = Padding::uniform_dp(Dp(32.), env.density(), text);
    tracing::info!("text with normal padding: {:?}", padded.measure(&screen)?.size());

    let card = photographer_card(&env).measure(&screen)?;
    tracing::info!("photographer card: {:?}", card.size());

    let simple_list = (0..LIST_SIZE).fold(ScrollColumn::new(), |column, i| {
        column.with_child(Text::new(format!("Item No {}", i)))
    });
    let mut scroll = ScrollState::new();
    simple_list.layout(&screen, &mut scroll)?;
    scroll.scroll_by(500.);
    report("simple list", &simple_list.layout(&screen, &mut scroll)?);

    let lazy_list = LazyColumn::new(LIST_SIZE, |i| image_list_item(env, i));
    let mut state = LazyListState::new();
    state.scroll_to_item(LIST_SIZE - 1);
    report("lazy list, scrolled to bottom", &lazy_list.layout(&screen, &mut state)?);
    state.scroll_to_item(0);
    report("lazy list, scrolled to top", &lazy_list.layout(&screen, &mut state)?);

    Ok(())
}

pub fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        tracing::error!("layout failed: {}", e);
        std::process::exit(1);
    }
}
