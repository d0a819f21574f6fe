// Copyright 2020 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests related to layout.

use float_cmp::assert_approx_eq;
use test_log::test;

use super::*;
use crate::kurbo::Point;

#[test]
fn stack_of_three() {
    let layout = VerticalStack::new()
        .measure_and_place(&blocks(&[20., 30., 40.]), &screen())
        .unwrap();
    assert_eq!(layout.size, Size::new(300., 1000.));

    let mut seen = Vec::new();
    layout.place_with(|index, origin| seen.push((index, origin.y)));
    assert_eq!(seen, vec![(0, 100.), (1, 120.), (2, 150.)]);
}

#[test]
fn stack_fills_constraints_regardless_of_content() {
    for heights in [&[][..], &[1.][..], &[2000., 5.][..]].iter() {
        let layout = VerticalStack::new()
            .measure_and_place(&blocks(heights), &screen())
            .unwrap();
        assert_eq!(layout.size, screen().max());
        assert_eq!(layout.placements.len(), heights.len());
    }
}

#[test]
fn layouts_are_idempotent() {
    let stack = VerticalStack::new();
    let kids = blocks(&[7., 11., 13.]);
    let a = stack.measure_and_place(&kids, &screen()).unwrap();
    let b = stack.measure_and_place(&kids, &screen()).unwrap();
    assert_eq!(a, b);

    let text = Text::new("Hi there");
    let adjuster = FirstBaselineToTop::new(24.);
    assert_eq!(
        adjuster.adjust_for_baseline(&text, &screen()).unwrap(),
        adjuster.adjust_for_baseline(&text, &screen()).unwrap()
    );
}

#[test]
fn baseline_scenarios() {
    let cases = [
        // (height, baseline, target, expected padding)
        (50., 18., 24., 6.),
        (50., 30., 10., -20.),
        (40., 24., 24., 0.),
    ];
    for (height, baseline, target, padding) in cases.iter() {
        let child = Fixed::new(90., *height).with_baseline(*baseline);
        let layout = FirstBaselineToTop::new(*target)
            .adjust_for_baseline(&child, &screen())
            .unwrap();
        assert_approx_eq!(f64, layout.size.height, height + padding, epsilon = 1e-9);
        assert_approx_eq!(f64, layout.size.width, 90., epsilon = 1e-9);
        assert_eq!(layout.placement.origin, Point::new(0., *padding));
    }
}

#[test]
fn baseline_requires_text() {
    let boxed: Box<dyn LayoutElement> = Box::new(SizedBox::empty().width(48.).height(48.));
    let err = FirstBaselineToTop::new(24.)
        .adjust_for_baseline(&boxed, &screen())
        .unwrap_err();
    assert!(matches!(
        err,
        LayoutError::MissingAlignmentLine {
            line: AlignmentLine::FirstBaseline,
            element: "SizedBox",
        }
    ));
}

#[test]
fn text_with_padding_to_baseline() {
    let env = LayoutEnv::new().with_density(Density::new(2.));
    let text = env.first_baseline_to_top(Dp(24.)).wrap(Text::new("Hi there"));
    let layout = text.layout(&screen()).unwrap();

    // 14pt text has its baseline at 12.6
    assert_approx_eq!(f64, layout.placement.origin.y, 48. - 12.6, epsilon = 1e-9);
    assert_approx_eq!(f64, layout.size.height, 18. + 48. - 12.6, epsilon = 1e-9);
    assert_approx_eq!(
        f64,
        layout.child_line(AlignmentLine::FirstBaseline).unwrap(),
        48.,
        epsilon = 1e-9
    );
}

#[test]
fn custom_body_content() {
    let column = CustomColumn::new()
        .with_child(Text::new("Custom Column"))
        .with_child(Text::new("Great Work"))
        .with_child(Text::new("Wow good job"));
    let body = Padding::new(8., column);

    let layout = body.layout(&screen()).unwrap();
    assert_eq!(layout.size, Size::new(300., 1000.));
    assert_eq!(layout.placement.origin, Point::new(8., 8.));
    assert_eq!(layout.placement.measured.size(), Size::new(284., 984.));

    let inner = body.child().layout(&screen().shrink((16., 16.))).unwrap();
    let ys: Vec<f64> = inner.origins().iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![100., 118., 136.]);

    let m = body.measure(&screen()).unwrap();
    assert_approx_eq!(
        f64,
        m.get(AlignmentLine::FirstBaseline).unwrap(),
        120.6,
        epsilon = 1e-9
    );
}

#[test]
fn baseline_of_a_custom_column() {
    let column = CustomColumn::new().with_child(Text::new("Custom Column"));
    let layout = FirstBaselineToTop::new(24.)
        .adjust_for_baseline(&column, &screen())
        .unwrap();
    assert_approx_eq!(f64, layout.placement.origin.y, 24. - 112.6, epsilon = 1e-9);
    assert_approx_eq!(f64, layout.size.height, 1000. + 24. - 112.6, epsilon = 1e-9);
}

#[test]
fn baseline_of_a_column_led_by_an_image() {
    let avatar = || SizedBox::empty().width(48.).height(48.);
    let column = CustomColumn::new()
        .with_child(avatar())
        .with_child(Text::new("Hi"));
    let layout = FirstBaselineToTop::new(24.)
        .adjust_for_baseline(&column, &screen())
        .unwrap();
    // the text sits at 148 with its baseline 12.6 lower
    assert_approx_eq!(f64, layout.placement.origin.y, 24. - 160.6, epsilon = 1e-9);

    let row = Row::new().with_child(avatar()).with_child(Text::new("Hi"));
    let row_layout = FirstBaselineToTop::new(24.)
        .adjust_for_baseline(&row, &screen())
        .unwrap();
    assert_approx_eq!(f64, row_layout.placement.origin.y, 24. - 12.6, epsilon = 1e-9);
}

#[test]
fn nested_errors_propagate() {
    let column = CustomColumn::new()
        .with_child(Text::new("fine"))
        .with_child(FirstBaselineToTop::new(24.).wrap(Fixed::new(10., 10.)));
    let err = Padding::new(8., column).measure(&screen()).unwrap_err();
    assert_eq!(
        err,
        LayoutError::MissingAlignmentLine {
            line: AlignmentLine::FirstBaseline,
            element: "Fixed",
        }
    );
}

#[test]
fn photographer_card() {
    let env = LayoutEnv::new();
    let avatar = SizedBox::empty().size_dp(Dp(48.), env.density());
    let info = Padding::new(
        (env.px(Dp(8.)), 0., 0., 0.),
        Text::new("Richard Dewan\n5 minutes ago"),
    );
    let row = Row::new()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .with_child(avatar)
        .with_child(info);
    let card = Padding::new(8., row);

    let layout = card.layout(&screen()).unwrap();
    assert_eq!(layout.size, Size::new(8. + 48. + 8. + 91. + 8., 8. + 48. + 8.));

    let row_layout = card.child().layout(&screen().shrink((16., 16.))).unwrap();
    assert_eq!(row_layout.placements[0].origin, Point::new(0., 0.));
    assert_eq!(row_layout.placements[1].origin, Point::new(48., 6.5));
}
