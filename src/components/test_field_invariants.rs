use std::time::Duration;

use gpui::{Bounds, Pixels, SharedString, px};

use crate::contracts::{MotionAware, TextInputSurface};
use crate::error::FieldError;
use crate::icon::IconSource;

use super::decorations::test_support::{TagView, tag_of};
use super::field_layout::{local_bounds, rect};
use super::{
    DecoratedField, DecoratedFieldConfig, FieldEvent, FieldProperty, InputState, TitleFont,
    TitleVisibility,
};

const EPS: f32 = 1e-3;

fn close(a: Pixels, b: f32) -> bool {
    (f32::from(a) - b).abs() < EPS
}

fn right(bounds: Bounds<Pixels>) -> f32 {
    f32::from(bounds.origin.x) + f32::from(bounds.size.width)
}

fn field() -> DecoratedField {
    let mut field = DecoratedField::with_placeholder("Card number");
    field.layout(local_bounds(300.0, 44.0));
    field.take_events();
    field
}

fn title_height(field: &DecoratedField) -> f32 {
    field.title_height()
}

#[test]
fn bare_field_scenario_matches_expected_text_rect() {
    let field = field();
    let th = title_height(&field);
    let text = field.text_rect(local_bounds(300.0, 44.0));
    assert!(close(text.origin.x, 1.0));
    assert!(close(text.origin.y, th));
    assert!(close(text.size.width, 299.0));
    assert!(close(text.size.height, 44.0 - th - 1.0));
}

#[test]
fn icon_scenario_shifts_every_text_region() {
    let mut field = field();
    field.set_leading_icon(Some(IconSource::named("card")));
    field.layout(local_bounds(300.0, 44.0));

    let icon = field.leading_icon();
    assert!(!icon.is_hidden());
    assert!(close(icon.frame().size.width, 30.8));

    let bounds = field.bounds();
    for text in [
        field.text_rect(bounds),
        field.editing_rect(bounds),
        field.placeholder_rect(bounds),
    ] {
        assert!(close(text.origin.x, 34.8));
    }
    assert!(close(field.title_rect_for_bounds(bounds, true).origin.x, 34.8));
    assert!(close(field.title_rect_for_bounds(bounds, false).origin.x, 34.8));
}

#[test]
fn decorations_never_intrude_on_text_region() {
    let sizes = [(300.0, 44.0), (120.0, 30.0), (48.0, 60.0), (12.0, 10.0)];
    let scales = [0.0, 0.5, 0.7, 1.0];
    for (width, height) in sizes {
        for scale in scales {
            for (icon, accessory) in [(false, false), (true, false), (false, true), (true, true)]
            {
                let mut field = field();
                field.set_leading_icon_scale(scale).unwrap();
                field.set_accessory_scale(scale).unwrap();
                if icon {
                    field.set_leading_icon(Some(IconSource::named("i")));
                }
                if accessory {
                    field.set_accessory(Some(TagView::boxed("a")));
                }
                let bounds = local_bounds(width, height);
                field.layout(bounds);
                let layout = field.computed_layout();

                if let Some(icon) = layout.leading_icon {
                    assert!(right(icon) <= f32::from(layout.text_entry.origin.x) + EPS);
                }
                if let Some(accessory) = layout.accessory {
                    let text_right = right(layout.text_entry);
                    if f32::from(layout.text_entry.size.width) > 0.0 {
                        assert!(text_right <= f32::from(accessory.origin.x) + EPS);
                    }
                    assert!(right(layout.title) <= f32::from(accessory.origin.x) + EPS
                        || f32::from(layout.title.size.width) == 0.0);
                }
                assert!(close(layout.underline.size.width, width));
                assert!(f32::from(layout.text_entry.size.width) >= 0.0);
                assert!(f32::from(layout.text_entry.size.height) >= 0.0);
            }
        }
    }
}

#[test]
fn geometry_is_idempotent() {
    let mut field = field();
    field.set_leading_icon(Some(IconSource::named("card")));
    field.set_accessory(Some(TagView::boxed("eye")));
    let bounds = local_bounds(280.0, 50.0);
    field.layout(bounds);

    assert_eq!(field.computed_layout(), field.computed_layout());
    assert_eq!(field.text_rect(bounds), field.text_rect(bounds));
    let first = field.layout(bounds);
    let second = field.layout(bounds);
    assert_eq!(first, second);
}

#[test]
fn title_visibility_tracks_content_through_edits() {
    let mut field = field();
    let script: &[&str] = &["4", "", "42", "", "", "4242"];
    for step in script {
        if step.is_empty() {
            while field.delete_backward() {}
        } else {
            field.insert_text(step);
        }
        let expected = TitleVisibility::from_content(field.surface().has_text());
        assert_eq!(field.title_visibility(), expected);
        assert_eq!(field.is_title_visible(), !field.text().is_empty());
        field.advance(Duration::from_secs(1));
        let title = field.title().unwrap();
        assert_eq!(title.opacity(), expected.opacity());
    }
}

#[test]
fn clearing_text_fades_title_out_over_fade_out_duration() {
    let mut field = field();
    field.insert_text("1234");
    field.advance(Duration::from_secs(1));
    let floating = field.title_rect_for_bounds(field.bounds(), true);
    let placeholder = field.title_rect_for_bounds(field.bounds(), false);
    assert_eq!(field.title().unwrap().frame(), floating);
    field.take_events();

    field.clear();
    let transition = *field.title().unwrap().state().transition().unwrap();
    assert_eq!(transition.duration, Duration::from_millis(300));
    assert_eq!(transition.from.opacity, 1.0);
    assert_eq!(transition.to.opacity, 0.0);
    assert_eq!(transition.from.bounds, floating);
    assert_eq!(transition.to.bounds, placeholder);

    assert!(field.advance(Duration::from_millis(150)));
    assert!(!field.advance(Duration::from_millis(150)));
    assert_eq!(field.title().unwrap().opacity(), 0.0);
    assert_eq!(field.title().unwrap().frame(), placeholder);
    assert_eq!(
        field.take_events(),
        vec![
            FieldEvent::TextChanged(SharedString::from("")),
            FieldEvent::TitleTransitionFinished {
                visible: false,
                finished: true,
            },
        ]
    );
}

#[test]
fn programmatic_text_changes_do_not_animate() {
    let mut field = field();
    field.set_text("prefilled");
    assert!(!field.is_animating());
    assert_eq!(field.title().unwrap().opacity(), 1.0);
    assert_eq!(
        field.take_events(),
        vec![
            FieldEvent::TextChanged(SharedString::from("prefilled")),
            FieldEvent::TitleTransitionFinished {
                visible: true,
                finished: true,
            },
        ]
    );
}

#[test]
fn error_takes_precedence_over_placeholder_styling() {
    let mut field = field();
    field.set_title_color(gpui::blue());
    field.set_underline_color(gpui::green());
    field.set_error_color(gpui::red());

    field.set_has_error(true);
    assert!(!field.is_showing_error());
    assert_eq!(field.underline().color, gpui::green());

    field.set_error_message(Some("Invalid card".into()));
    let title = field.title().unwrap();
    assert_eq!(title.color, gpui::red());
    assert_eq!(title.text.to_string(), "Invalid card");
    assert_eq!(field.underline().color, gpui::red());

    field.set_title_color(gpui::white());
    assert_eq!(field.title().unwrap().color, gpui::red());

    field.set_has_error(false);
    let title = field.title().unwrap();
    assert_eq!(title.color, gpui::white());
    assert_eq!(title.text.to_string(), "Card number");
    assert_eq!(field.underline().color, gpui::green());

    field.set_has_error(true);
    field.set_error_message(Some("".into()));
    assert_eq!(field.title().unwrap().text.to_string(), "Card number");
    assert_eq!(field.underline().color, gpui::green());
}

#[test]
fn accessory_container_holds_only_the_latest_accessory() {
    let mut field = field();
    assert!(field.accessory_container().is_hidden());

    assert!(field.set_accessory(Some(TagView::boxed("a"))).is_empty());
    let detached = field.set_accessory(Some(TagView::boxed("b")));
    assert_eq!(detached.len(), 1);
    assert_eq!(tag_of(detached[0].as_ref()), Some("a"));
    assert_eq!(field.accessory_container().child_count(), 1);
    assert_eq!(field.accessory().and_then(tag_of), Some("b"));

    let container = field.accessory_container().frame();
    assert!(close(container.size.width, 44.0 * 0.7));
    assert_eq!(
        field.accessory().map(|view| view.frame().size),
        Some(container.size)
    );
    assert!(close(
        field.text_rect(field.bounds()).size.width,
        300.0 - 1.0 - 44.0 * 0.7
    ));

    let detached = field.set_accessory(None);
    assert_eq!(detached.len(), 1);
    assert!(field.accessory_container().is_hidden());
    assert!(close(field.text_rect(field.bounds()).size.width, 299.0));
}

#[test]
fn rejected_numeric_writes_keep_previous_values() {
    let mut field = field();
    let before = field.computed_layout();
    assert_eq!(
        field.set_underline_thickness(-1.0),
        Err(FieldError::NegativeValue {
            property: FieldProperty::UnderlineThickness,
            value: -1.0,
        })
    );
    assert!(field.set_text_indent(f32::NAN).is_err());
    assert_eq!(field.config().underline_thickness, 1.0);
    assert_eq!(field.config().text_indent, 1.0);
    assert_eq!(field.computed_layout(), before);
}

#[test]
fn missing_placeholder_color_keeps_previous_color() {
    let mut field = field();
    field.set_placeholder_text_color(Some(gpui::blue()));
    assert_eq!(field.surface().placeholder_color(), Some(gpui::blue()));
    field.set_placeholder_text_color(None);
    assert_eq!(field.surface().placeholder_color(), Some(gpui::blue()));
    assert_eq!(field.placeholder_text_color(), gpui::blue());
}

#[test]
fn font_change_moves_title_and_text_regions() {
    let mut field = field();
    field.set_title_font(TitleFont::new("Mono", 20.0, 24.0)).unwrap();
    assert_eq!(field.title_height(), 24.0);
    let text = field.text_rect(field.bounds());
    assert!(close(text.origin.y, 24.0));
    assert!(close(field.title().unwrap().frame().origin.y, 24.0));
}

#[test]
fn invalid_title_font_is_rejected() {
    let mut field = field();
    let result = field.set_title_font(TitleFont {
        line_height: px(-5.0),
        ..TitleFont::default()
    });
    assert!(matches!(
        result,
        Err(FieldError::NegativeValue {
            property: FieldProperty::TitleFont,
            ..
        })
    ));
    let result = field.set_title_font(TitleFont {
        line_height: px(f32::NAN),
        ..TitleFont::default()
    });
    assert_eq!(
        result,
        Err(FieldError::NonFiniteValue {
            property: FieldProperty::TitleFont,
        })
    );
    assert!((field.title_height() - 15.5).abs() < EPS);
}

#[test]
fn literal_config_with_negative_values_stays_inside_bounds() {
    let config = DecoratedFieldConfig {
        accessory_scale: -0.5,
        leading_icon_scale: -1.0,
        text_indent: -3.0,
        underline_thickness: -2.0,
        leading_icon: Some(IconSource::named("card")),
        ..DecoratedFieldConfig::default()
    };
    let mut field = DecoratedField::with_config(
        InputState::default().with_placeholder("Card number"),
        config,
    );
    field.set_accessory(Some(TagView::boxed("a")));
    let text = field.layout(local_bounds(300.0, 44.0));

    assert_eq!(field.config().accessory_scale, 0.0);
    assert_eq!(field.config().text_indent, 0.0);
    let layout = field.computed_layout();
    let accessory = layout.accessory.unwrap();
    assert!(f32::from(accessory.size.width) >= 0.0);
    assert!(right(accessory) <= 300.0 + EPS);
    assert!(f32::from(layout.underline.size.height) >= 0.0);
    assert!(f32::from(text.origin.x) >= 0.0);
    assert!(right(text) <= 300.0 + EPS);
    assert!(right(layout.title) <= 300.0 + EPS);
}

#[test]
fn text_indent_recomputes_only_the_leading_edge() {
    let mut field = field();
    field.set_accessory(Some(TagView::boxed("a")));
    field.layout(field.bounds());
    let accessory = field.accessory_container().frame();
    let underline = field.underline().frame;

    field.set_text_indent(6.0).unwrap();
    assert!(field.needs_layout());
    assert_eq!(field.accessory_container().frame(), accessory);
    assert_eq!(field.underline().frame, underline);
    assert!(close(field.title().unwrap().frame().origin.x, 6.0));
    assert!(close(field.text_rect(field.bounds()).origin.x, 6.0));
}

#[test]
fn underline_thickness_moves_underline_and_accessory() {
    let mut field = field();
    field.set_accessory(Some(TagView::boxed("a")));
    let accessory_y = f32::from(field.accessory_container().frame().origin.y);
    field.set_underline_thickness(3.0).unwrap();
    assert!(field.needs_layout());
    assert!(close(field.underline().frame.origin.y, 41.0));
    assert!(close(field.underline().frame.size.height, 3.0));
    assert!(close(
        field.accessory_container().frame().origin.y,
        accessory_y - 2.0
    ));
    field.layout(field.bounds());
    assert!(!field.needs_layout());
}

#[test]
fn disabled_animation_recreates_title_on_every_update() {
    let config = DecoratedFieldConfig::new().disable_title_animation(true);
    let mut field = DecoratedField::with_config(
        InputState::default().with_placeholder("Code"),
        config,
    );
    field.layout(local_bounds(200.0, 40.0));
    let first = field.title().unwrap().generation;

    field.insert_text("9");
    let title = field.title().unwrap();
    assert!(title.generation > first);
    assert!(!field.is_animating());
    assert_eq!(title.opacity(), 1.0);

    field.set_disable_title_animation(false);
    let generation = field.title().unwrap().generation;
    field.insert_text("8");
    assert_eq!(field.title().unwrap().generation, generation);
}

#[test]
fn disabling_animation_mid_flight_reports_unfinished_transition() {
    let mut field = field();
    field.insert_text("a");
    field.advance(Duration::from_millis(50));
    field.take_events();
    let generation = field.title().unwrap().generation;

    field.set_disable_title_animation(true);
    assert_eq!(
        field.take_events(),
        vec![
            FieldEvent::TitleTransitionFinished {
                visible: true,
                finished: false,
            },
            FieldEvent::TitleTransitionFinished {
                visible: true,
                finished: true,
            },
        ]
    );
    assert!(field.title().unwrap().generation > generation);
    assert!(!field.is_animating());
    assert_eq!(field.title().unwrap().opacity(), 1.0);
}

#[test]
fn redirected_animation_reports_unfinished_transition() {
    let mut field = field();
    field.insert_text("1");
    field.advance(Duration::from_millis(50));
    field.take_events();

    field.delete_backward();
    let events = field.take_events();
    assert!(events.contains(&FieldEvent::TitleTransitionFinished {
        visible: true,
        finished: false,
    }));
    assert_eq!(field.title_visibility(), TitleVisibility::Hidden);
    let from = field.title().unwrap().state().transition().unwrap().from.opacity;
    assert!(from > 0.0 && from < 1.0);
}

#[test]
fn focus_does_not_change_visibility() {
    let mut field = field();
    field.begin_editing();
    assert!(field.is_focused());
    assert_eq!(field.title_visibility(), TitleVisibility::Hidden);
    field.end_editing();
    assert_eq!(
        field.take_events(),
        vec![
            FieldEvent::EditingBegan,
            FieldEvent::TitleTransitionFinished {
                visible: false,
                finished: true,
            },
            FieldEvent::EditingEnded(SharedString::from("")),
        ]
    );
}

#[test]
fn layout_pass_follows_resized_bounds() {
    let mut field = field();
    field.set_text("x");
    let text = field.layout(rect(0.0, 0.0, 200.0, 60.0));
    assert!(close(text.size.width, 199.0));
    assert!(close(field.underline().frame.origin.y, 59.0));
    assert!(close(field.title().unwrap().frame().size.width, 199.0));
}
