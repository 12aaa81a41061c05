use super::*;
use crate::{
    animation::{
        ease::Ease,
        object::{AnimationKind, MarkerPurpose},
        timing::FillMode,
    },
    descriptor::{
        keyframe::{CalculationMode, KeyFrameContent, RotationMode},
        spring::SpringParams,
        transition::{TransitionKind, TransitionSubtype},
    },
    foundation::core::{BezPath, Color, Point, Vec2},
    property::{catalog, value::RawValue},
};

fn range(d: &Descriptor) -> (Option<RawValue>, Option<RawValue>, Option<RawValue>) {
    match d.animation().kind() {
        AnimationKind::Basic { from, to, by, .. } => (from.clone(), to.clone(), by.clone()),
        other => panic!("expected basic animation, got {other:?}"),
    }
}

#[test]
fn basic_factories_fill_the_named_values() {
    let n = |v: f64| Some(RawValue::Number(v));
    let o = catalog::OPACITY;

    assert_eq!(range(&Basic::from(o, 0.2).into()), (n(0.2), None, None));
    assert_eq!(range(&Basic::to(o, 0.8).into()), (None, n(0.8), None));
    assert_eq!(range(&Basic::by(o, 0.1).into()), (None, None, n(0.1)));
    assert_eq!(range(&Basic::from_to(o, 0.2, 0.8).into()), (n(0.2), n(0.8), None));
    assert_eq!(range(&Basic::from_by(o, 0.2, 0.1).into()), (n(0.2), None, n(0.1)));
    assert_eq!(range(&Basic::by_to(o, 0.1, 0.8).into()), (None, n(0.8), n(0.1)));
}

#[test]
fn leaf_duration_is_optional() {
    let undated: Descriptor = Basic::to(catalog::OPACITY, 1.0).into();
    assert_eq!(undated.duration(), None);
    assert_eq!(undated.effective_duration(), DEFAULT_DURATION);
    assert_eq!(undated.animation().duration(), None);

    let dated: Descriptor = Basic::to(catalog::OPACITY, 1.0).with_duration(1.5).into();
    assert_eq!(dated.duration(), Some(1.5));
    assert_eq!(dated.animation().duration(), Some(1.5));
}

#[test]
fn auxiliary_settings_apply_in_order() {
    let d = Descriptor::from(Basic::to(catalog::SHADOW_OFFSET, Vec2::new(2.0, 2.0)))
        .with_auxiliaries([
            AuxiliaryProperty::Speed(2.0),
            AuxiliaryProperty::FillMode(FillMode::Forwards),
            AuxiliaryProperty::TimingFunction(Ease::EaseOut),
        ])
        .with_auxiliary(AuxiliaryProperty::Speed(0.5));

    assert_eq!(d.auxiliary().len(), 4);
    let timing = d.animation().timing().clone();
    assert_eq!(timing.speed, 0.5);
    assert_eq!(timing.fill_mode, FillMode::Forwards);
    assert_eq!(timing.timing_function, Some(Ease::EaseOut));
    assert_eq!(timing.begin_time, 0.0);
}

#[test]
fn every_call_builds_a_fresh_animation() {
    let d: Descriptor = Basic::to(catalog::OPACITY, 1.0).into();
    let a = d.animation();
    let b = d.animation();
    assert_ne!(a, b);
    assert!(a.delegate().is_none());
}

#[test]
fn property_is_reported_for_bound_leaves_only() {
    let basic: Descriptor = Basic::to(catalog::LINE_WIDTH, 2.0).into();
    assert_eq!(basic.property(), Some(catalog::LINE_WIDTH.key()));
    assert_eq!(basic.property_keys().len(), 1);

    let transition: Descriptor = Transition::new(TransitionKind::Fade).into();
    assert_eq!(transition.property(), None);
    assert!(transition.property_keys().is_empty());
    assert!(Descriptor::from(Wait::new(1.0)).property_keys().is_empty());
}

#[test]
fn keyframe_values_at_sorts_and_clamps_times() {
    let d: Descriptor = KeyFrame::values_at(
        catalog::OPACITY,
        [(0.9, 1.0), (-1.0, 0.0), (0.5, 0.4), (0.5, 0.6)],
    )
    .into();

    let animation = d.animation();
    let AnimationKind::KeyFrame {
        content: KeyFrameContent::Values {
            values, key_times, ..
        },
        ..
    } = animation.kind()
    else {
        panic!("expected key-frame values");
    };
    assert_eq!(key_times, &Some(vec![0.0, 0.5, 0.5, 0.9]));
    assert_eq!(
        values,
        &vec![
            RawValue::Number(0.0),
            RawValue::Number(0.4),
            RawValue::Number(0.6),
            RawValue::Number(1.0),
        ]
    );
}

#[test]
fn keyframe_modes_apply_to_matching_content() {
    let mut path = BezPath::new();
    path.move_to(Point::ZERO);
    path.line_to(Point::new(10.0, 0.0));

    let along = KeyFrame::path(catalog::POSITION, path)
        .with_rotation_mode(RotationMode::Auto)
        .with_timing_functions([Ease::EaseIn])
        .with_calculation_mode(CalculationMode::Paced);
    assert_eq!(along.calculation_mode(), CalculationMode::Paced);
    assert!(matches!(
        along.content(),
        KeyFrameContent::Path {
            rotation: Some(RotationMode::Auto),
            ..
        }
    ));

    let colors = KeyFrame::values(catalog::BACKGROUND_COLOR, [Color::BLACK, Color::WHITE])
        .with_rotation_mode(RotationMode::AutoReverse)
        .with_timing_functions([Ease::EaseInOut]);
    let KeyFrameContent::Values {
        timing_functions, ..
    } = colors.content()
    else {
        panic!("expected values");
    };
    assert_eq!(timing_functions, &vec![Ease::EaseInOut]);
}

#[test]
fn spring_carries_params() {
    let params = SpringParams {
        stiffness: 200.0,
        damping: 20.0,
        ..SpringParams::default()
    };
    let d: Descriptor = Spring::from_to(catalog::TRANSFORM_SCALE, 0.5, 1.0)
        .with_params(params)
        .into();

    match d.animation().kind() {
        AnimationKind::Spring {
            key_path, params: p, ..
        } => {
            assert_eq!(*key_path, "transform.scale");
            assert_eq!(*p, params);
        }
        other => panic!("expected spring, got {other:?}"),
    }
}

#[test]
fn spring_settling_duration() {
    let settle = SpringParams::default().settling_duration();
    // zeta = 0.5, omega0 = 10 -> rate 5.
    assert!((settle - 1000f64.ln() / 5.0).abs() < 1e-9);

    let undamped = SpringParams {
        damping: 0.0,
        ..SpringParams::default()
    };
    assert_eq!(undamped.settling_duration(), f64::INFINITY);

    let massless = SpringParams {
        mass: 0.0,
        ..SpringParams::default()
    };
    assert_eq!(massless.settling_duration(), 0.0);
}

#[test]
fn transition_progress_is_clamped_and_ordered() {
    let t = Transition::new(TransitionKind::MoveIn)
        .with_subtype(TransitionSubtype::FromLeft)
        .with_progress(-0.5, 2.0);
    assert_eq!(t.progress(), (0.0, 1.0));
    assert_eq!(t.subtype(), Some(TransitionSubtype::FromLeft));

    let t = Transition::new(TransitionKind::Reveal).with_progress(0.7, 0.3);
    assert_eq!(t.progress(), (0.7, 0.7));

    let t = Transition::new(TransitionKind::Push)
        .with_progress(0.2, 0.6)
        .with_progress(f64::NAN, f64::INFINITY);
    assert_eq!(t.progress(), (0.2, 0.6));
}

#[test]
fn markers_materialize_without_effect() {
    let action: Descriptor = Action::new(|| {}).into();
    assert_eq!(action.duration(), Some(0.0));
    assert!(matches!(
        action.animation().kind(),
        AnimationKind::Marker {
            purpose: MarkerPurpose::Action
        }
    ));

    let wait: Descriptor = Wait::new(1.25).into();
    assert_eq!(wait.duration(), Some(1.25));
    assert!(matches!(
        wait.animation().kind(),
        AnimationKind::Marker {
            purpose: MarkerPurpose::Wait
        }
    ));
}

#[test]
fn action_stays_zero_length_with_timing_settings() {
    let action: Descriptor = Action::new(|| {})
        .with_auxiliary(AuxiliaryProperty::Speed(2.0))
        .with_auxiliary(AuxiliaryProperty::RepeatCount(3.0))
        .into();
    assert_eq!(action.duration(), Some(0.0));
    assert_eq!(action.effective_duration(), 0.0);
    assert_eq!(action.animation().duration(), Some(0.0));
}

#[test]
fn action_can_run_directly() {
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let c = count.clone();
    let action = Action::new(move || c.set(c.get() + 1));
    action.run();
    action.clone().run();
    assert_eq!(count.get(), 2);
}

#[test]
fn hooks_are_stored_not_run() {
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let r = ran.clone();
    let d = Descriptor::from(Wait::new(1.0))
        .on_will_begin(move || r.set(true))
        .on_did_finish(|_| {});

    assert!(d.hooks().has_will_begin());
    assert!(!d.hooks().has_did_begin());
    assert!(d.hooks().has_did_finish());
    d.animation();
    assert!(!ran.get());
}

#[test]
fn group_duration_surfaces_through_descriptor() {
    let d: Descriptor = Group::sequential([
        Descriptor::from(Wait::new(1.0)),
        Basic::to(catalog::OPACITY, 1.0).with_duration(2.0).into(),
    ])
    .into();
    assert_eq!(d.duration(), Some(3.0));
    assert!(d.as_group().is_some());
    assert_eq!(d.animation().children().len(), 2);
}
