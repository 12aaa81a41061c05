use super::*;
use crate::{
    animation::timing::AuxiliaryProperty,
    descriptor::{
        basic::Basic,
        keyframe::KeyFrame,
        marker::{Action, Wait},
        transition::{Transition, TransitionKind},
    },
    foundation::core::DEFAULT_DURATION,
    property::catalog,
};

fn opacity(duration: f64) -> Descriptor {
    Basic::to(catalog::OPACITY, 1.0).with_duration(duration).into()
}

fn undated() -> Descriptor {
    Basic::to(catalog::CORNER_RADIUS, 8.0).into()
}

#[test]
fn sequential_sums_children() {
    let group = Group::sequential([
        opacity(2.0),
        KeyFrame::values(catalog::LINE_WIDTH, [1.0, 3.0])
            .with_duration(4.0)
            .into(),
    ]);
    assert_eq!(group.kind(), GroupKind::Sequential);
    assert_eq!(group.duration(), 6.0);
    assert_eq!(group.override_duration(), None);
}

#[test]
fn concurrent_takes_longest_child() {
    let group = Group::concurrent([opacity(2.0), opacity(5.0), opacity(1.0)]);
    assert_eq!(group.duration(), 5.0);
}

#[test]
fn concurrent_override_wins() {
    let group = Group::concurrent_with_duration([opacity(2.0), opacity(5.0)], 3.0);
    assert_eq!(group.override_duration(), Some(3.0));
    assert_eq!(group.duration(), 3.0);
}

#[test]
fn empty_groups_last_zero() {
    let none: [Descriptor; 0] = [];
    assert_eq!(Group::sequential(none.clone()).duration(), 0.0);
    assert_eq!(Group::concurrent(none).duration(), 0.0);
}

#[test]
fn undated_children_count_as_default_duration() {
    let seq = Group::sequential([undated(), opacity(1.0), undated()]);
    assert_eq!(seq.duration(), 1.0 + 2.0 * DEFAULT_DURATION);

    let conc = Group::concurrent([undated(), opacity(0.1)]);
    assert_eq!(conc.duration(), DEFAULT_DURATION);
}

#[test]
fn nested_group_durations_compose() {
    let inner = Group::concurrent([opacity(1.0), opacity(3.0)]);
    let outer = Group::sequential([Descriptor::from(inner), Wait::new(2.0).into()]);
    assert_eq!(outer.duration(), 5.0);
}

#[test]
fn actions_take_no_time() {
    let group = Group::sequential([opacity(1.0), Action::new(|| {}).into(), opacity(1.0)]);
    assert_eq!(group.duration(), 2.0);
    assert_eq!(group.begin_offsets(), vec![0.0, 1.0, 1.0]);
}

#[test]
fn begin_offsets_follow_kind() {
    let children = [opacity(2.0), undated(), opacity(1.0)];
    assert_eq!(
        Group::sequential(children.clone()).begin_offsets(),
        vec![0.0, 2.0, 2.0 + DEFAULT_DURATION]
    );
    assert_eq!(
        Group::concurrent(children).begin_offsets(),
        vec![0.0, 0.0, 0.0]
    );
}

#[test]
fn property_keys_are_the_union_of_members() {
    let group = Group::concurrent([
        opacity(1.0),
        Descriptor::from(Group::sequential([
            opacity(2.0),
            Basic::to(catalog::FILL_COLOR, crate::foundation::core::Color::BLACK).into(),
        ])),
        Transition::new(TransitionKind::Push).into(),
        Wait::new(1.0).into(),
    ]);

    let paths: Vec<_> = group.property_keys().iter().map(|k| k.key_path).collect();
    assert_eq!(paths, vec!["fillColor", "opacity"]);
}

#[test]
fn materialized_members_carry_offsets() {
    let group = Group::sequential([
        opacity(2.0),
        Descriptor::from(Basic::to(
            catalog::BOUNDS_SIZE,
            crate::foundation::core::Size::new(4.0, 4.0),
        ))
            .with_auxiliary(AuxiliaryProperty::BeginTime(9.0))
            .with_auxiliary(AuxiliaryProperty::Speed(2.0)),
        opacity(1.0),
    ])
    .with_auxiliary(AuxiliaryProperty::Autoreverses(true));

    let animation = group.materialize(Some(1.5));
    assert_eq!(animation.duration(), Some(2.0 + DEFAULT_DURATION + 1.0));
    assert_eq!(animation.begin_time(), 1.5);
    assert!(animation.timing().autoreverses);

    let begins: Vec<_> = animation.children().iter().map(Animation::begin_time).collect();
    assert_eq!(begins, vec![0.0, 2.0, 2.0 + DEFAULT_DURATION]);
    assert_eq!(animation.children()[1].timing().speed, 2.0);
    assert_eq!(animation.children()[1].key_path(), Some("bounds.size"));
}

#[test]
fn shared_members_materialize_independently() {
    let shared = opacity(1.0);
    let group = Group::concurrent([shared.clone(), shared]);
    let animation = group.materialize(None);

    let children = animation.children();
    assert_eq!(children.len(), 2);
    assert_ne!(children[0], children[1]);
    assert_eq!(animation.begin_time(), 0.0);
}
