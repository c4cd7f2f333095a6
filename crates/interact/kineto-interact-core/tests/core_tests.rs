use kineto_interact_core::{
    actions::{Action, ActionKind, ActionSet, FrameSpan},
    config::Config,
    engine::Engine,
    events::InputEvent,
    mode::Mode,
    outputs::Outcome,
};
use kineto_test_fixtures::configs;
use kineto_test_fixtures::geometry::{at_progress, container_at};
use kineto_test_fixtures::player::{PlayerCall, RecordingPlayer};

fn mk_action(start: f32, end: f32, kind: ActionKind, frames: Option<[f32; 2]>) -> Action {
    Action {
        start,
        end,
        kind,
        frames: frames.map(FrameSpan::from),
    }
}

fn mk_engine(mode: Mode, actions: Vec<Action>) -> Engine<RecordingPlayer> {
    let mut engine = Engine::new(Config { actions, mode }, RecordingPlayer::new(200.0));
    engine.start();
    engine
}

/// it should resolve overlapping ranges to the earliest declared action
#[test]
fn resolution_is_first_match_wins() {
    let set = ActionSet::new(vec![
        mk_action(0.0, 0.5, ActionKind::Loop, Some([0.0, 30.0])),
        mk_action(0.4, 1.0, ActionKind::Play, Some([30.0, 60.0])),
    ]);
    let (index, action) = set.resolve(0.45).unwrap();
    assert_eq!(index, 0);
    assert_eq!(action.kind, ActionKind::Loop);

    // Same sample, reversed declaration order, opposite winner.
    let reversed = ActionSet::new(vec![
        mk_action(0.4, 1.0, ActionKind::Play, Some([30.0, 60.0])),
        mk_action(0.0, 0.5, ActionKind::Loop, Some([0.0, 30.0])),
    ]);
    let (index, action) = reversed.resolve(0.45).unwrap();
    assert_eq!(index, 0);
    assert_eq!(action.kind, ActionKind::Play);
}

/// it should treat action range bounds as inclusive
#[test]
fn resolution_bounds_inclusive() {
    let set = ActionSet::new(vec![mk_action(0.25, 0.75, ActionKind::Stop, Some([0.0, 1.0]))]);
    assert!(set.resolve(0.25).is_some());
    assert!(set.resolve(0.75).is_some());
    assert!(set.resolve(0.2499).is_none());
    assert!(set.resolve(0.7501).is_none());
}

/// it should never dispatch an action when the container is outside the unit window
#[test]
fn out_of_view_never_reaches_resolution() {
    // A range wider than [0, 1] would match any progress; the sampler must
    // refuse the sample first.
    let mut engine = mk_engine(
        Mode::Hover,
        vec![mk_action(-10.0, 10.0, ActionKind::Loop, Some([0.0, 30.0]))],
    );
    let below = container_at(2000.0, 300.0, 800.0);
    assert_eq!(
        engine.dispatch(InputEvent::PointerEnter, &below),
        Outcome::OutOfView
    );
    assert!(engine.player_mut().take_calls().is_empty());
}

/// it should report events the configured mode does not handle
#[test]
fn unhandled_events_are_ignored() {
    let mut engine = mk_engine(
        Mode::Scroll,
        vec![mk_action(0.0, 1.0, ActionKind::Play, Some([0.0, 60.0]))],
    );
    let geometry = at_progress(0.5, 400.0, 800.0);
    assert_eq!(
        engine.dispatch(InputEvent::PointerEnter, &geometry),
        Outcome::Ignored
    );
    assert_eq!(
        engine.dispatch(InputEvent::PointerMove { x: 10.0, y: 10.0 }, &geometry),
        Outcome::Ignored
    );
    assert!(engine.player_mut().take_calls().is_empty());
}

/// it should surface a matched action whose kind the mode cannot drive
#[test]
fn mismatched_kind_is_unsupported() {
    // An axis seek matched by scroll progress has no arm in the scroll table.
    let mut engine = mk_engine(
        Mode::Scroll,
        vec![mk_action(0.0, 1.0, ActionKind::SeekYAxis, None)],
    );
    let geometry = at_progress(0.5, 400.0, 800.0);
    assert_eq!(
        engine.dispatch(InputEvent::Scroll, &geometry),
        Outcome::Unsupported
    );
    assert_eq!(
        engine.player_mut().take_calls(),
        vec![PlayerCall::SetLoop { looping: true }]
    );
}

/// it should collect every validation finding without failing construction
#[test]
fn findings_are_diagnostics_not_errors() {
    let config = Config {
        mode: Mode::Hover,
        actions: vec![
            mk_action(0.9, 0.1, ActionKind::Loop, None),
            mk_action(0.0, 1.0, ActionKind::SeekXAxis, None),
        ],
    };
    let findings = config.findings();
    // Reversed range, missing frames, and a kind hover cannot drive.
    assert_eq!(findings.len(), 3);
    assert!(config.validate().is_err());

    // The same configuration still constructs and dispatches: the reversed
    // range matches nothing, so the axis action wins and is reported.
    let mut engine = Engine::new(config, RecordingPlayer::new(200.0));
    engine.start();
    let geometry = at_progress(0.5, 400.0, 800.0);
    assert_eq!(
        engine.dispatch(InputEvent::PointerEnter, &geometry),
        Outcome::Unsupported
    );
    assert!(engine.player_mut().take_calls().is_empty());
}

/// it should drive a fixture configuration end to end
#[test]
fn fixture_config_round_trip() {
    let config = configs::load("scroll_seek").expect("fixture should load");
    assert_eq!(config.mode, Mode::Scroll);
    assert!(config.validate().is_ok());

    let mut engine = Engine::new(config, RecordingPlayer::new(200.0));
    engine.start();

    // Progress 0.6 falls in the fixture's seek band.
    let geometry = at_progress(0.6, 400.0, 800.0);
    let outcome = engine.dispatch(InputEvent::Scroll, &geometry);
    assert_eq!(outcome, Outcome::Applied(ActionKind::Seek));
    let calls = engine.player_mut().take_calls();
    assert_eq!(calls[0], PlayerCall::SetLoop { looping: true });
    assert!(matches!(calls[1], PlayerCall::PlaySegments { .. }));
    assert!(matches!(calls[2], PlayerCall::GoToAndStop { .. }));
}

/// it should list every named fixture in the manifest
#[test]
fn fixture_manifest_is_complete() {
    let mut keys = configs::keys();
    keys.sort();
    assert_eq!(keys, vec!["hover_pulse", "pointer_axes", "scroll_seek"]);
    for key in keys {
        assert!(configs::load(&key).is_ok(), "fixture '{key}' should parse");
    }
}
