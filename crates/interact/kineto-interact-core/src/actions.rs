//! Positional actions and their ordered, first-match resolution.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::InteractError;

/// What a matched action does to the player.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "seek")]
    Seek,
    #[serde(rename = "loop")]
    Loop,
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "stop")]
    Stop,
    #[serde(rename = "seek-xaxis")]
    SeekXAxis,
    #[serde(rename = "seek-yaxis")]
    SeekYAxis,
}

impl ActionKind {
    /// Whether authors are expected to supply a frame window for this kind.
    /// Axis seeks address the timeline by percentage and carry none.
    #[inline]
    pub fn expects_frames(&self) -> bool {
        matches!(self, Self::Seek | Self::Loop | Self::Play | Self::Stop)
    }
}

/// Frame window handed to the player's segment API, serialized as
/// `[start, end]`. A reversed window is legal; players treat it as reverse
/// playback.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct FrameSpan {
    pub start: f32,
    pub end: f32,
}

impl FrameSpan {
    #[inline]
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

impl From<[f32; 2]> for FrameSpan {
    fn from(pair: [f32; 2]) -> Self {
        Self {
            start: pair[0],
            end: pair[1],
        }
    }
}

impl From<FrameSpan> for [f32; 2] {
    fn from(span: FrameSpan) -> Self {
        [span.start, span.end]
    }
}

/// One author-supplied binding from a progress range to a playback command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Lower bound of the matched range, normalized to [0, 1].
    pub start: f32,
    /// Upper bound of the matched range, normalized to [0, 1].
    pub end: f32,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Frame window for seek/loop/play/stop kinds; axis seeks ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<FrameSpan>,
}

impl Action {
    /// Whether `progress` falls inside this action's inclusive range.
    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }
}

/// Ordered, immutable action list. Declaration order is resolution priority.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet {
    actions: Vec<Action>,
}

impl ActionSet {
    /// Build the set, logging one warning per suspect entry. Construction
    /// never fails; malformed entries are skipped when they match.
    pub fn new(actions: Vec<Action>) -> Self {
        for finding in validate_actions(&actions) {
            warn!(category = finding.category(), "{finding}");
        }
        Self { actions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// First action, in declaration order, whose range contains `progress`.
    /// Overlap is legal; order decides.
    pub fn resolve(&self, progress: f32) -> Option<(usize, &Action)> {
        self.actions
            .iter()
            .enumerate()
            .find(|(_, action)| action.contains(progress))
    }

    /// First action whose range contains the fraction `candidate` yields for
    /// it. Pointer dispatch matches each action against its own axis.
    pub fn resolve_by<F>(&self, candidate: F) -> Option<(usize, &Action)>
    where
        F: Fn(&Action) -> Option<f32>,
    {
        self.actions
            .iter()
            .enumerate()
            .find(|(_, action)| candidate(action).is_some_and(|p| action.contains(p)))
    }
}

/// Collect every shape finding without failing: malformed ranges and frame
/// windows missing where the kind expects one.
pub(crate) fn validate_actions(actions: &[Action]) -> Vec<InteractError> {
    let mut findings = Vec::new();
    for (index, action) in actions.iter().enumerate() {
        let well_formed = action.start.is_finite()
            && action.end.is_finite()
            && action.start <= action.end
            && action.start >= 0.0
            && action.end <= 1.0;
        if !well_formed {
            findings.push(InteractError::InvalidRange {
                index,
                start: action.start,
                end: action.end,
            });
        }
        if action.kind.expects_frames() && action.frames.is_none() {
            findings.push(InteractError::MissingFrames {
                index,
                kind: action.kind,
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_action(start: f32, end: f32, kind: ActionKind) -> Action {
        Action {
            start,
            end,
            kind,
            frames: Some(FrameSpan::new(0.0, 100.0)),
        }
    }

    #[test]
    fn test_kind_wire_names() {
        let parsed: ActionKind = serde_json::from_str("\"seek-xaxis\"").unwrap();
        assert_eq!(parsed, ActionKind::SeekXAxis);
        assert_eq!(
            serde_json::to_string(&ActionKind::Loop).unwrap(),
            "\"loop\""
        );
    }

    #[test]
    fn test_frame_span_array_form() {
        let span: FrameSpan = serde_json::from_str("[10, 40]").unwrap();
        assert_eq!(span, FrameSpan::new(10.0, 40.0));
        assert_eq!(serde_json::to_string(&span).unwrap(), "[10.0,40.0]");
    }

    #[test]
    fn test_action_wire_form() {
        let raw = r#"{"start": 0.2, "end": 0.5, "type": "loop", "frames": [0, 30]}"#;
        let action: Action = serde_json::from_str(raw).unwrap();
        assert_eq!(action.kind, ActionKind::Loop);
        assert_eq!(action.frames, Some(FrameSpan::new(0.0, 30.0)));
    }

    #[test]
    fn test_resolution_is_first_match() {
        let set = ActionSet::new(vec![
            mk_action(0.0, 0.5, ActionKind::Loop),
            mk_action(0.4, 1.0, ActionKind::Play),
        ]);
        let (index, action) = set.resolve(0.45).unwrap();
        assert_eq!(index, 0);
        assert_eq!(action.kind, ActionKind::Loop);
    }

    #[test]
    fn test_resolution_bounds_are_inclusive() {
        let set = ActionSet::new(vec![mk_action(0.2, 0.6, ActionKind::Stop)]);
        assert!(set.resolve(0.2).is_some());
        assert!(set.resolve(0.6).is_some());
        assert!(set.resolve(0.61).is_none());
    }

    #[test]
    fn test_validate_flags_reversed_range_and_missing_frames() {
        let actions = vec![
            Action {
                start: 0.8,
                end: 0.2,
                kind: ActionKind::Seek,
                frames: None,
            },
            mk_action(0.0, 1.0, ActionKind::Play),
        ];
        let findings = validate_actions(&actions);
        assert_eq!(findings.len(), 2);
        assert!(matches!(
            findings[0],
            InteractError::InvalidRange { index: 0, .. }
        ));
        assert!(matches!(
            findings[1],
            InteractError::MissingFrames { index: 0, .. }
        ));
    }
}
