// Touch/pointer gesture resolution: one-finger pan, two-finger pinch.
use crate::model::TransformState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Mouse,
}

/// One input frame. `points` holds every point still down after the event,
/// so an `End` that lifts one of two fingers carries the remaining finger.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    pub kind: InputKind,
    pub source: InputSource,
    pub points: Vec<Point>,
    pub timestamp: f64,
}

impl InputEvent {
    pub fn touch(kind: InputKind, points: Vec<Point>, timestamp: f64) -> Self {
        Self {
            kind,
            source: InputSource::Touch,
            points,
            timestamp,
        }
    }

    pub fn mouse(kind: InputKind, point: Option<Point>, timestamp: f64) -> Self {
        Self {
            kind,
            source: InputSource::Mouse,
            points: point.into_iter().collect(),
            timestamp,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    #[default]
    Idle,
    OnePoint {
        source: InputSource,
        anchor: Point,
        baseline_x: f64,
        baseline_y: f64,
    },
    TwoPoint {
        baseline_distance: f64,
        baseline_scale: f64,
    },
}

impl GestureSession {
    fn source(&self) -> Option<InputSource> {
        match self {
            GestureSession::Idle => None,
            GestureSession::OnePoint { source, .. } => Some(*source),
            GestureSession::TwoPoint { .. } => Some(InputSource::Touch),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TouchState {
    session: GestureSession,
}

impl TouchState {
    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Drops any in-flight gesture without touching the transform.
    pub fn cancel(&mut self) {
        self.session = GestureSession::Idle;
    }

    /// Feeds one event through the resolver. Returns true when `transform`
    /// was changed.
    pub fn handle(&mut self, event: &InputEvent, transform: &mut TransformState) -> bool {
        match event.kind {
            InputKind::Start => {
                // A mouse press never interrupts a live touch gesture
                if event.source == InputSource::Mouse
                    && self.session.source() == Some(InputSource::Touch)
                {
                    return false;
                }
                self.rebaseline(event.source, &event.points, transform);
                false
            }
            InputKind::End | InputKind::Cancel => {
                if self.session.source() == Some(event.source) {
                    self.rebaseline(event.source, &event.points, transform);
                }
                false
            }
            InputKind::Move => self.track(event, transform),
        }
    }

    fn rebaseline(&mut self, source: InputSource, points: &[Point], transform: &TransformState) {
        self.session = match points {
            [] => GestureSession::Idle,
            [only] => {
                let (baseline_x, baseline_y) = transform.translate();
                GestureSession::OnePoint {
                    source,
                    anchor: *only,
                    baseline_x,
                    baseline_y,
                }
            }
            [a, b, ..] => GestureSession::TwoPoint {
                baseline_distance: a.distance(b),
                baseline_scale: transform.scale(),
            },
        };
    }

    fn track(&mut self, event: &InputEvent, transform: &mut TransformState) -> bool {
        if self.session.source() != Some(event.source) {
            return false;
        }
        let points = event.points.as_slice();
        match (self.session, points) {
            (_, []) => false,
            (
                GestureSession::OnePoint {
                    anchor,
                    baseline_x,
                    baseline_y,
                    ..
                },
                [current],
            ) => {
                transform.set_translate(
                    baseline_x + (current.x - anchor.x),
                    baseline_y + (current.y - anchor.y),
                );
                true
            }
            (
                GestureSession::TwoPoint {
                    baseline_distance,
                    baseline_scale,
                },
                [a, b, ..],
            ) => {
                if !(baseline_distance.is_finite() && baseline_distance > 0.0) {
                    // Skip this frame and measure from here on
                    self.rebaseline(event.source, points, transform);
                    return false;
                }
                let before = transform.scale();
                transform.set_scale(baseline_scale * (a.distance(b) / baseline_distance));
                transform.scale() != before
            }
            // Finger count changed without a start or end, so re-anchor and skip this frame
            _ => {
                self.rebaseline(event.source, points, transform);
                false
            }
        }
    }
}
