//! Mode-gated dispatch for the viewer.
//!
//! `Viewer` is the single owner of the transform. Gestures reach it only in
//! [`PresentationMode::Editing`]; in [`PresentationMode::Fixed`] every press
//! re-arms the exit control instead. The mode itself follows the host's
//! fullscreen signal and is never flipped from here.

use std::rc::Rc;
use yew::Reducible;

use super::affordance::ExitAffordance;
use super::source::ImageSources;
use super::touch::{InputEvent, InputKind, TouchState};
use crate::config::ViewerConfig;
use crate::model::{RenderTransform, TransformState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    Editing,
    Fixed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerAction {
    Input(InputEvent),
    Rotate,
    Reset,
    SelectInitial,
    SelectUser,
    UserImageChosen { url: String },
    FullscreenChanged { active: bool },
    ExitControlActivated,
    /// Fired by the hide timer with the deadline it was armed for.
    ExpireExitControl { now: f64 },
    /// Image loaded or viewport resized: re-render with the same transform.
    Relayout,
}

#[derive(Clone, Debug)]
pub struct Viewer {
    transform: TransformState,
    touch: TouchState,
    mode: PresentationMode,
    exit_control: ExitAffordance,
    sources: ImageSources,
    pub version: u64,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            transform: TransformState::new(config.scale_bounds()),
            touch: TouchState::default(),
            mode: PresentationMode::Editing,
            exit_control: ExitAffordance::new(config.exit_control_ms),
            sources: ImageSources::new(config.initial_image.clone()),
            version: 0,
        }
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn project(&self) -> RenderTransform {
        self.transform.project()
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn sources(&self) -> &ImageSources {
        &self.sources
    }

    pub fn exit_control_visible(&self) -> bool {
        self.mode == PresentationMode::Fixed && self.exit_control.visible()
    }

    pub fn exit_control_deadline(&self) -> Option<f64> {
        self.exit_control.deadline()
    }

    /// Applies one action in order. Returns true when anything observable
    /// changed and the view needs a redraw.
    pub fn apply(&mut self, action: ViewerAction) -> bool {
        match action {
            ViewerAction::Input(event) => self.dispatch_input(&event),
            ViewerAction::Rotate => {
                if self.mode != PresentationMode::Editing {
                    return false;
                }
                self.transform.rotate_step();
                true
            }
            ViewerAction::Reset => {
                if self.mode != PresentationMode::Editing {
                    return false;
                }
                self.touch.cancel();
                self.transform.reset();
                true
            }
            ViewerAction::SelectInitial => self.sources.select_initial(),
            ViewerAction::SelectUser => self.sources.select_user(),
            ViewerAction::UserImageChosen { url } => {
                self.sources.set_user_image(url);
                true
            }
            ViewerAction::FullscreenChanged { active } => self.set_fullscreen(active),
            ViewerAction::ExitControlActivated => {
                let was_visible = self.exit_control.visible();
                self.exit_control.disarm();
                was_visible
            }
            ViewerAction::ExpireExitControl { now } => self.exit_control.expire(now),
            ViewerAction::Relayout => true,
        }
    }

    fn dispatch_input(&mut self, event: &InputEvent) -> bool {
        match self.mode {
            PresentationMode::Editing => self.touch.handle(event, &mut self.transform),
            PresentationMode::Fixed => {
                if event.kind == InputKind::Start {
                    self.exit_control.arm(event.timestamp);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn set_fullscreen(&mut self, active: bool) -> bool {
        let next = if active {
            PresentationMode::Fixed
        } else {
            PresentationMode::Editing
        };
        if next == self.mode {
            return false;
        }
        self.mode = next;
        // No partial gesture survives a mode switch
        self.touch.cancel();
        self.exit_control.disarm();
        true
    }
}

impl Reducible for Viewer {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            next.version = next.version.wrapping_add(1);
            Rc::new(next)
        } else {
            self
        }
    }
}
