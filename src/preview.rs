// Preview state: the render stage plus one slot per kind of displayed node.
//
// Each slot holds at most one node. Starting a load releases whatever the
// slot held and hands out a `LoadTicket`; only the newest ticket of a slot
// may attach its result, so a slow request that was superseded while in
// flight is released instead of shown.

use super::fit::{fit_background, BackgroundFit, Size};
use super::orientation::Orientation;
use super::transform::{AnimationTransform, TransformInput};
use thiserror::Error;

/// Engine seam. The browser build implements this on top of PIXI; tests use
/// a recording stage.
pub trait Stage {
    type Animation;
    type Background;

    /// Current screen rectangle of the renderer.
    fn viewport(&self) -> Size;
    fn resize(&mut self, size: Size);
    /// Rotate the element surrounding the render surface.
    fn rotate_container(&mut self, css_transform: &str);

    fn animation_names(&self, animation: &Self::Animation) -> Vec<String>;
    fn set_animation_transform(&mut self, animation: &Self::Animation, transform: &AnimationTransform);
    /// Make `name` the active animation on the single playback track.
    fn play(&mut self, animation: &Self::Animation, name: &str, looping: bool);
    fn attach_animation(&mut self, animation: &Self::Animation);
    /// Detach (if attached) and free the animation.
    fn release_animation(&mut self, animation: Self::Animation);

    fn texture_size(&self, background: &Self::Background) -> Size;
    fn set_background_fit(&mut self, background: &Self::Background, fit: &BackgroundFit);
    /// Attach beneath every other node.
    fn attach_background(&mut self, background: &Self::Background);
    /// Detach (if attached) and free the background.
    fn release_background(&mut self, background: Self::Background);
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("load a Spine animation first")]
    NoAnimationLoaded,
    #[error("animation `{0}` not found in the loaded skeleton")]
    UnknownAnimation(String),
    #[error("no playable animations found")]
    NoAnimations,
    #[error("{0} load superseded by a newer request")]
    Superseded(SlotKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Animation,
    Background,
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SlotKind::Animation => "animation",
            SlotKind::Background => "background",
        })
    }
}

/// Issued when a load starts. Only the newest ticket of its slot may attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    kind: SlotKind,
    generation: u64,
}

impl LoadTicket {
    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct LoadCounter {
    issued: u64,
}

impl LoadCounter {
    fn issue(&mut self, kind: SlotKind) -> LoadTicket {
        self.issued += 1;
        LoadTicket {
            kind,
            generation: self.issued,
        }
    }

    #[inline]
    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.issued
    }
}

struct LoadedAnimation<A> {
    node: A,
    names: Vec<String>,
}

/// Result of an orientation toggle. The flip itself always happens; the
/// transform re-apply fails when no animation is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationChange {
    pub orientation: Orientation,
    pub background: Option<BackgroundFit>,
    pub transform: Result<AnimationTransform, PreviewError>,
}

pub struct Preview<S: Stage> {
    stage: S,
    animation: Option<LoadedAnimation<S::Animation>>,
    background: Option<S::Background>,
    orientation: Orientation,
    animation_loads: LoadCounter,
    background_loads: LoadCounter,
}

impl<S: Stage> Preview<S> {
    pub fn new(stage: S) -> Self {
        Self {
            stage,
            animation: None,
            background: None,
            orientation: Orientation::default(),
            animation_loads: LoadCounter::default(),
            background_loads: LoadCounter::default(),
        }
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn has_animation(&self) -> bool {
        self.animation.is_some()
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Names of the loaded skeleton's animations, empty when none is loaded.
    pub fn animation_names(&self) -> &[String] {
        self.animation
            .as_ref()
            .map(|a| a.names.as_slice())
            .unwrap_or(&[])
    }

    // ---------------- Animation slot ----------------

    /// Release the current animation and issue a ticket for its replacement.
    pub fn begin_animation_load(&mut self) -> LoadTicket {
        if let Some(old) = self.animation.take() {
            self.stage.release_animation(old.node);
        }
        self.animation_loads.issue(SlotKind::Animation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        match ticket.kind {
            SlotKind::Animation => self.animation_loads.is_current(ticket),
            SlotKind::Background => self.background_loads.is_current(ticket),
        }
    }

    /// Install a freshly built animation: apply the transform, play the first
    /// animation looping and attach it. Returns the skeleton's animation names.
    pub fn finish_animation_load(
        &mut self,
        ticket: LoadTicket,
        node: S::Animation,
        input: &TransformInput,
    ) -> Result<Vec<String>, PreviewError> {
        if ticket.kind != SlotKind::Animation || !self.animation_loads.is_current(ticket) {
            self.stage.release_animation(node);
            return Err(PreviewError::Superseded(SlotKind::Animation));
        }
        let names = self.stage.animation_names(&node);
        let Some(first) = names.first() else {
            self.stage.release_animation(node);
            return Err(PreviewError::NoAnimations);
        };

        self.stage
            .set_animation_transform(&node, &input.resolve());
        self.stage.play(&node, first, true);
        self.stage.attach_animation(&node);
        self.animation = Some(LoadedAnimation {
            node,
            names: names.clone(),
        });
        Ok(names)
    }

    pub fn select_animation(&mut self, name: &str) -> Result<(), PreviewError> {
        let loaded = self.animation.as_ref().ok_or(PreviewError::NoAnimationLoaded)?;
        if !loaded.names.iter().any(|n| n == name) {
            return Err(PreviewError::UnknownAnimation(name.to_string()));
        }
        self.stage.play(&loaded.node, name, true);
        Ok(())
    }

    pub fn apply_transform(&mut self, input: &TransformInput) -> Result<AnimationTransform, PreviewError> {
        let loaded = self.animation.as_ref().ok_or(PreviewError::NoAnimationLoaded)?;
        let transform = input.resolve();
        self.stage.set_animation_transform(&loaded.node, &transform);
        Ok(transform)
    }

    // ---------------- Background slot ----------------

    /// Release the current background and issue a ticket for its replacement.
    pub fn begin_background_load(&mut self) -> LoadTicket {
        if let Some(old) = self.background.take() {
            self.stage.release_background(old);
        }
        self.background_loads.issue(SlotKind::Background)
    }

    pub fn finish_background_load(
        &mut self,
        ticket: LoadTicket,
        node: S::Background,
    ) -> Result<BackgroundFit, PreviewError> {
        if ticket.kind != SlotKind::Background || !self.background_loads.is_current(ticket) {
            self.stage.release_background(node);
            return Err(PreviewError::Superseded(SlotKind::Background));
        }
        let fit = self.fit_node(&node);
        self.stage.attach_background(&node);
        self.background = Some(node);
        Ok(fit)
    }

    /// Refit the current background; `None` when there is nothing to fit.
    pub fn fit_background(&mut self) -> Option<BackgroundFit> {
        let node = self.background.take()?;
        let fit = self.fit_node(&node);
        self.background = Some(node);
        Some(fit)
    }

    fn fit_node(&mut self, node: &S::Background) -> BackgroundFit {
        self.stage.set_background_fit(node, &BackgroundFit::IDENTITY);
        let fit = fit_background(self.stage.viewport(), self.stage.texture_size(node), self.orientation);
        self.stage.set_background_fit(node, &fit);
        fit
    }

    // ---------------- Orientation ----------------

    pub fn toggle_orientation(&mut self, input: &TransformInput) -> OrientationChange {
        self.orientation = self.orientation.toggled();
        self.stage
            .rotate_container(&self.orientation.container_css_transform());
        let viewport = self.stage.viewport();
        self.stage.resize(viewport);
        let background = self.fit_background();
        let transform = self.apply_transform(input);
        OrientationChange {
            orientation: self.orientation,
            background,
            transform,
        }
    }
}
