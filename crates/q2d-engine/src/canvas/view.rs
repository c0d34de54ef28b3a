use crate::coords::{Point, Rect};

/// One nested coordinate/clip scope of a [`Canvas`](super::Canvas).
///
/// All rectangles are in absolute (buffer) space. `origin` maps the scope's
/// local `(0, 0)` to buffer coordinates. `clip` is always contained in the
/// parent scope's clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    origin: Point,
    bounds: Rect,
    clip: Rect,
    clip_stack: Vec<Rect>,
}

impl ViewState {
    fn new(origin: Point, bounds: Rect, clip: Rect) -> Self {
        Self { origin, bounds, clip, clip_stack: Vec::new() }
    }

    /// Absolute position of this scope's local `(0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Absolute extent of the scope, independent of clipping.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Absolute clip rectangle currently in effect.
    #[inline]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Number of clips pushed in this scope and not yet popped.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Converts a local point to absolute coordinates.
    #[inline]
    pub fn to_absolute(&self, p: Point) -> Point {
        self.origin + p
    }

    /// The clip rectangle expressed in this scope's local coordinates.
    #[inline]
    pub fn local_clip(&self) -> Rect {
        self.clip - self.origin
    }
}

/// Non-empty stack of view states; the top is the current scope.
///
/// Push/pop are the only mutators and the current state is always read from
/// the top, never cached.
#[derive(Debug, Clone)]
pub(crate) struct ViewStack {
    states: Vec<ViewState>,
}

impl ViewStack {
    pub(crate) fn new(full: Rect) -> Self {
        Self { states: vec![ViewState::new(full.origin(), full, full)] }
    }

    #[inline]
    pub(crate) fn current(&self) -> &ViewState {
        // `states` always holds the root, see `pop_sub_image`.
        &self.states[self.states.len() - 1]
    }

    #[inline]
    fn current_mut(&mut self) -> &mut ViewState {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn push_sub_image(&mut self, local: Rect) {
        let curr = self.current();
        let origin = curr.origin + local.origin();
        let bounds = Rect::from_origin_size(origin, local.width, local.height);
        let clip = curr.clip.intersect(bounds);
        self.states.push(ViewState::new(origin, bounds, clip));
    }

    /// Returns `false` (and leaves the stack untouched) at the root.
    pub(crate) fn pop_sub_image(&mut self) -> bool {
        if self.states.len() > 1 {
            self.states.pop();
            true
        } else {
            false
        }
    }

    pub(crate) fn push_clip(&mut self, local: Rect) {
        let curr = self.current_mut();
        let clip = curr.clip.intersect(local + curr.origin);
        curr.clip_stack.push(curr.clip);
        curr.clip = clip;
    }

    /// Returns `false` when the current scope has no clip to restore.
    pub(crate) fn pop_clip(&mut self) -> bool {
        let curr = self.current_mut();
        match curr.clip_stack.pop() {
            Some(prev) => {
                curr.clip = prev;
                true
            }
            None => false,
        }
    }
}
