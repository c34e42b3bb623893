use quadgl_math::{AffineParams, Mat4};

/// The live render state: model transform, global opacity and the program
/// most recently bound through the pipeline (by `save`, `restore` or a draw).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState<P> {
    transform: Mat4,
    global_alpha: f32,
    program: Option<P>,
}

impl<P> RenderState<P> {
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    pub fn program(&self) -> Option<&P> {
        self.program.as_ref()
    }
}

impl<P> Default for RenderState<P> {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            global_alpha: 1.0,
            program: None,
        }
    }
}

/// Snapshot written by [`TransformStack::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState<P> {
    transform: Mat4,
    global_alpha: f32,
    program: Option<P>,
}

impl<P> SavedState<P> {
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    pub fn program(&self) -> Option<&P> {
        self.program.as_ref()
    }
}

impl<P> Default for SavedState<P> {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            global_alpha: 1.0,
            program: None,
        }
    }
}

/// Current render state plus a single save slot.
///
/// This mirrors a canvas context's `save()`/`restore()` with a depth of one:
/// a second `save()` overwrites the first, and `restore()` without a prior
/// `save()` falls back to the slot's defaults (identity transform, opacity 1).
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack<P> {
    current: RenderState<P>,
    saved: SavedState<P>,
}

impl<P: Clone> TransformStack<P> {
    pub fn new() -> Self {
        Self {
            current: RenderState::default(),
            saved: SavedState::default(),
        }
    }

    pub fn current(&self) -> &RenderState<P> {
        &self.current
    }

    pub fn saved(&self) -> &SavedState<P> {
        &self.saved
    }

    pub fn transform(&self) -> &Mat4 {
        &self.current.transform
    }

    pub fn global_alpha(&self) -> f32 {
        self.current.global_alpha
    }

    /// Sets the opacity applied to every subsequent draw, clamped to `[0, 1]`.
    /// `NaN` is ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if !alpha.is_nan() {
            self.current.global_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Composes `params` into the current transform as `T * current`.
    ///
    /// The new map applies in the local frame set up by earlier calls: after
    /// `translate` then `scale`, points are scaled first and translated second.
    pub fn apply_affine(&mut self, params: AffineParams) {
        self.current.transform = params.to_mat4().multiply(&self.current.transform);
    }

    /// Canvas-style `transform(a, b, c, d, e, f)`.
    pub fn transform_by(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.apply_affine(AffineParams::new(a, b, c, d, e, f));
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.apply_affine(AffineParams::translate(x, y));
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.apply_affine(AffineParams::scale(x, y));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.apply_affine(AffineParams::rotate(radians));
    }

    /// Records `program` as the one currently bound. The save slot is untouched.
    pub(crate) fn set_program(&mut self, program: P) {
        self.current.program = Some(program);
    }

    /// Snapshots transform and opacity into the save slot, overwriting any
    /// previous snapshot. A supplied `program` becomes the current program and
    /// is recorded alongside; otherwise the slot's program is cleared.
    pub fn save(&mut self, program: Option<P>) {
        if program.is_some() {
            self.current.program = program.clone();
        }

        self.saved = SavedState {
            transform: self.current.transform,
            global_alpha: self.current.global_alpha,
            program,
        };
    }

    /// Copies the save slot back into the current state. The slot keeps its
    /// contents, so restoring twice yields the same state.
    ///
    /// Returns the program recorded by the matching `save`, if any.
    pub fn restore(&mut self) -> Option<&P> {
        self.current.transform = self.saved.transform;
        self.current.global_alpha = self.saved.global_alpha;
        if self.saved.program.is_some() {
            self.current.program = self.saved.program.clone();
        }

        self.saved.program.as_ref()
    }
}

impl<P: Clone> Default for TransformStack<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Stack = TransformStack<u32>;

    #[test]
    fn starts_at_identity_and_full_opacity() {
        let stack = Stack::new();
        assert_eq!(stack.transform(), &Mat4::IDENTITY);
        assert_eq!(stack.global_alpha(), 1.0);
        assert_eq!(stack.current().program(), None);
    }

    #[test]
    fn affine_calls_pre_compose() {
        let mut stack = Stack::new();
        let first = AffineParams::new(1.0, 0.0, 0.0, 1.0, 10.0, 20.0);
        let second = AffineParams::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);

        stack.apply_affine(first);
        stack.apply_affine(second);

        let expected = second.to_mat4().multiply(&first.to_mat4());
        assert_eq!(stack.transform(), &expected);
        assert_ne!(stack.transform(), &first.to_mat4().multiply(&second.to_mat4()));

        // scaled in the translated frame
        let p = stack.transform().transform_point([1.0, 1.0, 0.0, 1.0]);
        assert_eq!(p, [12.0, 22.0, 0.0, 1.0]);
    }

    #[test]
    fn transform_by_matches_apply_affine() {
        let mut a = Stack::new();
        let mut b = Stack::new();

        a.transform_by(1.0, 0.5, -0.5, 1.0, 3.0, 4.0);
        b.apply_affine(AffineParams::new(1.0, 0.5, -0.5, 1.0, 3.0, 4.0));
        assert_eq!(a, b);
    }

    #[test]
    fn translate_then_scale_like_a_canvas() {
        let mut stack = Stack::new();
        stack.translate(100.0, 50.0);
        stack.scale(2.0, 3.0);

        let p = stack.transform().transform_point([10.0, 10.0, 0.0, 1.0]);
        assert_eq!(p, [120.0, 80.0, 0.0, 1.0]);
    }

    #[test]
    fn save_restore_round_trips_transform_and_alpha() {
        let mut stack = Stack::new();
        stack.translate(5.0, 6.0);
        stack.set_global_alpha(0.25);
        let before = stack.current().clone();

        stack.save(None);
        stack.rotate(1.2);
        stack.scale(4.0, 4.0);
        stack.set_global_alpha(0.9);
        assert_ne!(stack.transform(), before.transform());

        stack.restore();
        assert_eq!(stack.transform(), before.transform());
        assert_eq!(stack.global_alpha(), 0.25);
    }

    #[test]
    fn second_save_overwrites_the_first() {
        let mut stack = Stack::new();
        stack.set_global_alpha(0.5);
        stack.save(None);

        stack.translate(1.0, 1.0);
        stack.set_global_alpha(0.75);
        stack.save(None);

        stack.scale(3.0, 3.0);
        stack.restore();
        assert_eq!(stack.global_alpha(), 0.75);
        assert_eq!(stack.transform(), &AffineParams::translate(1.0, 1.0).to_mat4());

        // the slot is not consumed; the first snapshot is gone
        stack.restore();
        assert_eq!(stack.global_alpha(), 0.75);
    }

    #[test]
    fn restore_without_save_resets_to_defaults() {
        let mut stack = Stack::new();
        stack.translate(7.0, 7.0);
        stack.set_global_alpha(0.1);

        assert_eq!(stack.restore(), None);
        assert_eq!(stack.transform(), &Mat4::IDENTITY);
        assert_eq!(stack.global_alpha(), 1.0);
    }

    #[test]
    fn save_records_program() {
        let mut stack = Stack::new();
        stack.save(Some(7));
        assert_eq!(stack.current().program(), Some(&7));
        assert_eq!(stack.saved().program(), Some(&7));

        stack.translate(1.0, 0.0);
        assert_eq!(stack.restore(), Some(&7));

        stack.save(None);
        assert_eq!(stack.saved().program(), None);
        assert_eq!(stack.current().program(), Some(&7));
    }

    #[test]
    fn global_alpha_is_clamped() {
        let mut stack = Stack::new();
        stack.set_global_alpha(1.5);
        assert_eq!(stack.global_alpha(), 1.0);

        stack.set_global_alpha(-0.5);
        assert_eq!(stack.global_alpha(), 0.0);

        stack.set_global_alpha(f32::NAN);
        assert_eq!(stack.global_alpha(), 0.0);

        stack.set_global_alpha(0.3);
        assert_eq!(stack.global_alpha(), 0.3);
    }
}
