//! The arcball state machine: press/drag/release cycles composed onto a
//! committed base orientation.

use glam::{DMat4, DQuat, DVec2, DVec3};

use super::sphere::{map_to_sphere, quat_look_at};
use super::unproject::{
    MatrixUnprojector, UnprojectError, Unprojector, Viewport, ViewportProvider,
};
use crate::input::{InputEvent, InputSubscriber, KeyAction, MouseButton};
use crate::options::ArcballOptions;

/// Window depth at which pointer samples are unprojected (the near plane).
const CANONICAL_DEPTH: f64 = 0.0;

/// Pointer tracking owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Last reported cursor position in window pixels.
    pub position: DVec2,
    /// Whether a drag is in progress.
    pub pressed: bool,
    /// Cursor position at the most recent press.
    pub press_anchor: DVec2,
    /// Whether the current drag has a reference orientation. False only
    /// while every sample of a press has failed to unproject.
    anchored: bool,
}

#[derive(Debug, Clone, Copy)]
struct ViewportSnapshot {
    viewport: Viewport,
    projection: DMat4,
}

/// Turns pointer drags into a unit-quaternion orientation.
///
/// Each pointer sample is lifted onto a virtual sphere in camera space and
/// converted into a "look at this point" orientation. A drag is the
/// relative rotation between the press sample and the latest sample; it is
/// composed onto the committed base only once, on release.
///
/// ```
/// use arcball::ArcballController;
/// use glam::{DMat4, DQuat};
///
/// let mut arcball = ArcballController::new(&(512_u32, 512_u32), DMat4::IDENTITY);
/// arcball.on_pointer_pressed(256.0, 256.0);
/// arcball.on_pointer_moved(300.0, 240.0);
/// arcball.on_pointer_released();
/// assert!(arcball.current_orientation().is_normalized());
///
/// arcball.reset();
/// assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
/// ```
#[derive(Debug, Clone)]
pub struct ArcballController<U = MatrixUnprojector> {
    unprojector: U,
    viewport: Option<ViewportSnapshot>,
    pointer: PointerState,
    sphere_radius: f64,
    depth_nudge: f64,
    drag_button: MouseButton,
    base_rotation: DQuat,
    drag_start_rotation: DQuat,
    live_drag_rotation: DQuat,
}

impl ArcballController<MatrixUnprojector> {
    /// Bind a controller with default options to `window`, unprojecting
    /// through `projection`.
    #[must_use]
    pub fn new(window: &impl ViewportProvider, projection: DMat4) -> Self {
        Self::with_options(
            window,
            projection,
            &ArcballOptions::default(),
            MatrixUnprojector,
        )
    }
}

impl<U: Unprojector> ArcballController<U> {
    /// Bind a controller to `window` with explicit options and unprojector.
    ///
    /// Invalid options are logged and replaced by their defaults. A window
    /// that currently reports a zero size leaves the controller without a
    /// viewport until [`on_viewport_changed`](Self::on_viewport_changed)
    /// delivers a valid one.
    #[must_use]
    pub fn with_options(
        window: &impl ViewportProvider,
        projection: DMat4,
        options: &ArcballOptions,
        unprojector: U,
    ) -> Self {
        let options = match options.validate() {
            Ok(()) => options.clone(),
            Err(e) => {
                log::warn!("{e}; using default arcball options");
                ArcballOptions {
                    drag_button: options.drag_button,
                    ..ArcballOptions::default()
                }
            }
        };

        let mut controller = Self {
            unprojector,
            viewport: None,
            pointer: PointerState::default(),
            sphere_radius: options.sphere_radius,
            depth_nudge: options.depth_nudge,
            drag_button: options.drag_button,
            base_rotation: DQuat::IDENTITY,
            drag_start_rotation: DQuat::IDENTITY,
            live_drag_rotation: DQuat::IDENTITY,
        };
        let (width, height) = window.framebuffer_size();
        controller.on_viewport_changed(
            f64::from(width),
            f64::from(height),
            projection,
        );
        controller
    }

    /// Replace the viewport/projection snapshot.
    ///
    /// Non-positive or non-finite sizes happen transiently during
    /// window-manager transitions; they are logged and ignored. Rotation
    /// state is untouched.
    pub fn on_viewport_changed(
        &mut self,
        width: f64,
        height: f64,
        projection: DMat4,
    ) {
        match Viewport::new(width, height) {
            Some(viewport) => {
                self.viewport = Some(ViewportSnapshot {
                    viewport,
                    projection,
                });
            }
            None => {
                log::warn!("ignoring invalid viewport {width}x{height}");
            }
        }
    }

    /// Start a drag at the given window position.
    pub fn on_pointer_pressed(&mut self, x: f64, y: f64) {
        let position = DVec2::new(x, y);
        self.pointer.position = position;
        self.pointer.press_anchor = position;
        self.pointer.pressed = true;
        self.pointer.anchored = false;
        self.drag_start_rotation = DQuat::IDENTITY;
        self.live_drag_rotation = DQuat::IDENTITY;

        if let Some(rotation) = self.sample(position) {
            self.drag_start_rotation = rotation;
            self.live_drag_rotation = rotation;
            self.pointer.anchored = true;
        }
    }

    /// Track the cursor; while dragging, update the live rotation.
    pub fn on_pointer_moved(&mut self, x: f64, y: f64) {
        let position = DVec2::new(x, y);
        self.pointer.position = position;
        if !self.pointer.pressed {
            return;
        }

        let Some(rotation) = self.sample(position) else {
            return;
        };
        if !self.pointer.anchored {
            // the press sample was dropped; this one becomes the reference
            self.drag_start_rotation = rotation;
            self.pointer.anchored = true;
        }
        self.live_drag_rotation = rotation;
    }

    /// Finish the drag, committing it onto the base rotation.
    pub fn on_pointer_released(&mut self) {
        if !self.pointer.pressed {
            return;
        }

        self.base_rotation =
            (self.drag_increment() * self.base_rotation).normalize();
        self.pointer.pressed = false;
        self.pointer.anchored = false;
        self.drag_start_rotation = DQuat::IDENTITY;
        self.live_drag_rotation = DQuat::IDENTITY;
        log::debug!("committed arcball rotation {:?}", self.base_rotation);
    }

    /// Orientation to apply to the scene this frame, including any drag in
    /// progress.
    #[must_use]
    pub fn current_orientation(&self) -> DQuat {
        (self.drag_increment() * self.base_rotation).normalize()
    }

    /// [`current_orientation`](Self::current_orientation) as a rotation
    /// matrix.
    #[must_use]
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_quat(self.current_orientation())
    }

    /// Drop the committed rotation. A drag in progress keeps its reference
    /// frame and commits onto the identity when released.
    pub fn reset(&mut self) {
        self.base_rotation = DQuat::IDENTITY;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.pressed
    }

    /// Current pointer tracking state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Last valid viewport, if any has been reported.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport.map(|snapshot| snapshot.viewport)
    }

    /// Radius of the virtual sphere.
    #[must_use]
    pub fn sphere_radius(&self) -> f64 {
        self.sphere_radius
    }

    /// Change the sphere radius. Non-positive or non-finite radii are
    /// logged and ignored.
    pub fn set_sphere_radius(&mut self, radius: f64) {
        if radius.is_finite() && radius > 0.0 {
            self.sphere_radius = radius;
        } else {
            log::warn!("ignoring invalid sphere radius {radius}");
        }
    }

    /// Camera-space point under the given window position, with its depth
    /// nudged off the camera plane.
    pub fn pointer_in_camera_space(
        &self,
        x: f64,
        y: f64,
    ) -> Result<DVec3, UnprojectError> {
        let snapshot = self.viewport.ok_or(UnprojectError::MissingViewport)?;
        let mut point = self.unprojector.unproject(
            DVec2::new(x, y),
            CANONICAL_DEPTH,
            &snapshot.projection,
            snapshot.viewport,
        )?;
        if !point.is_finite() {
            return Err(UnprojectError::NonFinite);
        }
        point.z *= self.depth_nudge;
        Ok(point)
    }

    /// Orientation that looks at the sphere point under the pointer.
    ///
    /// The sphere depth is negated so the front hemisphere faces a camera
    /// looking down −Z; the sphere centre maps to the identity.
    pub fn rotate_to_pointer(
        &self,
        x: f64,
        y: f64,
    ) -> Result<DQuat, UnprojectError> {
        let point = self.pointer_in_camera_space(x, y)?;
        let on_sphere = map_to_sphere(point.truncate(), self.sphere_radius);
        let facing = DVec3::new(on_sphere.x, on_sphere.y, -on_sphere.z);
        Ok(quat_look_at(DVec3::ZERO, facing))
    }

    /// Rotation for one sample, or `None` if the sample must be dropped.
    fn sample(&self, position: DVec2) -> Option<DQuat> {
        match self.rotate_to_pointer(position.x, position.y) {
            Ok(rotation) => {
                log::trace!("pointer {position} -> {rotation:?}");
                Some(rotation)
            }
            Err(e) => {
                log::debug!("dropping pointer sample at {position}: {e}");
                None
            }
        }
    }

    fn drag_increment(&self) -> DQuat {
        if self.pointer.pressed {
            (self.drag_start_rotation.inverse() * self.live_drag_rotation)
                .normalize()
        } else {
            DQuat::IDENTITY
        }
    }
}

impl<U: Unprojector> InputSubscriber for ArcballController<U> {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::CursorMoved { x, y } => {
                self.on_pointer_moved(x, y);
                self.is_dragging()
            }
            InputEvent::MouseButton { button, pressed }
                if button == self.drag_button =>
            {
                if pressed {
                    let DVec2 { x, y } = self.pointer.position;
                    self.on_pointer_pressed(x, y);
                } else {
                    self.on_pointer_released();
                }
                true
            }
            InputEvent::ViewportChanged {
                width,
                height,
                projection,
            } => {
                self.on_viewport_changed(width, height, projection);
                false
            }
            InputEvent::Action(KeyAction::ResetRotation) => {
                self.reset();
                true
            }
            InputEvent::MouseButton { .. } | InputEvent::Action(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec4;

    use super::*;

    const TOL: f64 = 1e-9;

    type Stub = fn(DVec2, f64, &DMat4, Viewport) -> Result<DVec3, UnprojectError>;

    /// Maps window pixels to camera space as `(x / 100, y / 100, 5)`.
    fn scaled(
        screen: DVec2,
        _: f64,
        _: &DMat4,
        _: Viewport,
    ) -> Result<DVec3, UnprojectError> {
        Ok(DVec3::new(screen.x / 100.0, screen.y / 100.0, 5.0))
    }

    /// Fails for any sample left of x = 50.
    fn failing_left(
        screen: DVec2,
        depth: f64,
        projection: &DMat4,
        viewport: Viewport,
    ) -> Result<DVec3, UnprojectError> {
        if screen.x < 50.0 {
            Err(UnprojectError::SingularTransform)
        } else {
            scaled(screen, depth, projection, viewport)
        }
    }

    fn controller(stub: Stub) -> ArcballController<Stub> {
        ArcballController::with_options(
            &(512_u32, 512_u32),
            DMat4::IDENTITY,
            &ArcballOptions::default(),
            stub,
        )
    }

    fn assert_quat_eq(a: DQuat, b: DQuat) {
        // q and −q encode the same rotation
        let same = a.abs_diff_eq(b, TOL) || a.abs_diff_eq(-b, TOL);
        assert!(same, "{a:?} != {b:?}");
    }

    fn assert_unit(q: DQuat) {
        assert!((1.0 - q.length()).abs() < TOL, "{q:?} is not unit");
    }

    fn drag(arcball: &mut ArcballController<Stub>, path: &[(f64, f64)]) {
        let (x0, y0) = path[0];
        arcball.on_pointer_pressed(x0, y0);
        for &(x, y) in &path[1..] {
            arcball.on_pointer_moved(x, y);
        }
        arcball.on_pointer_released();
    }

    #[test]
    fn starts_at_identity() {
        let arcball = controller(scaled);
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
        assert!(!arcball.is_dragging());
        assert_eq!(arcball.viewport(), Viewport::new(512.0, 512.0));
        assert_eq!(arcball.sphere_radius(), 4.0);
    }

    #[test]
    fn press_move_release_scenario() {
        let stub: Stub = |screen, _, _, _| {
            Ok(if screen == DVec2::ZERO {
                DVec3::new(0.0, 0.0, 5.0)
            } else {
                DVec3::new(1.0, 0.0, 5.0)
            })
        };
        let mut arcball = controller(stub);

        arcball.on_pointer_pressed(0.0, 0.0);
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
        arcball.on_pointer_moved(100.0, 0.0);
        arcball.on_pointer_released();

        let start = quat_look_at(DVec3::ZERO, DVec3::new(0.0, 0.0, -4.0));
        let end =
            quat_look_at(DVec3::ZERO, DVec3::new(1.0, 0.0, -(15f64.sqrt())));
        let expected = (start.inverse() * end).normalize();
        assert_quat_eq(arcball.base_rotation, expected);
        assert_quat_eq(arcball.current_orientation(), expected);
        assert!(arcball.current_orientation().angle_between(DQuat::IDENTITY) > 0.1);

        arcball.reset();
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
    }

    #[test]
    fn reset_after_drags_is_identity() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (120.0, 40.0), (200.0, 90.0)]);
        drag(&mut arcball, &[(-50.0, 30.0), (-150.0, -20.0)]);
        assert_ne!(arcball.current_orientation(), DQuat::IDENTITY);

        arcball.reset();
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
        arcball.reset();
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
    }

    #[test]
    fn idle_moves_do_not_rotate() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (150.0, 75.0)]);
        let before = arcball.current_orientation();

        for (x, y) in [(10.0, 10.0), (300.0, -200.0), (-900.0, 40.0)] {
            arcball.on_pointer_moved(x, y);
            assert_eq!(arcball.current_orientation(), before);
        }
        assert_eq!(arcball.pointer().position, DVec2::new(-900.0, 40.0));
    }

    #[test]
    fn release_does_not_jump() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (100.0, 100.0)]);

        arcball.on_pointer_pressed(20.0, -30.0);
        arcball.on_pointer_moved(90.0, 10.0);
        arcball.on_pointer_moved(250.0, 160.0);
        let mid_drag = arcball.current_orientation();
        arcball.on_pointer_released();

        assert_quat_eq(arcball.current_orientation(), mid_drag);
    }

    #[test]
    fn base_is_untouched_during_drag() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (80.0, 0.0)]);
        let committed = arcball.base_rotation;

        arcball.on_pointer_pressed(0.0, 0.0);
        arcball.on_pointer_moved(0.0, 250.0);
        assert_eq!(arcball.base_rotation, committed);
        assert_ne!(arcball.current_orientation(), committed);
    }

    #[test]
    fn press_without_motion_keeps_orientation() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (100.0, 50.0)]);
        let before = arcball.current_orientation();

        arcball.on_pointer_pressed(230.0, -110.0);
        assert_quat_eq(arcball.current_orientation(), before);
        arcball.on_pointer_released();
        assert_quat_eq(arcball.current_orientation(), before);
    }

    #[test]
    fn stays_normalized() {
        let mut arcball = controller(scaled);
        let mut x = 0.0;
        for i in 0..200 {
            let f = f64::from(i);
            arcball.on_pointer_pressed(x, f * 0.5);
            x = (f * 37.0) % 900.0 - 450.0;
            arcball.on_pointer_moved(x, -f);
            assert_unit(arcball.current_orientation());
            arcball.on_pointer_released();
            assert_unit(arcball.current_orientation());
            assert_unit(arcball.base_rotation);
        }
    }

    #[test]
    fn reset_mid_drag_commits_onto_identity() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (200.0, 0.0)]);

        arcball.on_pointer_pressed(0.0, 0.0);
        arcball.on_pointer_moved(0.0, 120.0);
        arcball.reset();
        let increment = arcball.current_orientation();
        arcball.on_pointer_released();

        let expected = (quat_look_at(DVec3::ZERO, DVec3::new(0.0, 0.0, -4.0))
            .inverse()
            * arcball.rotate_to_pointer(0.0, 120.0).unwrap())
        .normalize();
        assert_quat_eq(increment, expected);
        assert_quat_eq(arcball.current_orientation(), expected);
    }

    #[test]
    fn release_while_idle_is_noop() {
        let mut arcball = controller(scaled);
        arcball.on_pointer_released();
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
        assert!(!arcball.is_dragging());
    }

    #[test]
    fn failed_move_keeps_previous_sample() {
        let mut arcball = controller(failing_left);
        arcball.on_pointer_pressed(100.0, 0.0);
        arcball.on_pointer_moved(200.0, 50.0);
        let before = arcball.current_orientation();

        arcball.on_pointer_moved(10.0, 300.0);
        assert_eq!(arcball.current_orientation(), before);
        assert_eq!(arcball.pointer().position, DVec2::new(10.0, 300.0));

        arcball.on_pointer_released();
        assert_quat_eq(arcball.current_orientation(), before);
    }

    #[test]
    fn failed_press_anchors_on_first_good_sample() {
        let mut arcball = controller(failing_left);
        arcball.on_pointer_pressed(0.0, 0.0);
        assert!(arcball.is_dragging());
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);

        // first good sample becomes the reference, so nothing jumps
        arcball.on_pointer_moved(300.0, 100.0);
        assert_quat_eq(arcball.current_orientation(), DQuat::IDENTITY);

        arcball.on_pointer_moved(100.0, 100.0);
        assert!(arcball.current_orientation().angle_between(DQuat::IDENTITY) > 0.01);
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let mut arcball = controller(scaled);
        arcball.on_viewport_changed(0.0, 300.0, DMat4::IDENTITY);
        arcball.on_viewport_changed(300.0, -1.0, DMat4::IDENTITY);
        arcball.on_viewport_changed(f64::NAN, 300.0, DMat4::IDENTITY);
        assert_eq!(arcball.viewport(), Viewport::new(512.0, 512.0));

        arcball.on_viewport_changed(640.0, 480.0, DMat4::IDENTITY);
        assert_eq!(arcball.viewport(), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn missing_viewport_drops_samples() {
        let stub: Stub = scaled;
        let mut arcball = ArcballController::with_options(
            &(0_u32, 0_u32),
            DMat4::IDENTITY,
            &ArcballOptions::default(),
            stub,
        );
        assert_eq!(arcball.viewport(), None);
        assert_eq!(
            arcball.rotate_to_pointer(10.0, 10.0),
            Err(UnprojectError::MissingViewport)
        );

        arcball.on_pointer_pressed(0.0, 0.0);
        arcball.on_pointer_moved(250.0, 250.0);
        arcball.on_pointer_released();
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);

        arcball.on_viewport_changed(512.0, 512.0, DMat4::IDENTITY);
        assert!(arcball.rotate_to_pointer(10.0, 10.0).is_ok());
    }

    #[test]
    fn singular_projection_keeps_state() {
        let mut arcball = ArcballController::new(&(512_u32, 512_u32), DMat4::IDENTITY);
        arcball.on_pointer_pressed(256.0, 256.0);
        arcball.on_pointer_moved(400.0, 200.0);
        let before = arcball.current_orientation();

        arcball.on_viewport_changed(512.0, 512.0, DMat4::ZERO);
        assert_eq!(arcball.current_orientation(), before);
        assert!(arcball.is_dragging());
        arcball.on_pointer_moved(100.0, 100.0);
        assert_eq!(arcball.current_orientation(), before);
    }

    #[test]
    fn depth_is_nudged_off_the_camera_plane() {
        let arcball = controller(scaled);
        let p = arcball.pointer_in_camera_space(100.0, 200.0).unwrap();
        assert_eq!(p.truncate(), DVec2::new(1.0, 2.0));
        assert!(p.z < 5.0);
        assert!((p.z - 5.0 * 0.999_999_9).abs() < 1e-12);
    }

    #[test]
    fn centre_of_sphere_is_identity() {
        let arcball = controller(scaled);
        assert_eq!(arcball.rotate_to_pointer(0.0, 0.0), Ok(DQuat::IDENTITY));
    }

    #[test]
    fn samples_beyond_the_rim_clamp() {
        let arcball = controller(scaled);
        let far = arcball.rotate_to_pointer(10_000.0, 0.0).unwrap();
        let rim = arcball.rotate_to_pointer(400.0, 0.0).unwrap();
        assert_quat_eq(far, rim);
        assert_unit(far);
    }

    #[test]
    fn invalid_options_fall_back_to_defaults() {
        let options = ArcballOptions {
            sphere_radius: -1.0,
            drag_button: MouseButton::Right,
            ..ArcballOptions::default()
        };
        let stub: Stub = scaled;
        let mut arcball = ArcballController::with_options(
            &(100_u32, 100_u32),
            DMat4::IDENTITY,
            &options,
            stub,
        );
        assert_eq!(arcball.sphere_radius(), 4.0);
        assert_eq!(arcball.drag_button, MouseButton::Right);

        arcball.set_sphere_radius(0.0);
        assert_eq!(arcball.sphere_radius(), 4.0);
        arcball.set_sphere_radius(1.5);
        assert_eq!(arcball.sphere_radius(), 1.5);
    }

    #[test]
    fn model_matrix_rotates_like_orientation() {
        let mut arcball = controller(scaled);
        drag(&mut arcball, &[(0.0, 0.0), (150.0, -60.0)]);
        let q = arcball.current_orientation();
        let m = arcball.model_matrix();
        let v = DVec3::new(0.3, -1.0, 2.0);
        assert!((m * v.extend(1.0) - (q * v).extend(1.0)).length() < TOL);
        assert_eq!(m.w_axis, DVec4::W);
    }

    #[test]
    fn subscribes_to_input_events() {
        let mut arcball = controller(scaled);

        let moved = InputEvent::CursorMoved { x: 0.0, y: 0.0 };
        assert!(!arcball.handle_event(&moved));

        let press = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        assert!(arcball.handle_event(&press));
        assert!(arcball.is_dragging());
        assert_eq!(arcball.pointer().press_anchor, DVec2::ZERO);

        assert!(arcball.handle_event(&InputEvent::CursorMoved { x: 150.0, y: 20.0 }));
        let expected = arcball.current_orientation();

        let other = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        };
        assert!(!arcball.handle_event(&other));
        assert!(arcball.is_dragging());

        let release = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        };
        assert!(arcball.handle_event(&release));
        assert_quat_eq(arcball.current_orientation(), expected);

        let resize = InputEvent::ViewportChanged {
            width: 800.0,
            height: 600.0,
            projection: DMat4::IDENTITY,
        };
        assert!(!arcball.handle_event(&resize));
        assert_eq!(arcball.viewport(), Viewport::new(800.0, 600.0));

        assert!(!arcball.handle_event(&InputEvent::Action(KeyAction::Quit)));
        assert!(arcball.handle_event(&InputEvent::Action(KeyAction::ResetRotation)));
        assert_eq!(arcball.current_orientation(), DQuat::IDENTITY);
    }
}
