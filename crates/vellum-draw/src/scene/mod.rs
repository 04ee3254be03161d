//! Live scene: placed objects, selection, global drawing parameters.
//!
//! A [`Scene`] is owned by the studio app and passed by `&mut` to the
//! interpreter during loading and to the input handlers afterwards. Handlers
//! return [`AppControl`] so the runtime knows when to redraw.

mod keys;
mod pointer;

pub use keys::Direction;
pub use pointer::Pointer;

use std::rc::Rc;

use vellum_engine::coords::{Vec2, Viewport};
use vellum_engine::core::AppControl;
use vellum_engine::paint::Color;
use vellum_engine::scene::{Border, DrawList};

use crate::color::RgbColor;
use crate::shape::Shape;

pub const DEFAULT_WIDTH: f32 = 640.0;
pub const DEFAULT_HEIGHT: f32 = 480.0;
pub const DEFAULT_MOVE_BY: f32 = 4.0;

/// A template placed at a position with a fill color.
#[derive(Debug, Clone)]
pub struct PlacedObject {
    shape: Rc<Shape>,
    position: Vec2,
    color: RgbColor,
}

impl PlacedObject {
    pub fn new(shape: Rc<Shape>, position: Vec2, color: RgbColor) -> Self {
        Self { shape, position, color }
    }

    #[inline]
    pub fn shape(&self) -> &Rc<Shape> {
        &self.shape
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> RgbColor {
        self.color
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn draw(&self, list: &mut DrawList, outline: Option<Border>) {
        self.shape.draw(list, self.position, self.color.to_color(), outline);
    }
}

#[derive(Debug)]
pub struct Scene {
    width: f32,
    height: f32,
    viewport: Viewport,
    background: Color,

    border_color: RgbColor,
    thickness: f32,
    move_by: f32,

    objects: Vec<PlacedObject>,
    selected_obj: usize,
    /// Set by key handling; the next render outlines the selected object once.
    selected: bool,

    pointer: Pointer,
    exit_status: i32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            viewport: Viewport::new(width, height),
            background: background_gray(),
            border_color: RgbColor::BLACK,
            thickness: 0.0,
            move_by: DEFAULT_MOVE_BY,
            objects: Vec::new(),
            selected_obj: 0,
            selected: false,
            pointer: Pointer::default(),
            exit_status: 0,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Projection extent for rendering.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn border_color(&self) -> RgbColor {
        self.border_color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn move_by(&self) -> f32 {
        self.move_by
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn selected_index(&self) -> usize {
        self.selected_obj
    }

    /// Whether the next render outlines the selected object.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn exit_status(&self) -> i32 {
        self.exit_status
    }

    pub fn set_exit_status(&mut self, status: i32) {
        self.exit_status = status;
    }

    // ── interpreter hooks ─────────────────────────────────────────────────

    pub fn set_border(&mut self, color: RgbColor) {
        log::debug!(target: "vellum::graphics", "border color={color}");
        self.border_color = color;
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        log::debug!(target: "vellum::graphics", "border thickness={thickness}");
        self.thickness = thickness;
    }

    pub fn set_move_by(&mut self, distance: f32) {
        log::debug!(target: "vellum::graphics", "move_by={distance}");
        self.move_by = distance;
    }

    pub fn push_object(&mut self, object: PlacedObject) {
        log::debug!(
            target: "vellum::graphics",
            "push_back {} at {}",
            object.shape().kind().name(),
            object.position()
        );
        self.objects.push(object);
    }

    /// Outline used for the selected object.
    pub fn border(&self) -> Border {
        Border::new(self.thickness, self.border_color.to_color())
    }

    // ── window callbacks ──────────────────────────────────────────────────

    /// Records one frame into `list`.
    ///
    /// The selected object goes first (outlined if just selected), then every
    /// object in list order, then the pointer readout. The selected object is
    /// therefore drawn twice.
    pub fn render(&mut self, list: &mut DrawList) {
        list.clear();

        if let Some(obj) = self.objects.get(self.selected_obj) {
            let outline = self.selected.then(|| self.border());
            obj.draw(list, outline);
        }

        self.selected = false;
        for obj in &self.objects {
            obj.draw(list, None);
        }

        self.draw_pointer(list);
    }

    /// Window opened or resized: new dimensions, projection and background.
    pub fn reshape(&mut self, width: f32, height: f32) -> AppControl {
        log::debug!(target: "vellum::graphics", "width={width}, height={height}");
        self.width = width;
        self.height = height;
        self.viewport = Viewport::new(width, height);
        self.background = background_gray();
        AppControl::Redraw
    }

    /// Ends the process with the recorded exit status.
    pub fn close(&self) -> ! {
        log::debug!(target: "vellum::graphics", "exit ({})", self.exit_status);
        std::process::exit(self.exit_status)
    }
}

fn background_gray() -> Color {
    Color::from_straight(0.25, 0.25, 0.25, 1.0)
}

#[cfg(test)]
mod tests {
    use vellum_engine::scene::DrawCmd;

    use super::*;

    fn square_at(x: f32, y: f32) -> PlacedObject {
        PlacedObject::new(Rc::new(Shape::square(40.0)), Vec2::new(x, y), RgbColor::RED)
    }

    #[test]
    fn defaults() {
        let scene = Scene::new();
        assert_eq!((scene.width(), scene.height()), (640.0, 480.0));
        assert_eq!(scene.border_color(), RgbColor::BLACK);
        assert_eq!(scene.thickness(), 0.0);
        assert_eq!(scene.move_by(), 4.0);
        assert_eq!(scene.background(), Color::from_premul(0.25, 0.25, 0.25, 1.0));
        assert_eq!(scene.exit_status(), 0);
        assert!(!scene.is_selected());
    }

    #[test]
    fn empty_scene_renders_nothing_without_pointer() {
        let mut scene = Scene::new();
        let mut list = DrawList::new();
        scene.render(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn selected_object_is_outlined_once_then_everything_is_filled() {
        let mut scene = Scene::new();
        scene.push_object(square_at(10.0, 10.0));
        scene.push_object(square_at(50.0, 50.0));
        scene.set_thickness(4.0);
        scene.select_index(1);

        let mut list = DrawList::new();
        scene.render(&mut list);

        // outline + fill of the selection, then both fills
        assert_eq!(list.len(), 4);
        let DrawCmd::LineLoop(outline) = &list.items()[0] else {
            panic!("selection outline should come first");
        };
        assert_eq!(outline.width, 4.0);
        assert_eq!(Vec2::centroid(&outline.points), Some(Vec2::new(50.0, 50.0)));
        assert!(!scene.is_selected());

        // flag is consumed: next frame has no outline
        scene.render(&mut list);
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|c| matches!(c, DrawCmd::Polygon(_))));
    }

    #[test]
    fn render_clears_previous_frame() {
        let mut scene = Scene::new();
        scene.push_object(square_at(10.0, 10.0));
        let mut list = DrawList::new();
        scene.render(&mut list);
        scene.render(&mut list);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn reshape_updates_projection() {
        let mut scene = Scene::new();
        assert_eq!(scene.reshape(800.0, 600.0), AppControl::Redraw);
        assert_eq!(scene.viewport(), Viewport::new(800.0, 600.0));
        assert_eq!((scene.width(), scene.height()), (800.0, 600.0));
        // idempotent
        scene.reshape(800.0, 600.0);
        assert_eq!(scene.viewport(), Viewport::new(800.0, 600.0));
    }
}
