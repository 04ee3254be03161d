//! Command interpreter.
//!
//! Each record is one command: `record[0]` is the keyword, the rest are its
//! arguments.
//!
//! | Command | Arguments |
//! |---------|-----------|
//! | `border` | `<color> <thickness>` |
//! | `define` | `<name> <shape-type> <args...>` |
//! | `draw` | `<color> <name> <x> <y>` |
//! | `moveby` | `<distance>` |

mod error;
mod factory;

pub use error::{InterpError, Result};

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use vellum_engine::coords::Vec2;

use crate::color::RgbColor;
use crate::scene::{PlacedObject, Scene};
use crate::shape::Shape;

use factory::{arg, factory_table, number, FactoryFn};

/// Border thickness applied by every successful `draw`.
pub const DRAW_BORDER_THICKNESS: f32 = 4.0;

type CommandFn = fn(&mut Interpreter, &mut Scene, &[String]) -> Result<()>;

/// Runs command records against a [`Scene`].
///
/// Owns the named template registry. Dropping the interpreter logs every
/// registry entry (see [`Interpreter::report`]).
pub struct Interpreter {
    registry: BTreeMap<String, Rc<Shape>>,
    commands: HashMap<&'static str, CommandFn>,
    factories: HashMap<&'static str, FactoryFn>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let commands: [(&'static str, CommandFn); 4] = [
            ("border", Interpreter::do_border),
            ("define", Interpreter::do_define),
            ("draw", Interpreter::do_draw),
            ("moveby", Interpreter::do_moveby),
        ];
        Self {
            registry: BTreeMap::new(),
            commands: commands.into_iter().collect(),
            factories: factory_table(),
        }
    }

    /// Executes one record.
    ///
    /// Errors are fatal for the load phase. A `draw` of an undefined name is
    /// not an error: it is logged and skipped.
    pub fn interpret(&mut self, scene: &mut Scene, record: &[String]) -> Result<()> {
        log::debug!(target: "vellum::interp", "{record:?}");
        let Some((command, args)) = record.split_first() else {
            return Err(InterpError::Syntax);
        };
        let Some(&func) = self.commands.get(command.as_str()) else {
            return Err(InterpError::Syntax);
        };
        func(self, scene, args)
    }

    /// The template currently bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<&Rc<Shape>> {
        self.registry.get(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// `objmap[<name>] = <description>` for every template, ordered by name.
    pub fn report(&self) -> Vec<String> {
        self.registry
            .iter()
            .map(|(name, shape)| format!("objmap[{name}] = {shape}"))
            .collect()
    }

    // ── commands ──────────────────────────────────────────────────────────

    fn do_border(&mut self, scene: &mut Scene, args: &[String]) -> Result<()> {
        log::debug!(target: "vellum::interp", "border {args:?}");
        let color = parse_color(arg(args, 0)?)?;
        let thickness = number(arg(args, 1)?)?;
        scene.set_border(color);
        scene.set_thickness(thickness);
        Ok(())
    }

    fn do_define(&mut self, _scene: &mut Scene, args: &[String]) -> Result<()> {
        log::debug!(target: "vellum::interp", "define {args:?}");
        let name = arg(args, 0)?;
        let shape = self.make_shape(&args[1..])?;
        if self.registry.insert(name.to_string(), Rc::new(shape)).is_some() {
            log::debug!(target: "vellum::interp", "{name}: redefined");
        }
        Ok(())
    }

    fn do_draw(&mut self, scene: &mut Scene, args: &[String]) -> Result<()> {
        log::debug!(target: "vellum::interp", "draw {args:?}");
        if args.len() != 4 {
            return Err(InterpError::Syntax);
        }
        let name = args[1].as_str();
        let Some(shape) = self.registry.get(name) else {
            log::warn!(target: "vellum::interp", "{name}: no such shape");
            return Ok(());
        };
        let color = parse_color(&args[0])?;
        let position = Vec2::new(number(&args[2])?, number(&args[3])?);

        scene.push_object(PlacedObject::new(Rc::clone(shape), position, color));
        scene.set_border(RgbColor::RED);
        scene.set_thickness(DRAW_BORDER_THICKNESS);
        Ok(())
    }

    fn do_moveby(&mut self, scene: &mut Scene, args: &[String]) -> Result<()> {
        log::debug!(target: "vellum::interp", "moveby {args:?}");
        scene.set_move_by(number(arg(args, 0)?)?);
        Ok(())
    }

    fn make_shape(&self, args: &[String]) -> Result<Shape> {
        let Some((kind, rest)) = args.split_first() else {
            return Err(InterpError::Syntax);
        };
        let Some(&factory) = self.factories.get(kind.as_str()) else {
            return Err(InterpError::NoSuchShape(kind.clone()));
        };
        factory(rest)
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        for line in self.report() {
            log::info!(target: "vellum::interp", "{line}");
        }
    }
}

fn parse_color(tok: &str) -> Result<RgbColor> {
    RgbColor::parse(tok).ok_or_else(|| InterpError::InvalidColor(tok.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log::{at, capture};

    fn rec(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    fn run(interp: &mut Interpreter, scene: &mut Scene, lines: &[&str]) -> Result<()> {
        for line in lines {
            interp.interpret(scene, &rec(line))?;
        }
        Ok(())
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn unknown_command_is_a_syntax_error() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        assert_eq!(interp.interpret(&mut scene, &rec("paint red x")), Err(InterpError::Syntax));
        assert_eq!(interp.interpret(&mut scene, &[]), Err(InterpError::Syntax));
    }

    #[test]
    fn unknown_shape_type_is_fatal() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        assert_eq!(
            interp.interpret(&mut scene, &rec("define b blob 1 2")),
            Err(InterpError::NoSuchShape("blob".into()))
        );
        assert!(interp.is_empty());
    }

    #[test]
    fn define_without_type_is_a_syntax_error() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        assert_eq!(interp.interpret(&mut scene, &rec("define s1")), Err(InterpError::Syntax));
        assert_eq!(interp.interpret(&mut scene, &rec("define")), Err(InterpError::Syntax));
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_places_object_and_resets_border() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["border blue 9", "define s1 square 40", "draw red s1 100 120"])
            .unwrap();

        assert_eq!(scene.objects().len(), 1);
        let obj = &scene.objects()[0];
        assert_eq!(obj.position(), Vec2::new(100.0, 120.0));
        assert_eq!(obj.color(), RgbColor::RED);
        assert_eq!(scene.border_color(), RgbColor::RED);
        assert_eq!(scene.thickness(), DRAW_BORDER_THICKNESS);
    }

    #[test]
    fn draw_requires_exactly_four_arguments() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["define s1 square 40"]).unwrap();
        assert_eq!(interp.interpret(&mut scene, &rec("draw red s1 1")), Err(InterpError::Syntax));
        assert_eq!(
            interp.interpret(&mut scene, &rec("draw red s1 1 2 3")),
            Err(InterpError::Syntax)
        );
        assert!(scene.objects().is_empty());
    }

    #[test]
    fn draw_of_undefined_name_is_skipped() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["define s1 square 40", "draw red s1 0 0"]).unwrap();
        let before = scene.objects().len();
        let (result, logs) = capture(|| interp.interpret(&mut scene, &rec("draw red nope 0 0")));
        assert_eq!(result, Ok(()));
        assert_eq!(scene.objects().len(), before);

        let warnings = at(&logs, log::Level::Warn, "vellum::interp");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "nope: no such shape");
    }

    #[test]
    fn draw_with_bad_color_or_position_is_fatal() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["define s1 square 40"]).unwrap();
        assert_eq!(
            interp.interpret(&mut scene, &rec("draw blurple s1 0 0")),
            Err(InterpError::InvalidColor("blurple".into()))
        );
        assert_eq!(
            interp.interpret(&mut scene, &rec("draw red s1 0 y")),
            Err(InterpError::InvalidNumber("y".into()))
        );
    }

    // ── registry ──────────────────────────────────────────────────────────

    #[test]
    fn redefinition_keeps_old_placements() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(
            &mut interp,
            &mut scene,
            &["define s circle 10", "draw red s 0 0", "define s square 10", "draw blue s 5 5"],
        )
        .unwrap();

        assert_eq!(interp.len(), 1);
        assert_eq!(scene.objects()[0].shape().describe(), "circle {(10,10)}");
        assert_eq!(scene.objects()[1].shape().describe(), "square {(5,5) (10,5) (10,10) (5,10)}");
        assert!(!Rc::ptr_eq(scene.objects()[0].shape(), scene.objects()[1].shape()));
    }

    #[test]
    fn report_lists_templates_by_name() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["define b circle 40", "define a ellipse 60 30"]).unwrap();
        assert_eq!(
            interp.report(),
            vec!["objmap[a] = ellipse {(60,30)}", "objmap[b] = circle {(40,40)}"]
        );
    }

    #[test]
    fn dropping_the_interpreter_logs_the_registry() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["define s1 square 40", "define t text Fixed-8x13 hi"]).unwrap();

        let ((), logs) = capture(|| drop(interp));
        let lines: Vec<&str> = at(&logs, log::Level::Info, "vellum::interp")
            .into_iter()
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(
            lines,
            [
                "objmap[s1] = square {(20,20) (40,20) (40,40) (20,40)}",
                "objmap[t] = text: Fixed-8x13 \"hi\"",
            ]
        );
    }

    // ── globals ───────────────────────────────────────────────────────────

    #[test]
    fn border_and_moveby_update_scene() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        run(&mut interp, &mut scene, &["border 0x00FF00 2.5", "moveby 10"]).unwrap();
        assert_eq!(scene.border_color(), RgbColor::GREEN);
        assert_eq!(scene.thickness(), 2.5);
        assert_eq!(scene.move_by(), 10.0);
    }

    #[test]
    fn missing_arguments_are_syntax_errors() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        assert_eq!(interp.interpret(&mut scene, &rec("border red")), Err(InterpError::Syntax));
        assert_eq!(interp.interpret(&mut scene, &rec("moveby")), Err(InterpError::Syntax));
    }
}
