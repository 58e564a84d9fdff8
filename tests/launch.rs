extern crate triangles;

use std::cell::Cell;
use std::rc::Rc;

use failure::err_msg;

use triangles::application::{self, Platform, EXIT_FAILURE, EXIT_SUCCESS};
use triangles::errors::Result;
use triangles::scene;
use triangles::video::backends::headless::{
    Command, CommandLog, HeadlessVisitor as HeadlessDevice,
};
use triangles::video::backends::Visitor as VideoVisitor;
use triangles::video::shader::{ShaderStage, Stage};
use triangles::window::backends::headless::HeadlessVisitor as HeadlessWindow;
use triangles::window::backends::Visitor as WindowVisitor;
use triangles::window::events::{Event, WindowEvent};
use triangles::window::WindowParams;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Failure {
    Nothing,
    Window,
    Context,
    Loader,
    Shader,
}

struct ScriptedPlatform {
    failure: Failure,
    windows: u32,
    devices: u32,
    presented: Option<Rc<Cell<u32>>>,
    commands: Option<CommandLog>,
}

impl ScriptedPlatform {
    fn new(failure: Failure) -> Self {
        ScriptedPlatform {
            failure,
            windows: 0,
            devices: 0,
            presented: None,
            commands: None,
        }
    }
}

impl Platform for ScriptedPlatform {
    fn create_window(&mut self, params: &WindowParams) -> Result<Box<dyn WindowVisitor>> {
        assert_eq!(params.title, "A window");
        self.windows += 1;

        if self.failure == Failure::Window {
            return Err(err_msg("Unable to create window: no display."));
        }

        let frames = vec![vec![Event::Input], vec![Event::Window(WindowEvent::Closed)]];
        let window = HeadlessWindow::new(frames);
        self.presented = Some(window.presented());
        if self.failure == Failure::Context {
            Ok(Box::new(window.with_broken_context()))
        } else {
            Ok(Box::new(window))
        }
    }

    fn create_device(&mut self, window: &dyn WindowVisitor) -> Result<Box<dyn VideoVisitor>> {
        assert!(window.is_current());
        self.devices += 1;

        if self.failure == Failure::Loader {
            return Err(err_msg("[GL] Failed to load entry point glCreateShader."));
        }

        let video = if self.failure == Failure::Shader {
            HeadlessDevice::new()
                .with_failure(Stage::Compile(ShaderStage::Vertex))
                .with_failure(Stage::Link)
        } else {
            HeadlessDevice::new()
        };

        self.commands = Some(video.commands());
        Ok(Box::new(video))
    }
}

fn launch(failure: Failure) -> (i32, ScriptedPlatform) {
    let mut platform = ScriptedPlatform::new(failure);
    let code = application::launch(&mut platform, &WindowParams::default());
    (code, platform)
}

#[test]
fn clean_quit() {
    let (code, platform) = launch(Failure::Nothing);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(code, 0);
    assert_eq!(platform.windows, 1);
    assert_eq!(platform.devices, 1);
}

#[test]
fn window_failure() {
    let (code, platform) = launch(Failure::Window);
    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(code, 1);
    assert_eq!(platform.devices, 0);
}

#[test]
fn context_failure() {
    let (code, platform) = launch(Failure::Context);
    assert_eq!(code, 1);
    assert_eq!(platform.windows, 1);
    assert_eq!(platform.devices, 0);
}

#[test]
fn loader_failure() {
    let (code, platform) = launch(Failure::Loader);
    assert_eq!(code, 1);
    assert_eq!(platform.devices, 1);
}

#[test]
fn shader_failure_is_not_fatal() {
    let (code, platform) = launch(Failure::Shader);
    assert_eq!(code, EXIT_SUCCESS);

    let presented = platform.presented.map(|v| v.get()).unwrap_or(0);
    assert_eq!(presented, 2);

    let commands = platform.commands.expect("device was created");
    let commands = commands.borrow();

    let program = commands
        .iter()
        .filter_map(|v| match *v {
            Command::LinkProgram(_, handle) => Some(handle),
            _ => None,
        })
        .next()
        .expect("program was linked");

    // The half-built program is still drawn on every presented frame.
    let draws: Vec<_> = commands
        .iter()
        .filter_map(|v| match *v {
            Command::Draw(p, _, count) => Some((p, count)),
            _ => None,
        })
        .collect();

    assert_eq!(draws.len() as u32, presented);
    for (p, count) in draws {
        assert_eq!(p, program);
        assert_eq!(count, scene::DRAW_COUNT);
    }
}

#[test]
fn default_params() {
    let params = WindowParams::default();
    assert_eq!(params.size.x, 800);
    assert_eq!(params.size.y, 600);
    assert_eq!(params.position.x, 0);
    assert_eq!(params.position.y, 0);
    assert_eq!(params.gl_version, (3, 3));
}
