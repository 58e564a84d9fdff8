extern crate triangles;

use std::cell::Cell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use triangles::scene;
use triangles::video::backends::headless::{Command, HeadlessVisitor};
use triangles::video::shader::{self, ShaderProgram, ShaderStage, Stage};

thread_local! {
    static ERRORS: Cell<usize> = Cell::new(0);
}

/// Counts error records emitted on the current thread.
struct ErrorCounter;

impl Log for ErrorCounter {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Error {
            ERRORS.with(|v| v.set(v.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ErrorCounter = ErrorCounter;
static INIT: Once = Once::new();

fn build(video: &mut HeadlessVisitor) -> (ShaderProgram, usize) {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });

    ERRORS.with(|v| v.set(0));
    let program = shader::build(video, scene::VS, scene::FS);
    (program, ERRORS.with(|v| v.get()))
}

#[test]
fn success() {
    let mut video = HeadlessVisitor::new();
    let commands = video.commands();
    let (program, errors) = build(&mut video);

    assert!(program.handle.is_valid());
    assert!(program.is_ok());
    assert_eq!(errors, 0);

    let commands = commands.borrow();
    assert_eq!(commands.len(), 5);

    let (vs, fs) = match (&commands[0], &commands[1]) {
        (
            &Command::CompileShader(ShaderStage::Vertex, vs),
            &Command::CompileShader(ShaderStage::Fragment, fs),
        ) => (vs, fs),
        v => panic!("unexpected commands {:?}", v),
    };

    assert_eq!(
        commands[2],
        Command::LinkProgram(vec![vs, fs], program.handle)
    );

    // Both stage objects are released once the program is linked.
    assert_eq!(commands[3], Command::DeleteShader(vs));
    assert_eq!(commands[4], Command::DeleteShader(fs));
}

#[test]
fn one_error_per_failed_stage() {
    let stages = [
        Stage::Compile(ShaderStage::Vertex),
        Stage::Compile(ShaderStage::Fragment),
        Stage::Link,
    ];

    for &stage in &stages {
        let mut video = HeadlessVisitor::new().with_failure(stage);
        let (program, errors) = build(&mut video);

        assert_eq!(errors, 1, "{}", stage);
        assert_eq!(&program.failures[..], &[stage]);
        assert!(!program.is_ok());

        // The handle comes back regardless.
        assert!(program.handle.is_valid());
    }
}

#[test]
fn every_stage_fails() {
    let mut video = HeadlessVisitor::new()
        .with_failure(Stage::Compile(ShaderStage::Vertex))
        .with_failure(Stage::Compile(ShaderStage::Fragment))
        .with_failure(Stage::Link);

    let commands = video.commands();
    let (program, errors) = build(&mut video);

    assert_eq!(errors, 3);
    assert_eq!(
        &program.failures[..],
        &[
            Stage::Compile(ShaderStage::Vertex),
            Stage::Compile(ShaderStage::Fragment),
            Stage::Link,
        ]
    );

    assert!(program.handle.is_valid());

    // A failed compile does not stop the build, both stages are still linked and freed.
    let commands = commands.borrow();
    assert_eq!(commands.len(), 5);
    let deleted = commands
        .iter()
        .filter(|v| match **v {
            Command::DeleteShader(_) => true,
            _ => false,
        })
        .count();

    assert_eq!(deleted, 2);
}

#[test]
fn stage_names() {
    assert_eq!(
        format!("{}", Stage::Compile(ShaderStage::Vertex)),
        "VERTEX::COMPILATION_FAILED"
    );

    assert_eq!(
        format!("{}", Stage::Compile(ShaderStage::Fragment)),
        "FRAGMENT::COMPILATION_FAILED"
    );

    assert_eq!(format!("{}", Stage::Link), "PROGRAM::LINKING_FAILED");
}
