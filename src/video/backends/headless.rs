//! A device that records what it was asked to do instead of talking to a GPU.

use std::cell::RefCell;
use std::rc::Rc;

use crate::math::prelude::Color;

use super::super::mesh::VertexAttribute;
use super::super::shader::{ShaderStage, Stage};
use super::super::{ProgramHandle, ShaderHandle, Status, VertexArrayHandle};
use super::Visitor;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CompileShader(ShaderStage, ShaderHandle),
    LinkProgram(Vec<ShaderHandle>, ProgramHandle),
    DeleteShader(ShaderHandle),
    CreateVertexArray(VertexArrayHandle, Vec<u8>, VertexAttribute),
    Clear(Color<f32>),
    Draw(ProgramHandle, VertexArrayHandle, u32),
}

pub type CommandLog = Rc<RefCell<Vec<Command>>>;

pub struct HeadlessVisitor {
    commands: CommandLog,
    failures: Vec<Stage>,
    next_id: u32,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            commands: Rc::new(RefCell::new(Vec::new())),
            failures: Vec::new(),
            next_id: 1,
        }
    }

    /// Makes the given compile or link step report a failure.
    pub fn with_failure(mut self, stage: Stage) -> Self {
        self.failures.push(stage);
        self
    }

    /// Returns the shared log of submitted commands.
    pub fn commands(&self) -> CommandLog {
        self.commands.clone()
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn status<H>(&self, stage: Stage, handle: H) -> Status<H> {
        if self.failures.contains(&stage) {
            Status::failed(handle, format!("headless: {} rejected.", stage))
        } else {
            Status::ok(handle)
        }
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl Visitor for HeadlessVisitor {
    fn compile_shader(&mut self, stage: ShaderStage, _: &str) -> Status<ShaderHandle> {
        let handle = ShaderHandle(self.allocate());
        self.commands
            .borrow_mut()
            .push(Command::CompileShader(stage, handle));
        self.status(Stage::Compile(stage), handle)
    }

    fn link_program(&mut self, shaders: &[ShaderHandle]) -> Status<ProgramHandle> {
        let handle = ProgramHandle(self.allocate());
        self.commands
            .borrow_mut()
            .push(Command::LinkProgram(shaders.to_vec(), handle));
        self.status(Stage::Link, handle)
    }

    fn delete_shader(&mut self, handle: ShaderHandle) {
        self.commands.borrow_mut().push(Command::DeleteShader(handle));
    }

    fn create_vertex_array(
        &mut self,
        bytes: &[u8],
        attribute: VertexAttribute,
    ) -> VertexArrayHandle {
        let handle = VertexArrayHandle(self.allocate());
        self.commands.borrow_mut().push(Command::CreateVertexArray(
            handle,
            bytes.to_vec(),
            attribute,
        ));
        handle
    }

    fn clear(&mut self, color: Color<f32>) {
        self.commands.borrow_mut().push(Command::Clear(color));
    }

    fn draw(&mut self, program: ProgramHandle, vao: VertexArrayHandle, count: u32) {
        self.commands
            .borrow_mut()
            .push(Command::Draw(program, vao, count));
    }
}
