//! Builds a shader program out of a vertex and a fragment stage.
//!
//! Failures are logged and recorded, never returned as errors. The handle of the
//! linked (or half-linked) program comes back in every case and the caller is free
//! to draw with it.

use std::fmt;

use smallvec::SmallVec;

use super::backends::Visitor;
use super::ProgramHandle;

/// The programmable stages we compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// The steps of building a program that could fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compile(ShaderStage),
    Link,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Stage::Compile(ShaderStage::Vertex) => write!(f, "VERTEX::COMPILATION_FAILED"),
            Stage::Compile(ShaderStage::Fragment) => write!(f, "FRAGMENT::COMPILATION_FAILED"),
            Stage::Link => write!(f, "PROGRAM::LINKING_FAILED"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub handle: ProgramHandle,
    /// Failed steps, in the order they ran.
    pub failures: SmallVec<[Stage; 3]>,
}

impl ShaderProgram {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compiles `vs` and `fs`, links them and deletes the intermediate stage objects.
pub fn build(video: &mut dyn Visitor, vs: &str, fs: &str) -> ShaderProgram {
    let mut failures = SmallVec::new();
    let mut shaders = SmallVec::<[_; 2]>::new();

    for &(stage, src) in &[(ShaderStage::Vertex, vs), (ShaderStage::Fragment, fs)] {
        let status = video.compile_shader(stage, src);
        if let Some(ref log) = status.info_log {
            error!("ERROR::SHADER::{}\n{}", Stage::Compile(stage), log.trim_end());
            failures.push(Stage::Compile(stage));
        }

        shaders.push(status.handle);
    }

    let status = video.link_program(&shaders[..]);
    if let Some(ref log) = status.info_log {
        error!("ERROR::SHADER::{}\n{}", Stage::Link, log.trim_end());
        failures.push(Stage::Link);
    }

    for shader in shaders {
        video.delete_shader(shader);
    }

    ShaderProgram {
        handle: status.handle,
        failures,
    }
}
