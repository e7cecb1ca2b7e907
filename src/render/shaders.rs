// shaders.rs - Shader program bootstrap

use crate::render::context::{GlApi, RenderingContext};
use log::{debug, error, info};
use std::fmt;
use thiserror::Error;

/// Substituted when the driver reports a failure with an empty info log.
const EMPTY_LOG: &str = "no diagnostic reported by the driver";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => f.write_str("vertex"),
            ShaderKind::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShaderError {
    #[error("Failed to create program: {0}")]
    ProgramCreation(String),
    #[error("Unable to create {kind} shader: {reason}")]
    ShaderCreation { kind: ShaderKind, reason: String },
    #[error("Failed to compile {kind} shader: {log}")]
    ShaderCompile { kind: ShaderKind, log: String },
    #[error("Failed to link program: {0}")]
    ProgramLink(String),
    #[error("No program is active on the context")]
    NoActiveProgram,
    #[error("Failed to get the storage location of attribute {0}")]
    AttributeNotFound(String),
    #[error("Failed to get the storage location of uniform {0}")]
    UniformNotFound(String),
}

impl ShaderError {
    /// Compiler or linker output carried by the error, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ShaderError::ShaderCompile { log, .. } | ShaderError::ProgramLink(log) => Some(log),
            _ => None,
        }
    }
}

/// One compiled pipeline stage.
pub struct ShaderStage<G: GlApi> {
    pub kind: ShaderKind,
    pub source: String,
    pub handle: G::Shader,
}

impl<G: GlApi> fmt::Debug for ShaderStage<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderStage")
            .field("kind", &self.kind)
            .field("handle", &self.handle)
            .finish()
    }
}

/// A linked vertex + fragment pair.
///
/// Only produced by [`ShaderProgramBuilder::build`], so both stages are
/// known to have compiled and the link to have succeeded.
pub struct ShaderProgram<G: GlApi> {
    pub vertex: ShaderStage<G>,
    pub fragment: ShaderStage<G>,
    handle: G::Program,
}

impl<G: GlApi> fmt::Debug for ShaderProgram<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("handle", &self.handle)
            .field("vertex", &self.vertex)
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl<G: GlApi> ShaderProgram<G> {
    pub fn handle(&self) -> G::Program {
        self.handle
    }

    pub fn is_active(&self, ctx: &RenderingContext<G>) -> bool {
        ctx.active_program() == Some(self.handle)
    }

    /// Releases the program and both stages. Clears the context's
    /// current program if it was this one.
    pub fn delete(self, ctx: &mut RenderingContext<G>) {
        if self.is_active(ctx) {
            ctx.deactivate();
        }
        let gl = ctx.gl();
        for stage in [&self.vertex, &self.fragment] {
            gl.detach_shader(self.handle, stage.handle);
            gl.delete_shader(stage.handle);
        }
        gl.delete_program(self.handle);
        debug!("Deleted program {:?}", self.handle);
    }
}

/// Compiles, links and activates a vertex/fragment program.
pub struct ShaderProgramBuilder;

impl ShaderProgramBuilder {
    /// On success the program is the context's current program. On any
    /// failure every GL object created here is released and the current
    /// program is left as it was.
    pub fn build<G: GlApi>(
        ctx: &mut RenderingContext<G>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ShaderProgram<G>, ShaderError> {
        let gl = ctx.gl();
        let program = gl.create_program().map_err(ShaderError::ProgramCreation)?;

        let vertex = match Self::compile_stage(gl, ShaderKind::Vertex, vertex_source) {
            Ok(stage) => stage,
            Err(err) => {
                gl.delete_program(program);
                return Err(err);
            }
        };
        let fragment = match Self::compile_stage(gl, ShaderKind::Fragment, fragment_source) {
            Ok(stage) => stage,
            Err(err) => {
                gl.delete_shader(vertex.handle);
                gl.delete_program(program);
                return Err(err);
            }
        };

        gl.attach_shader(program, vertex.handle);
        gl.attach_shader(program, fragment.handle);
        gl.link_program(program);

        if !gl.program_link_status(program) {
            let log = non_empty(gl.program_info_log(program));
            for stage in [&vertex, &fragment] {
                gl.detach_shader(program, stage.handle);
                gl.delete_shader(stage.handle);
            }
            gl.delete_program(program);
            return Err(ShaderError::ProgramLink(log));
        }

        ctx.activate(program);
        info!("Linked and activated program {:?}", program);

        Ok(ShaderProgram {
            vertex,
            fragment,
            handle: program,
        })
    }

    fn compile_stage<G: GlApi>(
        gl: &G,
        kind: ShaderKind,
        source: &str,
    ) -> Result<ShaderStage<G>, ShaderError> {
        let shader = gl
            .create_shader(kind)
            .map_err(|reason| ShaderError::ShaderCreation { kind, reason })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.shader_compile_status(shader) {
            let log = non_empty(gl.shader_info_log(shader));
            gl.delete_shader(shader);
            return Err(ShaderError::ShaderCompile { kind, log });
        }

        debug!("Compiled {} shader {:?}", kind, shader);
        Ok(ShaderStage {
            kind,
            source: source.to_string(),
            handle: shader,
        })
    }
}

/// Builds a program and reports the outcome as a flag, logging the
/// failure. For callers that only need to know whether to continue.
pub fn init_shaders<G: GlApi>(
    ctx: &mut RenderingContext<G>,
    vertex_source: &str,
    fragment_source: &str,
) -> bool {
    match ShaderProgramBuilder::build(ctx, vertex_source, fragment_source) {
        Ok(_) => true,
        Err(e) => {
            error!("Failed to initialize shaders: {}", e);
            false
        }
    }
}

fn non_empty(log: String) -> String {
    let trimmed = log.trim();
    if trimmed.is_empty() {
        EMPTY_LOG.to_string()
    } else {
        trimmed.to_string()
    }
}
