use crate::render::shaders::{ShaderError, ShaderKind};
use std::fmt;

/// Primitive topology accepted by [`GlApi::draw_arrays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Triangles,
}

/// The slice of the GL ES 2.0 API used by the demos.
///
/// Implemented for `glow::Context`. All methods assume the context is
/// current on the calling thread, which `DemoWindow` guarantees for the
/// lifetime of the process.
pub trait GlApi {
    type Program: Copy + PartialEq + fmt::Debug + 'static;
    type Shader: Copy + PartialEq + fmt::Debug + 'static;
    type Buffer: Copy + PartialEq + fmt::Debug + 'static;
    type UniformLocation: fmt::Debug + 'static;

    fn create_program(&self) -> Result<Self::Program, String>;
    fn delete_program(&self, program: Self::Program);
    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, String>;
    fn delete_shader(&self, shader: Self::Shader);
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// Binds `buffer` to `ARRAY_BUFFER` and uploads `data` with `STATIC_DRAW`.
    fn upload_array_buffer(&self, buffer: Self::Buffer, data: &[f32]);
    /// Tightly packed float attribute read from the bound array buffer.
    fn vertex_attrib_pointer(&self, index: u32, components: i32);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_1f(&self, index: u32, x: f32);
    fn vertex_attrib_3f(&self, index: u32, x: f32, y: f32, z: f32);
    fn uniform_4f(&self, location: &Self::UniformLocation, value: [f32; 4]);
    fn uniform_matrix_4fv(&self, location: &Self::UniformLocation, matrix: &[f32; 16]);

    fn clear_color(&self, color: [f32; 4]);
    fn clear_color_buffer(&self);
    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32);
    fn viewport(&self, width: i32, height: i32);
}

impl GlApi for glow::Context {
    type Program = <glow::Context as glow::HasContext>::Program;
    type Shader = <glow::Context as glow::HasContext>::Shader;
    type Buffer = <glow::Context as glow::HasContext>::Buffer;
    type UniformLocation = <glow::Context as glow::HasContext>::UniformLocation;

    fn create_program(&self) -> Result<Self::Program, String> {
        use glow::HasContext;
        unsafe { HasContext::create_program(self) }
    }

    fn delete_program(&self, program: Self::Program) {
        use glow::HasContext;
        unsafe { HasContext::delete_program(self, program) }
    }

    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, String> {
        use glow::HasContext;
        let shader_type = match kind {
            ShaderKind::Vertex => glow::VERTEX_SHADER,
            ShaderKind::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { HasContext::create_shader(self, shader_type) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        use glow::HasContext;
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        use glow::HasContext;
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        use glow::HasContext;
        unsafe { self.get_shader_info_log(shader) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        use glow::HasContext;
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        use glow::HasContext;
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        use glow::HasContext;
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        use glow::HasContext;
        unsafe { HasContext::use_program(self, program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        use glow::HasContext;
        unsafe { self.get_attrib_location(program, name) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        use glow::HasContext;
        unsafe { self.get_uniform_location(program, name) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        use glow::HasContext;
        unsafe { HasContext::create_buffer(self) }
    }

    fn upload_array_buffer(&self, buffer: Self::Buffer, data: &[f32]) {
        use glow::HasContext;
        unsafe {
            self.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
        }
    }

    fn vertex_attrib_pointer(&self, index: u32, components: i32) {
        use glow::HasContext;
        unsafe { self.vertex_attrib_pointer_f32(index, components, glow::FLOAT, false, 0, 0) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        use glow::HasContext;
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_1f(&self, index: u32, x: f32) {
        use glow::HasContext;
        unsafe { self.vertex_attrib_1_f32(index, x) }
    }

    fn vertex_attrib_3f(&self, index: u32, x: f32, y: f32, z: f32) {
        use glow::HasContext;
        unsafe { self.vertex_attrib_3_f32(index, x, y, z) }
    }

    fn uniform_4f(&self, location: &Self::UniformLocation, value: [f32; 4]) {
        use glow::HasContext;
        let [x, y, z, w] = value;
        unsafe { self.uniform_4_f32(Some(location), x, y, z, w) }
    }

    fn uniform_matrix_4fv(&self, location: &Self::UniformLocation, matrix: &[f32; 16]) {
        use glow::HasContext;
        // GL ES 2.0 rejects transpose = true.
        unsafe { self.uniform_matrix_4_f32_slice(Some(location), false, matrix) }
    }

    fn clear_color(&self, color: [f32; 4]) {
        use glow::HasContext;
        let [r, g, b, a] = color;
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear_color_buffer(&self) {
        use glow::HasContext;
        unsafe { self.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        use glow::HasContext;
        let mode = match mode {
            Primitive::Points => glow::POINTS,
            Primitive::Triangles => glow::TRIANGLES,
        };
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn viewport(&self, width: i32, height: i32) {
        use glow::HasContext;
        unsafe { HasContext::viewport(self, 0, 0, width, height) }
    }
}

/// A GL function table plus the single "current program" slot.
///
/// The slot is only written by a successful [`ShaderProgramBuilder::build`]
/// or an explicit [`ShaderProgram::delete`]; callers read it back for
/// attribute and uniform lookups.
///
/// [`ShaderProgramBuilder::build`]: crate::render::shaders::ShaderProgramBuilder::build
/// [`ShaderProgram::delete`]: crate::render::shaders::ShaderProgram::delete
pub struct RenderingContext<G: GlApi> {
    gl: G,
    program: Option<G::Program>,
}

impl<G: GlApi> RenderingContext<G> {
    pub fn new(gl: G) -> Self {
        Self { gl, program: None }
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    pub fn active_program(&self) -> Option<G::Program> {
        self.program
    }

    pub(crate) fn activate(&mut self, program: G::Program) {
        self.gl.use_program(Some(program));
        self.program = Some(program);
    }

    pub(crate) fn deactivate(&mut self) {
        self.gl.use_program(None);
        self.program = None;
    }

    fn require_program(&self) -> Result<G::Program, ShaderError> {
        self.program.ok_or(ShaderError::NoActiveProgram)
    }

    /// Storage location of an attribute in the active program.
    pub fn attrib_location(&self, name: &str) -> Result<u32, ShaderError> {
        let program = self.require_program()?;
        self.gl
            .attrib_location(program, name)
            .ok_or_else(|| ShaderError::AttributeNotFound(name.to_string()))
    }

    /// Storage location of a uniform in the active program.
    pub fn uniform_location(&self, name: &str) -> Result<G::UniformLocation, ShaderError> {
        let program = self.require_program()?;
        self.gl
            .uniform_location(program, name)
            .ok_or_else(|| ShaderError::UniformNotFound(name.to_string()))
    }
}
