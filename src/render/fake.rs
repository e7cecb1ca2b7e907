//! In-memory GL used by unit tests. Compiles by a few GLSL ES 1.00
//! surface rules and links by matching varyings, which is enough to drive
//! every success and failure path of the shader and buffer setup code.

use crate::render::context::{GlApi, Primitive};
use crate::render::shaders::ShaderKind;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    ClearColor([f32; 4]),
    Clear,
    DrawArrays { mode: Primitive, first: i32, count: i32 },
    VertexAttrib1f(u32, f32),
    VertexAttrib3f(u32, [f32; 3]),
    Uniform4f(u32, [f32; 4]),
    UniformMatrix4fv(u32, [f32; 16]),
    Viewport(i32, i32),
}

struct FakeShader {
    kind: ShaderKind,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Default)]
struct FakeProgram {
    attached: Vec<u32>,
    linked: bool,
    log: String,
    attributes: Vec<String>,
    uniforms: Vec<String>,
}

#[derive(Default)]
struct FakeState {
    next_id: u32,
    shaders_created: usize,
    shaders: HashMap<u32, FakeShader>,
    programs: HashMap<u32, FakeProgram>,
    current: Option<u32>,
    buffers: HashMap<u32, Vec<f32>>,
    pointers: HashMap<u32, i32>,
    enabled: HashSet<u32>,
    calls: Vec<GlCall>,
    fail_program_creation: bool,
    fail_shader_creation: Option<ShaderKind>,
    fail_buffer_creation: bool,
    blank_logs: bool,
}

impl FakeState {
    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct FakeGl {
    state: RefCell<FakeState>,
}

impl FakeGl {
    pub fn fail_program_creation(&self, fail: bool) {
        self.state.borrow_mut().fail_program_creation = fail;
    }

    pub fn fail_shader_creation(&self, kind: Option<ShaderKind>) {
        self.state.borrow_mut().fail_shader_creation = kind;
    }

    pub fn fail_buffer_creation(&self, fail: bool) {
        self.state.borrow_mut().fail_buffer_creation = fail;
    }

    pub fn blank_logs(&self, blank: bool) {
        self.state.borrow_mut().blank_logs = blank;
    }

    pub fn current_program(&self) -> Option<u32> {
        self.state.borrow().current
    }

    pub fn attached_shaders(&self, program: u32) -> Vec<u32> {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.attached.clone())
            .unwrap_or_default()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn shaders_created(&self) -> usize {
        self.state.borrow().shaders_created
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().buffers.len()
    }

    pub fn buffer_data(&self, buffer: u32) -> Option<Vec<f32>> {
        self.state.borrow().buffers.get(&buffer).cloned()
    }

    pub fn attrib_pointer(&self, index: u32) -> Option<i32> {
        self.state.borrow().pointers.get(&index).copied()
    }

    pub fn is_attrib_enabled(&self, index: u32) -> bool {
        self.state.borrow().enabled.contains(&index)
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

/// `(qualifier, type, name)` for every top-level storage declaration.
fn declarations(source: &str) -> Vec<(&str, &str, &str)> {
    source
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let qualifier = tokens.next()?;
            if !matches!(qualifier, "attribute" | "uniform" | "varying") {
                return None;
            }
            let ty = tokens.next()?;
            let name = tokens.next()?.trim_end_matches(';');
            Some((qualifier, ty, name))
        })
        .collect()
}

fn check_source(kind: ShaderKind, source: &str) -> Result<(), String> {
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }
        if !(line.ends_with(';') || line.ends_with('{') || line.ends_with('}')) {
            return Err(format!("ERROR: 0:{}: '{}' : syntax error", index + 1, line));
        }
    }
    if !source.contains("main(") {
        return Err("ERROR: 0:0: missing main function".to_string());
    }
    if kind == ShaderKind::Fragment
        && declarations(source).iter().any(|(q, _, _)| *q == "attribute")
    {
        return Err("ERROR: 0:0: 'attribute' : not supported in fragment shaders".to_string());
    }
    Ok(())
}

impl GlApi for FakeGl {
    type Program = u32;
    type Shader = u32;
    type Buffer = u32;
    type UniformLocation = u32;

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        if state.fail_program_creation {
            return Err("context lost".to_string());
        }
        let id = state.allocate();
        state.programs.insert(id, FakeProgram::default());
        Ok(id)
    }

    fn delete_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        state.programs.remove(&program);
        if state.current == Some(program) {
            state.current = None;
        }
    }

    fn create_shader(&self, kind: ShaderKind) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        if state.fail_shader_creation == Some(kind) {
            return Err("out of shader objects".to_string());
        }
        let id = state.allocate();
        state.shaders_created += 1;
        state.shaders.insert(
            id,
            FakeShader {
                kind,
                source: String::new(),
                compiled: false,
                log: String::new(),
            },
        );
        Ok(id)
    }

    fn delete_shader(&self, shader: u32) {
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        let mut state = self.state.borrow_mut();
        let blank = state.blank_logs;
        if let Some(s) = state.shaders.get_mut(&shader) {
            match check_source(s.kind, &s.source) {
                Ok(()) => {
                    s.compiled = true;
                    s.log.clear();
                }
                Err(log) => {
                    s.compiled = false;
                    s.log = if blank { String::new() } else { log };
                }
            }
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.compiled)
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.retain(|s| *s != shader);
        }
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let Some(p) = state.programs.get_mut(&program) else {
            return;
        };

        let stage = |kind: ShaderKind| {
            p.attached
                .iter()
                .filter_map(|id| state.shaders.get(id))
                .find(|s| s.kind == kind && s.compiled)
        };
        let result = match (stage(ShaderKind::Vertex), stage(ShaderKind::Fragment)) {
            (Some(vs), Some(fs)) => {
                let vs_decls = declarations(&vs.source);
                let fs_decls = declarations(&fs.source);
                let missing = fs_decls
                    .iter()
                    .filter(|(q, _, _)| *q == "varying")
                    .find(|decl| !vs_decls.contains(decl));
                match missing {
                    Some((_, _, name)) => {
                        Err(format!("Varying `{name}` is not written by the vertex shader"))
                    }
                    None => {
                        let mut uniforms: Vec<String> = Vec::new();
                        for (q, _, name) in vs_decls.iter().chain(fs_decls.iter()) {
                            if *q == "uniform" && !uniforms.iter().any(|u| u == name) {
                                uniforms.push(name.to_string());
                            }
                        }
                        let attributes = vs_decls
                            .iter()
                            .filter(|(q, _, _)| *q == "attribute")
                            .map(|(_, _, name)| name.to_string())
                            .collect();
                        Ok((attributes, uniforms))
                    }
                }
            }
            _ => Err("Missing compiled vertex or fragment shader".to_string()),
        };

        let blank = state.blank_logs;
        match result {
            Ok((attributes, uniforms)) => {
                p.linked = true;
                p.log.clear();
                p.attributes = attributes;
                p.uniforms = uniforms;
            }
            Err(log) => {
                p.linked = false;
                p.log = if blank { String::new() } else { log };
            }
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.linked)
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.state.borrow_mut().current = program;
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        let p = state.programs.get(&program).filter(|p| p.linked)?;
        p.attributes.iter().position(|a| a == name).map(|i| i as u32)
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        let p = state.programs.get(&program).filter(|p| p.linked)?;
        p.uniforms.iter().position(|u| u == name).map(|i| i as u32)
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        if state.fail_buffer_creation {
            return Err("out of memory".to_string());
        }
        let id = state.allocate();
        state.buffers.insert(id, Vec::new());
        Ok(id)
    }

    fn upload_array_buffer(&self, buffer: u32, data: &[f32]) {
        self.state.borrow_mut().buffers.insert(buffer, data.to_vec());
    }

    fn vertex_attrib_pointer(&self, index: u32, components: i32) {
        self.state.borrow_mut().pointers.insert(index, components);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.state.borrow_mut().enabled.insert(index);
    }

    fn vertex_attrib_1f(&self, index: u32, x: f32) {
        self.record(GlCall::VertexAttrib1f(index, x));
    }

    fn vertex_attrib_3f(&self, index: u32, x: f32, y: f32, z: f32) {
        self.record(GlCall::VertexAttrib3f(index, [x, y, z]));
    }

    fn uniform_4f(&self, location: &u32, value: [f32; 4]) {
        self.record(GlCall::Uniform4f(*location, value));
    }

    fn uniform_matrix_4fv(&self, location: &u32, matrix: &[f32; 16]) {
        self.record(GlCall::UniformMatrix4fv(*location, *matrix));
    }

    fn clear_color(&self, color: [f32; 4]) {
        self.record(GlCall::ClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.record(GlCall::Clear);
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(GlCall::Viewport(width, height));
    }
}
