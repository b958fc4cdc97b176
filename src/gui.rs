use egui::Context;
use egui_wgpu::Renderer;
use egui_winit::State;
use photoelectric_diagrams::DiagramSet;
use photoelectric_physics::{
    Metal, FREQUENCY_STEP, MAX_FREQUENCY, MAX_INTENSITY, MIN_FREQUENCY, MIN_INTENSITY,
};
use photoelectric_renderer::{paint_scene, show_canvas, Camera};
use photoelectric_simulation::{SimulationParameters, SimulationState};
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    /// Control values as edited; pushed to the simulation on change
    pub params: SimulationParameters,
    pub diagrams: DiagramSet,
}

impl UiState {
    pub fn new(state: &SimulationState) -> Self {
        Self {
            fps: 0.0,
            frame_time: 0.0,
            params: *state.params(),
            diagrams: DiagramSet::build(state.readout(), state.history()),
        }
    }

    /// Push the edited controls into the simulation and redraw both diagrams
    fn apply(&mut self, state: &mut SimulationState) {
        state.apply_settings(self.params);
        self.params = *state.params();
        self.diagrams = DiagramSet::build(state.readout(), state.history());
    }
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &mut UiState,
        simulation: &mut SimulationState,
        camera: &mut Camera,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            Self::ui(ctx, ui_state, simulation, camera);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.renderer
            .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        drop(render_pass);

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    fn ui(
        ctx: &Context,
        ui_state: &mut UiState,
        simulation: &mut SimulationState,
        camera: &mut Camera,
    ) {
        // 3D scene fills the window behind the panels
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.allocate_rect(rect, egui::Sense::hover());
                if response.hovered() {
                    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                    if scroll != 0.0 {
                        camera.zoom(-scroll * camera.distance / 1000.0);
                    }
                }
                paint_scene(ui.painter(), camera, rect, simulation);
            });

        // Controls (Top Left)
        egui::Window::new("Controls")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                let params = &mut ui_state.params;
                let mut changed = ui
                    .add(
                        egui::Slider::new(&mut params.frequency, MIN_FREQUENCY..=MAX_FREQUENCY)
                            .step_by(FREQUENCY_STEP)
                            .fixed_decimals(1)
                            .text("Frequency (x10^14 Hz)"),
                    )
                    .changed();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut params.intensity, MIN_INTENSITY..=MAX_INTENSITY)
                            .text("Intensity"),
                    )
                    .changed();

                let previous = params.metal;
                egui::ComboBox::from_label("Metal")
                    .selected_text(params.metal.label())
                    .show_ui(ui, |ui| {
                        for metal in Metal::ALL {
                            ui.selectable_value(&mut params.metal, metal, metal.label());
                        }
                    });
                changed |= params.metal != previous;

                if changed {
                    ui_state.apply(simulation);
                }
            });

        // Readouts (Bottom Left)
        egui::Window::new("Readouts")
            .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                let readout = simulation.readout();
                ui.label(format!("Kinetic Energy: {} eV", readout.kinetic_energy_text()));
                ui.label(format!("Current: {}", readout.current_text()));
                ui.label(format!("Work Function: {} eV", readout.work_function_text()));
                ui.label(format!(
                    "Threshold Frequency: {} x10^14 Hz",
                    readout.threshold_frequency_text()
                ));
                ui.separator();
                let lifecycle = simulation.lifecycle();
                ui.label(format!("Photons: {}", lifecycle.photons().len()));
                ui.label(format!("Electrons: {}", lifecycle.electrons().len()));
                ui.label(format!(
                    "FPS: {:.0} ({:.2} ms)",
                    ui_state.fps, ui_state.frame_time
                ));
            });

        // Energy diagram (Top Right)
        egui::Window::new("Energy Diagram")
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                show_canvas(ui, &ui_state.diagrams.energy);
            });

        // Current vs frequency (Bottom Right)
        egui::Window::new("Current vs Frequency")
            .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                show_canvas(ui, &ui_state.diagrams.graph);
            });
    }
}
